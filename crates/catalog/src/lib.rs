//! Клиентское состояние каталога запчастей: кэш загруженных позиций
//! плюс производное отфильтрованное представление по поиску,
//! категории и бренду.

pub mod filter;
pub mod store;

pub use filter::PartsFilter;
pub use store::{PartsCatalog, PartsState, PartsStore};
