//! Тонкие обёртки над ресурсами REST API: одна логическая операция —
//! один HTTP вызов, путь по конвенции `/<resource>[/<id>][/<action>]`.

pub mod analytics;
pub mod appointments;
pub mod chat;
pub mod orders;
pub mod parts;
pub mod products;
pub mod reports;
pub mod services;
pub mod users;

pub use analytics::AnalyticsApi;
pub use appointments::AppointmentsApi;
pub use chat::ChatApi;
pub use orders::OrdersApi;
pub use parts::{PartListParams, PartsApi};
pub use products::ProductsApi;
pub use reports::ReportsApi;
pub use services::ServicesApi;
pub use users::UsersApi;
