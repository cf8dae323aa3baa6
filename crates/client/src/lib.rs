//! Клиент REST API СуперСТО: HTTP пайплайн с bearer-авторизацией,
//! однократным retry после обновления токена и тонкими обёртками
//! над ресурсами (запчасти, заявки, заказы, чат, аналитика, отчёты).

pub mod api;
pub mod auth;
pub mod http;
pub mod models;
pub mod tokens;

pub use http::HttpClient;
pub use tokens::{FileTokenStore, MemoryTokenStore, TokenStore};
