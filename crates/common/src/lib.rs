pub mod config;
pub mod errors;
pub mod logging;

pub use config::ClientConfig;
pub use errors::{AuthError, StoError};
