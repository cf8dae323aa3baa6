use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::warn;

/// Конфигурация HTTP клиента
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Базовый URL REST API (без завершающего "/")
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    /// Загружает конфигурацию из переменных окружения.
    /// Некорректные значения заменяются значениями по умолчанию
    /// с предупреждением в лог.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("SUPERSTO_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            request_timeout_secs: env_secs("SUPERSTO_TIMEOUT_SECS", defaults.request_timeout_secs),
            connect_timeout_secs: env_secs(
                "SUPERSTO_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            ),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn env_secs(name: &str, default: u64) -> u64 {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("некорректное значение {name}={raw:?}, использую {default}");
            default
        }),
        Err(_) => default,
    }
}
