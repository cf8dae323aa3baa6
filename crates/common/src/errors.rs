use thiserror::Error;

/// Иерархия ошибок клиента СуперСТО
#[derive(Error, Debug)]
pub enum StoError {
    // === Транспорт ===
    #[error("Network error: {0}")]
    Network(String),

    // === Авторизация ===
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Любой не-2xx статус кроме обработанного 401-потока
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Resource { status: u16, message: Option<String> },

    // === Данные ===
    #[error("Decode error: {0}")]
    Decode(String),

    // === Общие ===
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Ошибки потока обновления токена
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("refresh token отсутствует в хранилище")]
    MissingRefreshToken,

    #[error("сервер отклонил обновление токена (HTTP {status})")]
    RefreshRejected { status: u16 },

    /// Сессия завершена: оба токена очищены, требуется повторный вход.
    /// Замена молчаливого redirect на /login из исходного приложения.
    #[error("сессия истекла, требуется повторный вход")]
    SessionExpired,
}

impl StoError {
    /// Текст ошибки по умолчанию для пользовательского интерфейса
    pub const GENERIC_MESSAGE: &'static str = "Не удалось выполнить запрос к серверу";

    /// Человекочитаемое сообщение: серверное, если оно есть, иначе общее.
    /// Именно эта строка попадает в поле `error` состояния каталога.
    pub fn user_message(&self) -> String {
        match self {
            StoError::Resource {
                message: Some(message),
                ..
            } => message.clone(),
            StoError::Auth(AuthError::SessionExpired) => {
                "Сессия истекла, войдите в систему заново".to_string()
            }
            _ => Self::GENERIC_MESSAGE.to_string(),
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, StoError::Auth(AuthError::SessionExpired))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = StoError::Resource {
            status: 500,
            message: Some("Склад недоступен".to_string()),
        };
        assert_eq!(err.user_message(), "Склад недоступен");
    }

    #[test]
    fn user_message_falls_back_to_generic() {
        let err = StoError::Resource {
            status: 502,
            message: None,
        };
        assert_eq!(err.user_message(), StoError::GENERIC_MESSAGE);

        let err = StoError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), StoError::GENERIC_MESSAGE);
    }

    #[test]
    fn session_expired_is_detectable() {
        let err = StoError::from(AuthError::SessionExpired);
        assert!(err.is_session_expired());

        let err = StoError::from(AuthError::MissingRefreshToken);
        assert!(!err.is_session_expired());
    }

    #[test]
    fn display_includes_status() {
        let err = StoError::Resource {
            status: 404,
            message: Some("part not found".to_string()),
        };
        assert_eq!(err.to_string(), "HTTP 404: part not found");
    }
}
