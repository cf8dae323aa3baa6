//! Хранилище пары токенов access/refresh.
//!
//! В браузерном приложении это был localStorage с ключами
//! `accessToken`/`refreshToken`; здесь — внедряемый трейт с двумя
//! реализациями: in-memory для тестов и файловая для CLI.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::{debug, warn};

/// Контекст сессии, передаваемый клиенту явно.
/// Семантика слотов: последняя запись побеждает, срок жизни токена
/// локально не отслеживается — о протухании узнаём по 401 от сервера.
pub trait TokenStore: Send + Sync {
    fn access(&self) -> Option<String>;
    fn refresh(&self) -> Option<String>;
    /// Сохраняет новый access token; refresh перезаписывается только
    /// если сервер его ротировал (`Some`), иначе прежний остаётся.
    fn store(&self, access: String, refresh: Option<String>);
    fn clear(&self);
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPair {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

/// Токены в памяти процесса
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slots: RwLock<TokenPair>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            slots: RwLock::new(TokenPair {
                access_token: Some(access.into()),
                refresh_token: Some(refresh.into()),
            }),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn access(&self) -> Option<String> {
        self.slots
            .read()
            .expect("token store lock poisoned")
            .access_token
            .clone()
    }

    fn refresh(&self) -> Option<String> {
        self.slots
            .read()
            .expect("token store lock poisoned")
            .refresh_token
            .clone()
    }

    fn store(&self, access: String, refresh: Option<String>) {
        let mut slots = self.slots.write().expect("token store lock poisoned");
        slots.access_token = Some(access);
        if refresh.is_some() {
            slots.refresh_token = refresh;
        }
    }

    fn clear(&self) {
        let mut slots = self.slots.write().expect("token store lock poisoned");
        *slots = TokenPair::default();
    }
}

/// Файловый аналог localStorage: JSON с ключами accessToken/refreshToken.
/// Битый или отсутствующий файл трактуется как пустое хранилище.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    cached: RwLock<TokenPair>,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        let cached = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("повреждённый файл токенов {}: {e}", path.display());
                TokenPair::default()
            }),
            Err(_) => TokenPair::default(),
        };
        Self {
            path,
            cached: RwLock::new(cached),
        }
    }

    /// ~/.config/supersto/tokens.json (или текущая директория как fallback)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("supersto")
            .join("tokens.json")
    }

    fn persist(&self, pair: &TokenPair) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("не удалось создать {}: {e}", parent.display());
                return;
            }
        }
        match serde_json::to_string_pretty(pair) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    warn!("не удалось записать {}: {e}", self.path.display());
                }
            }
            Err(e) => warn!("сериализация токенов: {e}"),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn access(&self) -> Option<String> {
        self.cached
            .read()
            .expect("token store lock poisoned")
            .access_token
            .clone()
    }

    fn refresh(&self) -> Option<String> {
        self.cached
            .read()
            .expect("token store lock poisoned")
            .refresh_token
            .clone()
    }

    fn store(&self, access: String, refresh: Option<String>) {
        let mut cached = self.cached.write().expect("token store lock poisoned");
        cached.access_token = Some(access);
        if refresh.is_some() {
            cached.refresh_token = refresh;
        }
        self.persist(&cached);
        debug!("токены сохранены в {}", self.path.display());
    }

    fn clear(&self) {
        let mut cached = self.cached.write().expect("token store lock poisoned");
        *cached = TokenPair::default();
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                warn!("не удалось удалить {}: {e}", self.path.display());
            }
        }
    }
}
