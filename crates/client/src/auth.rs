//! Координатор авторизации: login/logout и обновление access token.
//!
//! Эндпоинт `/auth/refresh` исторически отвечал двумя формами:
//! голым объектом `{accessToken, refreshToken?}` либо конвертом
//! `{data: {...}}`. Принимаем обе (см. DESIGN.md), любая другая форма —
//! ошибка декодирования.

use common::{AuthError, StoError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::http::HttpClient;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Пара токенов из ответа сервера; refresh может не ротироваться
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPayload {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Конверт сначала, голая форма вторым вариантом
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenEnvelope {
    Wrapped { data: TokenPayload },
    Bare(TokenPayload),
}

impl TokenEnvelope {
    fn into_payload(self) -> TokenPayload {
        match self {
            TokenEnvelope::Wrapped { data } => data,
            TokenEnvelope::Bare(payload) => payload,
        }
    }
}

impl HttpClient {
    /// Вход по логину и паролю; полученные токены сохраняются в хранилище
    pub async fn login(&self, username: &str, password: &str) -> Result<(), StoError> {
        let url = format!("{}/auth/login", self.config.base_url);
        let response = self
            .inner
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| StoError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::resource_error(status.as_u16(), &body));
        }

        let payload = response
            .json::<TokenEnvelope>()
            .await
            .map_err(|e| StoError::Decode(format!("неожиданный формат ответа /auth/login: {e}")))?
            .into_payload();

        self.tokens
            .store(payload.access_token, payload.refresh_token);
        info!("🔐 вход выполнен: {username}");
        Ok(())
    }

    /// Завершение сессии: запрос на сервер best-effort, локальные токены
    /// очищаются в любом случае
    pub async fn logout(&self) -> Result<(), StoError> {
        let url = format!("{}/auth/logout", self.config.base_url);
        let mut request = self.inner.post(&url);
        if let Some(token) = self.tokens.access() {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Err(e) = request.send().await {
            debug!("logout запрос не дошёл до сервера: {e}");
        }
        self.tokens.clear();
        Ok(())
    }

    /// Обновление access token по refresh token.
    ///
    /// `MissingRefreshToken` — слот пуст; `RefreshRejected` — сервер
    /// ответил не-2xx. Успешный ответ сохраняет новый access token и
    /// ротированный refresh token, если тот пришёл.
    pub async fn refresh(&self) -> Result<TokenPayload, StoError> {
        let Some(refresh_token) = self.tokens.refresh() else {
            return Err(AuthError::MissingRefreshToken.into());
        };

        let url = format!("{}/auth/refresh", self.config.base_url);
        // запрос неавторизованный: access token сюда не прикладывается
        let response = self
            .inner
            .post(&url)
            .json(&RefreshRequest {
                refresh_token: &refresh_token,
            })
            .send()
            .await
            .map_err(|e| StoError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::RefreshRejected {
                status: status.as_u16(),
            }
            .into());
        }

        let payload = response
            .json::<TokenEnvelope>()
            .await
            .map_err(|e| StoError::Decode(format!("неожиданный формат ответа /auth/refresh: {e}")))?
            .into_payload();

        self.tokens
            .store(payload.access_token.clone(), payload.refresh_token.clone());
        info!("🔑 access token обновлён");
        Ok(payload)
    }

    /// Обновление с защитой от параллельных refresh.
    ///
    /// Обработчики одновременных 401 выстраиваются на мьютексе; тот, кто
    /// получил замок после чужого успешного refresh, видит изменившийся
    /// access token и сетевой вызов пропускает.
    pub(crate) async fn refresh_access_token(
        &self,
        stale: Option<String>,
    ) -> Result<String, StoError> {
        let _gate = self.refresh_gate.lock().await;

        if let Some(current) = self.tokens.access() {
            if stale.as_ref() != Some(&current) {
                debug!("токен уже обновлён параллельным запросом");
                return Ok(current);
            }
        }

        let payload = self.refresh().await?;
        Ok(payload.access_token)
    }
}
