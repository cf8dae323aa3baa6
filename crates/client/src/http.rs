//! HTTP пайплайн клиента.
//!
//! Каждый исходящий запрос получает заголовок `Authorization: Bearer ...`,
//! если access token есть в хранилище. Ответ 401 перехватывается: один
//! общий refresh (см. [`crate::auth`]), затем ровно один повтор исходного
//! запроса со свежим токеном. Повторный 401, отсутствие refresh token или
//! отказ сервера в обновлении завершают сессию: оба токена очищаются и
//! вызывающему возвращается `AuthError::SessionExpired`.

use common::{AuthError, ClientConfig, StoError};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::tokens::TokenStore;

pub struct HttpClient {
    pub(crate) config: ClientConfig,
    pub(crate) inner: reqwest::Client,
    pub(crate) tokens: Arc<dyn TokenStore>,
    /// Единственный refresh в полёте на весь клиент
    pub(crate) refresh_gate: Mutex<()>,
}

/// Захваченный исходящий запрос: нужен для повтора после refresh
#[derive(Debug, Clone)]
struct RequestSpec {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl HttpClient {
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, StoError> {
        let inner = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| StoError::Config(format!("не удалось создать HTTP клиент: {e}")))?;

        Ok(Self {
            config,
            inner,
            tokens,
            refresh_gate: Mutex::new(()),
        })
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoError> {
        self.execute(Method::GET, path, &[], None).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, StoError> {
        self.execute(Method::GET, path, query, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoError> {
        let body = serde_json::to_value(body).map_err(|e| StoError::Decode(e.to_string()))?;
        self.execute(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, StoError> {
        let body = serde_json::to_value(body).map_err(|e| StoError::Decode(e.to_string()))?;
        self.execute(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoError> {
        self.execute(Method::DELETE, path, &[], None).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<serde_json::Value>,
    ) -> Result<T, StoError> {
        let spec = RequestSpec {
            method,
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body,
        };

        let stale = self.tokens.access();
        let response = self.send(&spec, stale.clone()).await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::into_body(response).await;
        }

        // 401: без refresh token сессию не спасти
        if self.tokens.refresh().is_none() {
            warn!("401 {} без refresh token, сессия завершена", spec.path);
            self.tokens.clear();
            return Err(AuthError::SessionExpired.into());
        }

        let fresh = match self.refresh_access_token(stale).await {
            Ok(fresh) => fresh,
            Err(e) => {
                warn!("обновление токена не удалось: {e}");
                self.tokens.clear();
                return Err(AuthError::SessionExpired.into());
            }
        };

        debug!("повторяю {} {} со свежим токеном", spec.method, spec.path);
        let retry = self.send(&spec, Some(fresh)).await?;
        if retry.status() == StatusCode::UNAUTHORIZED {
            // запрос уже повторялся, второй refresh не пытаемся
            warn!("повторный 401 {} после refresh, сессия завершена", spec.path);
            self.tokens.clear();
            return Err(AuthError::SessionExpired.into());
        }
        Self::into_body(retry).await
    }

    async fn send(
        &self,
        spec: &RequestSpec,
        bearer: Option<String>,
    ) -> Result<Response, StoError> {
        let url = format!("{}{}", self.config.base_url, spec.path);
        let mut request = self.inner.request(spec.method.clone(), &url);

        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        // отсутствие токена не ошибка: запрос уходит неавторизованным
        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        request
            .send()
            .await
            .map_err(|e| StoError::Network(e.to_string()))
    }

    async fn into_body<T: DeserializeOwned>(response: Response) -> Result<T, StoError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| StoError::Decode(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        Err(Self::resource_error(status.as_u16(), &body))
    }

    /// Любой не-2xx (кроме обработанного 401) уходит наверх как есть,
    /// с серверным сообщением когда его удалось извлечь из тела.
    pub(crate) fn resource_error(status: u16, body: &str) -> StoError {
        #[derive(Deserialize)]
        struct ServerMessage {
            message: Option<String>,
            error: Option<String>,
        }

        let message = serde_json::from_str::<ServerMessage>(body)
            .ok()
            .and_then(|m| m.message.or(m.error));

        StoError::Resource { status, message }
    }
}
