use common::StoError;
use std::sync::Arc;

use crate::http::HttpClient;
use crate::models::User;

#[derive(Clone)]
pub struct UsersApi {
    http: Arc<HttpClient>,
}

impl UsersApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn me(&self) -> Result<User, StoError> {
        self.http.get("/users/me").await
    }

    pub async fn list(&self) -> Result<Vec<User>, StoError> {
        self.http.get("/users").await
    }
}
