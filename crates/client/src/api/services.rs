use common::StoError;
use std::sync::Arc;

use crate::http::HttpClient;
use crate::models::ServiceItem;

/// Прайс-лист работ СТО
#[derive(Clone)]
pub struct ServicesApi {
    http: Arc<HttpClient>,
}

impl ServicesApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<ServiceItem>, StoError> {
        self.http.get("/services").await
    }
}
