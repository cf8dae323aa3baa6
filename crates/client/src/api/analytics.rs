use common::StoError;
use std::sync::Arc;

use crate::http::HttpClient;
use crate::models::AnalyticsSummary;

#[derive(Clone)]
pub struct AnalyticsApi {
    http: Arc<HttpClient>,
}

impl AnalyticsApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn summary(&self) -> Result<AnalyticsSummary, StoError> {
        self.http.get("/analytics/summary").await
    }
}
