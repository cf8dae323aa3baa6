use common::StoError;
use std::sync::Arc;

use crate::http::HttpClient;
use crate::models::ReportRow;

/// Отчёты за период (`period`: "day" | "week" | "month")
#[derive(Clone)]
pub struct ReportsApi {
    http: Arc<HttpClient>,
}

impl ReportsApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn appointments(&self, period: &str) -> Result<Vec<ReportRow>, StoError> {
        self.http
            .get_query("/reports/appointments", &[("period", period)])
            .await
    }

    pub async fn revenue(&self, period: &str) -> Result<Vec<ReportRow>, StoError> {
        self.http
            .get_query("/reports/revenue", &[("period", period)])
            .await
    }
}
