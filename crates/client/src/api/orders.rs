use common::StoError;
use serde_json::json;
use std::sync::Arc;

use crate::http::HttpClient;
use crate::models::{NewOrder, Order};

/// Заказы запчастей
#[derive(Clone)]
pub struct OrdersApi {
    http: Arc<HttpClient>,
}

impl OrdersApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Order>, StoError> {
        self.http.get("/orders").await
    }

    pub async fn get(&self, id: &str) -> Result<Order, StoError> {
        self.http.get(&format!("/orders/{id}")).await
    }

    pub async fn create(&self, order: &NewOrder) -> Result<Order, StoError> {
        self.http.post("/orders", order).await
    }

    pub async fn update_status(&self, id: &str, status: &str) -> Result<Order, StoError> {
        self.http
            .put(&format!("/orders/{id}/status"), &json!({ "status": status }))
            .await
    }
}
