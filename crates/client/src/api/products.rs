use common::StoError;
use std::sync::Arc;

use crate::http::HttpClient;
use crate::models::Product;

#[derive(Clone)]
pub struct ProductsApi {
    http: Arc<HttpClient>,
}

impl ProductsApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Product>, StoError> {
        self.http.get("/products").await
    }

    pub async fn get(&self, id: u64) -> Result<Product, StoError> {
        self.http.get(&format!("/products/{id}")).await
    }
}
