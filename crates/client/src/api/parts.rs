use common::StoError;
use std::sync::Arc;

use crate::http::HttpClient;
use crate::models::Part;

/// Параметры выборки каталога запчастей
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartListParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl PartListParams {
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }
}

#[derive(Clone)]
pub struct PartsApi {
    http: Arc<HttpClient>,
}

impl PartsApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(&self, params: &PartListParams) -> Result<Vec<Part>, StoError> {
        if let Some(query) = &params.search {
            return self.search(query).await;
        }
        let mut query = Vec::new();
        if let Some(category) = &params.category {
            query.push(("category", category.as_str()));
        }
        self.http.get_query("/parts", &query).await
    }

    pub async fn get(&self, id: u64) -> Result<Part, StoError> {
        self.http.get(&format!("/parts/{id}")).await
    }

    pub async fn categories(&self) -> Result<Vec<String>, StoError> {
        self.http.get("/parts/categories").await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Part>, StoError> {
        self.http.get_query("/parts/search", &[("q", query)]).await
    }
}
