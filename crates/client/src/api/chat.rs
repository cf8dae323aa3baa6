use common::StoError;
use serde_json::json;
use std::sync::Arc;

use crate::http::HttpClient;
use crate::models::{ChatMessage, Conversation};

#[derive(Clone)]
pub struct ChatApi {
    http: Arc<HttpClient>,
}

impl ChatApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn conversations(&self) -> Result<Vec<Conversation>, StoError> {
        self.http.get("/chat/conversations").await
    }

    pub async fn messages(&self, conversation_id: &str) -> Result<Vec<ChatMessage>, StoError> {
        self.http
            .get(&format!("/chat/conversations/{conversation_id}/messages"))
            .await
    }

    pub async fn send(&self, conversation_id: &str, text: &str) -> Result<ChatMessage, StoError> {
        self.http
            .post(
                &format!("/chat/conversations/{conversation_id}/messages"),
                &json!({ "text": text }),
            )
            .await
    }
}
