use common::StoError;
use serde_json::json;
use std::sync::Arc;

use crate::http::HttpClient;
use crate::models::{Appointment, NewAppointment};

/// Записи клиентов на обслуживание
#[derive(Clone)]
pub struct AppointmentsApi {
    http: Arc<HttpClient>,
}

impl AppointmentsApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    pub async fn list(&self) -> Result<Vec<Appointment>, StoError> {
        self.http.get("/appointments").await
    }

    pub async fn get(&self, id: &str) -> Result<Appointment, StoError> {
        self.http.get(&format!("/appointments/{id}")).await
    }

    pub async fn create(&self, appointment: &NewAppointment) -> Result<Appointment, StoError> {
        self.http.post("/appointments", appointment).await
    }

    pub async fn update_status(&self, id: &str, status: &str) -> Result<Appointment, StoError> {
        self.http
            .put(
                &format!("/appointments/{id}/status"),
                &json!({ "status": status }),
            )
            .await
    }
}
