// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Sin reintentos ni timeouts propios: se usan los del fetch del navegador.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use crate::config::CONFIG;
use serde_json::Value;
use crate::models::{decode_records, DroneRecord, MissionRecord, ScheduleRequest};
use crate::services::error::parse_error_detail;
use crate::services::{ApiError, SchedulingApi};
use crate::utils::constants::{DRONES_STATUS_PATH, MISSIONS_PATH, SCHEDULES_PATH};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// URL absoluta de un endpoint
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::info!("📡 [API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(http_error(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingApi for ApiClient {
    async fn fetch_drones(&self) -> Result<Vec<Option<DroneRecord>>, ApiError> {
        let listing: Vec<Value> = self.get_json(DRONES_STATUS_PATH).await?;
        Ok(decode_records(listing))
    }

    async fn fetch_missions(&self) -> Result<Vec<Option<MissionRecord>>, ApiError> {
        let listing: Vec<Value> = self.get_json(MISSIONS_PATH).await?;
        Ok(decode_records(listing))
    }

    async fn create_schedule(&self, request: &ScheduleRequest) -> Result<(), ApiError> {
        let url = self.url(SCHEDULES_PATH);
        log::info!(
            "📤 [API] POST {} drone={} mission={} {} -> {}",
            url, request.drone, request.mission, request.start, request.end
        );

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            log::info!("✅ [API] Schedule creado ({})", response.status());
            Ok(())
        } else {
            Err(http_error(response).await)
        }
    }
}

/// Convertir una respuesta no-2xx en ApiError::Http, leyendo "detail" del body
async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let status_text = response.status_text();
    let detail = match response.text().await {
        Ok(body) => parse_error_detail(&body),
        Err(e) => {
            log::warn!("⚠️ [API] No se pudo leer el body del error {}: {}", status, e);
            None
        }
    };
    ApiError::Http {
        status,
        status_text,
        detail,
    }
}
