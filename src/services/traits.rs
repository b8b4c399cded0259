use crate::models::{DroneRecord, MissionRecord, ScheduleRequest};
use crate::services::ApiError;

/// Operaciones HTTP que necesita el formulario
/// ApiClient es la implementación real; los tests usan una en memoria
#[allow(async_fn_in_trait)]
pub trait SchedulingApi {
    /// GET /drones/status
    async fn fetch_drones(&self) -> Result<Vec<Option<DroneRecord>>, ApiError>;

    /// GET /missions/
    async fn fetch_missions(&self) -> Result<Vec<Option<MissionRecord>>, ApiError>;

    /// POST /schedules/ (el body de la respuesta no se usa)
    async fn create_schedule(&self, request: &ScheduleRequest) -> Result<(), ApiError>;
}
