use serde::{Deserialize, Serialize};
use crate::state::FormState;

/// Estado con el que se crea una asignación
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    #[default]
    Occupied,
}

/// Body de POST /schedules/
/// Se construye al enviar y se descarta después; no se guarda en ningún lado
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub drone: String,
    pub mission: String,
    pub start: String,
    pub end: String,
    pub status: ScheduleStatus,
}

impl ScheduleRequest {
    /// Construir desde el estado actual del formulario
    /// start/end van tal cual los da el input datetime-local ("YYYY-MM-DDTHH:MM")
    pub fn from_form(form: &FormState) -> Self {
        Self {
            drone: form.selected_drone.clone(),
            mission: form.selected_mission.clone(),
            start: form.start.clone(),
            end: form.end.clone(),
            status: ScheduleStatus::Occupied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_wire_shape() {
        let form = FormState {
            selected_drone: "D1".into(),
            selected_mission: "M1".into(),
            start: "2024-01-01T10:00".into(),
            end: "2024-01-01T11:00".into(),
            ..FormState::default()
        };

        let body = serde_json::to_value(ScheduleRequest::from_form(&form)).unwrap();

        assert_eq!(
            body,
            json!({
                "drone": "D1",
                "mission": "M1",
                "start": "2024-01-01T10:00",
                "end": "2024-01-01T11:00",
                "status": "occupied"
            })
        );
    }
}
