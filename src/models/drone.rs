use serde::{Deserialize, Serialize};
use crate::models::select_item::{lenient_text, Selectable};

/// Dron tal como lo devuelve GET /drones/status
/// Todos los campos son opcionales: el backend no garantiza registros completos
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DroneRecord {
    #[serde(rename = "_id", default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
}

impl Selectable for DroneRecord {
    fn select_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn select_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
