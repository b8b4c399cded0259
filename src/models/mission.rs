use serde::{Deserialize, Serialize};
use crate::models::select_item::{lenient_text, Selectable};

/// Misión tal como la devuelve GET /missions/
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionRecord {
    #[serde(rename = "_id", default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

impl Selectable for MissionRecord {
    fn select_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn select_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
