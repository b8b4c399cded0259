// ============================================================================
// SELECT ITEM - Par id/nombre que consumen los selectores
// ============================================================================

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Opción seleccionable (value = id, texto = name)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectItem {
    pub id: String,
    pub name: String,
}

impl SelectItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Registro del backend que puede mostrarse en un selector
pub trait Selectable {
    fn select_id(&self) -> Option<&str>;
    fn select_name(&self) -> Option<&str>;

    /// Convertir a SelectItem si tiene id y nombre no vacíos
    fn to_select_item(&self) -> Option<SelectItem> {
        let id = self.select_id().filter(|id| !id.is_empty())?;
        let name = self.select_name().filter(|name| !name.is_empty())?;
        Some(SelectItem::new(id, name))
    }
}

/// Campo de texto tolerante para `_id` / `name`
/// - string -> tal cual
/// - número distinto de 0 -> su texto
/// - {"$oid": "..."} (ObjectId en JSON extendido) -> el oid
/// - cualquier otra cosa -> None (el registro se descarta al filtrar)
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Object(fields) => match fields.get("$oid") {
            Some(Value::String(oid)) => Some(oid.clone()),
            _ => None,
        },
        _ => None,
    })
}

/// Decodificar cada elemento de un listado por separado
/// Un elemento que no es un registro queda como None en su posición
pub fn decode_records<R: DeserializeOwned>(values: Vec<Value>) -> Vec<Option<R>> {
    values
        .into_iter()
        .map(|value| serde_json::from_value(value).ok())
        .collect()
}

/// Descartar registros nulos o sin id/nombre, preservando el orden
pub fn keep_selectable<R: Selectable>(records: &[Option<R>]) -> Vec<SelectItem> {
    records
        .iter()
        .flatten()
        .filter_map(|record| record.to_select_item())
        .collect()
}
