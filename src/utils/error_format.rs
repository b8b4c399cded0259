// ============================================================================
// ERROR FORMAT - Convierte el campo "detail" de una respuesta de error en texto
// ============================================================================
// Formas soportadas:
// - string                      -> tal cual
// - [{ "msg": ... }, ...]       -> msgs unidos con ", "
// - { "campo": "mensaje", ... } -> "campo: mensaje" unidos con ", "
// - cualquier otra cosa         -> mensaje genérico
// Nunca falla: cualquier forma desconocida cae en el mensaje genérico.
// ============================================================================

use serde_json::Value;
use crate::utils::constants::UNEXPECTED_ERROR_MESSAGE;

/// Formatear el detalle de error del backend para mostrarlo en el modal
pub fn format_error_detail(detail: Option<&Value>) -> String {
    match detail {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item.get("msg") {
                None | Some(Value::Null) => String::new(),
                Some(msg) => value_text(msg),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::Object(fields)) => fields
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value_text(value)))
            .collect::<Vec<_>>()
            .join(", "),
        _ => UNEXPECTED_ERROR_MESSAGE.to_string(),
    }
}

/// Strings sin comillas, el resto como JSON
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
