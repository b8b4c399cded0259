use serde_json::Value;
use thiserror::Error;

/// Errores de comunicación con el API de scheduling
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No hubo respuesta (red caída, CORS, servidor parado)
    #[error("Network error: {0}")]
    Network(String),

    /// Respuesta no-2xx; `detail` es el campo "detail" del body JSON si existía
    #[error("HTTP {status}: {status_text}")]
    Http {
        status: u16,
        status_text: String,
        detail: Option<Value>,
    },

    /// Body 2xx que no se pudo decodificar
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Detalle estructurado enviado por el backend, si lo hay
    pub fn detail(&self) -> Option<&Value> {
        match self {
            ApiError::Http { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }
}

/// Extraer "detail" de un body de error; None si no es JSON o no lo trae
pub fn parse_error_detail(body: &str) -> Option<Value> {
    let mut value: Value = serde_json::from_str(body).ok()?;
    value.get_mut("detail").map(Value::take)
}
