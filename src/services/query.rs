// ============================================================================
// QUERY - Taxonomía de errores y serialización de query params
// ============================================================================
// Parte pura del Query Client: sin web_sys, testeable en nativo.
// ============================================================================

use thiserror::Error;

/// Error de I/O contra el backend. El cliente no reintenta ni interpreta
/// códigos de estado: solo los expone.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No llegó respuesta (fallo de red/transporte)
    #[error("Network error: {0}")]
    Transport(String),
    /// El servidor respondió con un código no-2xx
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    /// La respuesta no se pudo deserializar
    #[error("Parse error: {0}")]
    Decode(String),
}

/// Lista ordenada de parámetros de query. Las entradas vacías nunca entran:
/// un filtro sin valor se omite del request, no se manda como string vacío.
#[derive(Clone, Debug, Default)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agregar un parámetro siempre presente (page, page_size)
    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.entries.push((key.to_string(), value.to_string()));
    }

    /// Agregar un parámetro opcional: se omite si el valor está vacío
    pub fn push_opt(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializar como query string ("?page=1&status=open"), vacío si no hay
    /// parámetros. Los valores se codifican percent-encoding.
    pub fn to_query_string(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let joined = self
            .entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("?{}", joined)
    }
}

/// Percent-encoding mínimo para valores de query (RFC 3986 unreserved + los
/// separadores que el backend acepta sin codificar quedan tal cual).
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
