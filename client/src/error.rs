//! Error handling for the AgroNexo dashboard client
//!
//! Every error can be turned into the Spanish text shown in the blocking
//! alert the dashboard raises when a user action fails.

use shared::FieldError;
use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    // Transport errors
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned {status}: {}", message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        /// Message from the backend's `{"error": ...}` body, if any
        message: Option<String>,
    },

    #[error("Failed to decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },

    // Form errors
    #[error("Validation error: {0}")]
    Validation(#[from] FieldError),

    #[error("No animals selected")]
    EmptySelection,

    #[error("No form is open")]
    NoOpenModal,

    #[error("Unknown {kind} {id}")]
    UnknownEntity { kind: &'static str, id: i64 },

    // External service errors
    #[error("Weather service unavailable: {0}")]
    WeatherUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl ClientError {
    /// Text for the blocking alert: the backend's own message when it sent
    /// one, a generic one otherwise
    pub fn alert_message(&self) -> String {
        match self {
            ClientError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Api { status, .. } => {
                format!("El servidor rechazó la operación ({})", status)
            }
            ClientError::Transport(_) => {
                "No se pudo conectar con el servidor. Intente nuevamente.".to_string()
            }
            ClientError::Decode { .. } => "Respuesta inesperada del servidor".to_string(),
            ClientError::Validation(field) => format!("{}: {}", field.field, field.message_es),
            ClientError::EmptySelection => "Seleccione al menos un animal".to_string(),
            ClientError::NoOpenModal => "No hay ningún formulario abierto".to_string(),
            ClientError::UnknownEntity { kind, id } => format!("No existe {} {}", kind, id),
            ClientError::WeatherUnavailable(_) => "Clima no disponible".to_string(),
            ClientError::Io(e) => format!("No se pudo guardar el archivo: {}", e),
            ClientError::Configuration(e) => format!("Error de configuración: {}", e),
        }
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
