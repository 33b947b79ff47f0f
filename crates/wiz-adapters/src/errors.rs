//! Errores de los stores de sesiones.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session {0} not found")]
    NotFound(Uuid),
    #[error("session {id} belongs to flow '{found}', expected '{expected}'")]
    FlowMismatch { id: Uuid, found: String, expected: String },
    #[error("session {id} was created for definition {stored}, current definition is {expected}")]
    StaleDefinition { id: Uuid, stored: String, expected: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Errores de estado de la sesión (no de infraestructura).
    pub fn is_session_state(&self) -> bool {
        matches!(self,
                 StoreError::NotFound(_) | StoreError::FlowMismatch { .. } | StoreError::StaleDefinition { .. })
    }
}
