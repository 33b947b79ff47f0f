//! Sesión persistible de un asistente.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::flow_types::WizardData;

/// Estado de un usuario dentro de un flujo.
///
/// `definition_hash` fija la definición con la que se creó la sesión; si el
/// árbol de steps cambia, `current_step` puede no existir en el flujo nuevo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowSession {
    pub id: Uuid,
    pub flow_key: String,
    pub definition_hash: String,
    pub current_step: Option<String>,
    #[serde(default)]
    pub data: WizardData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FlowSession {
    pub fn new(flow_key: impl Into<String>, definition_hash: impl Into<String>) -> Self {
        let now = Utc::now();
        Self { id: Uuid::new_v4(),
               flow_key: flow_key.into(),
               definition_hash: definition_hash.into(),
               current_step: None,
               data: WizardData::new(),
               created_at: now,
               updated_at: now }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Olvida la posición (el próximo request arranca en el primer step elegible).
    pub fn reset_position(&mut self, definition_hash: impl Into<String>) {
        self.current_step = None;
        self.definition_hash = definition_hash.into();
        self.touch();
    }
}
