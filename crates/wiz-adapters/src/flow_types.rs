//! Tipos JSON con los que trabajan los adaptadores.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wiz_core::{FlowTypes, NavigationDirection};

/// Datos del asistente: un objeto JSON plano.
pub type WizardData = Map<String, Value>;

/// Marcador de tipos para flujos JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFlow;

impl FlowTypes for JsonFlow {
    type Request = WizardRequest;
    type Response = WizardResponse;
    type Data = WizardData;
}

/// Qué pide el usuario al step actual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum WizardIntent {
    /// Mostrar el step actual.
    Show,
    Back,
    /// Enviar los campos y avanzar si el step está completo.
    Next,
    /// Saltar a un step por nombre (`%root%.grupo.step` o `.`).
    Goto(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardRequest {
    pub intent: WizardIntent,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl WizardRequest {
    pub fn new(intent: WizardIntent) -> Self {
        Self { intent,
               fields: Map::new() }
    }

    #[inline]
    pub fn show() -> Self {
        Self::new(WizardIntent::Show)
    }

    #[inline]
    pub fn back() -> Self {
        Self::new(WizardIntent::Back)
    }

    #[inline]
    pub fn next() -> Self {
        Self::new(WizardIntent::Next)
    }

    #[inline]
    pub fn goto(target: impl Into<String>) -> Self {
        Self::new(WizardIntent::Goto(target.into()))
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Pantalla que un step devuelve sin navegar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardPage {
    pub title: String,
    pub fields: Vec<String>,
    pub values: Map<String, Value>,
    /// Campos obligatorios que faltan tras un envío.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardResponse {
    Page(WizardPage),
    /// El motor navegó: el cliente debe mostrar `step`.
    Redirect { step: String, direction: NavigationDirection },
}

impl WizardResponse {
    pub fn page(&self) -> Option<&WizardPage> {
        match self {
            WizardResponse::Page(page) => Some(page),
            WizardResponse::Redirect { .. } => None,
        }
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            WizardResponse::Redirect { step, .. } => Some(step),
            WizardResponse::Page(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_deserializes_from_tagged_json() {
        let req: WizardRequest = serde_json::from_value(json!({
                                     "intent": {"kind": "goto", "target": "%root%.profile"},
                                     "fields": {"email": "a@b.c"}
                                 })).unwrap();
        assert_eq!(req.intent, WizardIntent::Goto("%root%.profile".into()));
        assert_eq!(req.fields["email"], json!("a@b.c"));

        let req: WizardRequest = serde_json::from_value(json!({"intent": {"kind": "next"}})).unwrap();
        assert_eq!(req, WizardRequest::next());
    }

    #[test]
    fn redirect_serializes_with_type_tag() {
        let r = WizardResponse::Redirect { step: "onboarding.plan".into(),
                                           direction: NavigationDirection::Next };
        assert_eq!(serde_json::to_value(&r).unwrap(),
                   json!({"type": "redirect", "step": "onboarding.plan", "direction": "next"}));
        assert_eq!(r.redirect_target(), Some("onboarding.plan"));
    }
}
