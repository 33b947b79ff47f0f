use log::debug;
use serde_json::Value;
use wiz_core::{FlowResponse, NavigationResponse, Step};

use super::navigation_for;
use crate::flow_types::{JsonFlow, WizardData, WizardIntent, WizardPage, WizardRequest, WizardResponse};

/// Último step: muestra los datos y, en `Next`, marca el asistente como
/// confirmado sin navegar.
#[derive(Debug, Clone)]
pub struct SummaryStep {
    title: String,
    confirmed_field: String,
}

impl SummaryStep {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(),
               confirmed_field: "confirmed".to_string() }
    }

    pub fn confirmed_field(mut self, field: impl Into<String>) -> Self {
        self.confirmed_field = field.into();
        self
    }

    fn page(&self, data: &WizardData, completed: bool) -> WizardPage {
        WizardPage { title: self.title.clone(),
                     fields: vec![],
                     values: data.clone(),
                     missing: vec![],
                     completed }
    }
}

impl Step<JsonFlow> for SummaryStep {
    fn handle_request(&self,
                      request: &WizardRequest,
                      _navigation: &NavigationResponse,
                      data: &mut WizardData)
                      -> Option<FlowResponse<WizardResponse>> {
        if let Some(navigation) = navigation_for(request) {
            return Some(navigation);
        }
        let completed = if request.intent == WizardIntent::Next {
            debug!("summary '{}' confirmed", self.title);
            data.insert(self.confirmed_field.clone(), Value::Bool(true));
            true
        } else {
            data.get(&self.confirmed_field) == Some(&Value::Bool(true))
        };
        Some(FlowResponse::Response(WizardResponse::Page(self.page(data, completed))))
    }

    // Volver atrás desde el resumen invalida la confirmación.
    fn on_back(&self, _request: &WizardRequest, data: &mut WizardData) {
        data.remove(&self.confirmed_field);
    }
}
