//! Steps reutilizables para flujos JSON.
//!
//! - `FormStep`: recoge campos y avanza solo cuando los obligatorios están.
//! - `ConditionalStep`: envuelve otro step y lo hace elegible según los datos.
//! - `SummaryStep`: muestra lo recogido y confirma el asistente.

mod conditional;
mod form;
mod summary;

pub use conditional::ConditionalStep;
pub use form::FormStep;
pub use summary::SummaryStep;

use wiz_core::FlowResponse;

use crate::flow_types::{JsonFlow, WizardIntent, WizardRequest, WizardResponse};

/// Traduce las intenciones de navegación comunes a todos los steps.
/// `Show` y `Next` quedan para cada step.
pub(crate) fn navigation_for(request: &WizardRequest) -> Option<FlowResponse<WizardResponse>> {
    match &request.intent {
        WizardIntent::Back => Some(FlowResponse::back()),
        WizardIntent::Goto(target) => Some(FlowResponse::direct(target.clone())),
        WizardIntent::Show | WizardIntent::Next => None,
    }
}

/// Alias del step JSON compartido.
pub type JsonStepRef = wiz_core::StepRef<JsonFlow>;
