//! `FlowHost` respaldado por una `FlowSession`.

use log::debug;
use wiz_core::{FlowHost, ResolvedNavigationResponse};

use crate::flow_types::{JsonFlow, WizardData, WizardRequest, WizardResponse};
use crate::session::FlowSession;

/// Anfitrión que guarda el step actual y los datos en la sesión y responde a
/// cada navegación con una redirección al destino.
#[derive(Debug, Clone)]
pub struct SessionHost {
    session: FlowSession,
}

impl SessionHost {
    pub fn new(session: FlowSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &FlowSession {
        &self.session
    }

    pub fn into_session(self) -> FlowSession {
        self.session
    }
}

impl FlowHost<JsonFlow> for SessionHost {
    fn current_step_name(&self) -> Option<String> {
        self.session.current_step.clone()
    }

    fn set_current_step_name(&mut self, step_name: &str) {
        debug!("session={} current_step={}", self.session.id, step_name);
        self.session.current_step = Some(step_name.to_string());
        self.session.touch();
    }

    fn data(&self) -> &WizardData {
        &self.session.data
    }

    fn data_mut(&mut self) -> &mut WizardData {
        &mut self.session.data
    }

    fn navigation_response(&mut self, _request: &WizardRequest, navigation: &ResolvedNavigationResponse) -> WizardResponse {
        WizardResponse::Redirect { step: navigation.target_step_name().to_string(),
                                   direction: navigation.direction() }
    }
}
