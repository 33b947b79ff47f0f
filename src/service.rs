//! Casos de uso del asistente sobre un `SessionStore`.
//!
//! Cada operación carga la sesión, monta un `FlowManager` con un
//! `SessionHost`, procesa la petición y guarda la sesión si tuvo éxito.

use log::{debug, info, warn};
use serde_json::Value;
use uuid::Uuid;
use wiz_adapters::{FlowSession, SessionHost, SessionStore, WizardRequest, WizardResponse};
use wiz_core::{FlattenedFlow, FlowManager};

use crate::errors::AppError;
use crate::wizard::{definition_hash, onboarding_dispatcher, onboarding_steps, FLOW_KEY};

pub struct WizardService<S> {
    store: S,
    strict_definition: bool,
}

impl<S> WizardService<S> where S: SessionStore
{
    pub fn new(store: S, strict_definition: bool) -> Self {
        Self { store,
               strict_definition }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Crea y guarda una sesión nueva, sin step actual.
    pub fn start(&self) -> Result<FlowSession, AppError> {
        let session = FlowSession::new(FLOW_KEY, definition_hash()?);
        self.store.save(&session)?;
        info!("session {} started", session.id);
        Ok(session)
    }

    pub fn show(&self, id: Uuid) -> Result<WizardResponse, AppError> {
        self.submit(id, &WizardRequest::show())
    }

    pub fn submit(&self, id: Uuid, request: &WizardRequest) -> Result<WizardResponse, AppError> {
        let hash = definition_hash()?;
        let session = self.store.load_for_definition(id, FLOW_KEY, &hash, self.strict_definition)?;
        let mut manager =
            FlowManager::new(FLOW_KEY, onboarding_steps()?, SessionHost::new(session))?.with_dispatcher(onboarding_dispatcher());
        let response = match manager.handle_request(request) {
            Ok(response) => response,
            Err(e) => {
                warn!("session {}: request rejected: {}", id, e);
                return Err(e.into());
            }
        };
        let session = manager.into_host().into_session();
        self.store.save(&session)?;
        debug!("session {} saved at {:?}", id, session.current_step);
        Ok(response)
    }

    pub fn session(&self, id: Uuid) -> Result<FlowSession, AppError> {
        Ok(self.store.load(id)?)
    }

    pub fn sessions(&self) -> Result<Vec<Uuid>, AppError> {
        Ok(self.store.list()?)
    }
}

/// Nombres completos de los steps y hash de la definición.
pub fn describe_flow() -> Result<(Vec<String>, String), AppError> {
    let flow = FlattenedFlow::compile(FLOW_KEY, &onboarding_steps()?);
    let names = flow.keys().map(str::to_string).collect();
    Ok((names, flow.definition_hash()))
}

/// `clave=valor`; el valor se interpreta como JSON y, si no lo es, como texto.
pub fn parse_field(raw: &str) -> Result<(String, Value), AppError> {
    let (key, value) = raw.split_once('=')
                          .ok_or_else(|| AppError::InvalidField(raw.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::InvalidField(raw.to_string()));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiz_adapters::InMemorySessionStore;
    use wiz_core::NavigationDirection;

    fn service() -> WizardService<InMemorySessionStore> {
        WizardService::new(InMemorySessionStore::new(), true)
    }

    #[test]
    fn parse_field_reads_json_or_text() {
        assert_eq!(parse_field("newsletter=true").unwrap(), ("newsletter".into(), json!(true)));
        assert_eq!(parse_field("name=Ana Pérez").unwrap(), ("name".into(), json!("Ana Pérez")));
        assert_eq!(parse_field("vat_id=").unwrap(), ("vat_id".into(), json!("")));
        assert!(matches!(parse_field("novalue"), Err(AppError::InvalidField(_))));
        assert!(matches!(parse_field("=x"), Err(AppError::InvalidField(_))));
    }

    #[test]
    fn start_then_show_keeps_session_unpositioned() {
        let svc = service();
        let session = svc.start().unwrap();
        let page = svc.show(session.id).unwrap();
        assert_eq!(page.page().map(|p| p.title.as_str()), Some("Profile"));
        assert_eq!(svc.session(session.id).unwrap().current_step, None);
    }

    #[test]
    fn personal_account_skips_company_group() {
        let svc = service();
        let id = svc.start().unwrap().id;
        let request = WizardRequest::next().with_field("name", "Ana")
                                           .with_field("email", "ana@example.com")
                                           .with_field("account_type", "personal");
        let r = svc.submit(id, &request).unwrap();
        assert_eq!(r,
                   WizardResponse::Redirect { step: "onboarding.preferences".into(),
                                              direction: NavigationDirection::Next });
    }

    #[test]
    fn failed_requests_are_not_saved() {
        let svc = service();
        let id = svc.start().unwrap().id;
        let err = svc.submit(id, &WizardRequest::goto("%root%.missing")).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert_eq!(svc.session(id).unwrap().current_step, None);
    }

    #[test]
    fn describe_flow_lists_five_steps() {
        let (names, hash) = describe_flow().unwrap();
        assert_eq!(names.len(), 5);
        assert_eq!(hash, definition_hash().unwrap());
    }
}
