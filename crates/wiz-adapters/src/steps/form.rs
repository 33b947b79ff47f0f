use log::trace;
use serde_json::Value;
use wiz_core::{FlowResponse, NavigationResponse, Step};

use super::navigation_for;
use crate::flow_types::{JsonFlow, WizardData, WizardIntent, WizardPage, WizardRequest, WizardResponse};

/// Formulario con campos obligatorios y opcionales.
///
/// En `Next` copia a los datos los campos declarados que traiga la petición
/// y navega hacia adelante si no falta ninguno obligatorio; si falta alguno
/// devuelve la página con la lista de faltantes. Cuando un recorrido lo salta
/// borra sus campos de los datos.
#[derive(Debug, Clone)]
pub struct FormStep {
    title: String,
    required: Vec<String>,
    optional: Vec<String>,
}

impl FormStep {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(),
               required: vec![],
               optional: vec![] }
    }

    pub fn required<I, S>(mut self, fields: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.required.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn optional<I, S>(mut self, fields: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.optional.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn declared(&self) -> impl Iterator<Item = &String> {
        self.required.iter().chain(self.optional.iter())
    }

    fn missing(&self, data: &WizardData) -> Vec<String> {
        self.required
            .iter()
            .filter(|field| is_blank(data.get(field.as_str())))
            .cloned()
            .collect()
    }

    fn page(&self, data: &WizardData, missing: Vec<String>) -> WizardPage {
        let values = self.declared()
                         .filter_map(|field| data.get(field).map(|v| (field.clone(), v.clone())))
                         .collect();
        WizardPage { title: self.title.clone(),
                     fields: self.declared().cloned().collect(),
                     values,
                     missing,
                     completed: false }
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

impl Step<JsonFlow> for FormStep {
    fn handle_request(&self,
                      request: &WizardRequest,
                      _navigation: &NavigationResponse,
                      data: &mut WizardData)
                      -> Option<FlowResponse<WizardResponse>> {
        if let Some(navigation) = navigation_for(request) {
            return Some(navigation);
        }
        if request.intent == WizardIntent::Show {
            return Some(FlowResponse::Response(WizardResponse::Page(self.page(data, vec![]))));
        }

        for field in self.declared() {
            if let Some(value) = request.fields.get(field) {
                data.insert(field.clone(), value.clone());
            }
        }
        let missing = self.missing(data);
        if missing.is_empty() {
            Some(FlowResponse::next())
        } else {
            Some(FlowResponse::Response(WizardResponse::Page(self.page(data, missing))))
        }
    }

    fn on_skipped(&self, _request: &WizardRequest, _navigation: &NavigationResponse, data: &mut WizardData) {
        for field in self.declared() {
            if data.remove(field).is_some() {
                trace!("form '{}' skipped, cleared field {}", self.title, field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn account() -> FormStep {
        FormStep::new("Account").required(["email"]).optional(["newsletter"])
    }

    #[test]
    fn next_with_missing_fields_stays_on_the_page() {
        let mut data = WizardData::new();
        let reply = account().handle_request(&WizardRequest::next().with_field("email", "  "),
                                             &NavigationResponse::default(),
                                             &mut data);
        match reply {
            Some(FlowResponse::Response(WizardResponse::Page(page))) => {
                assert_eq!(page.missing, ["email"]);
                assert_eq!(page.fields, ["email", "newsletter"]);
            }
            _ => panic!("expected a page"),
        }
    }

    #[test]
    fn next_with_required_fields_navigates_forward_and_ignores_undeclared() {
        let mut data = WizardData::new();
        let req = WizardRequest::next().with_field("email", "a@b.c").with_field("admin", true);
        let reply = account().handle_request(&req, &NavigationResponse::default(), &mut data);
        assert_eq!(reply, Some(FlowResponse::next()));
        assert_eq!(data.get("email"), Some(&json!("a@b.c")));
        assert!(!data.contains_key("admin"));
    }

    #[test]
    fn back_and_goto_are_navigation_intents() {
        let mut data = WizardData::new();
        let nav = NavigationResponse::default();
        assert_eq!(account().handle_request(&WizardRequest::back(), &nav, &mut data), Some(FlowResponse::back()));
        assert_eq!(account().handle_request(&WizardRequest::goto("%root%.plan"), &nav, &mut data),
                   Some(FlowResponse::direct("%root%.plan")));
    }

    #[test]
    fn skipping_clears_declared_fields() {
        let mut data = WizardData::new();
        data.insert("email".into(), json!("a@b.c"));
        data.insert("other".into(), json!(1));
        account().on_skipped(&WizardRequest::next(), &NavigationResponse::next(), &mut data);
        assert!(!data.contains_key("email"));
        assert!(data.contains_key("other"));
    }
}
