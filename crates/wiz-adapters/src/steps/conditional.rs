use std::sync::Arc;

use wiz_core::{FlowResponse, NavigationResponse, Step};

use super::JsonStepRef;
use crate::condition::FieldCondition;
use crate::flow_types::{JsonFlow, WizardData, WizardRequest, WizardResponse};

/// Step elegible solo cuando `condition` se cumple; el resto se delega.
pub struct ConditionalStep {
    inner: JsonStepRef,
    condition: FieldCondition,
}

impl ConditionalStep {
    pub fn new<S>(inner: S, condition: FieldCondition) -> Self
        where S: Step<JsonFlow> + 'static
    {
        Self { inner: Arc::new(inner),
               condition }
    }

    pub fn condition(&self) -> &FieldCondition {
        &self.condition
    }
}

impl Step<JsonFlow> for ConditionalStep {
    fn handle_request(&self,
                      request: &WizardRequest,
                      navigation: &NavigationResponse,
                      data: &mut WizardData)
                      -> Option<FlowResponse<WizardResponse>> {
        self.inner.handle_request(request, navigation, data)
    }

    fn is_eligible_for_navigation(&self, navigation: &NavigationResponse, data: &WizardData) -> bool {
        self.condition.matches(data) && self.inner.is_eligible_for_navigation(navigation, data)
    }

    fn on_back(&self, request: &WizardRequest, data: &mut WizardData) {
        self.inner.on_back(request, data)
    }

    fn on_next(&self, request: &WizardRequest, data: &mut WizardData) {
        self.inner.on_next(request, data)
    }

    fn on_skipped(&self, request: &WizardRequest, navigation: &NavigationResponse, data: &mut WizardData) {
        self.inner.on_skipped(request, navigation, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::FormStep;
    use serde_json::json;

    #[test]
    fn eligibility_follows_the_condition() {
        let step = ConditionalStep::new(FormStep::new("Billing").required(["card"]),
                                        FieldCondition::new("plan", "pro"));
        let nav = NavigationResponse::next();
        let mut data = WizardData::new();
        assert!(!step.is_eligible_for_navigation(&nav, &data));
        data.insert("plan".into(), json!("pro"));
        assert!(step.is_eligible_for_navigation(&nav, &data));

        data.insert("card".into(), json!("4242"));
        step.on_skipped(&WizardRequest::next(), &nav, &mut data);
        assert!(!data.contains_key("card"));
    }
}
