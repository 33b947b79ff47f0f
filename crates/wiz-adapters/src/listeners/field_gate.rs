use log::trace;
use wiz_core::{AscertainStepEligibilityEvent, FlowListener};

use crate::condition::FieldCondition;
use crate::flow_types::JsonFlow;

/// Veta la elegibilidad de un step (por nombre completo) salvo que los datos
/// cumplan `condition`.
#[derive(Debug, Clone)]
pub struct FieldGateListener {
    step_name: String,
    condition: FieldCondition,
}

impl FieldGateListener {
    pub fn new(step_name: impl Into<String>, condition: FieldCondition) -> Self {
        Self { step_name: step_name.into(),
               condition }
    }
}

impl FlowListener<JsonFlow> for FieldGateListener {
    fn on_ascertain_step_eligibility(&self, event: &mut AscertainStepEligibilityEvent<'_, JsonFlow>) {
        if event.step_name() != self.step_name {
            return;
        }
        let allowed = self.condition.matches(event.data());
        trace!("field gate step={} field={} allowed={}", self.step_name, self.condition.field, allowed);
        event.push_eligibility_test_result(allowed);
    }
}
