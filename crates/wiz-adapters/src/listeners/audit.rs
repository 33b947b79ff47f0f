use log::{debug, info};
use wiz_core::{FlowEvent, FlowListener, FlowRequestEvent, FlowResponse, NavigationIntent};

use crate::flow_types::{JsonFlow, WizardIntent, WizardResponse};

/// Registra cada petición antes y después de invocar al step.
#[derive(Debug, Clone, Default)]
pub struct AuditListener {
    label: String,
}

impl AuditListener {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

fn intent_name(intent: &WizardIntent) -> String {
    match intent {
        WizardIntent::Show => "show".to_string(),
        WizardIntent::Back => "back".to_string(),
        WizardIntent::Next => "next".to_string(),
        WizardIntent::Goto(target) => format!("goto {}", target),
    }
}

fn describe(response: Option<&FlowResponse<WizardResponse>>) -> String {
    match response {
        None => "none".to_string(),
        Some(FlowResponse::Response(WizardResponse::Page(page))) => format!("page '{}'", page.title),
        Some(FlowResponse::Response(WizardResponse::Redirect { step, .. })) => format!("redirect {}", step),
        Some(FlowResponse::Navigation(NavigationIntent::Resolved(r))) => {
            format!("{} -> {}", r.direction(), r.target_step_name())
        }
        Some(FlowResponse::Navigation(NavigationIntent::Unresolved(n))) => {
            format!("{:?} -> {:?}", n.direction(), n.target_step_name())
        }
    }
}

impl FlowListener<JsonFlow> for AuditListener {
    fn on_pre_handle_request(&self, event: &mut FlowRequestEvent<'_, JsonFlow>) {
        info!("[{}] step={} intent={} fields={}",
              self.label,
              event.current_step_name().unwrap_or("-"),
              intent_name(&event.request().intent),
              event.request().fields.len());
    }

    fn on_post_handle_request(&self, event: &mut FlowRequestEvent<'_, JsonFlow>) {
        debug!("[{}] step={} response={}",
               self.label,
               event.current_step_name().unwrap_or("-"),
               describe(event.response()));
    }
}
