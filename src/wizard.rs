//! Asistente de alta ("onboarding") que expone el binario.
//!
//! ```text
//! onboarding.profile           nombre y email
//! onboarding.company.details   solo si account_type == "business"
//! onboarding.company.billing   solo si account_type == "business" (vía listener)
//! onboarding.preferences       opcionales
//! onboarding.summary           confirmación
//! ```

use wiz_adapters::{AuditListener, ConditionalStep, FieldCondition, FieldGateListener, FormStep, JsonFlow,
                   SummaryStep};
use wiz_core::{EventDispatcher, FlattenedFlow, FlowError, FlowListener, StepCollection};

pub const FLOW_KEY: &str = "onboarding";
pub const ACCOUNT_TYPE_FIELD: &str = "account_type";
pub const BUSINESS_ACCOUNT: &str = "business";

fn business_only() -> FieldCondition {
    FieldCondition::new(ACCOUNT_TYPE_FIELD, BUSINESS_ACCOUNT)
}

/// Árbol de steps del asistente.
pub fn onboarding_steps() -> Result<StepCollection<JsonFlow>, FlowError> {
    let details = ConditionalStep::new(FormStep::new("Company details").required(["company_name"])
                                                                       .optional(["vat_id"]),
                                       business_only());
    // billing no declara condición propia: lo veta `FieldGateListener`.
    let company = StepCollection::<JsonFlow>::new().with_step("details", details)?
                                                   .with_step("billing",
                                                              FormStep::new("Billing").required(["billing_email"]))?;

    StepCollection::<JsonFlow>::new().with_step("profile",
                                                FormStep::new("Profile").required(["name", "email", ACCOUNT_TYPE_FIELD]))?
                                     .with_collection("company", company)?
                                     .with_step("preferences",
                                                FormStep::new("Preferences").optional(["newsletter", "language"]))?
                                     .with_step("summary", SummaryStep::new("Summary"))
}

/// Listeners del asistente, en orden de registro.
pub fn onboarding_dispatcher() -> EventDispatcher<JsonFlow> {
    let listeners: Vec<Box<dyn FlowListener<JsonFlow>>> =
        vec![Box::new(AuditListener::new(FLOW_KEY)),
             Box::new(FieldGateListener::new(format!("{}.company.billing", FLOW_KEY), business_only()))];
    EventDispatcher::with_listeners(listeners)
}

/// Hash de la definición vigente; las sesiones lo guardan al crearse.
pub fn definition_hash() -> Result<String, FlowError> {
    Ok(FlattenedFlow::compile(FLOW_KEY, &onboarding_steps()?).definition_hash())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onboarding_flattens_in_declaration_order() {
        let flow = FlattenedFlow::compile(FLOW_KEY, &onboarding_steps().unwrap());
        let keys: Vec<&str> = flow.keys().collect();
        assert_eq!(keys,
                   ["onboarding.profile",
                    "onboarding.company.details",
                    "onboarding.company.billing",
                    "onboarding.preferences",
                    "onboarding.summary"]);
    }

    #[test]
    fn definition_hash_is_stable() {
        assert_eq!(definition_hash().unwrap(), definition_hash().unwrap());
        assert_eq!(onboarding_dispatcher().len(), 2);
    }
}
