//! Condición simple sobre un campo de los datos.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::flow_types::WizardData;

/// `field == equals`. Un campo ausente nunca coincide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCondition {
    pub field: String,
    pub equals: Value,
}

impl FieldCondition {
    pub fn new(field: impl Into<String>, equals: impl Into<Value>) -> Self {
        Self { field: field.into(),
               equals: equals.into() }
    }

    pub fn matches(&self, data: &WizardData) -> bool {
        data.get(&self.field).map(|v| *v == self.equals).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_field_never_matches() {
        let cond = FieldCondition::new("plan", "pro");
        let mut data = WizardData::new();
        assert!(!cond.matches(&data));
        data.insert("plan".into(), json!("free"));
        assert!(!cond.matches(&data));
        data.insert("plan".into(), json!("pro"));
        assert!(cond.matches(&data));
    }

    #[test]
    fn null_can_be_matched_explicitly() {
        let cond = FieldCondition::new("coupon", Value::Null);
        let mut data = WizardData::new();
        assert!(!cond.matches(&data));
        data.insert("coupon".into(), Value::Null);
        assert!(cond.matches(&data));
    }
}
