//! Errores del motor de navegación.
//!
//! Todas las operaciones públicas devuelven `Result<_, FlowError>`. El motor
//! no captura ni reintenta: cualquier error aborta la operación en curso y se
//! propaga al llamador. `classify_error` agrupa las variantes en las cuatro
//! categorías estables que usan los adaptadores para decidir cómo reportar.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::navigation::NavigationDirection;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum FlowError {
    #[error("the flow key '{0}' contains a dot, which is reserved for step paths")]
    FlowKeyContainsDot(String),
    #[error("the flow key '{0}' contains a percent sign, which is reserved for placeholders")]
    FlowKeyContainsPercent(String),
    #[error("the step key '{0}' contains a reserved character ('.' or '%')")]
    InvalidStepKey(String),
    #[error("the step key '{0}' already exists in this collection")]
    DuplicateStepKey(String),
    #[error("the flow should contain at least one step")]
    EmptyStepCollection,
    #[error("a step name can't be empty")]
    EmptyStepName,
    #[error("the step '{0}' doesn't exist in the current flow")]
    StepNotFound(String),
    #[error("no previous step is eligible")]
    NoPreviousStepEligible,
    #[error("no next step is eligible")]
    NoNextStepEligible,
    #[error("there is no current step and no steps are eligible")]
    NoEligibleStep,
    #[error("the step {0} isn't eligible for the current data")]
    TargetNotEligible(String),
    #[error("the navigation response couldn't be resolved")]
    UnresolvableNavigation,
    #[error("a direct navigation response needs a target step name")]
    MissingDirectTarget,
    #[error("a step range needs a target step name")]
    MissingRangeTarget,
    #[error("a {direction} range can't go from '{start}' to '{target}'")]
    InconsistentRange {
        direction: NavigationDirection,
        start: String,
        target: String,
    },
    #[error("step {0} should've returned a response")]
    MissingStepResponse(String),
    #[error("a post-handle request handler cleared the response")]
    ResponseCleared,
}

/// Categorías estables de error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorClass {
    /// Definición de flujo inválida (claves, colección vacía).
    Configuration,
    /// Nombre de step vacío o desconocido.
    NotFound,
    /// La navegación pedida no tiene destino válido.
    Navigation,
    /// Contrato roto por un step o un listener.
    Logic,
}

/// Clasifica un error del motor.
pub fn classify_error(err: &FlowError) -> ErrorClass {
    use FlowError::*;
    match err {
        FlowKeyContainsDot(_) | FlowKeyContainsPercent(_) | InvalidStepKey(_) | DuplicateStepKey(_)
        | EmptyStepCollection => ErrorClass::Configuration,
        EmptyStepName | StepNotFound(_) => ErrorClass::NotFound,
        NoPreviousStepEligible
        | NoNextStepEligible
        | NoEligibleStep
        | TargetNotEligible(_)
        | UnresolvableNavigation
        | MissingDirectTarget
        | MissingRangeTarget
        | InconsistentRange { .. } => ErrorClass::Navigation,
        MissingStepResponse(_) | ResponseCleared => ErrorClass::Logic,
    }
}

impl FlowError {
    #[inline]
    pub fn class(&self) -> ErrorClass {
        classify_error(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_step() {
        let err = FlowError::TargetNotEligible("wizard.step2".into());
        assert_eq!(err.to_string(), "the step wizard.step2 isn't eligible for the current data");
        let err = FlowError::InconsistentRange { direction: NavigationDirection::Back,
                                                 start: "w.a".into(),
                                                 target: "w.b".into() };
        assert_eq!(err.to_string(), "a back range can't go from 'w.a' to 'w.b'");
    }

    #[test]
    fn classification_groups_variants() {
        assert_eq!(classify_error(&FlowError::EmptyStepCollection), ErrorClass::Configuration);
        assert_eq!(classify_error(&FlowError::StepNotFound("x".into())), ErrorClass::NotFound);
        assert_eq!(classify_error(&FlowError::NoNextStepEligible), ErrorClass::Navigation);
        assert_eq!(classify_error(&FlowError::ResponseCleared), ErrorClass::Logic);
        assert_eq!(FlowError::MissingDirectTarget.class(), ErrorClass::Navigation);
    }
}
