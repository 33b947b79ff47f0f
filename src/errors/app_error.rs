use thiserror::Error;
use wiz_adapters::StoreError;
use wiz_core::{ErrorClass, FlowError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de navegación: {0}")]
    Flow(#[from] FlowError),
    #[error("Error del store: {0}")]
    Store(#[from] StoreError),
    #[error("Campo inválido '{0}': se esperaba clave=valor")]
    InvalidField(String),
    #[error("Error de configuración: {0}")]
    Config(String),
}

impl AppError {
    /// Código de salida del binario según el origen del error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Flow(e) => match e.class() {
                ErrorClass::Configuration => 3,
                ErrorClass::NotFound => 4,
                ErrorClass::Navigation => 5,
                ErrorClass::Logic => 6,
            },
            AppError::Store(e) if e.is_session_state() => 4,
            AppError::Store(_) => 7,
            AppError::InvalidField(_) => 2,
            AppError::Config(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_variant_from() {
        let err: AppError = FlowError::NoNextStepEligible.into();
        assert!(err.to_string().starts_with("Error de navegación: "));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_invalid_field_format() {
        let err = AppError::InvalidField("plan".into());
        assert_eq!(err.to_string(), "Campo inválido 'plan': se esperaba clave=valor");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_not_found_maps_to_exit_code_4() {
        let err: AppError = FlowError::StepNotFound("x.y".into()).into();
        assert_eq!(err.exit_code(), 4);
        let err: AppError = StoreError::NotFound(uuid::Uuid::nil()).into();
        assert_eq!(err.exit_code(), 4);
    }
}
