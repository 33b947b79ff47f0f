use log::trace;

use super::FlattenedFlow;
use crate::errors::FlowError;
use crate::event::{AscertainStepEligibilityEvent, EventDispatcher};
use crate::navigation::NavigationResponse;
use crate::step::FlowTypes;

/// Puerta de elegibilidad.
///
/// Pregunta al step por su predicado nativo y, si hay dispatcher, deja que
/// los listeners refinen el veredicto. Sin dispatcher el resultado es el del
/// step.
pub struct EligibilityGate<'a, T: FlowTypes> {
    dispatcher: Option<&'a EventDispatcher<T>>,
    current_step_name: Option<&'a str>,
}

impl<'a, T: FlowTypes> EligibilityGate<'a, T> {
    pub fn new(dispatcher: Option<&'a EventDispatcher<T>>, current_step_name: Option<&'a str>) -> Self {
        Self { dispatcher,
               current_step_name }
    }

    /// Solo predicados nativos.
    pub fn native() -> Self {
        Self::new(None, None)
    }

    pub fn is_step_eligible(&self,
                            flow: &FlattenedFlow<T>,
                            step_name: &str,
                            navigation: &NavigationResponse,
                            data: &T::Data)
                            -> Result<bool, FlowError> {
        let step = flow.get_step(step_name)?;
        let mut event = AscertainStepEligibilityEvent::new(self.current_step_name,
                                                           flow,
                                                           data,
                                                           navigation,
                                                           step.as_ref(),
                                                           step_name);
        if let Some(dispatcher) = self.dispatcher {
            dispatcher.dispatch_ascertain_step_eligibility(&mut event);
        }
        let eligible = event.is_eligible();
        trace!("eligibility step={} eligible={}", step_name, eligible);
        Ok(eligible)
    }
}

impl<T: FlowTypes> Clone for EligibilityGate<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: FlowTypes> Copy for EligibilityGate<'_, T> {}
