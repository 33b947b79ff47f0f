use super::{AscertainStepEligibilityEvent, FlowRequestEvent};
use crate::step::FlowTypes;

/// Listener de los puntos de intercepción del motor.
///
/// Todos los métodos tienen implementación vacía: cada listener sobrescribe
/// solo los eventos que le interesan.
pub trait FlowListener<T: FlowTypes>: Send + Sync {
    fn on_ascertain_step_eligibility(&self, _event: &mut AscertainStepEligibilityEvent<'_, T>) {}

    fn on_pre_handle_request(&self, _event: &mut FlowRequestEvent<'_, T>) {}

    fn on_post_handle_request(&self, _event: &mut FlowRequestEvent<'_, T>) {}
}

// Adaptadores de closures, uno por evento.

pub(crate) struct EligibilityFn<F>(pub(crate) F);

impl<T, F> FlowListener<T> for EligibilityFn<F>
    where T: FlowTypes,
          F: Fn(&mut AscertainStepEligibilityEvent<'_, T>) + Send + Sync
{
    fn on_ascertain_step_eligibility(&self, event: &mut AscertainStepEligibilityEvent<'_, T>) {
        (self.0)(event)
    }
}

pub(crate) struct PreHandleFn<F>(pub(crate) F);

impl<T, F> FlowListener<T> for PreHandleFn<F>
    where T: FlowTypes,
          F: Fn(&mut FlowRequestEvent<'_, T>) + Send + Sync
{
    fn on_pre_handle_request(&self, event: &mut FlowRequestEvent<'_, T>) {
        (self.0)(event)
    }
}

pub(crate) struct PostHandleFn<F>(pub(crate) F);

impl<T, F> FlowListener<T> for PostHandleFn<F>
    where T: FlowTypes,
          F: Fn(&mut FlowRequestEvent<'_, T>) + Send + Sync
{
    fn on_post_handle_request(&self, event: &mut FlowRequestEvent<'_, T>) {
        (self.0)(event)
    }
}
