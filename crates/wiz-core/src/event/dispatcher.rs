use log::trace;

use super::listener::{EligibilityFn, PostHandleFn, PreHandleFn};
use super::{AscertainStepEligibilityEvent, FlowEvent, FlowListener, FlowRequestEvent};
use crate::constants::{ASCERTAIN_STEP_ELIGIBILITY_EVENT, POST_HANDLE_REQUEST_EVENT, PRE_HANDLE_REQUEST_EVENT};
use crate::step::FlowTypes;

/// Registro ordenado de listeners. Los eventos se entregan en orden de
/// registro hasta que alguno detiene la propagación.
pub struct EventDispatcher<T: FlowTypes> {
    listeners: Vec<Box<dyn FlowListener<T>>>,
}

impl<T: FlowTypes> EventDispatcher<T> {
    pub fn new() -> Self {
        Self { listeners: vec![] }
    }

    pub fn with_listeners(listeners: Vec<Box<dyn FlowListener<T>>>) -> Self {
        Self { listeners }
    }

    pub fn add_listener<L>(&mut self, listener: L) -> &mut Self
        where L: FlowListener<T> + 'static
    {
        self.listeners.push(Box::new(listener));
        self
    }

    pub fn on_ascertain_step_eligibility<F>(&mut self, f: F) -> &mut Self
        where F: Fn(&mut AscertainStepEligibilityEvent<'_, T>) + Send + Sync + 'static
    {
        self.add_listener(EligibilityFn(f))
    }

    pub fn on_pre_handle_request<F>(&mut self, f: F) -> &mut Self
        where F: Fn(&mut FlowRequestEvent<'_, T>) + Send + Sync + 'static
    {
        self.add_listener(PreHandleFn(f))
    }

    pub fn on_post_handle_request<F>(&mut self, f: F) -> &mut Self
        where F: Fn(&mut FlowRequestEvent<'_, T>) + Send + Sync + 'static
    {
        self.add_listener(PostHandleFn(f))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn dispatch_ascertain_step_eligibility(&self, event: &mut AscertainStepEligibilityEvent<'_, T>) {
        trace!("dispatch {} step={}", ASCERTAIN_STEP_ELIGIBILITY_EVENT, event.step_name());
        for listener in self.listeners.iter() {
            if event.is_propagation_stopped() {
                break;
            }
            listener.on_ascertain_step_eligibility(event);
        }
    }

    pub fn dispatch_pre_handle_request(&self, event: &mut FlowRequestEvent<'_, T>) {
        trace!("dispatch {}", PRE_HANDLE_REQUEST_EVENT);
        for listener in self.listeners.iter() {
            if event.is_propagation_stopped() {
                break;
            }
            listener.on_pre_handle_request(event);
        }
    }

    pub fn dispatch_post_handle_request(&self, event: &mut FlowRequestEvent<'_, T>) {
        trace!("dispatch {}", POST_HANDLE_REQUEST_EVENT);
        for listener in self.listeners.iter() {
            if event.is_propagation_stopped() {
                break;
            }
            listener.on_post_handle_request(event);
        }
    }
}

impl<T: FlowTypes> Default for EventDispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}
