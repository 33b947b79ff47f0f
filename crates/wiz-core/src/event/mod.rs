//! Puntos de intercepción del motor: eventos, listeners y dispatcher.
//!
//! Rol en el flujo:
//! - `AscertainStepEligibilityEvent` se emite cada vez que el motor consulta
//!   la elegibilidad de un step; los listeners pueden vetarla o forzarla.
//! - `FlowRequestEvent` se emite antes y después de invocar al step actual;
//!   los listeners pueden sustituir o limpiar la respuesta.
//! - `EventDispatcher` mantiene la lista ordenada de `FlowListener` y detiene
//!   el recorrido cuando un listener corta la propagación.

mod dispatcher;
mod listener;
mod types;

pub use dispatcher::EventDispatcher;
pub use listener::FlowListener;
pub use types::{AscertainStepEligibilityEvent, FlowEvent, FlowRequestEvent};

pub use crate::constants::{ASCERTAIN_STEP_ELIGIBILITY_EVENT, POST_HANDLE_REQUEST_EVENT, PRE_HANDLE_REQUEST_EVENT};
