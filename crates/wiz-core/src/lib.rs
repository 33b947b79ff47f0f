//! wiz-core: motor de navegación de asistentes multi-paso.
//!
//! Un flujo es un árbol ordenado de steps que se aplana a una secuencia de
//! nombres completamente calificados (`raiz.grupo.step`). Sobre esa secuencia
//! el motor resuelve navegaciones BACK/NEXT/DIRECT respetando la elegibilidad
//! de cada step, dispara los hooks de los steps recorridos y delega la
//! persistencia del step actual en un `FlowHost`.
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod flow;
pub mod hashing;
pub mod navigation;
pub mod step;

pub use engine::{FlowHost, FlowManager};
pub use errors::{classify_error, ErrorClass, FlowError};
pub use event::{AscertainStepEligibilityEvent, EventDispatcher, FlowEvent, FlowListener, FlowRequestEvent};
pub use flow::{EligibilityGate, FlattenedFlow, NavigationResolver};
pub use navigation::{NavigationDirection, NavigationIntent, NavigationResponse, ResolvedNavigationResponse};
pub use step::{FlowResponse, FlowTypes, Step, StepCollection, StepEntry, StepRef};
