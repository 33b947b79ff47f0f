//! Steps y árbol de colecciones.
//!
//! Un step es una pantalla del asistente: recibe la petición, la navegación
//! resuelta actual y los datos del flujo, y devuelve una respuesta terminal o
//! una intención de navegación. Este módulo define:
//! - `FlowTypes`: los tipos concretos de petición, respuesta y datos.
//! - `Step`: interfaz usada por el motor (con hooks opcionales).
//! - `StepCollection` / `StepEntry`: árbol ordenado de steps y subcolecciones.
//! - `FlowResponse`: lo que devuelve un step o un listener.

mod collection;
pub mod definition;
mod reply;

pub use collection::{StepCollection, StepEntry};
pub use definition::{FlowTypes, Step, StepRef};
pub use reply::FlowResponse;
