//! Orquestador de peticiones.
//!
//! `FlowManager` combina el árbol de steps, la vista aplanada, el dispatcher
//! opcional y un `FlowHost` (la parte que sabe dónde vive el step actual y
//! cómo convertir una navegación resuelta en respuesta).

pub mod core;
pub mod host;

pub use core::FlowManager;
pub use host::FlowHost;
