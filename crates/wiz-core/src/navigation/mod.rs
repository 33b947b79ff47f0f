//! Tipos de valor de navegación.
//!
//! - `NavigationDirection`: BACK / NEXT / DIRECT.
//! - `NavigationResponse`: intención sin resolver (dirección y destino opcionales).
//! - `ResolvedNavigationResponse`: resultado de la resolución, siempre válido
//!   para el flujo que lo produjo.
//! - `NavigationIntent`: cualquiera de las dos formas, tal como la devuelve un step.

mod direction;
mod response;

pub use direction::NavigationDirection;
pub use response::{NavigationIntent, NavigationResponse, ResolvedNavigationResponse};
