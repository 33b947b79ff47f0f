//! Vista aplanada del flujo y algoritmos sobre ella.
//!
//! - `FlattenedFlow`: mapa ordenado nombre completo → step, con búsquedas de
//!   step previo/siguiente/primero elegible y extracción de rangos.
//! - `EligibilityGate`: consulta de elegibilidad (predicado nativo + listeners).
//! - `NavigationResolver`: convierte intenciones en navegaciones resueltas.

mod eligibility;
mod flattened;
mod resolver;

pub use eligibility::EligibilityGate;
pub use flattened::FlattenedFlow;
pub use resolver::NavigationResolver;
