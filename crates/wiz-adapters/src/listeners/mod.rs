//! Listeners reutilizables para flujos JSON.

mod audit;
mod field_gate;

pub use audit::AuditListener;
pub use field_gate::FieldGateListener;
