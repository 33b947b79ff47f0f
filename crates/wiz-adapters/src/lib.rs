//! wiz-adapters: colaboradores concretos del motor de navegación.
//!
//! Este crate provee:
//! - `JsonFlow`: tipos de petición/respuesta/datos basados en JSON.
//! - `SessionHost`: un `FlowHost` respaldado por una `FlowSession`.
//! - Steps reutilizables (`FormStep`, `ConditionalStep`, `SummaryStep`) y
//!   listeners (`FieldGateListener`, `AuditListener`).
//! - Stores de sesiones (memoria y archivos JSON) y su configuración.

pub mod condition;
pub mod config;
pub mod errors;
pub mod flow_types;
pub mod host;
pub mod listeners;
pub mod session;
pub mod steps;
pub mod store;

pub use condition::FieldCondition;
pub use config::StoreConfig;
pub use errors::StoreError;
pub use flow_types::{JsonFlow, WizardData, WizardIntent, WizardPage, WizardRequest, WizardResponse};
pub use host::SessionHost;
pub use listeners::{AuditListener, FieldGateListener};
pub use session::FlowSession;
pub use steps::{ConditionalStep, FormStep, SummaryStep};
pub use store::{FileSessionStore, InMemorySessionStore, SessionStore};
