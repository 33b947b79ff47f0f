//! WizFlow Rust Library
//!
//! Este crate arma la aplicación sobre el motor de navegación:
//! - `config`: configuración desde `.env` y entorno (`CONFIG`).
//! - `errors`: error de aplicación que agrupa motor y store.
//! - `logging`: subscriber de logs del binario.
//! - `wizard`: definición del asistente de alta.
//! - `service`: operaciones start/show/submit sobre un store de sesiones.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod errors;
pub mod logging;
pub mod service;
pub mod wizard;

pub use config::{AppConfig, CONFIG};
pub use errors::AppError;
pub use service::{describe_flow, parse_field, WizardService};
