//! Configuración de los stores desde variables de entorno.
//! `WIZFLOW_SESSION_DIR` y `WIZFLOW_STRICT_DEFINITION`, con `.env` opcional.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

use crate::errors::StoreError;
use crate::store::FileSessionStore;

pub const SESSION_DIR_VAR: &str = "WIZFLOW_SESSION_DIR";
pub const STRICT_DEFINITION_VAR: &str = "WIZFLOW_STRICT_DEFINITION";
pub const DEFAULT_SESSION_DIR: &str = ".wizflow/sessions";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub session_dir: PathBuf,
    /// Rechazar sesiones creadas con otra definición de flujo.
    pub strict_definition: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { session_dir: PathBuf::from(DEFAULT_SESSION_DIR),
               strict_definition: true }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_vars(env::var(SESSION_DIR_VAR).ok(), env::var(STRICT_DEFINITION_VAR).ok())
    }

    /// Valores crudos a configuración; los ausentes o inválidos toman el default.
    pub fn from_vars(session_dir: Option<String>, strict_definition: Option<String>) -> Self {
        let defaults = Self::default();
        let session_dir = session_dir.filter(|v| !v.trim().is_empty())
                                     .map(PathBuf::from)
                                     .unwrap_or(defaults.session_dir);
        let strict_definition = strict_definition.as_deref()
                                                 .and_then(parse_bool)
                                                 .unwrap_or(defaults.strict_definition);
        Self { session_dir,
               strict_definition }
    }

    pub fn open_file_store(&self) -> Result<FileSessionStore, StoreError> {
        FileSessionStore::open(&self.session_dir)
    }
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_or_invalid_values() {
        assert_eq!(StoreConfig::from_vars(None, None), StoreConfig::default());
        let cfg = StoreConfig::from_vars(Some("  ".into()), Some("maybe".into()));
        assert_eq!(cfg, StoreConfig::default());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = StoreConfig::from_vars(Some("/tmp/wiz".into()), Some("OFF".into()));
        assert_eq!(cfg.session_dir, PathBuf::from("/tmp/wiz"));
        assert!(!cfg.strict_definition);
        assert_eq!(parse_bool(" yes "), Some(true));
    }
}
