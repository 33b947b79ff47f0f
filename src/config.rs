//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`)
//! con el filtro de logs y la configuración del store de sesiones.
use once_cell::sync::Lazy;
use std::env;
use wiz_adapters::config::init_dotenv;
use wiz_adapters::StoreConfig;

pub const LOG_FILTER_VAR: &str = "WIZFLOW_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directiva `EnvFilter` para el subscriber de logs.
    pub log_filter: String,
    /// Directorio de sesiones y política ante definiciones obsoletas.
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        init_dotenv();
        Self::from_parts(env::var(LOG_FILTER_VAR).ok(), StoreConfig::from_env())
    }

    pub fn from_parts(log_filter: Option<String>, store: StoreConfig) -> Self {
        let log_filter = log_filter.map(|v| v.trim().to_string())
                                   .filter(|v| !v.is_empty())
                                   .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self { log_filter,
               store }
    }
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_info() {
        let cfg = AppConfig::from_parts(None, StoreConfig::default());
        assert_eq!(cfg.log_filter, "info");
        let cfg = AppConfig::from_parts(Some("  ".into()), StoreConfig::default());
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn explicit_log_filter_is_kept() {
        let cfg = AppConfig::from_parts(Some(" wiz_core=trace ".into()), StoreConfig::default());
        assert_eq!(cfg.log_filter, "wiz_core=trace");
    }
}
