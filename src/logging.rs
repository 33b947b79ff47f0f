//! Inicialización de logs del binario.
//!
//! Los crates del motor escriben con la fachada `log`; el subscriber de
//! `tracing-subscriber` los recibe a través de su puente `tracing-log`.

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::errors::AppError;

/// Instala el subscriber global filtrado por `config.log_filter`, escribiendo a stderr.
pub fn init_logging(config: &AppConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(&config.log_filter).map_err(|e| {
                                                             AppError::Config(format!("WIZFLOW_LOG='{}': {}",
                                                                                      config.log_filter, e))
                                                         })?;
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .with_target(true)
                             .try_init()
                             .map_err(|e| AppError::Config(e.to_string()))
}
