//! Constantes del motor de navegación.
//!
//! Los nombres completamente calificados de un step tienen la forma
//! `{clave_raiz}.{segmento}(.{segmento})*`. El punto y el signo de porcentaje
//! quedan reservados: el primero separa segmentos y el segundo delimita los
//! placeholders que se sustituyen en los destinos directos.

/// Separador de segmentos dentro de un nombre de step.
pub const PATH_SEPARATOR: char = '.';

/// Delimitador de placeholders (`%root%`).
pub const PLACEHOLDER_MARKER: char = '%';

/// Placeholder reemplazado por la clave raíz del flujo en un destino directo.
pub const ROOT_PLACEHOLDER: &str = "%root%";

/// Destino directo que significa "permanecer en el step actual".
pub const STAY_TARGET: &str = ".";

/// Nombre estable del punto de intercepción de elegibilidad.
pub const ASCERTAIN_STEP_ELIGIBILITY_EVENT: &str = "flow_manager.ascertain_step_eligibility";

/// Nombre estable del punto de intercepción previo a la invocación del step.
pub const PRE_HANDLE_REQUEST_EVENT: &str = "flow_manager.pre_handle_request";

/// Nombre estable del punto de intercepción posterior a la invocación del step.
pub const POST_HANDLE_REQUEST_EVENT: &str = "flow_manager.post_handle_request";

/// Indica si `key` contiene alguno de los caracteres reservados.
pub fn contains_reserved_character(key: &str) -> bool {
    key.contains(PATH_SEPARATOR) || key.contains(PLACEHOLDER_MARKER)
}
