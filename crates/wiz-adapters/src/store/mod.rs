//! Stores de sesiones.
//!
//! Rol en el flujo:
//! - El llamador carga la sesión, construye un `SessionHost`, procesa la
//!   petición con el `FlowManager` y guarda la sesión resultante.
//! - `load_for_definition` valida que la sesión pertenezca al flujo y a la
//!   definición vigente antes de usarla.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;

use log::warn;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::session::FlowSession;

/// Trait para stores de sesiones.
pub trait SessionStore: Send + Sync {
    fn load(&self, id: Uuid) -> Result<FlowSession, StoreError>;

    /// Inserta o reemplaza.
    fn save(&self, session: &FlowSession) -> Result<(), StoreError>;

    /// `true` si existía.
    fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Ids almacenados, ordenados.
    fn list(&self) -> Result<Vec<Uuid>, StoreError>;

    /// Carga una sesión comprobando flujo y definición.
    ///
    /// Con `strict` una definición distinta es un error; sin él la sesión
    /// pierde su posición y adopta la definición actual.
    fn load_for_definition(&self,
                           id: Uuid,
                           flow_key: &str,
                           definition_hash: &str,
                           strict: bool)
                           -> Result<FlowSession, StoreError> {
        let mut session = self.load(id)?;
        if session.flow_key != flow_key {
            return Err(StoreError::FlowMismatch { id,
                                                  found: session.flow_key,
                                                  expected: flow_key.to_string() });
        }
        if session.definition_hash != definition_hash {
            if strict {
                return Err(StoreError::StaleDefinition { id,
                                                         stored: session.definition_hash,
                                                         expected: definition_hash.to_string() });
            }
            warn!("session {} has a stale definition, discarding its position", id);
            session.reset_position(definition_hash);
        }
        Ok(session)
    }
}
