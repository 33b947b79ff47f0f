use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use super::SessionStore;
use crate::errors::StoreError;
use crate::session::FlowSession;

/// Store de archivos: un `{id}.json` por sesión dentro de `dir`.
///
/// La escritura va a un archivo temporal que luego se renombra, de modo que
/// un lector nunca ve una sesión a medio escribir.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Abre (y crea si hace falta) el directorio de sesiones.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self, id: Uuid) -> Result<FlowSession, StoreError> {
        let raw = match fs::read_to_string(self.path_for(id)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StoreError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, session: &FlowSession) -> Result<(), StoreError> {
        let path = self.path_for(session.id);
        let tmp = path.with_extension("json.tmp");
        let raw = serde_json::to_vec_pretty(session)?;
        if let Err(e) = fs::write(&tmp, raw).and_then(|_| fs::rename(&tmp, &path)) {
            // no dejar el temporal huérfano en el directorio de sesiones
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!("saved session {} to {}", session.id, path.display());
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        match fs::remove_file(self.path_for(id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self) -> Result<Vec<Uuid>, StoreError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(id) = path.file_stem()
                                  .and_then(|s| s.to_str())
                                  .and_then(|s| Uuid::parse_str(s).ok())
            {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }
}
