use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum CacheLoadError {
    #[error("lecture du fichier impossible: {0}")]
    Io(#[from] io::Error),
    #[error("contenu JSON invalide: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Cache persistant `Riot ID -> PUUID`, un objet JSON dans un fichier.
#[derive(Debug, Clone)]
pub struct PuuidStorage {
    path: PathBuf,
}

impl PuuidStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Un fichier absent ou illisible équivaut à un cache vide.
    pub fn load(&self) -> HashMap<String, String> {
        match self.try_load() {
            Ok(cache) => cache,
            Err(CacheLoadError::Io(e)) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cache PUUID illisible, démarrage à vide");
                HashMap::new()
            }
        }
    }

    fn try_load(&self) -> Result<HashMap<String, String>, CacheLoadError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Réécrit le fichier en entier.
    pub fn save(&self, cache: &HashMap<String, String>) -> io::Result<()> {
        let contents = serde_json::to_string(cache).map_err(io::Error::from)?;
        fs::write(&self.path, contents)
    }
}
