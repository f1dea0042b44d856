use std::path::{Path, PathBuf};

use maliennement_common::PlatformError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::paths::saved_state_file;

use super::bundle::SaveBundle;

const SAVED_STATE_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct SavedStateFile {
    version: u32,
    saved_at: String,
    bundle: SaveBundle,
}

/// Reads and writes the save bundle file.
#[derive(Debug, Clone)]
pub struct SavedStateStore {
    path: PathBuf,
}

impl SavedStateStore {
    /// Store backed by an explicit file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location (`saved_state_file()`).
    pub fn default_location() -> Result<Self, PlatformError> {
        Ok(Self::at(saved_state_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the last saved bundle. A missing file is `Ok(None)`.
    pub fn load(&self) -> Result<Option<SaveBundle>, PlatformError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PlatformError::SavedStateError(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        let file: SavedStateFile = serde_json::from_str(&content).map_err(|e| {
            PlatformError::SavedStateError(format!("failed to parse {}: {e}", self.path.display()))
        })?;

        if file.version != SAVED_STATE_VERSION {
            return Err(PlatformError::SavedStateError(format!(
                "unsupported saved state version {}",
                file.version
            )));
        }

        debug!(path = %self.path.display(), saved_at = %file.saved_at, "saved state loaded");
        Ok(Some(file.bundle))
    }

    /// Persist `bundle`, replacing any previous save.
    ///
    /// Writes to a sibling temp file first so a crash mid-write never leaves
    /// a truncated bundle behind.
    pub fn save(&self, bundle: &SaveBundle) -> Result<(), PlatformError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PlatformError::SavedStateError(format!(
                    "failed to create {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let file = SavedStateFile {
            version: SAVED_STATE_VERSION,
            saved_at: chrono::Utc::now().to_rfc3339(),
            bundle: bundle.clone(),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| PlatformError::SavedStateError(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .and_then(|()| std::fs::rename(&tmp, &self.path))
            .map_err(|e| {
                PlatformError::SavedStateError(format!(
                    "failed to write {}: {e}",
                    self.path.display()
                ))
            })?;

        info!(path = %self.path.display(), entries = bundle.len(), "saved state written");
        Ok(())
    }

    /// Remove the saved bundle. Missing files are fine.
    pub fn clear(&self) -> Result<(), PlatformError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "saved state cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PlatformError::SavedStateError(format!(
                "failed to remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}
