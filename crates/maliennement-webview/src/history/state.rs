use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::surface::SurfaceError;

pub const NAVIGATION_STATE_VERSION: u32 = 1;

/// Serializable navigation state of the content surface.
///
/// Encoded as JSON wrapped in base64 so it travels as one opaque string
/// inside the host save bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    pub version: u32,
    pub entries: Vec<String>,
    pub index: usize,
    #[serde(default)]
    pub scroll_y: f64,
}

impl NavigationState {
    pub fn encode(&self) -> String {
        let json = serde_json::to_vec(self).unwrap_or_default();
        STANDARD.encode(json)
    }

    pub fn decode(blob: &str) -> Result<Self, SurfaceError> {
        let bytes = STANDARD
            .decode(blob.trim())
            .map_err(|e| SurfaceError::InvalidState(format!("not base64: {e}")))?;
        let state: Self = serde_json::from_slice(&bytes)
            .map_err(|e| SurfaceError::InvalidState(format!("not navigation state: {e}")))?;
        state.validate()?;
        Ok(state)
    }

    fn validate(&self) -> Result<(), SurfaceError> {
        if self.version != NAVIGATION_STATE_VERSION {
            return Err(SurfaceError::InvalidState(format!(
                "unsupported version {}",
                self.version
            )));
        }
        if self.entries.is_empty() {
            return Err(SurfaceError::InvalidState("no entries".into()));
        }
        if self.index >= self.entries.len() {
            return Err(SurfaceError::InvalidState(format!(
                "index {} out of bounds for {} entries",
                self.index,
                self.entries.len()
            )));
        }
        Ok(())
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }
}
