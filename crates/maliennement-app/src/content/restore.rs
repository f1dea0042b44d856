//! State restoration bridge.
//!
//! Writes and reads the content surface's navigation state under a single
//! key of the save bundle. Restoring before the surface exists is skipped
//! without error, so the caller must mount first and restore second.

use maliennement_platform::SaveBundle;
use maliennement_webview::BrowserSurface;
use tracing::{debug, warn};

use super::host::ContentHost;

/// Bundle key holding the encoded navigation state.
pub const NAVIGATION_STATE_KEY: &str = "webview_navigation_state";

/// Save the surface's navigation state into `bundle`. No-op when the
/// surface is not ready or has nothing to save.
pub fn save_into<S: BrowserSurface>(host: &ContentHost<S>, bundle: &mut SaveBundle) {
    let Some(surface) = host.surface() else {
        return;
    };
    if let Some(blob) = surface.save_state() {
        bundle.put_string(NAVIGATION_STATE_KEY, blob);
    }
}

/// Apply the navigation state stored in `bundle`.
///
/// Returns `true` when a state was applied. A blob that fails to decode is
/// logged and ignored.
pub fn restore_from<S: BrowserSurface>(host: &mut ContentHost<S>, bundle: &SaveBundle) -> bool {
    let Some(surface) = host.surface_mut() else {
        debug!("restore skipped: content surface not mounted");
        return false;
    };
    let Some(blob) = bundle.get_string(NAVIGATION_STATE_KEY) else {
        return false;
    };
    match surface.restore_state(blob) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "ignoring saved navigation state");
            false
        }
    }
}
