//! Back navigation bridge.

use maliennement_webview::BrowserSurface;
use tracing::{debug, warn};

use super::host::ContentHost;

/// What the host should do after a back action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// The surface stepped back; the action is consumed.
    NavigatedBack,
    /// Nothing to go back to: leave the app.
    Exit,
}

/// Step the content surface back one entry when it can, otherwise exit.
pub fn handle_back<S: BrowserSurface>(host: &mut ContentHost<S>) -> BackOutcome {
    let Some(surface) = host.surface_mut() else {
        debug!("back before content mount");
        return BackOutcome::Exit;
    };
    if !surface.can_go_back() {
        return BackOutcome::Exit;
    }
    if let Err(e) = surface.go_back() {
        warn!(error = %e, "back navigation failed");
    }
    BackOutcome::NavigatedBack
}
