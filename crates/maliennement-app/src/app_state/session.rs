//! Saved navigation state across restarts.
//!
//! The desktop stand-in for a platform save bundle: the lifecycle
//! dispatcher fills a [`SaveBundle`] that is written to disk on suspend and
//! on close, and read back right after the content surface is mounted.
//! Leaving through back with no history counts as finishing, which clears
//! the file.

use maliennement_common::PlatformError;
use maliennement_platform::{SaveBundle, SavedStateStore};
use maliennement_webview::BrowserSurface;

use crate::content::ContentHost;
use crate::lifecycle::LifecycleDispatcher;

use super::core::ShellApp;

/// Save through the dispatcher. Returns `false` without touching the file
/// when the host had nothing to save.
pub(super) fn save_session<S: BrowserSurface>(
    lifecycle: &mut LifecycleDispatcher<S>,
    host: &ContentHost<S>,
    store: &SavedStateStore,
) -> Result<bool, PlatformError> {
    let mut bundle = SaveBundle::new();
    lifecycle.save(host, &mut bundle);
    if bundle.is_empty() {
        return Ok(false);
    }
    store.save(&bundle)?;
    Ok(true)
}

/// Load the saved bundle, if any, and restore through the dispatcher.
pub(super) fn restore_session<S: BrowserSurface>(
    lifecycle: &mut LifecycleDispatcher<S>,
    host: &mut ContentHost<S>,
    store: &SavedStateStore,
) -> Result<bool, PlatformError> {
    match store.load()? {
        Some(bundle) => Ok(lifecycle.restore(host, &bundle)),
        None => Ok(false),
    }
}

impl ShellApp {
    pub(super) fn save_session(&mut self) {
        if !self.config.session.restore {
            return;
        }
        let Some(store) = &self.saved_state else {
            return;
        };
        match save_session(&mut self.lifecycle, &self.host, store) {
            Ok(true) => tracing::info!(path = %store.path().display(), "Navigation state saved"),
            Ok(false) => tracing::debug!("Nothing to save yet"),
            Err(e) => tracing::warn!(error = %e, "Failed to save navigation state"),
        }
    }

    pub(super) fn restore_session(&mut self) {
        if !self.config.session.restore {
            return;
        }
        let Some(store) = &self.saved_state else {
            return;
        };
        match restore_session(&mut self.lifecycle, &mut self.host, store) {
            Ok(true) => tracing::info!("Navigation state restored"),
            Ok(false) => {}
            Err(e) => tracing::warn!(error = %e, "Failed to read saved navigation state"),
        }
    }

    pub(super) fn clear_session(&self) {
        let Some(store) = &self.saved_state else {
            return;
        };
        if let Err(e) = store.clear() {
            tracing::warn!(error = %e, "Failed to clear saved navigation state");
        }
    }
}
