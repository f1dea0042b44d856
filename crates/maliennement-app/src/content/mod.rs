//! Content host and the bridges that read its surface.
//!
//! [`ContentHost`] owns the single content surface together with the
//! loading and refreshing flags. The back and state restoration bridges
//! only go through [`ContentHost::is_ready`] and the [`BrowserSurface`]
//! seam, so all of this runs against an in-memory surface in tests.
//!
//! [`BrowserSurface`]: maliennement_webview::BrowserSurface

mod back;
mod host;
mod loading;
mod restore;

pub use back::{handle_back, BackOutcome};
pub use host::{ContentHost, DESTINATION_URL};
pub use loading::LoadingState;
pub use restore::{restore_from, save_into, NAVIGATION_STATE_KEY};
