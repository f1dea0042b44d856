//! Navigation history for the content surface.
//!
//! `wry` exposes no back/forward list, so the surface keeps its own record
//! of committed main-frame URLs and drives back navigation from it. The same
//! record is what gets saved and restored across process recreation.

mod navigation;
mod state;

pub use navigation::{NavigationHistory, MAX_HISTORY_ENTRIES};
pub use state::{NavigationState, NAVIGATION_STATE_VERSION};
