//! Observable UI state and the pure render step.

mod render;
mod store;

pub use render::{render, ContentLayer, Frame, SplashLayer, UiState};
pub use store::Store;
