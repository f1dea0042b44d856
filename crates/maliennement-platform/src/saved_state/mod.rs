//! Host save/restore bundle.
//!
//! The shell keeps process-recreation state in an opaque key/value bundle,
//! persisted as a single JSON file. Values are strings; callers encode
//! whatever they need (the content surface stores one base64 blob).

mod bundle;
mod store;

pub use bundle::SaveBundle;
pub use store::SavedStateStore;
