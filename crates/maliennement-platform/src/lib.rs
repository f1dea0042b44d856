pub mod crash_report;
pub mod paths;
pub mod saved_state;

pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir, saved_state_file};
pub use saved_state::{SaveBundle, SavedStateStore};
