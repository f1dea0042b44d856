mod ensure;
mod resolve;

pub use ensure::ensure_dirs;
pub use resolve::{config_dir, crash_report_dir, data_dir, log_dir, saved_state_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_dir_ends_with_app_name() {
        let path = config_dir().unwrap();
        assert!(
            path.ends_with("maliennement"),
            "config_dir should end with 'maliennement', got: {path:?}"
        );
    }

    #[test]
    fn data_dir_ends_with_app_name() {
        let path = data_dir().unwrap();
        assert!(
            path.ends_with("maliennement"),
            "data_dir should end with 'maliennement', got: {path:?}"
        );
    }

    #[test]
    fn saved_state_file_lives_in_data_dir() {
        let path = saved_state_file().unwrap();
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "saved_state.json");
        assert!(path.starts_with(data_dir().unwrap()));
    }

    #[test]
    fn crash_reports_nest_under_logs() {
        let crash = crash_report_dir().unwrap();
        let logs = log_dir().unwrap();
        assert!(crash.starts_with(&logs));
        assert_eq!(crash.file_name().unwrap().to_str().unwrap(), "crash-reports");
    }
}
