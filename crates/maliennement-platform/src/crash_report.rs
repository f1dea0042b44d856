//! Panic crash reports.

use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

use crate::paths::crash_report_dir;

/// Write a JSON crash report for a panic into the crash report directory.
///
/// Runs inside a panic hook, so it never panics: every failure turns into
/// `None`.
pub fn write_crash_report(info: &PanicHookInfo) -> Option<PathBuf> {
    let dir = crash_report_dir().ok()?;
    let location = info
        .location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()));
    let backtrace = Backtrace::force_capture().to_string();
    write_report_in(&dir, &panic_message(info), location.as_deref(), &backtrace)
}

fn panic_message(info: &PanicHookInfo) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn write_report_in(
    dir: &Path,
    message: &str,
    location: Option<&str>,
    backtrace: &str,
) -> Option<PathBuf> {
    let now = chrono::Utc::now();
    let path = dir.join(format!("crash_{}.json", now.format("%Y%m%d_%H%M%S")));

    let report = serde_json::json!({
        "timestamp": now.to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "panic_message": message,
        "location": location,
        "backtrace": backtrace,
    });

    std::fs::create_dir_all(dir).ok()?;
    std::fs::write(&path, serde_json::to_string_pretty(&report).ok()?).ok()?;
    Some(path)
}
