//! Simple file-based logging for debugging
//!
//! The host launcher decides where the log lives; until `init` runs every
//! log call is a silent no-op so embedding the library costs nothing.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Default log location: `<data dir>/burrow/burrow.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("burrow").join("burrow.log"))
}

/// Initialize logging to a specific file
pub fn init(path: &Path) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            *guard = Some(file);
        }
    }

    log("=== Burrow Log Started ===");
}

/// Initialize logging under the user data directory
pub fn init_default() {
    if let Some(path) = default_log_path() {
        init(&path);
    }
}

/// Log a message to the file
pub fn log(msg: &str) {
    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {}", ts, msg);
            let _ = file.flush();
        }
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}
