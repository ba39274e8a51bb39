//! Path resolution for kanban data.
//!
//! Order of precedence for the data directory:
//! 1. `KANBAN_HOME`
//! 2. `$XDG_DATA_HOME/kanban`
//! 3. `$HOME/.local/share/kanban`
//! 4. `./.kanban` when neither variable is set

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "kanban";
const DB_FILE: &str = "kanban.db";

/// Resolve the data directory from explicit variable values.
pub fn resolve_data_dir(
    kanban_home: Option<String>,
    xdg_data_home: Option<String>,
    home: Option<String>,
) -> PathBuf {
    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());

    if let Some(dir) = non_empty(kanban_home) {
        return PathBuf::from(dir);
    }
    if let Some(dir) = non_empty(xdg_data_home) {
        return PathBuf::from(dir).join(APP_DIR);
    }
    match non_empty(home) {
        Some(home) => PathBuf::from(home).join(".local/share").join(APP_DIR),
        None => PathBuf::from(".").join(format!(".{APP_DIR}")),
    }
}

/// Data directory for the current environment.
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(
        env::var("KANBAN_HOME").ok(),
        env::var("XDG_DATA_HOME").ok(),
        env::var("HOME").ok(),
    )
}

/// Default database file: `<data dir>/kanban.db`.
pub fn get_db_path() -> PathBuf {
    get_data_dir().join(DB_FILE)
}
