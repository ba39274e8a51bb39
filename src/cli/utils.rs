//! Shared utilities for CLI commands

use tabled::{Table, settings::Style};

use crate::cli::error::{CliError, CliResult};

/// Truncate a string with ellipsis if it exceeds max length
pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Render an empty string as `-`
pub fn or_dash(s: &str) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        s.to_string()
    }
}

/// Apply consistent table styling
pub fn apply_table_style(table: &mut Table) {
    table.with(Style::rounded());
}

/// Destructive commands run only with `--force`.
pub fn require_force(force: bool) -> CliResult<()> {
    if force {
        Ok(())
    } else {
        Err(CliError::InvalidArgument {
            message: "Delete operation requires --force flag. This action is destructive and cannot be undone.".to_string(),
        })
    }
}
