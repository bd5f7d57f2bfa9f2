//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/assets/   ← start
/// /home/user/site/faviconize.toml   ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Expand `~` and resolve relative paths against `base`.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = PathBuf::from(expanded);
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}

// ============================================================================
// tests
// ============================================================================
