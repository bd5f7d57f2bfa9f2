//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output that only shows up with `--verbose`
//!
//! # Example
//!
//! ```ignore
//! log!("background"; "detected background color: {}", color);
//! debug!("emit"; "resampling {}x{} -> {}", w, h, size);
//! ```

use owo_colors::{OwoColorize, Stream};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macros
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// `error` and `warning` lines go to stderr, everything else to stdout.
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    if is_diagnostic(&module_lower) {
        let mut stderr = stderr().lock();
        writeln!(stderr, "{prefix} {message}").ok();
        stderr.flush().ok();
    } else {
        let mut stdout = stdout().lock();
        writeln!(stdout, "{prefix} {message}").ok();
        stdout.flush().ok();
    }
}

#[inline]
fn is_diagnostic(module_lower: &str) -> bool {
    matches!(module_lower, "error" | "warning")
}

/// Apply color to a module prefix based on module type.
///
/// Colors follow the stream the line is written to, so `--color never`
/// and non-terminal output get the plain prefix.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "inspect" => prefix
            .if_supports_color(Stream::Stdout, |t| t.bright_blue().bold().to_string())
            .to_string(),
        "emit" | "done" => prefix
            .if_supports_color(Stream::Stdout, |t| t.bright_green().bold().to_string())
            .to_string(),
        "error" => prefix
            .if_supports_color(Stream::Stderr, |t| t.bright_red().bold().to_string())
            .to_string(),
        "warning" => prefix
            .if_supports_color(Stream::Stderr, |t| t.yellow().bold().to_string())
            .to_string(),
        _ => prefix
            .if_supports_color(Stream::Stdout, |t| t.bright_yellow().bold().to_string())
            .to_string(),
    }
}
