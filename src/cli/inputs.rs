use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{info, warn};

use crate::cli::CliError;

/// File name suffix of STAR final summary logs
pub const LOG_SUFFIX: &str = "Log.final.out";

/// Choose the reports to parse.
///
/// Explicit paths are used as given, in order. Otherwise every file in `dir`
/// whose name ends with [`LOG_SUFFIX`] is used, sorted by name.
///
/// # Errors
///
/// Returns `CliError::NoInputFiles` if the result would be empty.
pub fn resolve_inputs(explicit: Vec<PathBuf>, dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let inputs = if explicit.is_empty() {
        let found = find_logs(dir)?;
        if !found.is_empty() {
            info!(
                "No STAR log files specified; parsing {} file(s) ending in '{LOG_SUFFIX}' from {}",
                found.len(),
                dir.display()
            );
        }
        found
    } else {
        explicit
    };

    if inputs.is_empty() {
        return Err(CliError::NoInputFiles);
    }
    Ok(inputs)
}

/// Find STAR final logs directly inside `dir`
///
/// # Errors
///
/// Returns `CliError::Glob` if the search pattern cannot be built.
pub fn find_logs(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let pattern = format!(
        "{}/*{LOG_SUFFIX}",
        Pattern::escape(&dir.to_string_lossy())
    );

    // Hidden files (e.g. macOS "._" resource forks) are not reports
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut logs = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        match entry {
            Ok(path) if path.is_file() => logs.push(relative_to(path, dir)),
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable path {}: {e}", e.path().display()),
        }
    }
    logs.sort();
    Ok(logs)
}

/// Report paths found in the working directory by bare file name
fn relative_to(path: PathBuf, dir: &Path) -> PathBuf {
    if dir == Path::new(".") {
        path.strip_prefix(dir).map(Path::to_path_buf).unwrap_or(path)
    } else {
        path
    }
}
