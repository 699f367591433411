//! Template entries excluded from materialization.
//! A template may carry a `.zeroignore` file at its root, one glob pattern per
//! line, similar to `.gitignore`. Without it every entry is copied.

use crate::constants::IGNORE_FILE;
use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Builds a glob set from `patterns`. The ignore file itself is always part of it.
///
/// # Errors
/// * `Error::IgnorePatternError` if a pattern does not compile
pub fn build_ignore_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let patterns = std::iter::once(IGNORE_FILE).chain(patterns.iter().map(AsRef::as_ref));

    for pattern in patterns {
        debug!("Ignoring template entries matching '{pattern}'");
        let glob = Glob::new(pattern)
            .map_err(|e| Error::IgnorePatternError(format!("'{pattern}': {e}")))?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| Error::IgnorePatternError(e.to_string()))
}

/// Reads `.zeroignore` from the template root and compiles its patterns.
///
/// # Notes
/// - A missing file yields a set that only matches the ignore file itself
/// - Blank lines and lines starting with `#` are skipped
///
/// # Example
/// ```ignore
/// # Contents of .zeroignore:
/// **/.DS_Store
/// *.swp
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(template_dir: P) -> Result<GlobSet> {
    let ignore_path = template_dir.as_ref().join(IGNORE_FILE);
    let patterns: Vec<String> = match read_to_string(&ignore_path) {
        Ok(contents) => contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect(),
        Err(_) => {
            debug!("{} does not exist", ignore_path.display());
            Vec::new()
        }
    };

    build_ignore_set(&patterns)
}
