//! Project name validation.

use crate::error::{Error, Result};

const NAME_RULE: &str = "project name can only contain lowercase letters, numbers, and hyphens";

/// Returns `true` for characters allowed in a project name: `[a-z0-9-]`.
fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

/// Checks a project name against `^[a-z0-9-]+$`.
///
/// # Errors
/// * `Error::InvalidName` if the name is empty or contains any other character
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "project name is required".to_string(),
        });
    }

    if let Some(bad) = name.chars().find(|c| !is_name_char(*c)) {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: format!("found '{bad}', {NAME_RULE}"),
        });
    }

    Ok(())
}
