//! Template selection.
//! Maps a `GenerationConfig` to a template family and language variant, and
//! locates the matching directory under the templates root.

use crate::config::{Database, GenerationConfig};
use crate::constants::{BUNDLED_TEMPLATES_DIR, TEMPLATES_DIR_ENV};
use crate::error::{Error, Result};
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

/// Resolved identity of a template: `<family>/<language_variant>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub family: String,
    pub language_variant: String,
}

impl fmt::Display for TemplateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.family, self.language_variant)
    }
}

/// A single row of the family table: the rule name and the family it yields, if it applies.
type FamilyRule = (&'static str, fn(bool, Option<&Database>) -> Option<String>);

fn auth_with_database(auth: bool, database: Option<&Database>) -> Option<String> {
    database
        .filter(|_| auth)
        .map(|db| format!("auth-{}", db.key()))
}

fn auth_only(auth: bool, _: Option<&Database>) -> Option<String> {
    auth.then(|| "auth-enabled".to_string())
}

fn database_only(_: bool, database: Option<&Database>) -> Option<String> {
    database.map(|db| format!("db-{}", db.key()))
}

fn fallback(_: bool, _: Option<&Database>) -> Option<String> {
    Some("base".to_string())
}

/// Evaluated top to bottom, first match wins. The last rule always matches.
const FAMILY_RULES: [FamilyRule; 4] = [
    ("auth+database", auth_with_database),
    ("auth", auth_only),
    ("database", database_only),
    ("base", fallback),
];

/// Picks the template family for the given options.
pub fn template_family(auth: bool, database: Option<&Database>) -> String {
    for (rule, matches) in FAMILY_RULES {
        if let Some(family) = matches(auth, database) {
            debug!("Template family rule '{rule}' matched: {family}");
            return family;
        }
    }
    "base".to_string()
}

impl TemplateDescriptor {
    /// Derives the descriptor from the generation options. Total and deterministic.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            family: template_family(config.auth, config.database.as_ref()),
            language_variant: config.language.variant().to_string(),
        }
    }

    /// Location of this template under `templates_root`.
    pub fn path_in<P: AsRef<Path>>(&self, templates_root: P) -> PathBuf {
        templates_root
            .as_ref()
            .join(&self.family)
            .join(&self.language_variant)
    }
}

/// A descriptor together with the directory that holds its files.
#[derive(Debug, Clone)]
pub struct ResolvedTemplate {
    pub descriptor: TemplateDescriptor,
    pub path: PathBuf,
}

/// Resolves the template directory for `config`.
///
/// Only reads the filesystem; nothing is created or modified.
///
/// # Errors
/// * `Error::TemplateNotFound` if the resolved path is not an existing directory
pub fn resolve<P: AsRef<Path>>(
    config: &GenerationConfig,
    templates_root: P,
) -> Result<ResolvedTemplate> {
    let templates_root = templates_root.as_ref();
    let descriptor = TemplateDescriptor::from_config(config);
    let path = descriptor.path_in(templates_root);

    debug!("Resolved template '{descriptor}' to '{}'.", path.display());

    if !path.is_dir() {
        let available = available_templates(templates_root);
        let available = if available.is_empty() {
            String::new()
        } else {
            format!(" (available: {})", available.join(", "))
        };
        return Err(Error::TemplateNotFound {
            descriptor: descriptor.to_string(),
            path: path.display().to_string(),
            available,
        });
    }

    Ok(ResolvedTemplate { descriptor, path })
}

/// Lists the `<family>/<variant>` pairs present under `templates_root`, sorted.
/// An unreadable root yields an empty list.
pub fn available_templates<P: AsRef<Path>>(templates_root: P) -> Vec<String> {
    let mut found = Vec::new();
    let Ok(families) = std::fs::read_dir(templates_root.as_ref()) else {
        return found;
    };

    for family in families.flatten().filter(|e| e.path().is_dir()) {
        let Ok(variants) = std::fs::read_dir(family.path()) else {
            continue;
        };
        for variant in variants.flatten().filter(|e| e.path().is_dir()) {
            found.push(format!(
                "{}/{}",
                family.file_name().to_string_lossy(),
                variant.file_name().to_string_lossy()
            ));
        }
    }

    found.sort();
    found
}

/// Returns the templates root: the explicit override, then the
/// `ZERO_TEMPLATES_DIR` environment variable, then the bundled templates.
pub fn templates_root(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    match std::env::var_os(TEMPLATES_DIR_ENV) {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(BUNDLED_TEMPLATES_DIR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_display() {
        let descriptor = TemplateDescriptor {
            family: "auth-postgres".to_string(),
            language_variant: "typescript".to_string(),
        };
        assert_eq!(descriptor.to_string(), "auth-postgres/typescript");
        assert_eq!(
            descriptor.path_in("/templates"),
            PathBuf::from("/templates/auth-postgres/typescript")
        );
    }

    #[test]
    fn test_explicit_templates_root_wins() {
        let root = templates_root(Some(PathBuf::from("/custom")));
        assert_eq!(root, PathBuf::from("/custom"));
    }
}
