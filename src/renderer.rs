//! Placeholder rendering for template files.
//! Templates use `{{key}}` placeholders; keys missing from the substitutions
//! are left in the output untouched.
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Ordered placeholder values, keyed by placeholder name.
pub type Substitutions = IndexMap<String, String>;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}")
            .unwrap_or_else(|e| unreachable!("placeholder pattern is valid: {e}"))
    })
}

/// Replaces every `{{identifier}}` found in `substitutions`.
///
/// Unknown placeholders are kept verbatim, so a template can carry
/// `{{...}}` text meant for the generated project itself.
///
/// # Example
/// ```
/// use zero::renderer::{substitute, Substitutions};
///
/// let mut values = Substitutions::new();
/// values.insert("name".to_string(), "my-app".to_string());
/// assert_eq!(substitute("# {{name}} {{other}}", &values), "# my-app {{other}}");
/// ```
pub fn substitute(text: &str, substitutions: &Substitutions) -> String {
    placeholder_pattern()
        .replace_all(text, |caps: &Captures| match substitutions.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders template text with the given substitutions.
    fn render(&self, template: &str, substitutions: &Substitutions) -> String;
}

/// Renderer backed by [`substitute`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, substitutions: &Substitutions) -> String {
        substitute(template, substitutions)
    }
}
