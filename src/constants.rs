//! Common constants used throughout zero.

/// Environment variable overriding the templates root directory
pub const TEMPLATES_DIR_ENV: &str = "ZERO_TEMPLATES_DIR";

/// Templates shipped with the crate
pub const BUNDLED_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// Package manifest patched with the project name
pub const MANIFEST_FILE: &str = "package.json";

/// Template-side name of the gitignore file and the name it is written as
pub const GITIGNORE_SENTINEL: &str = "_gitignore";
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Number of leading bytes inspected when deciding whether a file is binary
pub const BINARY_SNIFF_LEN: usize = 8000;

/// Optional file at the template root listing glob patterns not to copy
pub const IGNORE_FILE: &str = ".zeroignore";
