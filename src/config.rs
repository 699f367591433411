//! Generation options for a new project.
//! A `GenerationConfig` is assembled once from flags and prompts and then
//! passed by reference through the whole pipeline.

use clap::ValueEnum;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Language flavor of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
pub enum Language {
    #[default]
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    #[value(name = "javascript", alias = "js")]
    JavaScript,
}

impl Language {
    /// Directory name of the template variant for this language.
    pub fn variant(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
        }
    }

    /// Source file extension used by the generated project.
    pub fn extension(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::TypeScript => write!(f, "TypeScript"),
            Language::JavaScript => write!(f, "JavaScript"),
        }
    }
}

/// Database backend requested with `--db`.
///
/// Values that are not recognized are kept verbatim in `Other` and used as an
/// opaque template key, so an unknown backend surfaces as a missing template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Database {
    Postgres,
    Mongodb,
    Sqlite,
    Other(String),
}

impl Database {
    /// Key used in template family names (`db-<key>`, `auth-<key>`).
    pub fn key(&self) -> &str {
        match self {
            Database::Postgres => "postgres",
            Database::Mongodb => "mongodb",
            Database::Sqlite => "sqlite",
            Database::Other(key) => key,
        }
    }
}

impl FromStr for Database {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let db = match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Database::Postgres,
            "mongodb" | "mongo" => Database::Mongodb,
            "sqlite" | "sqlite3" => Database::Sqlite,
            _ => Database::Other(s.to_string()),
        };
        Ok(db)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Database::Postgres => write!(f, "PostgreSQL"),
            Database::Mongodb => write!(f, "MongoDB"),
            Database::Sqlite => write!(f, "SQLite"),
            Database::Other(key) => write!(f, "{key}"),
        }
    }
}

/// Package manager used to install dependencies and in the printed next steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Options that drive template selection and the post-generation steps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GenerationConfig {
    pub language: Language,
    pub auth: bool,
    pub database: Option<Database>,
    pub init_git: bool,
    pub install_dependencies: bool,
    pub package_manager: PackageManager,
}
