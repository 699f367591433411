//! zero creates backend projects from templates.
//! It picks a template directory from a few options (language, authentication,
//! database), copies it into a new folder with the project name filled in, and
//! optionally initializes git and installs dependencies.

/// Command-line interface module for the zero application
pub mod cli;

/// Generation options: language, auth, database, post-generation steps
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the zero application
pub mod error;

/// Project generation pipeline
pub mod generator;

/// Template-owned `.zeroignore` patterns
pub mod ignore;

/// `package.json` name patching
pub mod manifest;

/// Template copying with placeholder rendering
pub mod processor;

/// Git initialization and dependency installation
pub mod post_gen;

/// User input and interaction handling
pub mod prompt;

/// `{{key}}` placeholder substitution
pub mod renderer;

/// User-facing output
pub mod reporter;

/// Template family and language variant selection
pub mod selector;

/// Project name validation
pub mod validate;
