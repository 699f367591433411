//! Command-line interface implementation for zero.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Database, Language, PackageManager};

/// Command-line arguments structure for zero.
#[derive(Parser, Debug)]
#[command(
    name = "zero",
    author,
    version,
    about = "Create backend projects in seconds",
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project
    Create(CreateArgs),
}

/// Arguments of `zero create`.
#[derive(clap::Args, Debug, Default)]
pub struct CreateArgs {
    /// Name of the project; also the directory it is created in
    #[arg(value_name = "PROJECT_NAME")]
    pub name: String,

    /// Use the authentication-foundation template
    #[arg(long)]
    pub auth: bool,

    /// Use a database-ready template (postgres, mongodb, sqlite)
    #[arg(long, value_name = "DATABASE")]
    pub db: Option<Database>,

    /// Language of the generated project; prompted for when omitted
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Initialize a git repository
    #[arg(long, overrides_with = "no_git")]
    pub git: bool,

    /// Do not initialize a git repository
    #[arg(long, overrides_with = "git")]
    pub no_git: bool,

    /// Install dependencies after generation
    #[arg(long, overrides_with = "no_install")]
    pub install: bool,

    /// Do not install dependencies
    #[arg(long, overrides_with = "install")]
    pub no_install: bool,

    /// Package manager used for installing dependencies
    #[arg(long, value_enum, default_value_t = PackageManager::Npm)]
    pub package_manager: PackageManager,

    /// Directory holding the templates [default: $ZERO_TEMPLATES_DIR or the bundled ones]
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Accept defaults instead of prompting for unset options
    #[arg(short, long)]
    pub yes: bool,
}

/// Resolves a `--flag` / `--no-flag` pair; `None` when neither was given.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl CreateArgs {
    pub fn git(&self) -> Option<bool> {
        flag_pair(self.git, self.no_git)
    }

    pub fn install(&self) -> Option<bool> {
        flag_pair(self.install, self.no_install)
    }
}

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Prints the top-level help followed by a usage example.
pub fn print_help_with_example() {
    let mut command = Args::command().help_template(HELP_TEMPLATE);
    // Nothing useful to do if stdout is gone.
    let _ = command.print_help();
    println!("Example:\n  zero create my-app");
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let mut command = Args::command();
                command.build();
                if let Some(create) = command.find_subcommand_mut("create") {
                    let _ = create.clone().help_template(HELP_TEMPLATE).print_help();
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
