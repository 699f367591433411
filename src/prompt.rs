//! User input and interaction handling.
//! Options given on the command line are used as-is; the rest are asked for.

use crate::cli::CreateArgs;
use crate::config::{GenerationConfig, Language};
use crate::error::{Error, Result};
use dialoguer::{Confirm, Select};

pub const DEFAULT_INIT_GIT: bool = true;
pub const DEFAULT_INSTALL_DEPENDENCIES: bool = false;

/// Source of answers for options not given as flags.
pub trait Prompter {
    fn select_language(&self, default: Language) -> Result<Language>;

    fn confirm(&self, question: &str, default: bool) -> Result<bool>;
}

/// Asks on the terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select_language(&self, default: Language) -> Result<Language> {
        let choices = [Language::TypeScript, Language::JavaScript];
        let default_index = choices.iter().position(|l| *l == default).unwrap_or(0);

        let selection = Select::new()
            .with_prompt("TypeScript or JavaScript?")
            .default(default_index)
            .items(&choices)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))?;

        Ok(choices[selection])
    }

    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Answers every question with its default.
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn select_language(&self, default: Language) -> Result<Language> {
        Ok(default)
    }

    fn confirm(&self, _question: &str, default: bool) -> Result<bool> {
        Ok(default)
    }
}

/// Builds the generation options from flags, prompting for the missing ones.
pub fn collect_config(prompter: &dyn Prompter, args: &CreateArgs) -> Result<GenerationConfig> {
    let language = match args.language {
        Some(language) => language,
        None => prompter.select_language(Language::default())?,
    };
    let init_git = match args.git() {
        Some(value) => value,
        None => prompter.confirm("Initialize Git repository?", DEFAULT_INIT_GIT)?,
    };
    let install_dependencies = match args.install() {
        Some(value) => value,
        None => prompter.confirm(
            &format!("Install dependencies with {}?", args.package_manager),
            DEFAULT_INSTALL_DEPENDENCIES,
        )?,
    };

    Ok(GenerationConfig {
        language,
        auth: args.auth,
        database: args.db.clone(),
        init_git,
        install_dependencies,
        package_manager: args.package_manager,
    })
}
