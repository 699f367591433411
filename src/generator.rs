//! Project generation pipeline.
//!
//! Stages run in order and the first fatal error aborts the run:
//!
//! 1. validate the project name
//! 2. make sure the destination does not exist
//! 3. resolve the template directory
//! 4. create the destination
//! 5. materialize the template
//! 6. patch the manifest name
//! 7. initialize git (best effort)
//! 8. install dependencies (best effort)
//! 9. report the summary
//!
//! Nothing touches the disk before stage 4. Nothing is rolled back when a
//! later stage fails.

use cruet::Inflector;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::GenerationConfig;
use crate::constants::MANIFEST_FILE;
use crate::error::{Error, Result};
use crate::manifest::patch_name;
use crate::post_gen::{init_git_repository, install_dependencies, CommandRunner};
use crate::processor::materialize;
use crate::renderer::{PlaceholderRenderer, Substitutions};
use crate::reporter::Reporter;
use crate::selector::{resolve, TemplateDescriptor};
use crate::validate::validate_project_name;

const GIT_SETUP_COMMAND: &str = "git init && git add . && git commit -m \"Initial commit\"";

/// Name and location of the project being generated.
#[derive(Debug, Clone)]
pub struct ProjectTarget {
    pub name: String,
    pub path: PathBuf,
}

impl ProjectTarget {
    /// Target named `name` inside `parent`.
    pub fn in_dir<P: AsRef<Path>>(parent: P, name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: parent.as_ref().join(name),
        }
    }

    /// Target named `name` inside the current working directory.
    pub fn in_current_dir(name: &str) -> Result<Self> {
        Ok(Self::in_dir(std::env::current_dir()?, name))
    }

    /// Fails with `Error::DestinationExists` if the path is already taken.
    pub fn ensure_absent(&self) -> Result<()> {
        if self.path.exists() {
            return Err(self.exists_error());
        }
        Ok(())
    }

    fn exists_error(&self) -> Error {
        Error::DestinationExists {
            path: self.path.display().to_string(),
        }
    }
}

/// Result of a best-effort step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Skipped,
    Done,
    Failed(String),
}

/// What a successful generation produced.
#[derive(Debug)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub descriptor: TemplateDescriptor,
    /// Files written, relative to `path`.
    pub files: Vec<PathBuf>,
    pub manifest_patched: bool,
    pub git: StepOutcome,
    pub install: StepOutcome,
}

/// Placeholder values made available to templates.
pub fn build_substitutions(name: &str, config: &GenerationConfig) -> Substitutions {
    let mut values = Substitutions::new();
    values.insert("name".to_string(), name.to_string());
    values.insert("title".to_string(), name.to_title_case());
    values.insert("language".to_string(), config.language.to_string());
    values.insert(
        "extension".to_string(),
        config.language.extension().to_string(),
    );
    values.insert(
        "database".to_string(),
        config
            .database
            .as_ref()
            .map(|db| db.key().to_string())
            .unwrap_or_default(),
    );
    values.insert("auth".to_string(), config.auth.to_string());
    values.insert(
        "packageManager".to_string(),
        config.package_manager.to_string(),
    );
    values
}

/// Runs the generation pipeline for one project.
pub struct Generator<'a> {
    config: &'a GenerationConfig,
    target: ProjectTarget,
    templates_root: PathBuf,
    reporter: &'a dyn Reporter,
    runner: &'a dyn CommandRunner,
}

impl<'a> Generator<'a> {
    pub fn new(
        config: &'a GenerationConfig,
        target: ProjectTarget,
        templates_root: PathBuf,
        reporter: &'a dyn Reporter,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            config,
            target,
            templates_root,
            reporter,
            runner,
        }
    }

    /// Generates the project.
    ///
    /// # Errors
    /// * `Error::InvalidName`, `Error::DestinationExists`, `Error::TemplateNotFound`
    ///   before anything is written
    /// * `Error::IoError`, `Error::ManifestError` while writing; partial output stays
    pub fn generate(&self) -> Result<GenerationReport> {
        debug!(
            "Generating '{}' with {}",
            self.target.name,
            serde_json::to_string(self.config).unwrap_or_else(|e| e.to_string())
        );

        validate_project_name(&self.target.name)?;
        self.target.ensure_absent()?;
        let template = resolve(self.config, &self.templates_root)?;
        self.reporter
            .info(&format!("Using template {}", template.descriptor));

        self.create_destination()?;
        self.reporter
            .success(&format!("Created project folder: {}", self.target.name));

        let substitutions = build_substitutions(&self.target.name, self.config);
        let files = materialize(
            &PlaceholderRenderer::new(),
            &template.path,
            &self.target.path,
            &substitutions,
        )?;
        for file in &files {
            self.reporter.file(&file.display().to_string());
        }

        let manifest_path = self.target.path.join(MANIFEST_FILE);
        let manifest_patched = patch_name(manifest_path, &self.target.name)?;

        let git = if self.config.init_git {
            self.best_effort("Initializing git repository", || {
                init_git_repository(&self.target.path)
            })
        } else {
            StepOutcome::Skipped
        };

        let install = if self.config.install_dependencies {
            let package_manager = self.config.package_manager;
            self.best_effort(
                &format!("Installing dependencies with {package_manager}"),
                || install_dependencies(self.runner, &self.target.path, package_manager),
            )
        } else {
            StepOutcome::Skipped
        };

        let report = GenerationReport {
            path: self.target.path.clone(),
            descriptor: template.descriptor,
            files,
            manifest_patched,
            git,
            install,
        };
        self.report_success(&report);
        Ok(report)
    }

    /// Exclusive creation: a directory appearing after the check still fails.
    fn create_destination(&self) -> Result<()> {
        if let Some(parent) = self.target.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::create_dir(&self.target.path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => self.target.exists_error(),
            _ => Error::IoError(e),
        })
    }

    /// Runs a step whose failure only produces a warning.
    fn best_effort<F>(&self, label: &str, step: F) -> StepOutcome
    where
        F: FnOnce() -> Result<()>,
    {
        self.reporter.info(&format!("{label}..."));
        match step() {
            Ok(()) => StepOutcome::Done,
            Err(e) => {
                self.reporter.warning(&format!("{label} failed: {e}"));
                StepOutcome::Failed(e.to_string())
            }
        }
    }

    fn report_success(&self, report: &GenerationReport) {
        let reporter = self.reporter;
        let config = self.config;
        let pm = config.package_manager;

        reporter.success("Project created successfully!");

        reporter.section("Summary");
        reporter.info(&format!("Template: {}", report.descriptor));
        reporter.info(&format!("Language: {}", config.language));
        let auth = if config.auth {
            "skeleton included"
        } else {
            "none"
        };
        reporter.info(&format!("Authentication: {auth}"));
        let database = config
            .database
            .as_ref()
            .map_or("none".to_string(), |db| db.to_string());
        reporter.info(&format!("Database: {database}"));

        reporter.section("Next steps");
        reporter.command(&format!("cd {}", self.target.name));
        if report.install != StepOutcome::Done {
            reporter.command(&format!("{pm} install"));
        }
        reporter.command(&format!("{pm} run dev"));
        reporter.info("Your API will be available at http://localhost:3000");

        if let StepOutcome::Failed(_) = report.git {
            reporter.warning(&format!("Git was not initialized, run: {GIT_SETUP_COMMAND}"));
        }
        if let StepOutcome::Failed(_) = report.install {
            reporter.warning(&format!("Dependencies were not installed, run: {pm} install"));
        }
    }
}
