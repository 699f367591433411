//! Post-generation steps: repository initialization and dependency install.
//! Both return errors normally; deciding that they are non-fatal is up to the
//! caller.

use std::path::Path;
use std::process::{Command, Stdio};

use git2::Repository;
use log::debug;

use crate::config::PackageManager;
use crate::error::{Error, Result};

/// Runs external programs.
pub trait CommandRunner {
    /// Runs `program` with `args` inside `cwd` and waits for it to finish.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()>;
}

/// Spawns real processes with inherited stdio.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<()> {
        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        debug!("Running '{}' in '{}'", command, cwd.display());

        // No timeout: the child runs until it exits on its own.
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::ExternalProcessFailure {
                command: command.clone(),
                reason: format!("could not start '{program}': {e}"),
            })?;

        if !status.success() {
            return Err(Error::ExternalProcessFailure {
                command,
                reason: format!("exited with {status}"),
            });
        }

        Ok(())
    }
}

/// Creates an empty git repository in `project_dir`.
///
/// # Errors
/// * `Error::ExternalProcessFailure` for `git init` if libgit2 refuses
pub fn init_git_repository<P: AsRef<Path>>(project_dir: P) -> Result<()> {
    let project_dir = project_dir.as_ref();
    debug!("Initializing git repository in '{}'", project_dir.display());
    Repository::init(project_dir).map_err(|e| Error::ExternalProcessFailure {
        command: "git init".to_string(),
        reason: e.message().to_string(),
    })?;
    Ok(())
}

/// Runs `<package manager> install` in `project_dir`.
pub fn install_dependencies<P: AsRef<Path>>(
    runner: &dyn CommandRunner,
    project_dir: P,
    package_manager: PackageManager,
) -> Result<()> {
    runner.run(
        package_manager.program(),
        &["install"],
        project_dir.as_ref(),
    )
}
