//! Template materialization.
//! Walks a template directory and mirrors it into the destination, rendering
//! placeholders in text files and copying binary files untouched.

use globset::GlobSet;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    constants::{BINARY_SNIFF_LEN, GITIGNORE_FILE, GITIGNORE_SENTINEL},
    error::{Error, Result},
    ignore::parse_ignore_file,
    renderer::{Substitutions, TemplateRenderer},
};

/// What has to happen to a single template entry.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOperation {
    /// Mirror a directory.
    CreateDir { target: PathBuf },
    /// Copy a binary file byte-for-byte.
    Copy { target: PathBuf },
    /// Write rendered text.
    Write { target: PathBuf, content: String },
}

/// Outcome of processing a template entry.
#[derive(Debug)]
pub struct ProcessResult {
    pub source: PathBuf,
    /// Path relative to the destination, after renaming.
    pub relative: PathBuf,
    /// `None` when the entry is skipped.
    pub operation: Option<FileOperation>,
}

/// Returns `true` when the content looks like text: valid UTF-8 and no NUL
/// byte in the first `BINARY_SNIFF_LEN` bytes.
pub fn is_text_content(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
    !head.contains(&0) && std::str::from_utf8(bytes).is_ok()
}

/// Maps a template-relative path to its destination-relative path.
/// `_gitignore` becomes `.gitignore`, at any depth.
pub fn resolve_target_name(relative: &Path) -> PathBuf {
    match relative.file_name().and_then(|n| n.to_str()) {
        Some(GITIGNORE_SENTINEL) => relative.with_file_name(GITIGNORE_FILE),
        _ => relative.to_path_buf(),
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(Error::IoError)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(Error::IoError)
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        ensure_dir(parent)?;
    }
    fs::copy(source, dest).map(|_| ()).map_err(Error::IoError)
}

/// Gives a rendered file the mode bits of its template file.
/// The owner keeps write access so the manifest can still be patched.
#[cfg(unix)]
fn copy_permissions(source: &Path, dest: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(source)?.permissions().mode() & 0o7777;
    fs::set_permissions(dest, fs::Permissions::from_mode(mode | 0o200))?;
    Ok(())
}

/// Only the read-only flag exists elsewhere, and it is not carried over.
#[cfg(not(unix))]
fn copy_permissions(_source: &Path, _dest: &Path) -> Result<()> {
    Ok(())
}

/// Decides what to do with each template entry.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    output_root: &'a Path,
    substitutions: &'a Substitutions,
    ignored: &'a GlobSet,
}

impl<'a> Processor<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        output_root: &'a Path,
        substitutions: &'a Substitutions,
        ignored: &'a GlobSet,
    ) -> Self {
        Self {
            renderer,
            template_root,
            output_root,
            substitutions,
            ignored,
        }
    }

    /// Processes one entry found under the template root.
    ///
    /// Text files are read and rendered here; nothing is written.
    pub fn process(&self, source: &Path) -> Result<ProcessResult> {
        let relative = source.strip_prefix(self.template_root).map_err(|_| {
            Error::IoError(std::io::Error::other(format!(
                "'{}' is outside of template '{}'",
                source.display(),
                self.template_root.display()
            )))
        })?;
        let target_relative = resolve_target_name(relative);
        let skip = |relative: &Path| ProcessResult {
            source: source.to_path_buf(),
            relative: relative.to_path_buf(),
            operation: None,
        };

        // The template root itself maps to the output root, created by the caller.
        if relative.as_os_str().is_empty() {
            return Ok(skip(relative));
        }

        if self.ignored.is_match(relative) {
            debug!("Skipping ignored entry '{}'", relative.display());
            return Ok(skip(relative));
        }

        let target = self.output_root.join(&target_relative);

        let operation = if source.is_dir() {
            FileOperation::CreateDir { target }
        } else {
            let bytes = fs::read(source).map_err(Error::IoError)?;
            if is_text_content(&bytes) {
                let text = String::from_utf8_lossy(&bytes);
                let content = self.renderer.render(&text, self.substitutions);
                debug!("Rendering '{}'", relative.display());
                FileOperation::Write { target, content }
            } else {
                debug!("Copying binary '{}'", relative.display());
                FileOperation::Copy { target }
            }
        };

        Ok(ProcessResult {
            source: source.to_path_buf(),
            relative: target_relative,
            operation: Some(operation),
        })
    }
}

/// Applies a processed entry to the filesystem.
pub fn apply(result: &ProcessResult) -> Result<()> {
    match &result.operation {
        Some(FileOperation::CreateDir { target }) => ensure_dir(target),
        Some(FileOperation::Copy { target }) => copy_file(&result.source, target),
        Some(FileOperation::Write { target, content }) => {
            write_file(target, content)?;
            copy_permissions(&result.source, target)
        }
        None => Ok(()),
    }
}

/// Copies `template_dir` into `output_dir`, rendering text files.
///
/// Every entry is copied unless the template lists it in its `.zeroignore`.
/// Symlinks are followed. Directories are created with "ensure exists"
/// semantics. The copy is not transactional: files written before an error
/// stay in place.
///
/// # Returns
/// * Destination-relative paths of the files written, in walk order
pub fn materialize(
    renderer: &dyn TemplateRenderer,
    template_dir: &Path,
    output_dir: &Path,
    substitutions: &Substitutions,
) -> Result<Vec<PathBuf>> {
    debug!(
        "Materializing '{}' into '{}'",
        template_dir.display(),
        output_dir.display()
    );
    let ignored = parse_ignore_file(template_dir)?;
    let processor = Processor::new(renderer, template_dir, output_dir, substitutions, &ignored);

    ensure_dir(output_dir)?;

    let mut written = Vec::new();
    for entry in WalkDir::new(template_dir)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let result = processor.process(entry.path())?;
        apply(&result)?;
        if matches!(
            result.operation,
            Some(FileOperation::Copy { .. } | FileOperation::Write { .. })
        ) {
            written.push(result.relative);
        }
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target_name() {
        assert_eq!(
            resolve_target_name(Path::new("_gitignore")),
            PathBuf::from(".gitignore")
        );
        assert_eq!(
            resolve_target_name(Path::new("nested/_gitignore")),
            PathBuf::from("nested/.gitignore")
        );
        assert_eq!(
            resolve_target_name(Path::new("src/_gitignore.ts")),
            PathBuf::from("src/_gitignore.ts")
        );
    }

    #[test]
    fn test_is_text_content() {
        assert!(is_text_content(b"{\"name\": \"{{name}}\"}"));
        assert!(is_text_content(b""));
        assert!(!is_text_content(&[0x89, b'P', b'N', b'G', 0x00, 0x1a]));
        assert!(!is_text_content(&[0xff, 0xfe, 0xfd]));
    }
}
