use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zero::error::{Error, Result};
use zero::ignore::{build_ignore_set, parse_ignore_file};
use zero::processor::{apply, materialize, FileOperation, Processor};
use zero::renderer::{PlaceholderRenderer, Substitutions};

fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

fn name_values() -> Substitutions {
    let mut values = Substitutions::new();
    values.insert("name".to_string(), "foo".to_string());
    values
}

fn render_into(template: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
    materialize(&PlaceholderRenderer::new(), template, dest, &name_values())
}

#[test]
fn test_substitution_in_text_files() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(
        template.path(),
        "README.md",
        b"# {{name}}\n{{name}} uses {{unknown}}\n",
    );
    write(
        template.path(),
        "src/deep/index.js",
        b"console.log('{{name}}');\n",
    );

    render_into(template.path(), output.path()).unwrap();

    assert_eq!(
        read(output.path(), "README.md"),
        "# foo\nfoo uses {{unknown}}\n"
    );
    assert_eq!(
        read(output.path(), "src/deep/index.js"),
        "console.log('foo');\n"
    );
}

#[test]
fn test_directory_structure_is_preserved() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "a.txt", b"plain");
    write(template.path(), "src/b.txt", b"plain b");
    write(template.path(), "src/nested/deeper/c.txt", b"plain c");
    fs::create_dir_all(template.path().join("empty/dir")).unwrap();

    let destination = output.path().join("project");
    render_into(template.path(), &destination).unwrap();

    assert!(destination.join("empty/dir").is_dir());
    assert!(!dir_diff::is_different(template.path(), &destination).unwrap());
}

#[test]
fn test_all_entries_are_copied_by_default() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), ".DS_Store", b"finder");
    write(template.path(), "Thumbs.db", b"explorer");
    write(template.path(), "notes.swp", b"vim");
    write(template.path(), "src/index.js", b"ok");

    let written = render_into(template.path(), output.path()).unwrap();

    assert_eq!(written.len(), 4);
    assert!(!dir_diff::is_different(template.path(), output.path()).unwrap());
}

#[test]
fn test_zeroignore_patterns_are_skipped() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(
        template.path(),
        ".zeroignore",
        b"# editor and OS files\n**/.DS_Store\n\n*.swp\n",
    );
    write(template.path(), ".DS_Store", b"junk");
    write(template.path(), "src/.DS_Store", b"junk");
    write(template.path(), "notes.swp", b"junk");
    write(template.path(), "src/index.js", b"ok");

    let written = render_into(template.path(), output.path()).unwrap();

    assert_eq!(written, vec![PathBuf::from("src/index.js")]);
    assert!(!output.path().join(".zeroignore").exists());
    assert!(!output.path().join(".DS_Store").exists());
    assert!(!output.path().join("src/.DS_Store").exists());
    assert!(!output.path().join("notes.swp").exists());
}

#[test]
fn test_invalid_zeroignore_pattern_fails() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), ".zeroignore", b"a[b\n");
    write(template.path(), "index.js", b"ok");

    let result = render_into(template.path(), output.path());

    assert!(matches!(result, Err(Error::IgnorePatternError(_))));
    assert!(!output.path().join("index.js").exists());
}

#[test]
fn test_ignore_set_patterns() {
    let ignored = build_ignore_set(&["**/node_modules/**"]).unwrap();
    assert!(ignored.is_match("node_modules/express/index.js"));
    assert!(ignored.is_match(".zeroignore"));
    assert!(!ignored.is_match(".DS_Store"));
    assert!(!ignored.is_match("src/index.js"));

    assert!(build_ignore_set(&["a[b"]).is_err());
}

#[test]
fn test_binary_files_are_copied_verbatim() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let mut binary = vec![0x89, b'P', b'N', b'G', 0x00];
    binary.extend_from_slice(b"{{name}}");
    write(template.path(), "public/logo.png", &binary);

    render_into(template.path(), output.path()).unwrap();

    let copied = fs::read(output.path().join("public/logo.png")).unwrap();
    assert_eq!(copied, binary);
}

#[test]
fn test_gitignore_is_renamed() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "_gitignore", b"node_modules/\n");
    write(template.path(), "packages/api/_gitignore", b"dist/\n");

    let written = render_into(template.path(), output.path()).unwrap();

    assert!(!output.path().join("_gitignore").exists());
    assert_eq!(read(output.path(), ".gitignore"), "node_modules/\n");
    assert!(output.path().join("packages/api/.gitignore").is_file());
    assert!(written.contains(&PathBuf::from(".gitignore")));
}

#[test]
fn test_existing_directories_are_reused() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "src/index.js", b"{{name}}");
    fs::create_dir_all(output.path().join("src")).unwrap();

    render_into(template.path(), output.path()).unwrap();

    assert_eq!(read(output.path(), "src/index.js"), "foo");
}

#[test]
fn test_partial_output_is_kept_on_failure() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "a.txt", b"{{name}}");
    write(template.path(), "b/c.txt", b"never written");
    write(output.path(), "b", b"a file where a directory should go");

    let result = render_into(template.path(), output.path());

    assert!(matches!(result, Err(Error::IoError(_))));
    assert_eq!(read(output.path(), "a.txt"), "foo");
    assert!(!output.path().join("b/c.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_are_followed() {
    use std::os::unix::fs::symlink;

    let shared = TempDir::new().unwrap();
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(shared.path(), "lib/util.js", b"// {{name}}\n");
    symlink(shared.path().join("lib"), template.path().join("lib")).unwrap();

    let written = render_into(template.path(), output.path()).unwrap();

    assert_eq!(written, vec![PathBuf::from("lib/util.js")]);
    assert_eq!(read(output.path(), "lib/util.js"), "// foo\n");
    let lib = fs::symlink_metadata(output.path().join("lib")).unwrap();
    assert!(lib.is_dir());
}

#[cfg(unix)]
#[test]
fn test_rendered_files_keep_their_mode() {
    use std::os::unix::fs::PermissionsExt;

    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "bin/start.sh", b"echo {{name}}\n");
    write(template.path(), "package.json", b"{}");
    let set_mode = |relative: &str, mode: u32| {
        let path = template.path().join(relative);
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    };
    set_mode("bin/start.sh", 0o755);
    set_mode("package.json", 0o444);

    render_into(template.path(), output.path()).unwrap();

    let mode = |relative: &str| {
        let metadata = fs::metadata(output.path().join(relative)).unwrap();
        metadata.permissions().mode() & 0o777
    };
    assert_eq!(read(output.path(), "bin/start.sh"), "echo foo\n");
    assert_eq!(mode("bin/start.sh"), 0o755);
    assert_eq!(mode("package.json"), 0o644);
}

#[test]
fn test_processor_does_not_write() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write(template.path(), "package.json", b"{\"name\":\"{{name}}\"}");

    let renderer = PlaceholderRenderer::new();
    let substitutions = name_values();
    let ignored = parse_ignore_file(template.path()).unwrap();
    let processor = Processor::new(
        &renderer,
        template.path(),
        output.path(),
        &substitutions,
        &ignored,
    );

    let result = processor
        .process(&template.path().join("package.json"))
        .unwrap();
    assert_eq!(
        result.operation,
        Some(FileOperation::Write {
            target: output.path().join("package.json"),
            content: "{\"name\":\"foo\"}".to_string(),
        })
    );
    assert!(!output.path().join("package.json").exists());

    apply(&result).unwrap();
    assert!(output.path().join("package.json").is_file());
}

#[test]
fn test_template_root_entry_is_skipped() {
    let template = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let renderer = PlaceholderRenderer::new();
    let substitutions = Substitutions::new();
    let ignored = parse_ignore_file(template.path()).unwrap();
    let processor = Processor::new(
        &renderer,
        template.path(),
        output.path(),
        &substitutions,
        &ignored,
    );

    let result = processor.process(template.path()).unwrap();
    assert!(result.operation.is_none());
}
