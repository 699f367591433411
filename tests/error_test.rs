use std::io;

use zero::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::DestinationExists {
        path: "/tmp/my-app".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Folder '/tmp/my-app' already exists. Choose another project name or remove it."
    );

    let err = Error::TemplateNotFound {
        descriptor: "db-mysql/typescript".to_string(),
        path: "/t/db-mysql/typescript".to_string(),
        available: String::new(),
    };
    assert_eq!(
        err.to_string(),
        "Template 'db-mysql/typescript' not found at '/t/db-mysql/typescript'."
    );

    let err = Error::ExternalProcessFailure {
        command: "npm install".to_string(),
        reason: "exited with exit status: 1".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "'npm install' failed: exited with exit status: 1."
    );
}
