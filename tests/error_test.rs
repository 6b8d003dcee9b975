use std::io;

use create_x402_agent_app::error::Error;

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
    let err = Error::ProjectExistsError { project_name: "foo-bar".to_string() };
    assert_eq!(err.to_string(), "Directory 'foo-bar' already exists.");

    let err = Error::CancelledError;
    assert_eq!(err.to_string(), "Project creation cancelled.");

    let err = Error::TemplateError("template path does not exist".to_string());
    assert_eq!(err.to_string(), "Template error: template path does not exist.");
}
