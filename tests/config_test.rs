use create_x402_agent_app::config::{validate_project_name, PackageManager};

#[test]
fn test_valid_project_names() {
    assert!(validate_project_name("my-agent_1").is_ok());
    assert!(validate_project_name("foo-bar").is_ok());
    assert!(validate_project_name("a").is_ok());
    assert!(validate_project_name("0-_").is_ok());
}

#[test]
fn test_invalid_project_names() {
    assert!(validate_project_name("").is_err());
    assert!(validate_project_name("My Agent!").is_err());
    assert!(validate_project_name("UPPER").is_err());
    assert!(validate_project_name("with.dot").is_err());
    assert!(validate_project_name("with space").is_err());
}

#[test]
fn test_rejection_messages() {
    assert_eq!(validate_project_name("").unwrap_err(), "Project name is required");
    assert_eq!(
        validate_project_name("My Agent!").unwrap_err(),
        "Project name can only contain lowercase letters, numbers, hyphens, and underscores"
    );
}

#[test]
fn test_package_manager_commands() {
    assert_eq!(PackageManager::Npm.command(), "npm");
    assert_eq!(PackageManager::Pnpm.command(), "pnpm");
    assert_eq!(PackageManager::Yarn.command(), "yarn");
}

#[test]
fn test_exec_prefix() {
    // npm delegates to npx for project-local binaries
    assert_eq!(PackageManager::Npm.exec_prefix(), "npx");
    assert_eq!(PackageManager::Pnpm.exec_prefix(), "pnpm");
    assert_eq!(PackageManager::Yarn.exec_prefix(), "yarn");
}

#[test]
fn test_default_package_manager_is_first() {
    assert_eq!(PackageManager::ALL[0], PackageManager::Npm);
}
