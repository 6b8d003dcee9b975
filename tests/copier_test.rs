use create_x402_agent_app::copier::copy_tree;
use create_x402_agent_app::exclude::ExclusionRules;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Lays out a small project tree with a few entries worth excluding.
fn make_source_tree(root: &Path) {
    fs::create_dir_all(root.join("client/src")).unwrap();
    fs::create_dir_all(root.join("node_modules/react")).unwrap();
    fs::create_dir_all(root.join("client/node_modules/vite")).unwrap();

    fs::write(root.join("package.json"), "{\"name\":\"template\"}").unwrap();
    fs::write(root.join("client/src/main.tsx"), "export {};").unwrap();
    fs::write(root.join("node_modules/react/index.js"), "module.exports = {};")
        .unwrap();
    fs::write(root.join("client/node_modules/vite/bin"), "#!").unwrap();
    fs::write(root.join(".env"), "SECRET=1").unwrap();
}

#[test]
fn test_excluded_paths_do_not_appear() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let dest = temp_dir.path().join("dest");
    make_source_tree(&source);

    let rules = ExclusionRules::new(["node_modules", ".env"]);
    copy_tree(&source, &dest, &rules).unwrap();

    assert!(!dest.join("node_modules").exists());
    assert!(!dest.join("client/node_modules").exists());
    assert!(!dest.join(".env").exists());

    // Everything else arrives with identical bytes
    assert_eq!(
        fs::read(source.join("package.json")).unwrap(),
        fs::read(dest.join("package.json")).unwrap()
    );
    assert_eq!(
        fs::read(source.join("client/src/main.tsx")).unwrap(),
        fs::read(dest.join("client/src/main.tsx")).unwrap()
    );
}

#[test]
fn test_empty_rule_set_copies_everything() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let dest = temp_dir.path().join("dest");
    make_source_tree(&source);

    copy_tree(&source, &dest, &ExclusionRules::empty()).unwrap();

    assert!(!dir_diff::is_different(&source, &dest).unwrap());
}

#[test]
fn test_copy_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");
    make_source_tree(&source);

    let rules = ExclusionRules::new(["node_modules"]);
    copy_tree(&source, &first, &rules).unwrap();
    copy_tree(&source, &second, &rules).unwrap();

    assert!(!dir_diff::is_different(&first, &second).unwrap());
}

#[test]
fn test_overwrites_existing_destination_files() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let dest = temp_dir.path().join("dest");
    make_source_tree(&source);

    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("package.json"), "stale").unwrap();

    copy_tree(&source, &dest, &ExclusionRules::empty()).unwrap();

    assert_eq!(
        fs::read_to_string(dest.join("package.json")).unwrap(),
        "{\"name\":\"template\"}"
    );
}

#[test]
fn test_missing_source_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("does-not-exist");
    let dest = temp_dir.path().join("dest");

    assert!(copy_tree(&source, &dest, &ExclusionRules::empty()).is_err());
}
