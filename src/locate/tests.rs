use super::*;
use std::fs;

fn install_editor(root: &Path, engine: &str) -> PathBuf {
    let editor = root.join(editor_subpath(engine));
    fs::create_dir_all(editor.parent().unwrap()).unwrap();
    fs::write(&editor, b"MZ").unwrap();
    editor
}

#[test]
fn test_override_var_name() {
    assert_eq!(override_var("5.1"), "UE5.1_EDITOR_PATH");
}

#[test]
fn test_editor_subpath() {
    let expected: PathBuf = ["Epic Games", "UE_5.1", "Engine", "Binaries", "Win64", "UnrealEditor.exe"]
        .iter()
        .collect();
    assert_eq!(editor_subpath("5.1"), expected);
}

#[test]
fn test_env_override_wins_without_probing() {
    let dir = tempfile::tempdir().unwrap();
    install_editor(dir.path(), "5.1");
    let env = Environment::default()
        .with("UE5.1_EDITOR_PATH", "/nowhere/UnrealEditor.exe")
        .with("ProgramFiles", dir.path());
    let config = Config::default();

    let path = EditorLocator::new(&env, &config).locate("5.1").unwrap();
    assert_eq!(path, PathBuf::from("/nowhere/UnrealEditor.exe"));
}

#[test]
fn test_config_override_used_when_env_unset() {
    let env = Environment::default();
    let mut config = Config::default();
    config
        .editor
        .paths
        .insert("5.1".into(), PathBuf::from("/custom/UnrealEditor.exe"));

    let path = EditorLocator::new(&env, &config).locate("5.1").unwrap();
    assert_eq!(path, PathBuf::from("/custom/UnrealEditor.exe"));
}

#[test]
fn test_env_override_beats_config_override() {
    let env = Environment::default().with("UE5.1_EDITOR_PATH", "/env/UnrealEditor.exe");
    let mut config = Config::default();
    config
        .editor
        .paths
        .insert("5.1".into(), PathBuf::from("/config/UnrealEditor.exe"));

    let path = EditorLocator::new(&env, &config).locate("5.1").unwrap();
    assert_eq!(path, PathBuf::from("/env/UnrealEditor.exe"));
}

#[test]
fn test_finds_editor_in_second_program_files() {
    let x64 = tempfile::tempdir().unwrap();
    let x86 = tempfile::tempdir().unwrap();
    let editor = install_editor(x86.path(), "5.1");
    let env = Environment::default()
        .with("ProgramFiles", x64.path())
        .with("ProgramFiles(x86)", x86.path());
    let config = Config::default();

    let path = EditorLocator::new(&env, &config).locate("5.1").unwrap();
    assert_eq!(path, editor);
}

#[test]
fn test_config_roots_are_probed_first() {
    let custom = tempfile::tempdir().unwrap();
    let program_files = tempfile::tempdir().unwrap();
    let preferred = install_editor(custom.path(), "5.3");
    install_editor(program_files.path(), "5.3");
    let env = Environment::default().with("ProgramFiles", program_files.path());
    let mut config = Config::default();
    config.search.roots.push(custom.path().to_path_buf());

    let locator = EditorLocator::new(&env, &config);
    assert_eq!(
        locator.search_roots(),
        vec![custom.path().to_path_buf(), program_files.path().to_path_buf()]
    );
    assert_eq!(locator.locate("5.3").unwrap(), preferred);
}

#[test]
fn test_program_files_can_be_disabled() {
    let env = Environment::default().with("ProgramFiles", "/pf");
    let mut config = Config::default();
    config.search.program_files = false;

    assert!(EditorLocator::new(&env, &config).search_roots().is_empty());
}

#[test]
fn test_missing_editor_lists_probed_paths() {
    let x64 = tempfile::tempdir().unwrap();
    let x86 = tempfile::tempdir().unwrap();
    install_editor(x64.path(), "5.0");
    let env = Environment::default()
        .with("ProgramFiles", x64.path())
        .with("ProgramFiles(x86)", x86.path());
    let config = Config::default();

    let err = EditorLocator::new(&env, &config).locate("5.1").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("`UE5.1_EDITOR_PATH`"), "{message}");
    for root in [x64.path(), x86.path()] {
        let probed = root.join(editor_subpath("5.1"));
        assert!(message.contains(&probed.display().to_string()), "{message}");
    }
}

#[test]
fn test_missing_editor_without_roots() {
    let env = Environment::default();
    let config = Config::default();

    let err = EditorLocator::new(&env, &config).locate("5.1").unwrap_err();
    assert!(err.to_string().ends_with("Searched: (no search roots)"), "{err}");
}

#[test]
fn test_probe_returns_first_existing() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::write(&b, "").unwrap();
    fs::write(dir.path().join("c"), "").unwrap();

    assert_eq!(probe([a, b.clone(), dir.path().join("c")]), Ok(b));
}

#[test]
fn test_probe_reports_all_candidates() {
    let dir = tempfile::tempdir().unwrap();
    let candidates = vec![dir.path().join("x"), dir.path().join("y")];

    assert_eq!(probe(candidates.clone()), Err(candidates));
}
