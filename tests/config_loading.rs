// tests/config_loading.rs

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use launchlog::config::{LaunchPolicy, load_and_validate, load_profiles};
use launchlog::errors::LaunchError;
use launchlog::types::PolicyKind;

type TestResult = Result<(), Box<dyn Error>>;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn both_policies_load_from_toml() -> TestResult {
    let file = config_file(
        r#"
[launcher.gold]
policy = "interactive"
working_dir = "/srv/gold"
venv = "venv"
script = "gold.py"
log = "gold.log"

[launcher.pepper]
policy = "unattended"
interpreter = "/usr/bin/python3"
script = "/srv/pepper/pepper4.py"
args = ["--commodities", "black-pepper,rubber,arecanut", "--auto-variants", "--output", "/srv/pepper/out.html"]
log = "/srv/pepper/pepper.log"
"#,
    );

    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg.len(), 2);

    let gold = cfg.get("gold").expect("gold must exist");
    assert_eq!(
        gold.policy,
        LaunchPolicy::Interactive {
            venv: PathBuf::from("venv"),
            interpreter: "python".to_string(),
        }
    );
    assert_eq!(gold.resolved_log_path(), PathBuf::from("/srv/gold/gold.log"));
    assert!(gold.args.is_empty());

    let pepper = cfg.get("pepper").expect("pepper must exist");
    assert_eq!(pepper.policy.kind(), PolicyKind::Unattended);
    assert_eq!(pepper.args.len(), 5);
    assert_eq!(pepper.working_dir, None);

    Ok(())
}

#[test]
fn interactive_without_venv_is_rejected() {
    let file = config_file(
        r#"
[launcher.gold]
policy = "interactive"
script = "gold.py"
log = "gold.log"
"#,
    );

    match load_and_validate(file.path()) {
        Err(LaunchError::ConfigError(msg)) => {
            assert!(msg.contains("gold"));
            assert!(msg.contains("venv"));
        }
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn unattended_requires_interpreter_and_rejects_venv() {
    let missing = config_file(
        r#"
[launcher.pepper]
policy = "unattended"
script = "pepper4.py"
log = "pepper.log"
"#,
    );
    match load_and_validate(missing.path()) {
        Err(LaunchError::ConfigError(msg)) => assert!(msg.contains("interpreter")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }

    let with_venv = config_file(
        r#"
[launcher.pepper]
policy = "unattended"
interpreter = "/usr/bin/python3"
venv = "venv"
script = "pepper4.py"
log = "pepper.log"
"#,
    );
    match load_and_validate(with_venv.path()) {
        Err(LaunchError::ConfigError(msg)) => assert!(msg.contains("venv")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn empty_config_is_rejected() {
    let file = config_file("");
    match load_and_validate(file.path()) {
        Err(LaunchError::ConfigError(msg)) => assert!(msg.contains("[launcher.<name>]")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn unknown_policy_fails_to_parse() {
    let file = config_file(
        r#"
[launcher.x]
policy = "scheduled"
script = "x.py"
log = "x.log"
"#,
    );
    assert!(matches!(
        load_and_validate(file.path()),
        Err(LaunchError::TomlError(_))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let result = load_and_validate("/definitely/not/here/Launcher.toml");
    assert!(matches!(result, Err(LaunchError::IoError(_))));
}

#[test]
fn no_path_falls_back_to_builtins() -> TestResult {
    let cfg = load_profiles(None)?;
    let names: Vec<&str> = cfg.profiles().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["gold", "pepper"]);
    Ok(())
}
