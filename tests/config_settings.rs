// tests/config_settings.rs

use std::error::Error;
use std::io::Write;
use std::path::Path;

use clap::Parser;
use tempfile::NamedTempFile;

use dropcatch::cli::CliArgs;
use dropcatch::config::{ConfigFile, DEFAULT_TOOL, ReceiveSettings, load_and_validate};
use dropcatch::errors::DropcatchError;
use dropcatch::types::{ConflictPolicy, ErrorPolicy, ReceiveMode};

type TestResult = Result<(), Box<dyn Error>>;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

fn args(extra: &[&str]) -> CliArgs {
    CliArgs::parse_from(std::iter::once("dropcatch").chain(extra.iter().copied()))
}

#[test]
fn full_receive_section_loads() -> TestResult {
    let file = config_file(
        r#"
[receive]
dir = "/srv/drops"
conflict = "overwrite"
mode = "loop"
verbose = true
tool = "/usr/local/bin/tailscale"
list_after_cycle = false
exit_on_error = true
max_cycles = 3
"#,
    );

    let cfg = load_and_validate(file.path())?;
    let r = &cfg.receive;
    assert_eq!(r.dir.as_deref(), Some("/srv/drops"));
    assert_eq!(r.conflict, Some(ConflictPolicy::Overwrite));
    assert_eq!(r.mode, Some(ReceiveMode::Loop));
    assert_eq!(r.verbose, Some(true));
    assert_eq!(r.tool.as_deref(), Some("/usr/local/bin/tailscale"));
    assert_eq!(r.list_after_cycle, Some(false));
    assert_eq!(r.exit_on_error, Some(true));
    assert_eq!(r.max_cycles, Some(3));
    Ok(())
}

#[test]
fn empty_file_is_a_valid_config() -> TestResult {
    let file = config_file("");
    let cfg = load_and_validate(file.path())?;
    assert!(cfg.receive.dir.is_none());
    assert!(cfg.receive.conflict.is_none());
    Ok(())
}

#[test]
fn unknown_conflict_value_is_a_toml_error() {
    let file = config_file("[receive]\nconflict = \"merge\"\n");

    match load_and_validate(file.path()) {
        Err(DropcatchError::TomlError(_)) => {}
        Err(e) => panic!("Expected TomlError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn zero_max_cycles_is_a_config_error() {
    let file = config_file("[receive]\nmax_cycles = 0\n");

    match load_and_validate(file.path()) {
        Err(DropcatchError::ConfigError(msg)) => assert!(msg.contains("max_cycles")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn blank_tool_is_a_config_error() {
    let file = config_file("[receive]\ntool = \"  \"\n");

    match load_and_validate(file.path()) {
        Err(DropcatchError::ConfigError(msg)) => assert!(msg.contains("tool")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_config_dir_falls_back_to_cwd() -> TestResult {
    let cwd = tempfile::tempdir()?;
    let file = config_file("[receive]\ndir = \"\"\n");
    let cfg = load_and_validate(file.path())?;

    let settings = ReceiveSettings::from_sources(&args(&[]), Some(&cfg), cwd.path())?;
    assert_eq!(settings.dir, cwd.path());
    Ok(())
}

#[test]
fn empty_dir_flag_falls_back_to_cwd() -> TestResult {
    let cwd = tempfile::tempdir()?;
    let settings = ReceiveSettings::from_sources(&args(&["--dir", ""]), None, cwd.path())?;
    assert_eq!(settings.dir, cwd.path());
    Ok(())
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(DropcatchError::IoError(_))));
}

#[test]
fn defaults_without_flags_or_config() -> TestResult {
    let cwd = tempfile::tempdir()?;
    let settings = ReceiveSettings::from_sources(&args(&[]), None, cwd.path())?;

    assert_eq!(settings.dir, cwd.path());
    assert_eq!(settings.conflict, ConflictPolicy::Rename);
    assert_eq!(settings.mode, ReceiveMode::Wait);
    assert_eq!(settings.error_policy, ErrorPolicy::Continue);
    assert_eq!(settings.tool, DEFAULT_TOOL);
    assert!(!settings.verbose);
    assert!(settings.list_after_cycle);
    assert_eq!(settings.max_cycles, None);
    Ok(())
}

#[test]
fn relative_dir_is_anchored_at_cwd() -> TestResult {
    let cwd = tempfile::tempdir()?;
    let settings =
        ReceiveSettings::from_sources(&args(&["--dir", "./inbox/../drops"]), None, cwd.path())?;
    assert_eq!(settings.dir, cwd.path().join("drops"));
    Ok(())
}

#[test]
fn config_values_apply_when_flags_are_absent() -> TestResult {
    let cwd = tempfile::tempdir()?;
    let file = config_file(
        r#"
[receive]
dir = "from-config"
conflict = "skip"
verbose = true
tool = "ts"
list_after_cycle = false
max_cycles = 4
"#,
    );
    let cfg: ConfigFile = load_and_validate(file.path())?;

    let settings = ReceiveSettings::from_sources(&args(&[]), Some(&cfg), cwd.path())?;

    assert_eq!(settings.dir, cwd.path().join("from-config"));
    assert_eq!(settings.conflict, ConflictPolicy::Skip);
    assert!(settings.verbose);
    assert_eq!(settings.tool, "ts");
    assert!(!settings.list_after_cycle);
    assert_eq!(settings.max_cycles, Some(4));
    Ok(())
}

#[test]
fn flags_override_config_values() -> TestResult {
    let cwd = tempfile::tempdir()?;
    let file = config_file(
        r#"
[receive]
dir = "from-config"
conflict = "skip"
mode = "loop"
tool = "ts"
max_cycles = 4
"#,
    );
    let cfg = load_and_validate(file.path())?;

    let settings = ReceiveSettings::from_sources(
        &args(&[
            "--dir",
            "from-cli",
            "--conflict",
            "overwrite",
            "--mode",
            "wait",
            "--tool",
            "other",
            "--once",
            "--no-list",
        ]),
        Some(&cfg),
        cwd.path(),
    )?;

    assert_eq!(settings.dir, cwd.path().join("from-cli"));
    assert_eq!(settings.conflict, ConflictPolicy::Overwrite);
    assert_eq!(settings.mode, ReceiveMode::Wait);
    assert_eq!(settings.tool, "other");
    assert_eq!(settings.max_cycles, Some(1));
    assert!(!settings.list_after_cycle);
    Ok(())
}

#[test]
fn error_policy_follows_mode_unless_forced() -> TestResult {
    let cwd = tempfile::tempdir()?;

    let wait = ReceiveSettings::from_sources(&args(&["--mode", "wait"]), None, cwd.path())?;
    assert_eq!(wait.error_policy, ErrorPolicy::Continue);

    let looping = ReceiveSettings::from_sources(&args(&["--mode", "loop"]), None, cwd.path())?;
    assert_eq!(looping.error_policy, ErrorPolicy::Exit);

    let forced =
        ReceiveSettings::from_sources(&args(&["--exit-on-error"]), None, cwd.path())?;
    assert_eq!(forced.mode, ReceiveMode::Wait);
    assert_eq!(forced.error_policy, ErrorPolicy::Exit);
    Ok(())
}

#[test]
fn blank_tool_flag_is_rejected() {
    let cwd = Path::new(env!("CARGO_MANIFEST_DIR"));
    let result = ReceiveSettings::from_sources(&args(&["--tool", ""]), None, cwd);
    assert!(matches!(result, Err(DropcatchError::ConfigError(_))));
}
