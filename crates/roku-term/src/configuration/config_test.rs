use std::io::Write;
use std::sync::Mutex;

use tempfile::NamedTempFile;

use super::*;

// Config is a process-wide map; tests that load it must not interleave.
static TEST_LOCK: Mutex<()> = Mutex::new(());

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    return file;
}

#[tokio::test]
async fn test_load_reads_general_section() {
    let _guard = TEST_LOCK.lock().unwrap();
    let file = write_config(
        r#"
[general]
device-address = "192.168.1.50"
device-timeout-ms = 2500
"#,
    );

    Config::load(file.path().to_str().unwrap(), &[])
        .await
        .unwrap();

    assert_eq!(Config::get(ConfigKey::DeviceAddress), "192.168.1.50");
    assert_eq!(Config::get(ConfigKey::DeviceTimeoutMs), "2500");
    assert_eq!(Config::get(ConfigKey::LogLevel), "info");
}

#[tokio::test]
async fn test_cli_override_wins_over_file() {
    let _guard = TEST_LOCK.lock().unwrap();
    let file = write_config(
        r#"
[general]
device-address = "192.168.1.50"
"#,
    );

    Config::load(
        file.path().to_str().unwrap(),
        &[(ConfigKey::DeviceAddress, "10.0.0.7".to_string())],
    )
    .await
    .unwrap();

    assert_eq!(Config::get(ConfigKey::DeviceAddress), "10.0.0.7");
}

#[tokio::test]
async fn test_missing_general_section_fails() {
    let _guard = TEST_LOCK.lock().unwrap();
    let file = write_config(
        r#"
[keymap]
home = "j"
"#,
    );

    let res = Config::load(file.path().to_str().unwrap(), &[]).await;

    assert!(res.is_err());
}

#[tokio::test]
async fn test_missing_address_fails() {
    let _guard = TEST_LOCK.lock().unwrap();
    let file = write_config(
        r#"
[general]
device-timeout-ms = 2500
"#,
    );

    let res = Config::load(file.path().to_str().unwrap(), &[]).await;

    assert!(res.is_err());
}

#[tokio::test]
async fn test_keymap_overrides_parse() {
    let file = write_config(
        r#"
[general]
device-address = "192.168.1.50"

[keymap]
home = "j"
select = "space"
volume-up = "+"
"#,
    );

    let overrides = Config::load_keymap(file.path().to_str().unwrap())
        .await
        .unwrap();

    assert_eq!(overrides.len(), 3);
    assert!(overrides.contains(&(RemoteCommand::Home, Trigger::Char('j'))));
    assert!(overrides.contains(&(RemoteCommand::Select, Trigger::Char(' '))));
    assert!(overrides.contains(&(RemoteCommand::VolumeUp, Trigger::Char('+'))));
}

#[tokio::test]
async fn test_keymap_is_optional() {
    let file = write_config(
        r#"
[general]
device-address = "192.168.1.50"
"#,
    );

    let overrides = Config::load_keymap(file.path().to_str().unwrap())
        .await
        .unwrap();

    assert!(overrides.is_empty());
}

#[tokio::test]
async fn test_keymap_unknown_command_fails() {
    let file = write_config(
        r#"
[keymap]
warp-drive = "w"
"#,
    );

    let res = Config::load_keymap(file.path().to_str().unwrap()).await;

    assert!(res.is_err());
}

#[tokio::test]
async fn test_keymap_unusable_trigger_fails() {
    let file = write_config(
        r#"
[keymap]
home = "ctrl-alt-del"
"#,
    );

    let res = Config::load_keymap(file.path().to_str().unwrap()).await;

    assert!(res.is_err());
}

#[test]
fn test_default_config_path_is_under_config_dir() {
    let path = Config::default(ConfigKey::ConfigFile);
    assert!(path.ends_with("roku-term/config.toml"));
}
