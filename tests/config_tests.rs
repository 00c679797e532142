//! Config file location and loading tests

mod common;

use common::Workspace;
use serial_test::serial;
use tea::config::Config;

#[test]
#[serial]
fn test_default_path_honours_env_var() {
    let workspace = Workspace::new();
    let expected = workspace.path().join("custom.yml");

    unsafe { std::env::set_var("TEA_CONFIG", &expected) };
    let path = Config::default_path().unwrap();
    unsafe { std::env::remove_var("TEA_CONFIG") };

    assert_eq!(path, expected);
}

#[test]
#[serial]
fn test_default_path_under_home() {
    unsafe { std::env::remove_var("TEA_CONFIG") };
    let path = Config::default_path().unwrap();
    assert!(path.ends_with(".tea/tea.yml"));
}

#[test]
fn test_load_hand_written_config() {
    let workspace = Workspace::new();
    std::fs::write(
        &workspace.config_path,
        r#"---
logins:
  - name: work
    url: https://gitea.example.com
    token: abc123
    user: me@example.com
    default: true
  - name: home
    url: http://localhost:3000
    token: def456
pulls:
  title_width: 40
  ticket_prefix: OPS
"#,
    )
    .unwrap();

    let config = Config::load(&workspace.config_path).unwrap();
    assert_eq!(config.logins.len(), 2);
    assert_eq!(config.default_login().unwrap().name, "work");
    assert_eq!(config.get_login("home").unwrap().user, "");
    assert_eq!(config.login_for_host("localhost").unwrap().name, "home");
    assert_eq!(config.pulls.title_width, 40);
    assert_eq!(config.pulls.name_width, 22);
    assert_eq!(config.pulls.ticket_prefix, "OPS");
}

#[test]
fn test_load_rejects_duplicate_logins() {
    let workspace = Workspace::new();
    std::fs::write(
        &workspace.config_path,
        "logins:\n  - {name: a, url: 'https://a', token: t}\n  - {name: a, url: 'https://b', token: t}\n",
    )
    .unwrap();

    let err = Config::load(&workspace.config_path).unwrap_err();
    assert!(format!("{:#}", err).contains("Duplicate login name"));
}

#[test]
fn test_load_reports_parse_errors() {
    let workspace = Workspace::new();
    std::fs::write(&workspace.config_path, "logins: [not, a: mapping").unwrap();

    let err = Config::load(&workspace.config_path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_read_skips_validation() {
    let workspace = Workspace::new();
    std::fs::write(
        &workspace.config_path,
        "logins:\n  - {name: a, url: 'https://a', token: t}\n  - {name: a, url: 'https://b', token: t}\n",
    )
    .unwrap();

    assert!(Config::load_or_default(&workspace.config_path).is_err());
    let config = Config::read_or_default(&workspace.config_path).unwrap();
    assert_eq!(config.logins.len(), 2);
}

#[test]
fn test_read_or_default_missing_file() {
    let workspace = Workspace::new();
    let config = Config::read_or_default(&workspace.config_path).unwrap();
    assert_eq!(config, Config::new());
}
