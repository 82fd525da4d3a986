use std::fs;
use talka::core::config::ClientSettings;
use tempfile::TempDir;

#[test]
fn test_settings_default() {
    let settings = ClientSettings::default();
    assert!(settings.controller.is_none());
    assert!(settings.username.is_none());
    assert!(!settings.is_logged_in());
}

#[test]
fn test_settings_roundtrip_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".talka").join("client.json");

    let settings = ClientSettings {
        controller: Some("http://talka.local".to_string()),
        username: Some("alice".to_string()),
    };
    settings.save_to(&path).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"controller\""));
    assert!(raw.contains("\"username\""));

    assert_eq!(ClientSettings::load_from(&path).unwrap(), settings);
}

#[test]
fn test_empty_settings_file_is_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("client.json");
    fs::write(&path, "").unwrap();

    assert_eq!(
        ClientSettings::load_from(&path).unwrap(),
        ClientSettings::default()
    );
}

#[test]
fn test_partial_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("client.json");
    fs::write(&path, r#"{"controller": "http://talka.local"}"#).unwrap();

    let settings = ClientSettings::load_from(&path).unwrap();
    assert_eq!(settings.controller.as_deref(), Some("http://talka.local"));
    assert!(!settings.is_logged_in());
}
