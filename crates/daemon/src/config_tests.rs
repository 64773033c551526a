// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;

#[test]
fn parses_full_config() {
    let json = r#"{
        "listen": "127.0.0.1:9000",
        "debug": true,
        "notifiers": {
            "stdout": {},
            "hipchat": {"room": "ops", "token": "t0k", "from": "cloudtail"}
        },
        "stashes": [
            {"event_name": "DescribeInstances"},
            {"user_name": "ci-bot", "description": "deploys"}
        ]
    }"#;

    let config = Config::from_reader(json.as_bytes()).unwrap();

    assert_eq!(config.listen.as_deref(), Some("127.0.0.1:9000"));
    assert!(config.debug);
    assert_eq!(
        config.notifiers.keys().collect::<Vec<_>>(),
        vec!["hipchat", "stdout"]
    );
    assert_eq!(config.notifiers["hipchat"]["room"], "ops");
    assert_eq!(config.stashes.len(), 2);
    assert_eq!(config.stashes[1].user_name, "ci-bot");
}

#[test]
fn accepts_capitalised_keys() {
    let json = r#"{"Notifiers": {"stdout": {}}, "Stashes": [{"event_name": "A"}]}"#;

    let config = Config::from_reader(json.as_bytes()).unwrap();

    assert!(config.notifiers.contains_key("stdout"));
    assert_eq!(config.stashes[0].event_name, "A");
}

#[test]
fn empty_object_is_default() {
    let config = Config::from_reader("{}".as_bytes()).unwrap();

    assert!(config.notifiers.is_empty());
    assert!(config.stashes.is_empty());
    assert!(!config.debug);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = Config::from_reader("{\"notifiers\": [".as_bytes()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"listen": ":7000"}}"#).unwrap();

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.listen.as_deref(), Some(":7000"));
}

#[test]
fn load_missing_file_is_read_error() {
    let err = Config::load(Path::new("/nonexistent/cloudtail.json")).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("/nonexistent/cloudtail.json"));
}

#[test]
fn listen_address_resolution() {
    let mut config = Config::default();
    assert_eq!(config.listen_address(None), "0.0.0.0:8888");
    assert_eq!(config.listen_address(Some(9999)), "0.0.0.0:9999");

    config.listen = Some(":7000".to_string());
    assert_eq!(config.listen_address(None), "0.0.0.0:7000");

    config.listen = Some("127.0.0.1:7001".to_string());
    assert_eq!(config.listen_address(None), "127.0.0.1:7001");
    assert_eq!(config.listen_address(Some(9999)), "0.0.0.0:9999");
}
