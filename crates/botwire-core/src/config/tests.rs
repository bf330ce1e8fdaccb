use super::*;

#[test]
fn test_defaults_when_sections_missing() {
    let cfg: Config = toml::from_str("").unwrap();
    assert_eq!(cfg.bot.api_host, "api.telegram.org");
    assert_eq!(cfg.bot.request_timeout_secs, 60);
    assert_eq!(cfg.polling.timeout_secs, 30);
    assert_eq!(cfg.polling.delete_webhook_attempts, 5);
    assert_eq!(cfg.polling.unknown_messages, UnknownMessagePolicy::Stop);
    assert_eq!(cfg.webhook.port, 8443);
    assert_eq!(cfg.webhook.path, "/webhook");
    assert!(cfg.webhook.max_connections.is_none());
}

#[test]
fn test_parse_full_config() {
    let toml_str = r#"
        [bot]
        token = "123:abc"
        log_level = "debug"

        [polling]
        timeout_secs = 50
        unknown_messages = "skip"

        [webhook]
        url = "https://example.org/hook"
        port = 8080
        max_connections = 10
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.bot.token, "123:abc");
    assert_eq!(cfg.bot.log_level, "debug");
    assert_eq!(cfg.polling.timeout_secs, 50);
    assert_eq!(cfg.polling.unknown_messages, UnknownMessagePolicy::Skip);
    assert_eq!(cfg.webhook.url, "https://example.org/hook");
    assert_eq!(cfg.webhook.port, 8080);
    assert_eq!(cfg.webhook.max_connections, Some(10));
}

#[test]
fn test_token_override_wins() {
    let mut cfg = Config::default();
    cfg.bot.token = "from-file".into();
    assert_eq!(cfg.token(Some("from-env")).unwrap().expose(), "from-env");
    assert_eq!(cfg.token(Some("")).unwrap().expose(), "from-file");
    assert_eq!(cfg.token(None).unwrap().expose(), "from-file");
}

#[test]
fn test_missing_token_is_construction_error() {
    let cfg = Config::default();
    assert!(matches!(cfg.token(None), Err(BotError::Construction(_))));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let cfg = load("/nonexistent/__botwire_test__/botwire.toml").unwrap();
    assert!(cfg.bot.token.is_empty());
    assert_eq!(cfg.polling.timeout_secs, 30);
}

#[test]
fn test_load_rejects_malformed_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("botwire.toml");
    std::fs::write(&path, "[bot\ntoken = ").unwrap();
    let err = load(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, BotError::Config(_)));
}
