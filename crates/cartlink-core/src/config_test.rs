use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "warn");
    assert!(cfg.request_timeout_secs.is_none());
    assert!(cfg.user_agent.is_none());
}

#[test]
fn build_app_config_reads_env_and_log_level() {
    let mut map = HashMap::new();
    map.insert("CARTLINK_ENV", "production");
    map.insert("CARTLINK_LOG_LEVEL", "cartlink_scraper=debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "cartlink_scraper=debug");
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("CARTLINK_REQUEST_TIMEOUT_SECS", "15");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, Some(15));
}

#[test]
fn request_timeout_secs_blank_is_unset() {
    let mut map = HashMap::new();
    map.insert("CARTLINK_REQUEST_TIMEOUT_SECS", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.request_timeout_secs.is_none());
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("CARTLINK_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CARTLINK_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(CARTLINK_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("CARTLINK_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CARTLINK_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(CARTLINK_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn user_agent_override() {
    let mut map = HashMap::new();
    map.insert("CARTLINK_USER_AGENT", "cartlink/0.1");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent.as_deref(), Some("cartlink/0.1"));
}

#[test]
fn user_agent_blank_is_unset() {
    let mut map = HashMap::new();
    map.insert("CARTLINK_USER_AGENT", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.user_agent.is_none());
}
