//! Integration tests for the Flurry API client.
//!
//! These tests verify end-to-end functionality of the configuration system.

use chrono::NaiveDate;
use flurry_api::{
    ApiAccessCode, ApiKey, ConfigError, FlurryClient, FlurryConfig, HostUrl, MetricsError,
    ReportDate,
};
use std::time::Duration;

#[test]
fn test_full_workflow_create_newtypes_build_config_access_fields() {
    // Create validated newtypes
    let access_code = ApiAccessCode::new("test-access-code").unwrap();
    let api_key = ApiKey::new("test-api-key").unwrap();
    let host = HostUrl::new("https://reports.example.com/").unwrap();

    // Build configuration
    let config = FlurryConfig::builder()
        .access_code(access_code)
        .api_key(api_key)
        .api_host(host)
        .max_retries(1)
        .rate_limit_interval(Duration::from_millis(250))
        .user_agent_prefix("TestApp/1.0")
        .build()
        .unwrap();

    // Access fields and verify
    assert_eq!(config.access_code().as_ref(), "test-access-code");
    assert_eq!(config.api_key().as_ref(), "test-api-key");
    assert_eq!(config.api_host().as_ref(), "https://reports.example.com");
    assert_eq!(config.max_retries(), 1);
    assert_eq!(config.rate_limit_interval(), Duration::from_millis(250));
    assert_eq!(config.user_agent_prefix(), Some("TestApp/1.0"));

    let client = FlurryClient::from_config(&config).unwrap();
    assert!(client
        .http_client()
        .default_headers()
        .get("User-Agent")
        .unwrap()
        .starts_with("TestApp/1.0 | Flurry API Library v"));
}

#[test]
fn test_defaults_match_public_api() {
    let config = FlurryConfig::builder()
        .access_code(ApiAccessCode::new("code").unwrap())
        .api_key(ApiKey::new("key").unwrap())
        .build()
        .unwrap();

    assert_eq!(config.max_retries(), 3);
    assert_eq!(config.api_host().as_ref(), "http://api.flurry.com");
    assert_eq!(config.rate_limit_interval(), Duration::from_secs(1));
    assert_eq!(config.user_agent_prefix(), None);
}

#[test]
fn test_missing_credentials_fail_build() {
    let result = FlurryConfig::builder()
        .api_key(ApiKey::new("key").unwrap())
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField {
            field: "access_code"
        })
    ));

    let result = FlurryConfig::builder()
        .access_code(ApiAccessCode::new("code").unwrap())
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField { field: "api_key" })
    ));
}

#[test]
fn test_empty_credentials_rejected_by_client_constructors() {
    assert!(matches!(
        FlurryClient::new("   ", "key"),
        Err(MetricsError::Config(ConfigError::EmptyAccessCode))
    ));
    assert!(matches!(
        FlurryClient::with_max_retries("code", "", 0),
        Err(MetricsError::Config(ConfigError::EmptyApiKey))
    ));
}

#[test]
fn test_report_dates_from_strings_and_chrono() {
    let from_string = ReportDate::new("2013-05-14").unwrap();
    let from_chrono = ReportDate::from(NaiveDate::from_ymd_opt(2013, 5, 14).unwrap());

    assert_eq!(from_string, from_chrono);
    assert_eq!(from_string.as_ref(), "2013-05-14");

    assert!(matches!(
        ReportDate::new("14/05/2013"),
        Err(ConfigError::InvalidDate { .. })
    ));
    assert!(ReportDate::new("2013-02-30").is_err());
}

#[test]
fn test_api_key_is_masked_in_debug_output() {
    let key = ApiKey::new("super-secret").unwrap();
    assert!(!format!("{key:?}").contains("super-secret"));
}
