//! Integration tests for the metric operations.
//!
//! These tests drive [`FlurryClient`] against a mock reporting API and check
//! the composite helpers end to end.

use flurry_api::metrics::{Metric, MetricQuery, Scalar};
use flurry_api::{
    ApiAccessCode, ApiKey, FlurryClient, FlurryConfig, GroupBy, HostUrl, HttpError, MetricsError,
    ParameterCounts, ReportDate,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(host: &str) -> FlurryClient {
    let config = FlurryConfig::builder()
        .access_code(ApiAccessCode::new("test-code").unwrap())
        .api_key(ApiKey::new("test-key").unwrap())
        .api_host(HostUrl::new(host).unwrap())
        .max_retries(1)
        .rate_limit_interval(Duration::from_millis(1))
        .build()
        .unwrap();
    FlurryClient::from_config(&config).unwrap()
}

fn date(value: &str) -> ReportDate {
    ReportDate::new(value).unwrap()
}

async fn mount_summary(mock_server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/eventMetrics/Summary"))
        .and(query_param("startDate", "2013-05-14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

// ============================================================================
// Single Endpoints
// ============================================================================

#[tokio::test]
async fn test_grouped_app_metric() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appMetrics/Sessions"))
        .and(query_param("groupBy", "MONTHS"))
        .and(query_param("country", "ALL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"@metric": "Sessions"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let query = MetricQuery::new(date("2013-01-01"))
        .end_date(date("2013-05-31"))
        .country("ALL")
        .group_by(GroupBy::Month);

    let body = client.sessions(&query).await.unwrap();
    assert_eq!(body, json!({"@metric": "Sessions"}));
}

#[tokio::test]
async fn test_application_info_has_no_dates() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appInfo/getApplication"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"@name": "Demo"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let body = client.application().await.unwrap();
    assert_eq!(body["@name"], "Demo");

    let requests = mock_server.received_requests().await.unwrap();
    assert!(!requests[0]
        .url
        .query_pairs()
        .any(|(key, _)| key == "startDate"));
}

#[tokio::test]
async fn test_all_applications() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appInfo/getAllApplications"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"application": [{"@name": "A"}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let body = client.all_applications().await.unwrap();
    assert_eq!(body["application"][0]["@name"], "A");
}

#[tokio::test]
async fn test_event_metrics_sends_event_name() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/eventMetrics/Event"))
        .and(query_param("eventName", "Purchase"))
        .and(query_param("versionName", "2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"@eventName": "Purchase"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let query = MetricQuery::new(date("2013-05-14")).version_name("2.0");
    let body = client.event_metrics("Purchase", &query).await.unwrap();
    assert_eq!(body["@eventName"], "Purchase");
}

#[tokio::test]
async fn test_rotated_key_is_sent_on_later_requests() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("apiKey", "new-key"))
        .and(query_param("apiAccessCode", "test-code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = create_test_client(&mock_server.uri());
    client.rotate_api_key(ApiKey::new("new-key").unwrap());

    client.all_applications().await.unwrap();
}

#[tokio::test]
async fn test_provider_error_propagates_through_facade() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 104, "message": "Invalid apiKey"})),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client.event_names(date("2013-05-14")).await;

    match result {
        Err(MetricsError::Http(HttpError::Provider(error))) => {
            assert_eq!(error.code, 104);
            assert_eq!(error.tries, 2);
        }
        other => panic!("Expected provider error, got: {other:?}"),
    }
}

// ============================================================================
// Composite Helpers
// ============================================================================

#[tokio::test]
async fn test_all_daily_metrics_with_filters() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("country", "US"))
        .and(query_param("versionName", "1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"@value": "5"})))
        .expect(10)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let values = client
        .all_daily_metrics(date("2013-05-14"), Some("US"), Some("1.0"))
        .await
        .unwrap();

    let metrics: Vec<Metric> = values.keys().copied().collect();
    assert_eq!(metrics, Metric::APP_METRICS.to_vec());
    assert!(values
        .values()
        .all(|value| *value == Scalar::String("5".to_string())));
}

#[tokio::test]
async fn test_event_names_preserve_order() {
    let mock_server = MockServer::start().await;
    mount_summary(
        &mock_server,
        json!({"event": [
            {"@eventName": "Purchase", "@totalCount": "3"},
            {"@eventName": "Login", "@totalCount": "10"}
        ]}),
    )
    .await;

    let client = create_test_client(&mock_server.uri());
    let names = client.event_names(date("2013-05-14")).await.unwrap();
    assert_eq!(names, vec!["Purchase", "Login"]);
}

#[tokio::test]
async fn test_event_names_single_event_and_no_events() {
    let mock_server = MockServer::start().await;
    mount_summary(&mock_server, json!({"event": {"@eventName": "Login"}})).await;

    let client = create_test_client(&mock_server.uri());
    assert_eq!(
        client.event_names(date("2013-05-14")).await.unwrap(),
        vec!["Login"]
    );

    let empty_server = MockServer::start().await;
    mount_summary(&empty_server, json!({"@type": "Summary"})).await;

    let client = create_test_client(&empty_server.uri());
    assert!(client.event_names(date("2013-05-14")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_summary_for_events_filters_in_response_order() {
    let mock_server = MockServer::start().await;
    mount_summary(
        &mock_server,
        json!({"event": [
            {"@eventName": "Login", "@totalCount": "10"},
            {"@eventName": "Share", "@totalCount": "1"},
            {"@eventName": "Purchase", "@totalCount": "3"}
        ]}),
    )
    .await;

    let client = create_test_client(&mock_server.uri());
    let events = client
        .summary_for_events(&["Purchase", "Login", "Missing"], date("2013-05-14"))
        .await
        .unwrap();

    let names: Vec<&str> = events
        .iter()
        .filter_map(|event| event.get("@eventName").and_then(|name| name.as_str()))
        .collect();
    assert_eq!(names, vec!["Login", "Purchase"]);
}

#[tokio::test]
async fn test_counts_for_multiple_parameters() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/eventMetrics/Event"))
        .and(query_param("eventName", "Purchase"))
        .and(query_param("endDate", "2013-05-20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "parameters": {"key": {"value": [
                {"@name": "Level", "@totalCount": "12"},
                {"@name": "Item", "@totalCount": "3"}
            ]}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let counts = client
        .counts_for_events_and_parameter(
            &["Purchase"],
            vec!["Level", "Score"],
            date("2013-05-14"),
            Some(date("2013-05-20")),
        )
        .await
        .unwrap();

    let ParameterCounts::Multiple(counts) = counts else {
        panic!("Expected counts per parameter");
    };
    assert_eq!(
        counts["Level"]["Purchase"],
        Some(Scalar::String("12".to_string()))
    );
    assert_eq!(counts["Score"]["Purchase"], None);
}

#[tokio::test]
async fn test_counts_abort_on_first_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("eventName", "Login"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("eventName", "Purchase"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let result = client
        .counts_for_events_and_parameter(&["Login", "Purchase"], "Level", date("2013-05-14"), None)
        .await;

    assert!(matches!(result, Err(MetricsError::Http(HttpError::Transport(_)))));
}

#[test]
fn test_parameter_counts_serialize_as_plain_maps() {
    let mut per_event = std::collections::BTreeMap::new();
    per_event.insert("Login".to_string(), None);
    per_event.insert("Purchase".to_string(), Some(Scalar::String("12".to_string())));

    let value = serde_json::to_value(ParameterCounts::Single(per_event)).unwrap();
    assert_eq!(value, json!({"Login": null, "Purchase": "12"}));
}
