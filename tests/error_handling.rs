use pubproxy::{ProxyResolver, PubProxyError, QueryOptions, ResolverConfig};
use std::fs;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver_at(endpoint: String) -> ProxyResolver {
    let config = ResolverConfig {
        endpoint,
        system_proxy: false,
        ..ResolverConfig::default()
    };
    ProxyResolver::from_config(&config).unwrap()
}

async fn server_with(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/proxy"))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_empty_list_is_no_proxy() {
    let body = fs::read_to_string("tests/fixtures/pubproxy_empty.json").unwrap();
    let server = server_with(ResponseTemplate::new(200).set_body_string(body)).await;

    let err = resolver_at(format!("{}/api/proxy", server.uri()))
        .resolve(None)
        .await
        .unwrap_err();

    assert!(err.is_no_proxy());
    assert_eq!(err.to_string(), "No proxy available");
}

#[tokio::test]
async fn test_null_list_is_no_proxy() {
    let server = server_with(ResponseTemplate::new(200).set_body_string(r#"{"data":null}"#)).await;

    let err = resolver_at(format!("{}/api/proxy", server.uri()))
        .resolve(None)
        .await
        .unwrap_err();

    assert!(err.is_no_proxy());
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = server_with(
        ResponseTemplate::new(200).set_body_string("No proxy found, try again later"),
    )
    .await;

    let err = resolver_at(format!("{}/api/proxy", server.uri()))
        .resolve(None)
        .await
        .unwrap_err();

    assert!(err.is_decode());
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let server = server_with(
        ResponseTemplate::new(200).set_body_string(r#"{"data":[{"support":{"https":"yes"}}]}"#),
    )
    .await;

    let err = resolver_at(format!("{}/api/proxy", server.uri()))
        .resolve(None)
        .await
        .unwrap_err();

    assert!(matches!(err, PubProxyError::Decode(_)));
}

#[tokio::test]
async fn test_error_status_is_judged_by_body() {
    let server =
        server_with(ResponseTemplate::new(503).set_body_string("Service Unavailable")).await;

    let err = resolver_at(format!("{}/api/proxy", server.uri()))
        .resolve(None)
        .await
        .unwrap_err();

    assert!(err.is_decode());
}

#[tokio::test]
async fn test_malformed_proxy_target_is_url_error() {
    let server = server_with(
        ResponseTemplate::new(200)
            .set_body_string(r#"{"data":[{"ipPort":"1.2.3.4:bad","type":"http://"}]}"#),
    )
    .await;

    let err = resolver_at(format!("{}/api/proxy", server.uri()))
        .resolve(None)
        .await
        .unwrap_err();

    assert!(matches!(err, PubProxyError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let err = resolver_at("http://127.0.0.1:1/api/proxy".to_string())
        .resolve(Some(&QueryOptions::empty()))
        .await
        .unwrap_err();

    assert!(err.is_network());
}

#[tokio::test]
async fn test_unparseable_endpoint_is_url_error() {
    let err = resolver_at("://pubproxy.com/api/proxy".to_string())
        .resolve(None)
        .await
        .unwrap_err();

    assert!(matches!(err, PubProxyError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_deadline_expiry_is_network_error() {
    let server = server_with(
        ResponseTemplate::new(200)
            .set_body_string(r#"{"data":[]}"#)
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let config = ResolverConfig {
        endpoint: format!("{}/api/proxy", server.uri()),
        timeout_secs: Some(1),
        system_proxy: false,
        ..ResolverConfig::default()
    };
    let resolver = ProxyResolver::from_config(&config).unwrap();

    let err = resolver.resolve(None).await.unwrap_err();
    match err {
        PubProxyError::Network(e) => assert!(e.is_timeout()),
        other => panic!("expected network error, got {:?}", other),
    }
}
