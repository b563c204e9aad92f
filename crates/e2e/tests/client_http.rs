//! Transport-level behavior of the generic HTTP client

use std::time::Duration;

use anyhow::Result;
use placebo_client::{ApiConfig, Error, HttpClient};
use placebo_e2e::start_mock_api;

#[tokio::test]
async fn raw_get_exposes_status_headers_and_timing() -> Result<()> {
    let api = start_mock_api().await?;
    let resp = api.http.get("/posts/1").await?;
    assert_eq!(resp.status(), 200);
    assert!(resp.is_success());
    assert!(resp
        .content_type()
        .is_some_and(|ct| ct.contains("application/json")));
    assert!(!resp.bytes().is_empty());
    assert!(resp.elapsed() > Duration::ZERO);
    Ok(())
}

#[tokio::test]
async fn error_status_is_data_not_failure() -> Result<()> {
    let api = start_mock_api().await?;
    let resp = api.http.get("/posts/99999").await?;
    assert_eq!(resp.status(), 404);
    match resp.ensure_success() {
        Err(Error::HttpStatus { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn dead_port_exhausts_the_attempt_budget() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ApiConfig::default()
        .with_base_url(format!("http://{addr}"))
        .with_timeout(Duration::from_secs(1))
        .with_retry_count(2);
    let client = HttpClient::new(&config).unwrap();

    match client.get("/posts").await {
        Err(Error::Transport { attempts, .. }) => assert_eq!(attempts, 2),
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn connect_retries_bridge_a_late_server_start() -> Result<()> {
    // reserve a port, then start listening only after a delay
    let probe = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = probe.local_addr()?;
    drop(probe);

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
        let _ = placebo_mock::serve(listener).await;
    });

    let config = ApiConfig::default()
        .with_base_url(format!("http://{addr}"))
        .with_timeout(Duration::from_secs(2))
        .with_retry_count(10);
    let client = HttpClient::new(&config)?;

    let resp = client.get("/posts").await?;
    assert_eq!(resp.status(), 200);
    Ok(())
}

#[tokio::test]
async fn query_parameters_reach_the_server() -> Result<()> {
    let api = start_mock_api().await?;
    let resp = api
        .http
        .get_query("/posts", &[("userId", "3".to_string())])
        .await?;
    assert_eq!(resp.status(), 200);
    let body = resp.value()?;
    let items = body.as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items.iter().all(|p| p["userId"] == 3));
    Ok(())
}
