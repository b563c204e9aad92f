//! In-process server spawning and logging setup

use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;

use placebo_client::{ApiConfig, HttpClient, PostsClient, UsersClient};

/// Ceiling for the spawned server to start answering
const STARTUP_TIMEOUT: Duration = Duration::from_secs(5);
const STARTUP_POLL: Duration = Duration::from_millis(100);

/// A mock API instance with clients bound to it
pub struct TestApi {
    pub base_url: String,
    pub http: HttpClient,
    pub posts: PostsClient,
    pub users: UsersClient,
}

/// Install a global tracing subscriber once; later calls are no-ops.
pub fn init_tracing() {
    static INIT: OnceCell<()> = OnceCell::new();
    INIT.get_or_init(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Spawn the mock placeholder API on an ephemeral port and return
/// clients pointed at it. Each call serves a freshly seeded store, so
/// tests stay isolated from each other.
pub async fn start_mock_api() -> Result<TestApi> {
    init_tracing();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("binding ephemeral port")?;
    let addr = listener.local_addr().context("reading bound address")?;
    tokio::spawn(async move {
        if let Err(e) = placebo_mock::serve(listener).await {
            tracing::error!(error = %e, "mock API server exited");
        }
    });

    let base_url = format!("http://{addr}");
    let config = ApiConfig::default()
        .with_base_url(base_url.as_str())
        .with_timeout(Duration::from_secs(5));
    let http = HttpClient::new(&config)?;
    wait_until_ready(&http).await?;

    Ok(TestApi {
        base_url,
        posts: PostsClient::new(http.clone()),
        users: UsersClient::new(http.clone()),
        http,
    })
}

/// Poll until the server answers a read with a success status.
async fn wait_until_ready(http: &HttpClient) -> Result<()> {
    let deadline = tokio::time::Instant::now() + STARTUP_TIMEOUT;
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        match http.get("/posts").await.and_then(|r| r.ensure_success()) {
            Ok(_) => return Ok(()),
            Err(e) if tokio::time::Instant::now() >= deadline => {
                return Err(e).context(format!("mock API not ready after {attempts} attempt(s)"));
            }
            Err(_) => tokio::time::sleep(STARTUP_POLL).await,
        }
    }
}
