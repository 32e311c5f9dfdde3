//! `NewsServer`: Axum HTTP front for the news archive page.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::errors::PageError;
use crate::health::{self, HealthResponse};
use crate::page::NewsArchivePage;

/// Shared state accessible from Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The page served at the archive routes.
    pub page: Arc<NewsArchivePage>,
    /// When the server started.
    pub start_time: Instant,
    /// Successful renders since start.
    pub pages_rendered: Arc<AtomicU64>,
    /// Prometheus handle; `/metrics` is 404 without one.
    pub metrics: Option<PrometheusHandle>,
}

/// The news archive server.
pub struct NewsServer {
    config: ServerConfig,
    page: Arc<NewsArchivePage>,
    metrics: Option<PrometheusHandle>,
    pages_rendered: Arc<AtomicU64>,
    start_time: Instant,
}

impl NewsServer {
    /// Create a server for `page`.
    pub fn new(config: ServerConfig, page: NewsArchivePage) -> Self {
        Self {
            config,
            page: Arc::new(page),
            metrics: None,
            pages_rendered: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    /// Serve Prometheus text from `handle` at `/metrics`.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Build the Axum router with all routes.
    pub fn router(&self) -> Router {
        let state = AppState {
            page: self.page.clone(),
            start_time: self.start_time,
            pages_rendered: self.pages_rendered.clone(),
            metrics: self.metrics.clone(),
        };

        Router::new()
            .route("/news_archive.php", get(news_archive_handler))
            .route("/news/archive", get(news_archive_handler))
            .route("/health", get(health_handler))
            .route("/metrics", get(metrics_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind the listener and serve in a background task.
    pub async fn start(self) -> std::io::Result<ServerHandle> {
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        let addr = listener.local_addr()?;
        let router = self.router();
        let token = CancellationToken::new();
        let stop = token.clone();

        let task = tokio::spawn(async move {
            let result = axum::serve(listener, router)
                .with_graceful_shutdown(stop.cancelled_owned())
                .await;
            if let Err(e) = result {
                error!(error = %e, "server terminated with error");
            }
        });

        info!(%addr, "news archive server listening");
        Ok(ServerHandle {
            addr,
            token,
            task,
            timeout: self.config.shutdown_timeout(),
        })
    }
}

/// A running server.
pub struct ServerHandle {
    addr: SocketAddr,
    token: CancellationToken,
    task: JoinHandle<()>,
    timeout: Duration,
}

impl ServerHandle {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Bound port (resolves port `0`).
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Stop accepting connections and wait for in-flight requests.
    ///
    /// Returns `false` if requests were still running after the configured
    /// timeout; the serve task is aborted in that case.
    pub async fn shutdown(self) -> bool {
        self.token.cancel();
        let drained = drain(self.task, self.timeout).await;
        if drained {
            info!("news archive server stopped");
        }
        drained
    }
}

async fn drain(mut task: JoinHandle<()>, timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, &mut task).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            error!(error = %e, "server task failed");
            true
        }
        Err(_) => {
            warn!(
                timeout_secs = timeout.as_secs(),
                "shutdown timed out, aborting in-flight requests"
            );
            task.abort();
            false
        }
    }
}

/// GET /news_archive.php, GET /news/archive
async fn news_archive_handler(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let html = state.page.render()?;
    let _ = state.pages_rendered.fetch_add(1, Ordering::Relaxed);
    Ok(Html(html))
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let rendered = state.pages_rendered.load(Ordering::Relaxed);
    Json(health::health_check(state.start_time, rendered))
}

/// GET /metrics
async fn metrics_handler(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            crate::metrics::render(handle),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::{PageChrome, StandardChrome};
    use crate::errors::Result;
    use crate::session::AnonymousSessions;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use ot_core::NewsArchive;
    use ot_settings::TaxonomyRoot;
    use tower::ServiceExt;

    struct FailingFooter;

    impl PageChrome for FailingFooter {
        fn top(&self, _title: &str) -> Result<String> {
            Ok(String::new())
        }

        fn bottom(&self) -> Result<String> {
            Err(PageError::fragment("bottom", "template missing"))
        }

        fn ad_block(&self, _slot: &str) -> Result<String> {
            Ok(String::new())
        }
    }

    fn page(chrome: Arc<dyn PageChrome>) -> NewsArchivePage {
        NewsArchivePage::new(
            "OpenThesaurus - News Archiv",
            Arc::new(NewsArchive::builtin()),
            TaxonomyRoot::default(),
            Arc::new(AnonymousSessions::new()),
            chrome,
        )
    }

    fn make_server() -> NewsServer {
        let chrome = Arc::new(StandardChrome::new("OpenThesaurus", "default.css"));
        NewsServer::new(ServerConfig::default(), page(chrome))
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(req).await.unwrap()
    }

    async fn body_string(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), 1_000_000)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn server_with_default_config() {
        let server = make_server();
        assert_eq!(server.config().host, "127.0.0.1");
        assert_eq!(server.config().port, 0);
    }

    #[tokio::test]
    async fn shutdown_closes_listener() {
        let handle = make_server().start().await.unwrap();
        let addr = handle.local_addr();
        assert!(tokio::net::TcpStream::connect(addr).await.is_ok());

        assert!(handle.shutdown().await);
        assert!(tokio::net::TcpStream::connect(addr).await.is_err());
    }

    #[tokio::test]
    async fn drain_waits_for_finished_task() {
        let task = tokio::spawn(async {});
        assert!(drain(task, Duration::from_secs(1)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn drain_gives_up_after_timeout() {
        let (logs, _guard) = ot_core::logging::capture_logs();
        let task = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(300)).await;
        });
        assert!(!drain(task, Duration::from_millis(100)).await);
        assert!(logs.contains(tracing::Level::WARN, "shutdown timed out"));
    }

    #[tokio::test]
    async fn legacy_route_serves_html() {
        let resp = send_get(make_server().router(), "/news_archive.php").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        let body = body_string(resp).await;
        assert!(body.contains("<td>2009</td>"));
        assert!(body.contains("<a href=\"synset.php?id=1\">Begriff</a>"));
    }

    #[tokio::test]
    async fn both_routes_render_same_page() {
        let app = make_server().router();
        let legacy = body_string(send_get(app.clone(), "/news_archive.php").await).await;
        let modern = body_string(send_get(app, "/news/archive").await).await;
        assert_eq!(legacy, modern);
    }

    #[tokio::test]
    async fn query_parameters_ignored() {
        let app = make_server().router();
        let plain = body_string(send_get(app.clone(), "/news_archive.php").await).await;
        let resp = send_get(app, "/news_archive.php?year=2004&sess=abc").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, plain);
    }

    #[tokio::test]
    async fn health_counts_rendered_pages() {
        let app = make_server().router();
        let _ = send_get(app.clone(), "/news/archive").await;
        let _ = send_get(app.clone(), "/news/archive").await;

        let resp = send_get(app, "/health").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let parsed: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["pages_rendered"], 2);
        assert!(parsed["uptime_secs"].is_number());
    }

    #[tokio::test]
    async fn fragment_failure_returns_500() {
        let server = NewsServer::new(ServerConfig::default(), page(Arc::new(FailingFooter)));
        let app = server.router();

        let resp = send_get(app.clone(), "/news_archive.php").await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(resp).await, "internal server error");

        let health = body_string(send_get(app, "/health").await).await;
        assert!(health.contains("\"pages_rendered\":0"));
    }

    #[tokio::test]
    async fn metrics_absent_without_handle() {
        let resp = send_get(make_server().router(), "/metrics").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn metrics_served_with_handle() {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let app = make_server().with_metrics(handle).router();
        let resp = send_get(app, "/metrics").await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            resp.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let resp = send_get(make_server().router(), "/nonexistent").await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_not_allowed() {
        let req = Request::builder()
            .method("POST")
            .uri("/news_archive.php")
            .body(Body::empty())
            .unwrap();
        let resp = make_server().router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
