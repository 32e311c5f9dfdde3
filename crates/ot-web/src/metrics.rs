//! Prometheus recorder and metric names.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::info;

/// Install the global Prometheus recorder.
///
/// Returns the handle rendered at `/metrics`. Fails if a recorder is
/// already installed.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    info!("prometheus metrics recorder installed");
    Ok(handle)
}

/// Render Prometheus text format from `handle`.
pub fn render(handle: &PrometheusHandle) -> String {
    handle.render()
}

/// Successful page renders (counter, labels: page).
pub const PAGE_RENDERS_TOTAL: &str = "page_renders_total";
/// Failed page renders (counter, labels: page).
pub const PAGE_RENDER_ERRORS_TOTAL: &str = "page_render_errors_total";
/// Page session contexts opened (counter).
pub const PAGE_SESSIONS_OPENED_TOTAL: &str = "page_sessions_opened_total";
