use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_points_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skillpoints::config::AppConfig;
use skillpoints::error::AppError;
use skillpoints::points::{provider_from_config, PointsService};
use skillpoints::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let provider = provider_from_config(&config.suggestions)?;
    info!(
        provider = provider.name(),
        enabled = config.suggestions.is_enabled(),
        "suggestion provider configured"
    );
    let points_service = Arc::new(PointsService::new(provider));

    let app = with_points_routes(points_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "skillpoints api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
