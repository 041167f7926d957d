use crate::cli::ServeArgs;
use crate::infra::{build_engine, AppState, InMemoryContactChannel};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use sale_readiness::assessment::AssessmentService;
use sale_readiness::config::AppConfig;
use sale_readiness::error::AppError;
use sale_readiness::telemetry;
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

    // A broken question table is a build defect; refuse to serve reports from it.
    let engine = Arc::new(build_engine(&config.assessment)?);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let contacts = Arc::new(InMemoryContactChannel::default());
    let service = Arc::new(AssessmentService::new(engine, contacts));

    let app = with_assessment_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        partial_answers = ?config.assessment.partial_answers,
        %addr,
        "sale readiness service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
