use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use tracing::info;

use hirealigned::config::AppConfig;
use hirealigned::error::AppError;
use hirealigned::telemetry;
use hirealigned::workflows::alignment::{
    alignment_router, AlignmentReport, AlignmentReportService, CsvExportSource, OrganizationScope,
    ALL_CANDIDATES,
};

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "HireAligned Report Service",
    about = "Serve and render ranked candidate alignment reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Render a ranked alignment report from table exports
    Report(ReportArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// CSV export of the candidate score table
    #[arg(long)]
    scores_csv: PathBuf,
    /// CSV export of the candidate response table
    #[arg(long)]
    responses_csv: PathBuf,
    /// Organization scope (defaults to the configured organization)
    #[arg(long)]
    organization: Option<String>,
    /// Filter selection, e.g. "Front Desk - Coordinator"
    #[arg(long, default_value = ALL_CANDIDATES)]
    filter: String,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Report(args) => run_report(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let source = Arc::new(CsvExportSource::new(
        config.report.scores_csv.clone(),
        config.report.responses_csv.clone(),
    ));
    let service = Arc::new(AlignmentReportService::new(source.clone(), source));
    let default_scope = OrganizationScope::new(config.report.default_organization.clone());

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(alignment_router(service, default_scope))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "alignment report service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        scores_csv,
        responses_csv,
        organization,
        filter,
    } = args;

    let source = Arc::new(CsvExportSource::new(scores_csv, responses_csv));
    let service = AlignmentReportService::new(source.clone(), source);

    let scope = organization
        .map(OrganizationScope::new)
        .unwrap_or_default();
    let report = service.ranked_report(&scope, &filter)?;
    render_report(&report);

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn render_report(report: &AlignmentReport) {
    println!("Candidate alignment report: {}", report.organization);
    println!(
        "Filter: {} (options: {})",
        report.selection,
        report.filter_options.join(", ")
    );

    if report.candidates.is_empty() {
        println!("\nNo candidates matched the current scope and filter.");
        return;
    }

    for (position, candidate) in report.candidates.iter().enumerate() {
        let contact = match &candidate.email {
            Some(email) => format!(" <{email}>"),
            None => String::new(),
        };
        println!(
            "\n{}. {}{} | {} / {} | average {} ({})",
            position + 1,
            candidate.name,
            contact,
            candidate.sub_organization,
            candidate.role,
            candidate.composite_score,
            candidate.tier
        );

        for category in &candidate.categories {
            let score = match category.score {
                Some(value) => format!("{value:.1}"),
                None => "NA".to_string(),
            };
            println!(
                "   {}: {} ({}) | {}",
                category.category, score, category.tier, category.highlight
            );
        }
    }
}
