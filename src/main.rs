use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use placement_intel::config::AppConfig;
use placement_intel::error::AppError;
use placement_intel::telemetry;
use placement_intel::workflows::placement::{
    placement_router, AnalysisRecord, AnalysisRequest, CompanyDirectory, InMemoryAnalysisRepository,
    PlacementAnalysisService, ResumeProfile, ScoringEngine,
};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Placement Intel",
    about = "Run the placement readiness analysis service or a one-off analysis",
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
    /// Run one analysis and print the readiness report
    Analyze(AnalyzeArgs),
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
struct AnalyzeArgs {
    /// Target company name (may be unknown or omitted)
    #[arg(long, default_value = "")]
    company: String,
    /// Skill tags extracted from the job description, comma separated
    #[arg(long, value_delimiter = ',')]
    skills: Vec<String>,
    /// Path to a structured resume JSON file to score
    #[arg(long)]
    resume: Option<PathBuf>,
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
        Command::Analyze(args) => run_analysis(args),
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

    let engine = match config.analysis.suggestion_limit {
        Some(limit) => ScoringEngine::with_suggestion_limit(limit),
        None => ScoringEngine::new(),
    };
    let repository = Arc::new(InMemoryAnalysisRepository::default());
    let service = PlacementAnalysisService::with_parts(
        CompanyDirectory::standard(),
        engine,
        repository,
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let ops = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state);

    let app = ops
        .merge(placement_router(Arc::new(service)))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "placement analysis service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_analysis(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        company,
        skills,
        resume,
    } = args;

    let resume = match resume {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => ResumeProfile::default(),
    };

    let repository = Arc::new(InMemoryAnalysisRepository::default());
    let service = PlacementAnalysisService::new(repository);
    let record = service.analyze(AnalysisRequest {
        company,
        skills,
        resume,
    })?;

    render_analysis(&record);
    Ok(())
}

fn render_analysis(record: &AnalysisRecord) {
    let company = &record.company;
    println!("Placement readiness analysis");
    if company.company_name.is_empty() {
        println!("Company: (not specified)");
    } else {
        println!("Company: {}", company.company_name);
    }
    println!(
        "Classified: {} | {} ({} employees){}",
        company.industry,
        company.size_category.label(),
        company.size_range,
        if company.is_known {
            ""
        } else {
            " [defaulted, not in directory]"
        }
    );
    println!("Hiring focus: {}", company.hiring_focus);

    println!("\nInterview plan");
    for round in &record.rounds {
        println!("- {}: {}", round.label, round.name);
        if !round.topics.is_empty() {
            println!("  Topics: {}", round.topics);
        }
        println!("  Why: {}", round.rationale);
    }

    let score = &record.score;
    println!(
        "\nReadiness score: {}/100 ({})",
        score.score,
        score.tier().label()
    );
    for item in &score.breakdown {
        let mark = if item.passed { "+" } else { " " };
        println!("  [{}] {} ({} pts)", mark, item.label, item.points);
    }

    if score.suggestions.is_empty() {
        println!("\nSuggestions: none");
    } else {
        println!("\nSuggestions");
        for suggestion in &score.suggestions {
            println!("- {} (worth {} pts)", suggestion.label, suggestion.points);
        }
    }
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
