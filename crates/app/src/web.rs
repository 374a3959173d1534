use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use pdf_quiz_core::{
    PdfExtractor, PipelineError, QuestionGenerator, StudyPipeline, Summarizer, UploadedPdf,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{error, info, warn, Level};

const INDEX_PAGE: &str = include_str!("../assets/index.html");

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn create_router<E, S, Q>(
    pipeline: Arc<StudyPipeline<E, S, Q>>,
    max_upload_bytes: usize,
) -> Router
where
    E: PdfExtractor + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    Q: QuestionGenerator + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/study", post(study_handler::<E, S, Q>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(trace_layer)
        .layer(cors)
        .with_state(pipeline)
}

pub async fn serve<E, S, Q>(
    pipeline: StudyPipeline<E, S, Q>,
    host: &str,
    port: u16,
    max_upload_mb: usize,
) -> anyhow::Result<()>
where
    E: PdfExtractor + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    Q: QuestionGenerator + Send + Sync + 'static,
{
    let router = create_router(Arc::new(pipeline), max_upload_mb * 1024 * 1024);
    let listener = TcpListener::bind((host, port)).await?;
    info!(address = %listener.local_addr()?, "pdf-quiz listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    on_ctrl_c(tokio::signal::ctrl_c().await).await;
}

// Resolving on a failed handler install would drain the server right after boot.
async fn on_ctrl_c(signal: std::io::Result<()>) {
    match signal {
        Ok(()) => info!("shutdown signal received"),
        Err(signal_error) => {
            error!(error = %signal_error, "ctrl-c handler could not be installed");
            std::future::pending::<()>().await;
        }
    }
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

async fn study_handler<E, S, Q>(
    State(pipeline): State<Arc<StudyPipeline<E, S, Q>>>,
    mut multipart: Multipart,
) -> Response
where
    E: PdfExtractor + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    Q: QuestionGenerator + Send + Sync + 'static,
{
    let mut uploads = Vec::new();

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let filename = field.file_name().unwrap_or("belge.pdf").to_string();
                match field.bytes().await {
                    Ok(bytes) => uploads.push(UploadedPdf::new(filename, bytes.to_vec())),
                    Err(field_error) => {
                        warn!(error = %field_error, "failed to read upload field");
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("yükleme okunamadı: {field_error}"),
                        );
                    }
                }
            }
            Ok(None) => break,
            Err(parse_error) => {
                warn!(error = %parse_error, "failed to parse multipart request");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("yükleme okunamadı: {parse_error}"),
                );
            }
        }
    }

    if uploads.is_empty() {
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "PDF dosyası yüklenmedi".to_string(),
        );
    }

    match pipeline.run(&uploads).await {
        Ok(report) => {
            info!(
                run_id = %report.run_id,
                documents = report.documents.len(),
                chunk_count = report.chunk_count,
                questions = report.questions.len(),
                "study run complete"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(run_error) => {
            error!(error = %run_error, "study run failed");
            error_response(error_status(&run_error), run_error.to_string())
        }
    }
}

fn error_status(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::Extract(_) => StatusCode::UNPROCESSABLE_ENTITY,
        PipelineError::Inference(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Serialization(_) | PipelineError::InvalidOptions(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}
