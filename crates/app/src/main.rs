mod run;
mod web;

#[cfg(test)]
mod testutil;

use chrono::Utc;
use clap::{Parser, Subcommand};
use pdf_quiz_core::{
    GenerationParams, HostedModelClient, HostedModelConfig, LopdfExtractor, PipelineOptions,
    StudyPipeline, SummaryParams, DEFAULT_INFERENCE_URL, DEFAULT_QUESTION_MODEL,
    DEFAULT_SUMMARY_MODEL,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pdf-quiz", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Hosted inference API base URL
    #[arg(long, default_value = DEFAULT_INFERENCE_URL)]
    inference_url: String,

    /// Bearer token for the inference API
    #[arg(long, env = "INFERENCE_API_KEY")]
    api_key: Option<String>,

    /// Summarization model identifier
    #[arg(long, default_value = DEFAULT_SUMMARY_MODEL)]
    summary_model: String,

    /// Question generation model identifier
    #[arg(long, default_value = DEFAULT_QUESTION_MODEL)]
    question_model: String,

    /// Characters per summarization chunk
    #[arg(long, default_value = "1000")]
    chunk_size: usize,

    /// Upper length bound for each chunk summary
    #[arg(long, default_value = "100")]
    summary_max_length: u32,

    /// Lower length bound for each chunk summary
    #[arg(long, default_value = "30")]
    summary_min_length: u32,

    /// Upper length bound for the generated question block
    #[arg(long, default_value = "256")]
    question_max_length: u32,

    /// Characters shown in the raw text preview
    #[arg(long, default_value = "2000")]
    preview_chars: usize,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the upload page and the study API.
    Serve {
        /// Bind address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        /// Bind port
        #[arg(long, default_value = "3000")]
        port: u16,
        /// Upload size cap in megabytes
        #[arg(long, default_value = "32")]
        max_upload_mb: usize,
    },
    /// Process PDFs once and write the summary and quiz files to disk.
    Run {
        /// PDF file to process (repeatable).
        #[arg(long = "pdf")]
        pdfs: Vec<PathBuf>,
        /// Folder that contains PDFs recursively.
        #[arg(long)]
        folder: Option<PathBuf>,
        /// Directory that receives the output files.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

impl Cli {
    fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            chunk_size: self.chunk_size,
            summary: SummaryParams {
                max_length: self.summary_max_length,
                min_length: self.summary_min_length,
                sample: false,
            },
            generation: GenerationParams {
                max_length: self.question_max_length,
                sample: false,
            },
            preview_chars: self.preview_chars,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let client = HostedModelClient::new(HostedModelConfig {
        base_url: cli.inference_url.clone(),
        api_key: cli.api_key.clone(),
        summary_model: cli.summary_model.clone(),
        question_model: cli.question_model.clone(),
    })
    .map_err(|error| anyhow::anyhow!(error.to_string()))?;

    info!(
        version = app_version,
        summary_model = %cli.summary_model,
        question_model = %cli.question_model,
        started_at = %Utc::now().to_rfc3339(),
        "pdf-quiz boot"
    );

    let pipeline = StudyPipeline::new(
        LopdfExtractor,
        client.clone(),
        client,
        cli.pipeline_options(),
    )
    .map_err(|error| anyhow::anyhow!(error.to_string()))?;

    match cli.command {
        Command::Serve {
            host,
            port,
            max_upload_mb,
        } => {
            web::serve(pipeline, &host, port, max_upload_mb).await?;
        }
        Command::Run {
            pdfs,
            folder,
            out_dir,
        } => {
            run::run_batch(&pipeline, &pdfs, folder.as_deref(), &out_dir).await?;
        }
    }

    Ok(())
}
