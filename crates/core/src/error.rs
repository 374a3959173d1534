use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("pdf parse error: {0}")]
    PdfParse(String),
}

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} request failed with status {status}: {details}")]
    Backend {
        service: String,
        status: u16,
        details: String,
    },

    #[error("invalid response from {service}: {details}")]
    MalformedResponse { service: String, details: String },

    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),

    #[error("serialize error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid pipeline options: {0}")]
    InvalidOptions(String),
}

pub type Result<T, E = PipelineError> = std::result::Result<T, E>;
