pub mod artifacts;
pub mod chunking;
pub mod error;
pub mod extractor;
pub mod inference;
pub mod models;
pub mod pipeline;
pub mod questions;
pub mod summarize;
pub mod traits;

pub use artifacts::{Artifact, ArtifactBundle, QuizExport, TIMESTAMP_FORMAT};
pub use chunking::{preview_snippet, split_into_chunks, PREVIEW_MARKER};
pub use error::{ExtractError, InferenceError, PipelineError};
pub use extractor::{extract_batch, BatchExtraction, LopdfExtractor, PageText, PdfExtractor};
pub use inference::{
    HostedModelClient, HostedModelConfig, DEFAULT_INFERENCE_URL, DEFAULT_QUESTION_MODEL,
    DEFAULT_SUMMARY_MODEL,
};
pub use models::{
    DocumentInfo, GenerationParams, PipelineOptions, StudyReport, SummaryParams, UploadedPdf,
};
pub use pipeline::StudyPipeline;
pub use questions::{generate_quiz, QUESTION_PROMPT_PREFIX};
pub use summarize::{summarize_text, ChunkedSummary};
pub use traits::{QuestionGenerator, Summarizer};
