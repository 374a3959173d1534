use crate::artifacts::ArtifactBundle;
use crate::error::PipelineError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UploadedPdf {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedPdf {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn checksum(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.bytes);
        format!("{:x}", hasher.finalize())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub filename: String,
    pub byte_len: usize,
    pub page_count: usize,
    pub checksum: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SummaryParams {
    pub max_length: u32,
    pub min_length: u32,
    pub sample: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            max_length: 100,
            min_length: 30,
            sample: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 256,
            sample: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    pub chunk_size: usize,
    pub summary: SummaryParams,
    pub generation: GenerationParams,
    pub preview_chars: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            chunk_size: 1_000,
            summary: SummaryParams::default(),
            generation: GenerationParams::default(),
            preview_chars: 2_000,
        }
    }
}

impl PipelineOptions {
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.chunk_size == 0 {
            return Err(PipelineError::InvalidOptions(
                "chunk_size must be greater than zero".to_string(),
            ));
        }

        if self.preview_chars == 0 {
            return Err(PipelineError::InvalidOptions(
                "preview_chars must be greater than zero".to_string(),
            ));
        }

        if self.summary.min_length > self.summary.max_length {
            return Err(PipelineError::InvalidOptions(format!(
                "summary min_length {} exceeds max_length {}",
                self.summary.min_length, self.summary.max_length
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Local>,
    pub documents: Vec<DocumentInfo>,
    pub text_chars: usize,
    pub preview: String,
    pub chunk_count: usize,
    pub summary: String,
    pub questions: Vec<String>,
    pub artifacts: ArtifactBundle,
}
