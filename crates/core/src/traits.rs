use crate::error::InferenceError;
use crate::models::{GenerationParams, SummaryParams};
use async_trait::async_trait;

#[async_trait]
pub trait Summarizer {
    async fn summarize(&self, text: &str, params: SummaryParams) -> Result<String, InferenceError>;
}

#[async_trait]
pub trait QuestionGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, InferenceError>;
}
