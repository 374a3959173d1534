use crate::chunking::split_into_chunks;
use crate::error::InferenceError;
use crate::models::SummaryParams;
use crate::traits::Summarizer;

#[derive(Debug, Clone, PartialEq)]
pub struct ChunkedSummary {
    pub text: String,
    pub chunk_count: usize,
}

pub async fn summarize_text<S: Summarizer + ?Sized>(
    summarizer: &S,
    text: &str,
    chunk_size: usize,
    params: SummaryParams,
) -> Result<ChunkedSummary, InferenceError> {
    let chunks = split_into_chunks(text, chunk_size);
    let mut partials = Vec::with_capacity(chunks.len());

    for chunk in &chunks {
        partials.push(summarizer.summarize(chunk, params).await?);
    }

    Ok(ChunkedSummary {
        text: partials.join("\n"),
        chunk_count: chunks.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::summarize_text;
    use crate::error::InferenceError;
    use crate::models::SummaryParams;
    use crate::traits::Summarizer;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingSummarizer {
        inputs: Mutex<Vec<String>>,
    }

    impl RecordingSummarizer {
        fn new() -> Self {
            Self {
                inputs: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.inputs.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Summarizer for RecordingSummarizer {
        async fn summarize(
            &self,
            text: &str,
            _params: SummaryParams,
        ) -> Result<String, InferenceError> {
            let mut inputs = self.inputs.lock().unwrap();
            inputs.push(text.to_string());
            Ok(format!("summary {}", inputs.len()))
        }
    }

    struct FailingSummarizer;

    #[async_trait]
    impl Summarizer for FailingSummarizer {
        async fn summarize(
            &self,
            _text: &str,
            _params: SummaryParams,
        ) -> Result<String, InferenceError> {
            Err(InferenceError::MalformedResponse {
                service: "fake".to_string(),
                details: "boom".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn every_chunk_is_summarized_in_order() {
        let summarizer = RecordingSummarizer::new();
        let text = "a".repeat(250);

        let summary = summarize_text(&summarizer, &text, 100, SummaryParams::default())
            .await
            .expect("summarization should succeed");

        assert_eq!(summary.chunk_count, 3);
        assert_eq!(summary.text, "summary 1\nsummary 2\nsummary 3");
        assert_eq!(
            summarizer.seen(),
            vec!["a".repeat(100), "a".repeat(100), "a".repeat(50)]
        );
    }

    #[tokio::test]
    async fn single_chunk_summary_has_no_newline() {
        let summarizer = RecordingSummarizer::new();

        let summary = summarize_text(&summarizer, "kısa metin", 1_000, SummaryParams::default())
            .await
            .expect("summarization should succeed");

        assert_eq!(summary.chunk_count, 1);
        assert_eq!(summary.text, "summary 1");
        assert_eq!(summarizer.seen(), vec!["kısa metin".to_string()]);
    }

    #[tokio::test]
    async fn empty_text_makes_no_model_calls() {
        let summarizer = RecordingSummarizer::new();

        let summary = summarize_text(&summarizer, "", 1_000, SummaryParams::default())
            .await
            .expect("summarization should succeed");

        assert_eq!(summary.chunk_count, 0);
        assert_eq!(summary.text, "");
        assert!(summarizer.seen().is_empty());
    }

    #[tokio::test]
    async fn first_failure_stops_the_run() {
        let result =
            summarize_text(&FailingSummarizer, "herhangi bir metin", 5, SummaryParams::default())
                .await;

        assert!(result.is_err());
    }
}
