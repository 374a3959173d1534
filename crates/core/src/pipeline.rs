use crate::artifacts::ArtifactBundle;
use crate::chunking::preview_snippet;
use crate::error::Result;
use crate::extractor::{extract_batch, PdfExtractor};
use crate::models::{PipelineOptions, StudyReport, UploadedPdf};
use crate::questions::generate_quiz;
use crate::summarize::summarize_text;
use crate::traits::{QuestionGenerator, Summarizer};
use chrono::Local;
use uuid::Uuid;

pub struct StudyPipeline<E, S, Q> {
    extractor: E,
    summarizer: S,
    generator: Q,
    options: PipelineOptions,
}

impl<E, S, Q> StudyPipeline<E, S, Q>
where
    E: PdfExtractor + Send + Sync,
    S: Summarizer + Send + Sync,
    Q: QuestionGenerator + Send + Sync,
{
    pub fn new(
        extractor: E,
        summarizer: S,
        generator: Q,
        options: PipelineOptions,
    ) -> Result<Self> {
        options.validate()?;

        Ok(Self {
            extractor,
            summarizer,
            generator,
            options,
        })
    }

    pub fn options(&self) -> PipelineOptions {
        self.options
    }

    pub async fn run(&self, uploads: &[UploadedPdf]) -> Result<StudyReport> {
        let batch = extract_batch(&self.extractor, uploads)?;
        let preview = preview_snippet(&batch.text, self.options.preview_chars);

        let summary = summarize_text(
            &self.summarizer,
            &batch.text,
            self.options.chunk_size,
            self.options.summary,
        )
        .await?;
        let questions =
            generate_quiz(&self.generator, &summary.text, self.options.generation).await?;

        let generated_at = Local::now();
        let artifacts = ArtifactBundle::build(&summary.text, &questions, generated_at)?;

        Ok(StudyReport {
            run_id: Uuid::new_v4(),
            generated_at,
            documents: batch.documents,
            text_chars: batch.text.chars().count(),
            preview,
            chunk_count: summary.chunk_count,
            summary: summary.text,
            questions,
            artifacts,
        })
    }
}
