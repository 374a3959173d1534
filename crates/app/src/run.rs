use anyhow::{bail, Context};
use pdf_quiz_core::{PdfExtractor, QuestionGenerator, StudyPipeline, Summarizer, UploadedPdf};
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

pub fn discover_pdfs(folder: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && has_pdf_extension(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort_unstable();
    files
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

pub async fn run_batch<E, S, Q>(
    pipeline: &StudyPipeline<E, S, Q>,
    pdfs: &[PathBuf],
    folder: Option<&Path>,
    out_dir: &Path,
) -> anyhow::Result<()>
where
    E: PdfExtractor + Send + Sync,
    S: Summarizer + Send + Sync,
    Q: QuestionGenerator + Send + Sync,
{
    let mut paths = pdfs.to_vec();
    if let Some(folder) = folder {
        paths.extend(discover_pdfs(folder));
    }

    if paths.is_empty() {
        bail!("no pdf files to process, pass --pdf or --folder");
    }

    let mut uploads = Vec::with_capacity(paths.len());
    for path in &paths {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("unable to read {}", path.display()))?;
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("belge.pdf")
            .to_string();
        uploads.push(UploadedPdf::new(filename, bytes));
    }

    info!(pdf_count = uploads.len(), "starting study run");

    let report = pipeline
        .run(&uploads)
        .await
        .map_err(|error| anyhow::anyhow!(error.to_string()))?;

    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("unable to create {}", out_dir.display()))?;

    let summary_path = out_dir.join(&report.artifacts.summary.filename);
    let quiz_path = out_dir.join(&report.artifacts.quiz.filename);
    tokio::fs::write(&summary_path, &report.artifacts.summary.content)
        .await
        .with_context(|| format!("unable to write {}", summary_path.display()))?;
    tokio::fs::write(&quiz_path, &report.artifacts.quiz.content)
        .await
        .with_context(|| format!("unable to write {}", quiz_path.display()))?;

    println!("Özet:\n{}", report.summary);
    println!();
    println!("Quiz Soruları:");
    for (index, question) in report.questions.iter().enumerate() {
        println!("{}. {}", index + 1, question);
    }
    println!();
    println!(
        "{} chunk(s) summarized from {} document(s) at {}",
        report.chunk_count,
        report.documents.len(),
        report.generated_at.to_rfc3339()
    );
    println!("summary written to {}", summary_path.display());
    println!("quiz written to {}", quiz_path.display());

    Ok(())
}
