use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizExport {
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Artifact {
    pub filename: String,
    pub media_type: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtifactBundle {
    pub summary: Artifact,
    pub quiz: Artifact,
}

impl ArtifactBundle {
    pub fn build(
        summary: &str,
        questions: &[String],
        generated_at: DateTime<Local>,
    ) -> Result<Self, serde_json::Error> {
        let stamp = generated_at.format(TIMESTAMP_FORMAT).to_string();
        let export = QuizExport {
            questions: questions.to_vec(),
        };

        Ok(Self {
            summary: Artifact {
                filename: format!("ozet_{stamp}.txt"),
                media_type: "text/plain; charset=utf-8",
                content: summary.to_string(),
            },
            quiz: Artifact {
                filename: format!("quiz_{stamp}.json"),
                media_type: "application/json",
                content: to_quiz_json(&export)?,
            },
        })
    }
}

// Four-space indent, non-ASCII left unescaped.
fn to_quiz_json(export: &QuizExport) -> Result<String, serde_json::Error> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    export.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
