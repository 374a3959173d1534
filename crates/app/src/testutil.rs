use async_trait::async_trait;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pdf_quiz_core::{
    GenerationParams, InferenceError, QuestionGenerator, Summarizer, SummaryParams,
};

pub struct CannedSummarizer(pub &'static str);

#[async_trait]
impl Summarizer for CannedSummarizer {
    async fn summarize(
        &self,
        _text: &str,
        _params: SummaryParams,
    ) -> Result<String, InferenceError> {
        Ok(self.0.to_string())
    }
}

pub struct CannedGenerator(pub &'static str);

#[async_trait]
impl QuestionGenerator for CannedGenerator {
    async fn generate(
        &self,
        _prompt: &str,
        _params: GenerationParams,
    ) -> Result<String, InferenceError> {
        Ok(self.0.to_string())
    }
}

pub struct FailingSummarizer;

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(
        &self,
        _text: &str,
        _params: SummaryParams,
    ) -> Result<String, InferenceError> {
        Err(InferenceError::Backend {
            service: "ozet-modeli".to_string(),
            status: 503,
            details: "model loading".to_string(),
        })
    }
}

pub fn pdf_with_text(text: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![100.into(), 600.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("content should encode"),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("pdf should serialize");
    buffer
}
