use crate::error::ExtractError;
use crate::models::{DocumentInfo, UploadedPdf};
use lopdf::Document;

#[derive(Debug, Clone)]
pub struct PageText {
    pub number: u32,
    pub text: String,
}

pub trait PdfExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageText>, ExtractError>;
}

#[derive(Default)]
pub struct LopdfExtractor;

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageText>, ExtractError> {
        let document =
            Document::load_mem(bytes).map_err(|error| ExtractError::PdfParse(error.to_string()))?;

        let mut pages = Vec::new();
        for (page_no, _page_id) in document.get_pages() {
            let text = document
                .extract_text(&[page_no])
                .map_err(|error| ExtractError::PdfParse(error.to_string()))?;

            pages.push(PageText {
                number: page_no,
                text,
            });
        }

        Ok(pages)
    }
}

#[derive(Debug, Clone)]
pub struct BatchExtraction {
    pub text: String,
    pub documents: Vec<DocumentInfo>,
}

pub fn extract_batch<E: PdfExtractor>(
    extractor: &E,
    uploads: &[UploadedPdf],
) -> Result<BatchExtraction, ExtractError> {
    let mut text = String::new();
    let mut documents = Vec::with_capacity(uploads.len());

    for upload in uploads {
        let pages = extractor.extract_pages(&upload.bytes)?;

        documents.push(DocumentInfo {
            filename: upload.filename.clone(),
            byte_len: upload.bytes.len(),
            page_count: pages.len(),
            checksum: upload.checksum(),
        });

        for page in pages {
            text.push_str(&page.text);
        }
    }

    Ok(BatchExtraction { text, documents })
}
