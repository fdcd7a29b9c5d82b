//! Text extraction from uploaded documents.
//!
//! PDF, DOCX and plain text are handled in-process. Image types are
//! recognised but rejected: OCR is not part of this service.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::parsing::docx::extract_docx_text;

/// Extracted text shorter than this (after trimming) is treated as unreadable.
pub const MIN_EXTRACTED_TEXT_CHARS: usize = 50;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("File type not supported: {0}. Allowed types: PDF, DOCX, plain text")]
    UnsupportedType(String),

    #[error("Image uploads ({0}) require OCR, which is not available. Upload a PDF instead")]
    OcrUnavailable(String),

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Failed to extract text from DOCX: {0}")]
    Docx(String),

    #[error("Uploaded text is not valid UTF-8")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("Could not extract sufficient text from the file ({chars} characters). Please ensure the file is readable")]
    InsufficientText { chars: usize },

    #[error("Extraction task failed: {0}")]
    Task(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
    Image,
}

impl DocumentKind {
    /// Classifies a declared MIME type, ignoring parameters such as `charset`.
    pub fn from_mime(content_type: &str) -> Result<Self, ExtractionError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "application/pdf" => Ok(Self::Pdf),
            DOCX_MIME => Ok(Self::Docx),
            "text/plain" => Ok(Self::PlainText),
            "image/jpeg" | "image/jpg" | "image/png" | "image/bmp" | "image/tiff" => {
                Ok(Self::Image)
            }
            _ => Err(ExtractionError::UnsupportedType(content_type.to_string())),
        }
    }
}

/// Resolves the MIME type to extract with. Browsers often send
/// `application/octet-stream`, in which case the file extension decides.
pub fn declared_type(content_type: Option<&str>, file_name: Option<&str>) -> String {
    match content_type {
        Some(ct) if !ct.is_empty() && ct != "application/octet-stream" => ct.to_string(),
        _ => {
            let ext = file_name
                .and_then(|n| n.rsplit_once('.'))
                .map(|(_, ext)| ext.to_ascii_lowercase())
                .unwrap_or_default();
            match ext.as_str() {
                "pdf" => "application/pdf".to_string(),
                "docx" => DOCX_MIME.to_string(),
                "txt" => "text/plain".to_string(),
                "png" => "image/png".to_string(),
                "jpg" | "jpeg" => "image/jpeg".to_string(),
                _ => content_type.unwrap_or("application/octet-stream").to_string(),
            }
        }
    }
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: Bytes, content_type: &str) -> Result<String, ExtractionError>;
}

/// Default extractor: `pdf-extract` for PDFs, `zip` + `quick-xml` for DOCX,
/// UTF-8 decoding for plain text.
pub struct DocumentTextExtractor;

#[async_trait]
impl TextExtractor for DocumentTextExtractor {
    async fn extract(&self, bytes: Bytes, content_type: &str) -> Result<String, ExtractionError> {
        let kind = DocumentKind::from_mime(content_type)?;
        debug!("Extracting {:?} document ({} bytes)", kind, bytes.len());

        let text = match kind {
            DocumentKind::Pdf => tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem(&bytes)
                    .map_err(|e| ExtractionError::Pdf(e.to_string()))
            })
            .await
            .map_err(|e| ExtractionError::Task(e.to_string()))??,
            DocumentKind::Docx => tokio::task::spawn_blocking(move || extract_docx_text(&bytes))
                .await
                .map_err(|e| ExtractionError::Task(e.to_string()))??,
            DocumentKind::PlainText => String::from_utf8(bytes.to_vec())?,
            DocumentKind::Image => {
                return Err(ExtractionError::OcrUnavailable(content_type.to_string()))
            }
        };

        ensure_sufficient_text(text)
    }
}

/// Rejects text too short to be a resume.
pub fn ensure_sufficient_text(text: String) -> Result<String, ExtractionError> {
    let chars = text.trim().chars().count();
    if chars < MIN_EXTRACTED_TEXT_CHARS {
        return Err(ExtractionError::InsufficientText { chars });
    }
    Ok(text)
}
