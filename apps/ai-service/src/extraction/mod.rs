//! Text Extractor: converts an uploaded PDF or DOCX into plain text.
//!
//! Extraction is a pure function of (bytes, format): the path-based entry point
//! reads the file and delegates to the same byte-buffer path. All parser state
//! lives on the stack of a single call and is dropped on every exit path.
//! CPU-bound; async callers must run it inside `tokio::task::spawn_blocking`.

mod docx;

use std::any::Any;
use std::fmt;
use std::panic;
use std::path::Path;
use std::str::FromStr;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves the format from a file name's extension, case-insensitively.
    #[allow(dead_code)]
    pub fn from_file_name(name: &str) -> Result<Self, AppError> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| AppError::UnsupportedFormat(name.to_string()))?;
        ext.parse()
    }
}

impl FromStr for DocumentFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            other => Err(AppError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
        }
    }
}

/// An uploaded document together with the format the caller declared for it.
///
/// The declared format is kept as given; it is only validated by [`extract`],
/// so an unrecognised declaration fails before any byte is parsed.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Bytes,
    pub declared_format: String,
}

impl RawDocument {
    pub fn new(bytes: impl Into<Bytes>, declared_format: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            declared_format: declared_format.into(),
        }
    }

    /// Declares the format from an uploaded file's extension. A name without
    /// an extension declares nothing and is rejected by [`extract`].
    pub fn from_upload(file_name: &str, bytes: impl Into<Bytes>) -> Self {
        let declared = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Self::new(bytes, declared)
    }
}

/// Extracts the full text of a document, pages/paragraphs in source order.
pub fn extract(document: &RawDocument) -> Result<String, AppError> {
    let format: DocumentFormat = document.declared_format.parse()?;
    extract_bytes(&document.bytes, format)
}

/// Reads a document from disk, resolving the format from its extension.
// Path-based entry point for embedding callers; the HTTP layer only sees uploads.
#[allow(dead_code)]
pub fn extract_file(path: &Path) -> Result<String, AppError> {
    let format = DocumentFormat::from_file_name(&path.to_string_lossy())?;
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::Extraction(format!("cannot read {}: {e}", path.display())))?;
    extract_bytes(&bytes, format)
}

pub fn extract_bytes(bytes: &[u8], format: DocumentFormat) -> Result<String, AppError> {
    let text = match format {
        DocumentFormat::Pdf => extract_pdf(bytes)?,
        DocumentFormat::Docx => docx::extract_paragraphs(bytes)?,
    };
    debug!(
        "Extracted {} chars from {} byte {} document",
        text.len(),
        bytes.len(),
        format
    );
    Ok(text)
}

/// pdf-extract panics on some structurally broken documents (e.g. a page
/// without `/Resources`); a panic is reported like any other parse error.
fn extract_pdf(bytes: &[u8]) -> Result<String, AppError> {
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|payload| {
            let reason = panic_message(&*payload);
            warn!("PDF parser panicked: {reason}");
            AppError::Extraction(format!("PDF: {reason}"))
        })?
        .map_err(|e| AppError::Extraction(format!("PDF: {e}")))?;
    Ok(join_pages(pages))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "malformed document".to_string()
    }
}

/// Pages are concatenated as-is; each page carries its own trailing breaks.
fn join_pages(pages: Vec<String>) -> String {
    pages.concat()
}
