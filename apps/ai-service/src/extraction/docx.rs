//! DOCX paragraph walk over `word/document.xml`.
//!
//! Only body-level paragraphs count, each emitted followed by a single `\n`.
//! Paragraphs nested in tables or text boxes are not document paragraphs and
//! are skipped. Within a paragraph, run text (`w:t`) is kept verbatim, `w:tab`
//! becomes a tab and `w:br` / `w:cr` a newline. Deleted text (`w:delText`) is
//! never read.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::errors::AppError;

const DOCUMENT_XML: &str = "word/document.xml";
/// Maximum decompressed bytes read from the document part (zip-bomb guard).
const MAX_XML_ENTRY_BYTES: u64 = 50 * 1024 * 1024;

pub fn extract_paragraphs(bytes: &[u8]) -> Result<String, AppError> {
    let xml = read_document_xml(bytes)?;
    walk_body(&xml)
}

fn read_document_xml(bytes: &[u8]) -> Result<Vec<u8>, AppError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::Extraction(format!("DOCX: {e}")))?;
    let entry = archive
        .by_name(DOCUMENT_XML)
        .map_err(|e| AppError::Extraction(format!("DOCX: {DOCUMENT_XML}: {e}")))?;

    let mut xml = Vec::new();
    entry
        .take(MAX_XML_ENTRY_BYTES)
        .read_to_end(&mut xml)
        .map_err(|e| AppError::Extraction(format!("DOCX: {e}")))?;
    if xml.len() as u64 >= MAX_XML_ENTRY_BYTES {
        return Err(AppError::Extraction(format!(
            "DOCX: {DOCUMENT_XML} exceeds size limit ({MAX_XML_ENTRY_BYTES} bytes)"
        )));
    }
    Ok(xml)
}

fn walk_body(xml: &[u8]) -> Result<String, AppError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    // Local names of the currently open elements, outermost first.
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut paragraph: Option<String> = None;
    let mut out = String::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| AppError::Extraction(format!("DOCX XML: {e}")))?;
        match event {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"p" && parent_is(&open, b"body") {
                    paragraph = Some(String::new());
                }
                open.push(name);
            }
            Event::Empty(e) => {
                let name = e.local_name();
                let name = name.as_ref();
                if name == b"p" && parent_is(&open, b"body") {
                    out.push('\n');
                } else if let Some(text) = paragraph.as_mut() {
                    if parent_is(&open, b"r") && !in_text_box(&open) {
                        match name {
                            b"tab" => text.push('\t'),
                            b"br" | b"cr" => text.push('\n'),
                            _ => {}
                        }
                    }
                }
            }
            Event::Text(t) => {
                if let Some(text) = paragraph.as_mut() {
                    if parent_is(&open, b"t") && run_text_counts(&open) {
                        let unescaped = t
                            .unescape()
                            .map_err(|e| AppError::Extraction(format!("DOCX XML: {e}")))?;
                        text.push_str(&unescaped);
                    }
                }
            }
            Event::End(_) => {
                let closed = open.pop();
                if closed.as_deref() == Some(b"p".as_slice()) && parent_is(&open, b"body") {
                    if let Some(text) = paragraph.take() {
                        out.push_str(&text);
                        out.push('\n');
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(out)
}

fn parent_is(open: &[Vec<u8>], name: &[u8]) -> bool {
    open.last().is_some_and(|n| n.as_slice() == name)
}

fn in_text_box(open: &[Vec<u8>]) -> bool {
    open.iter().any(|n| n.as_slice() == b"txbxContent")
}

/// `open` ends with `.., r, t`; the run must sit in the paragraph, not a text box.
fn run_text_counts(open: &[Vec<u8>]) -> bool {
    open.len() >= 2 && open[open.len() - 2].as_slice() == b"r" && !in_text_box(open)
}
