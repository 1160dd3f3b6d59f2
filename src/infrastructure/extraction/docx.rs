//! DOCX extraction from `word/document.xml`

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::domain::DomainError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Paragraph texts of a DOCX archive, one line per paragraph
pub fn extract_docx(bytes: &[u8]) -> Result<String, DomainError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DomainError::extraction("docx", format!("failed to open archive: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| DomainError::extraction("docx", format!("missing {}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| DomainError::extraction("docx", format!("failed to read {}: {}", DOCUMENT_PART, e)))?;

    let paragraphs = parse_paragraphs(&xml)?;
    tracing::debug!(paragraph_count = paragraphs.len(), "DOCX paragraphs extracted");

    Ok(paragraphs.join("\n"))
}

/// Walk the WordprocessingML body collecting `w:p` texts in document order.
///
/// Paragraphs nested inside another paragraph (text boxes) are emitted before
/// the enclosing paragraph closes.
fn parse_paragraphs(xml: &str) -> Result<Vec<String>, DomainError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut in_text_run = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| DomainError::extraction("docx", format!("malformed XML: {}", e)))?;

        match event {
            Event::Start(element) => match element.local_name().as_ref() {
                b"p" => open.push(String::new()),
                b"t" => in_text_run = true,
                _ => {}
            },
            Event::Empty(element) => match element.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                b"tab" => push_text(&mut open, "\t"),
                b"br" | b"cr" => push_text(&mut open, "\n"),
                _ => {}
            },
            Event::Text(text) if in_text_run => {
                let text = text
                    .unescape()
                    .map_err(|e| DomainError::extraction("docx", format!("bad text: {}", e)))?;
                push_text(&mut open, &text);
            }
            Event::CData(cdata) if in_text_run => {
                let text = std::str::from_utf8(&cdata)
                    .map_err(|e| DomainError::extraction("docx", format!("bad CDATA: {}", e)))?;
                push_text(&mut open, text);
            }
            Event::End(element) => match element.local_name().as_ref() {
                b"p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                b"t" => in_text_run = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_text(open: &mut [String], text: &str) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.push_str(text);
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::io::{Cursor, Write};

    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// Build a minimal DOCX archive whose body is the given paragraphs
    pub fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| {
                if p.is_empty() {
                    "<w:p/>".to_string()
                } else {
                    format!(
                        "<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
                        p
                    )
                }
            })
            .collect();

        docx_with_body(&body)
    }

    pub fn docx_with_body(body: &str) -> Vec<u8> {
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{}</w:body></w:document>",
            body
        );

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .expect("start file");
        writer.write_all(xml.as_bytes()).expect("write xml");
        writer.finish().expect("finish zip").into_inner()
    }
}
