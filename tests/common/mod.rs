#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::sync::Arc;

use docxide_model::xml::{self, XmlElement, XmlNode};
use docxide_model::{ContentTypes, DocumentReader, DocxFile, Numbering, Relationships, Styles};

pub const NAMESPACES: &str = concat!(
    r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
    r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
    r#"xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" "#,
    r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
    r#"xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture""#,
);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wraps a body fragment in a complete `w:document`.
pub fn document_xml(body: &str) -> String {
    format!(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document {NAMESPACES}><w:body>{body}</w:body></w:document>"#)
}

/// Parses a single namespaced element, e.g. `<w:p>...</w:p>`.
pub fn element(fragment: &str) -> XmlElement {
    let root = xml::parse(&format!("<w:fragment {NAMESPACES}>{fragment}</w:fragment>"))
        .expect("fragment should be well-formed");
    root.elements()
        .next()
        .cloned()
        .expect("fragment should contain an element")
}

/// Parses the children of a fragment, keeping text nodes.
pub fn nodes(fragment: &str) -> Vec<XmlNode> {
    xml::parse(&format!("<w:fragment {NAMESPACES}>{fragment}</w:fragment>"))
        .expect("fragment should be well-formed")
        .children
}

/// Lookup tables and package contents for one conversion.
#[derive(Default)]
pub struct Lookups {
    pub relationships: Relationships,
    pub content_types: ContentTypes,
    pub numbering: Numbering,
    pub styles: Styles,
    pub parts: HashMap<String, Vec<u8>>,
}

impl Lookups {
    pub fn reader(&self) -> DocumentReader<'_> {
        let docx_file: Arc<dyn DocxFile> = Arc::new(self.parts.clone());
        DocumentReader {
            relationships: &self.relationships,
            content_types: &self.content_types,
            numbering: &self.numbering,
            styles: &self.styles,
            docx_file,
        }
    }
}

/// Builds an in-memory DOCX (ZIP) archive from `(path, content)` pairs.
pub fn build_docx(parts: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (path, content) in parts {
        zip.start_file(*path, options).expect("start zip entry");
        zip.write_all(content).expect("write zip entry");
    }
    zip.finish().expect("finish zip").into_inner()
}

pub fn messages(warnings: &[docxide_model::Warning]) -> Vec<String> {
    warnings.iter().map(|w| w.message().to_string()).collect()
}
