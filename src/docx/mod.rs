mod archive;
mod content_types;
mod footnotes;
mod numbering;
mod reader;
mod relationships;
mod styles;

use std::sync::Arc;

use crate::error::Error;
use crate::model::Document;
use crate::results::ReadResult;
use crate::xml;

pub use archive::{DocxFile, ZipDocxFile};
pub use content_types::ContentTypes;
pub use footnotes::{RawFootnote, raw_footnotes};
pub use numbering::Numbering;
pub use reader::DocumentReader;
pub use relationships::Relationships;
pub use styles::{Style, Styles};

use archive::read_optional_text;

pub(super) const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub(super) fn wml<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
}

pub(super) fn wml_attr<'a>(node: roxmltree::Node<'a, 'a>, child: &str) -> Option<&'a str> {
    wml(node, child).and_then(|n| n.attribute((WML_NS, "val")))
}

/// Parses an optional part with `parse`, falling back to the empty registry
/// when the package does not contain it.
fn load_part<T: Default>(
    file: &dyn DocxFile,
    path: &str,
    parse: impl FnOnce(&str) -> Result<T, Error>,
) -> Result<T, Error> {
    match read_optional_text(file, path)? {
        Some(content) => parse(&content),
        None => Ok(T::default()),
    }
}

/// Reads every part the document model needs from `file` and converts
/// `word/document.xml`.
pub fn read(file: Arc<dyn DocxFile>) -> Result<ReadResult<Document>, Error> {
    let content_types = load_part(file.as_ref(), "[Content_Types].xml", ContentTypes::parse)?;
    let relationships = load_part(
        file.as_ref(),
        "word/_rels/document.xml.rels",
        Relationships::parse,
    )?;
    let styles = load_part(file.as_ref(), "word/styles.xml", Styles::parse)?;
    let numbering = load_part(file.as_ref(), "word/numbering.xml", Numbering::parse)?;
    let footnotes = match read_optional_text(file.as_ref(), "word/footnotes.xml")? {
        Some(content) => raw_footnotes(&xml::parse(&content)?),
        None => Vec::new(),
    };

    let document_xml = read_optional_text(file.as_ref(), "word/document.xml")?.ok_or_else(|| {
        Error::InvalidDocx("missing word/document.xml (is this a DOCX file?)".into())
    })?;
    let document = xml::parse(&document_xml)?;

    let reader = DocumentReader {
        relationships: &relationships,
        content_types: &content_types,
        numbering: &numbering,
        styles: &styles,
        docx_file: Arc::clone(&file),
    };
    Ok(reader.convert_document(&document, &footnotes))
}
