use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::docx::DocxFile;
use crate::error::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Paragraph(Paragraph),
    Run(Run),
    Text(String),
    Tab,
    LineBreak,
    Hyperlink(Hyperlink),
    Table(Table),
    TableRow(TableRow),
    TableCell(TableCell),
    FootnoteReference(FootnoteReference),
    Image(Image),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphProperties {
    pub style_id: Option<String>,
    pub style_name: Option<String>,
    pub alignment: Option<String>, // raw w:jc value, e.g. "center", "both"
    pub numbering: Option<NumberingLevel>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunProperties {
    pub style_id: Option<String>,
    pub style_name: Option<String>,
    pub vertical_alignment: Option<String>, // raw w:vertAlign value
    pub is_bold: bool,
    pub is_underline: bool,
    pub is_italic: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberingLevel {
    pub level: String,
    pub is_ordered: bool,
    pub format: String, // w:numFmt, e.g. "decimal", "bullet"
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paragraph {
    pub children: Vec<Node>,
    pub properties: ParagraphProperties,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Run {
    pub children: Vec<Node>,
    pub properties: RunProperties,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hyperlink {
    pub children: Vec<Node>,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableRow {
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableCell {
    pub children: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FootnoteReference {
    pub footnote_id: String,
}

/// An image embedded in the package. The bytes stay in the archive until
/// [`Image::read`] is called.
#[derive(Clone)]
pub struct Image {
    pub alt_text: Option<String>,
    pub content_type: Option<String>,
    /// Archive path of the image part, e.g. `word/media/image1.png`.
    pub path: String,
    source: Arc<dyn DocxFile>,
}

impl Image {
    pub fn new(
        alt_text: Option<String>,
        content_type: Option<String>,
        path: String,
        source: Arc<dyn DocxFile>,
    ) -> Self {
        Self {
            alt_text,
            content_type,
            path,
            source,
        }
    }

    pub fn read(&self) -> Result<Vec<u8>, Error> {
        self.source.read(&self.path)
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("alt_text", &self.alt_text)
            .field("content_type", &self.content_type)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// Two images are equal when they describe the same part; the archive handle is
// not compared.
impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.alt_text == other.alt_text
            && self.content_type == other.content_type
            && self.path == other.path
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Footnote {
    pub id: String,
    pub body: Vec<Node>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Footnotes {
    by_id: HashMap<String, Footnote>,
}

impl Footnotes {
    pub fn find(&self, id: &str) -> Option<&Footnote> {
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Footnotes sorted by id, numerically where the ids are numbers.
    pub fn sorted(&self) -> Vec<&Footnote> {
        let mut footnotes: Vec<&Footnote> = self.by_id.values().collect();
        footnotes.sort_by(|a, b| {
            match (a.id.parse::<i64>(), b.id.parse::<i64>()) {
                (Ok(x), Ok(y)) => x.cmp(&y),
                _ => a.id.cmp(&b.id),
            }
        });
        footnotes
    }

    /// Inserts a footnote, returning the one it replaced if the id was taken.
    pub(crate) fn insert(&mut self, footnote: Footnote) -> Option<Footnote> {
        self.by_id.insert(footnote.id.clone(), footnote)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub children: Vec<Node>,
    pub footnotes: Footnotes,
}
