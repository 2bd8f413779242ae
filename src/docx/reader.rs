//! Conversion of WordprocessingML elements into document model nodes.
//!
//! Every reader returns a `ReadResult<Vec<Node>>`: a reader may produce no
//! node (ignored or unsupported input), one node, or the unwrapped children of
//! a container it does not represent itself. Unsupported input never stops the
//! conversion; it is reported as a warning next to whatever could be read.

use std::sync::Arc;

use super::archive::{DocxFile, join_zip_path};
use super::content_types::ContentTypes;
use super::footnotes::RawFootnote;
use super::numbering::Numbering;
use super::relationships::Relationships;
use super::styles::{Style, Styles};
use crate::model::{
    Document, Footnote, FootnoteReference, Footnotes, Hyperlink, Image, Node, Paragraph,
    ParagraphProperties, Run, RunProperties, Table, TableCell, TableRow,
};
use crate::results::ReadResult;
use crate::xml::{XmlElement, XmlNode};

const BLIP_CHAIN: &[&str] = &[
    "a:graphic",
    "a:graphicData",
    "pic:pic",
    "pic:blipFill",
    "a:blip",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ElementKind {
    Paragraph,
    Run,
    Text,
    Tab,
    Hyperlink,
    Table,
    TableRow,
    TableCell,
    FootnoteReference,
    Break,
    DrawingContainer,
    PassThrough,
    Ignored,
    Unknown,
}

impl ElementKind {
    fn of(name: &str) -> Self {
        match name {
            "w:p" => Self::Paragraph,
            "w:r" => Self::Run,
            "w:t" => Self::Text,
            "w:tab" => Self::Tab,
            "w:hyperlink" => Self::Hyperlink,
            "w:tbl" => Self::Table,
            "w:tr" => Self::TableRow,
            "w:tc" => Self::TableCell,
            "w:footnoteReference" => Self::FootnoteReference,
            "w:br" => Self::Break,
            "wp:inline" | "wp:anchor" => Self::DrawingContainer,
            "w:ins" | "w:smartTag" | "w:drawing" | "w:sdt" | "w:sdtContent" | "w:fldSimple" => {
                Self::PassThrough
            }
            "w:bookmarkStart"
            | "w:bookmarkEnd"
            | "w:sectPr"
            | "w:proofErr"
            | "w:lastRenderedPageBreak"
            | "w:commentRangeStart"
            | "w:commentRangeEnd"
            | "w:commentReference"
            | "w:del"
            | "w:footnoteRef"
            | "w:tblPr"
            | "w:tblGrid"
            | "w:trPr"
            | "w:tcPr"
            | "w:sdtPr"
            | "w:sdtEndPr"
            // Consumed by their paragraph/run before dispatch.
            | "w:pPr"
            | "w:rPr" => Self::Ignored,
            _ => Self::Unknown,
        }
    }
}

/// Reads a document body and its footnotes against the package's lookup
/// tables. The tables are borrowed for the duration of one conversion and
/// never modified.
pub struct DocumentReader<'a> {
    pub relationships: &'a Relationships,
    pub content_types: &'a ContentTypes,
    pub numbering: &'a Numbering,
    pub styles: &'a Styles,
    pub docx_file: Arc<dyn DocxFile>,
}

impl DocumentReader<'_> {
    /// Converts a `w:document` root element plus the package's raw footnotes.
    /// Body warnings come first, then footnote warnings.
    pub fn convert_document(
        &self,
        document: &XmlElement,
        raw_footnotes: &[RawFootnote],
    ) -> ReadResult<Document> {
        let body = match document.first("w:body") {
            Some(body) => self.read_nodes(&body.children),
            None => ReadResult::warning(Vec::new(), "Document has no body (w:body)"),
        };
        body.flat_map(|children| {
            self.read_footnotes(raw_footnotes)
                .map(|footnotes| Document {
                    children,
                    footnotes,
                })
        })
    }

    pub fn read_footnotes(&self, raw_footnotes: &[RawFootnote]) -> ReadResult<Footnotes> {
        ReadResult::combine(raw_footnotes.iter().map(|raw| {
            self.read_nodes(&raw.body).map(|body| Footnote {
                id: raw.id.clone(),
                body,
            })
        }))
        .flat_map(index_footnotes)
    }

    pub fn read_nodes<'n>(&self, nodes: impl IntoIterator<Item = &'n XmlNode>) -> ReadResult<Vec<Node>> {
        ReadResult::concat(nodes.into_iter().map(|node| self.read_node(node)))
    }

    pub fn read_node(&self, node: &XmlNode) -> ReadResult<Vec<Node>> {
        match node {
            XmlNode::Element(element) => self.read_element(element),
            XmlNode::Text(_) => ReadResult::of(Vec::new()),
        }
    }

    pub fn read_element(&self, element: &XmlElement) -> ReadResult<Vec<Node>> {
        match ElementKind::of(&element.name) {
            ElementKind::Paragraph => self.read_paragraph(element),
            ElementKind::Run => self.read_run(element),
            ElementKind::Text => ReadResult::of(vec![Node::Text(element.text())]),
            ElementKind::Tab => ReadResult::of(vec![Node::Tab]),
            ElementKind::Hyperlink => self.read_hyperlink(element),
            ElementKind::Table => self
                .read_children(element)
                .map(|children| vec![Node::Table(Table { children })]),
            ElementKind::TableRow => self
                .read_children(element)
                .map(|children| vec![Node::TableRow(TableRow { children })]),
            ElementKind::TableCell => self
                .read_children(element)
                .map(|children| vec![Node::TableCell(TableCell { children })]),
            ElementKind::FootnoteReference => {
                let footnote_id = element.attribute("w:id").unwrap_or_default().to_string();
                ReadResult::of(vec![Node::FootnoteReference(FootnoteReference {
                    footnote_id,
                })])
            }
            ElementKind::Break => read_break(element),
            ElementKind::DrawingContainer => self.read_drawing(element),
            ElementKind::PassThrough => self.read_children(element),
            ElementKind::Ignored => ReadResult::of(Vec::new()),
            ElementKind::Unknown => {
                log::debug!("Ignoring unrecognised element {}", element.name);
                ReadResult::warning(
                    Vec::new(),
                    format!("An unrecognised element was ignored: {}", element.name),
                )
            }
        }
    }

    fn read_children(&self, element: &XmlElement) -> ReadResult<Vec<Node>> {
        self.read_nodes(&element.children)
    }

    /// Splits `element`'s children into its properties (the first child named
    /// `properties_name`, read by `read_properties`) and the remaining
    /// children, read through the dispatcher.
    fn read_with_properties<P>(
        &self,
        element: &XmlElement,
        properties_name: &str,
        read_properties: impl FnOnce(&XmlElement) -> ReadResult<P>,
    ) -> ReadResult<(Option<P>, Vec<Node>)> {
        let properties = match element.first(properties_name) {
            Some(properties) => read_properties(properties).map(Some),
            None => ReadResult::of(None),
        };
        let children = element.children.iter().filter(|child| {
            child
                .as_element()
                .is_none_or(|e| e.name != properties_name)
        });
        properties.flat_map(|properties| {
            self.read_nodes(children)
                .map(|children| (properties, children))
        })
    }

    fn read_paragraph(&self, element: &XmlElement) -> ReadResult<Vec<Node>> {
        self.read_with_properties(element, "w:pPr", |ppr| {
            self.read_paragraph_properties(ppr)
        })
        .map(|(properties, children)| {
            vec![Node::Paragraph(Paragraph {
                children,
                properties: properties.unwrap_or_default(),
            })]
        })
    }

    fn read_run(&self, element: &XmlElement) -> ReadResult<Vec<Node>> {
        self.read_with_properties(element, "w:rPr", |rpr| self.read_run_properties(rpr))
            .map(|(properties, children)| {
                vec![Node::Run(Run {
                    children,
                    properties: properties.unwrap_or_default(),
                })]
            })
    }

    pub fn read_paragraph_properties(&self, element: &XmlElement) -> ReadResult<ParagraphProperties> {
        let alignment = element
            .first("w:jc")
            .and_then(|jc| jc.attribute("w:val"))
            .map(String::from);
        let numbering = element.first("w:numPr").and_then(|num_pr| {
            let level = num_pr.first("w:ilvl")?.attribute("w:val")?;
            let num_id = num_pr.first("w:numId")?.attribute("w:val")?;
            self.numbering.find_level(num_id, level).cloned()
        });

        read_style(element, "w:pStyle", "Paragraph", |id| {
            self.styles.find_paragraph_style_by_id(id)
        })
        .map(|(style_id, style_name)| ParagraphProperties {
            style_id,
            style_name,
            alignment,
            numbering,
        })
    }

    pub fn read_run_properties(&self, element: &XmlElement) -> ReadResult<RunProperties> {
        let vertical_alignment = element
            .first("w:vertAlign")
            .and_then(|v| v.attribute("w:val"))
            .map(String::from);
        let is_bold = element.first("w:b").is_some();
        let is_underline = element.first("w:u").is_some();
        let is_italic = element.first("w:i").is_some();

        read_style(element, "w:rStyle", "Run", |id| {
            self.styles.find_character_style_by_id(id)
        })
        .map(|(style_id, style_name)| RunProperties {
            style_id,
            style_name,
            vertical_alignment,
            is_bold,
            is_underline,
            is_italic,
        })
    }

    fn read_hyperlink(&self, element: &XmlElement) -> ReadResult<Vec<Node>> {
        let children = self.read_children(element);
        if let Some(relationship_id) = element.attribute("r:id").filter(|id| !id.is_empty()) {
            return match self.relationships.find_target(relationship_id) {
                Some(target) => children.map(|children| {
                    vec![Node::Hyperlink(Hyperlink {
                        children,
                        href: target.to_string(),
                    })]
                }),
                None => {
                    log::debug!("Hyperlink relationship {relationship_id} not found");
                    children.with_warning(format!(
                        "Could not find relationship with ID {relationship_id}; hyperlink was ignored"
                    ))
                }
            };
        }
        match element.attribute("w:anchor").filter(|anchor| !anchor.is_empty()) {
            Some(anchor) => children.map(|children| {
                vec![Node::Hyperlink(Hyperlink {
                    children,
                    href: format!("#{anchor}"),
                })]
            }),
            None => children,
        }
    }

    fn read_drawing(&self, element: &XmlElement) -> ReadResult<Vec<Node>> {
        let alt_text = element
            .first("wp:docPr")
            .and_then(|doc_pr| doc_pr.attribute("descr"))
            .map(String::from);
        ReadResult::concat(
            element
                .find_chain(BLIP_CHAIN)
                .into_iter()
                .map(|blip| self.read_blip(blip, alt_text.as_deref())),
        )
    }

    fn read_blip(&self, blip: &XmlElement, alt_text: Option<&str>) -> ReadResult<Vec<Node>> {
        let Some(relationship_id) = blip.attribute("r:embed") else {
            return ReadResult::warning(
                Vec::new(),
                "Image has no embedded relationship ID (linked images are not supported)",
            );
        };
        let Some(target) = self.relationships.find_target(relationship_id) else {
            log::debug!("Image relationship {relationship_id} not found");
            return ReadResult::warning(
                Vec::new(),
                format!("Could not find relationship with ID {relationship_id}; image was ignored"),
            );
        };
        let path = join_zip_path("word", target);
        let content_type = self.content_types.find_content_type(&path);
        ReadResult::of(vec![Node::Image(Image::new(
            alt_text.map(String::from),
            content_type,
            path,
            Arc::clone(&self.docx_file),
        ))])
    }
}

fn read_break(element: &XmlElement) -> ReadResult<Vec<Node>> {
    match element.attribute("w:type").filter(|t| !t.is_empty()) {
        Some(break_type) => {
            ReadResult::warning(Vec::new(), format!("Unsupported break type: {break_type}"))
        }
        None => ReadResult::of(vec![Node::LineBreak]),
    }
}

/// Reads the style id from `element`'s `style_tag` child and resolves its
/// name. An unknown id is kept, with a warning and no name.
fn read_style<'s>(
    element: &XmlElement,
    style_tag: &str,
    style_kind: &str,
    find_style: impl FnOnce(&str) -> Option<&'s Style>,
) -> ReadResult<(Option<String>, Option<String>)> {
    let Some(style_id) = element.first(style_tag).and_then(|s| s.attribute("w:val")) else {
        return ReadResult::of((None, None));
    };
    if style_id.is_empty() {
        return ReadResult::of((Some(String::new()), None));
    }
    match find_style(style_id) {
        Some(style) => ReadResult::of((Some(style_id.to_string()), style.name.clone())),
        None => ReadResult::warning(
            (Some(style_id.to_string()), None),
            format!("{style_kind} style with ID {style_id} was not found"),
        ),
    }
}

fn index_footnotes(footnotes: Vec<Footnote>) -> ReadResult<Footnotes> {
    let mut indexed = Footnotes::default();
    let mut result = ReadResult::of(());
    for footnote in footnotes {
        let id = footnote.id.clone();
        if indexed.insert(footnote).is_some() {
            result = result.with_warning(format!(
                "Duplicate footnote ID {id}; the last definition was used"
            ));
        }
    }
    result.map(|()| indexed)
}
