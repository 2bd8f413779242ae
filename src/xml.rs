//! Owned element tree for WordprocessingML parts.
//!
//! Parts are parsed with roxmltree and copied into [`XmlElement`]s whose names
//! use the conventional OOXML prefixes (`w:p`, `wp:inline`, `a:blip`, `r:id`),
//! regardless of the prefixes declared in the source document.

use std::collections::HashMap;

use crate::error::Error;

const NAMESPACE_PREFIXES: &[(&str, &str)] = &[
    ("http://schemas.openxmlformats.org/wordprocessingml/2006/main", "w"),
    ("http://schemas.openxmlformats.org/officeDocument/2006/relationships", "r"),
    ("http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing", "wp"),
    ("http://schemas.openxmlformats.org/drawingml/2006/main", "a"),
    ("http://schemas.openxmlformats.org/drawingml/2006/picture", "pic"),
    ("http://schemas.openxmlformats.org/package/2006/content-types", "content-types"),
    ("http://schemas.openxmlformats.org/package/2006/relationships", "relationships"),
    ("http://schemas.openxmlformats.org/markup-compatibility/2006", "mc"),
    ("http://www.w3.org/XML/1998/namespace", "xml"),
];

#[derive(Clone, Debug, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

impl XmlNode {
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(
        name: impl Into<String>,
        attributes: HashMap<String, String>,
        children: Vec<XmlNode>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            children,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    pub fn elements_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |e| e.name == name)
    }

    /// First child element called `name`.
    pub fn first(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.name == name)
    }

    /// Concatenated text of the direct text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                XmlNode::Text(text) => Some(text.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }

    /// Every element reached by following `names` one level at a time, e.g.
    /// `["a:graphic", "a:graphicData"]` yields all `a:graphicData` children of
    /// all `a:graphic` children of `self`.
    pub fn find_chain(&self, names: &[&str]) -> Vec<&XmlElement> {
        names.iter().fold(vec![self], |found, name| {
            found
                .into_iter()
                .flat_map(|e| e.elements_named(name))
                .collect()
        })
    }
}

fn qualified_name(namespace: Option<&str>, local: &str) -> String {
    match namespace {
        None => local.to_string(),
        Some(uri) => match NAMESPACE_PREFIXES.iter().find(|(ns, _)| *ns == uri) {
            Some((_, prefix)) => format!("{prefix}:{local}"),
            None => format!("{{{uri}}}{local}"),
        },
    }
}

fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{FEFF}').unwrap_or(s)
}

fn convert(node: roxmltree::Node) -> XmlElement {
    let attributes = node
        .attributes()
        .map(|a| (qualified_name(a.namespace(), a.name()), a.value().to_string()))
        .collect();
    let children = node
        .children()
        .filter_map(|child| {
            if child.is_element() {
                Some(XmlNode::Element(convert(child)))
            } else if child.is_text() {
                child.text().map(|t| XmlNode::Text(t.to_string()))
            } else {
                None
            }
        })
        .collect();
    XmlElement {
        name: qualified_name(node.tag_name().namespace(), node.tag_name().name()),
        attributes,
        children,
    }
}

/// Parses an XML part and returns its root element.
pub fn parse(xml: &str) -> Result<XmlElement, Error> {
    let doc = roxmltree::Document::parse(strip_bom(xml))?;
    Ok(convert(doc.root_element()))
}
