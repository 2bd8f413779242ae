use std::collections::HashMap;

use super::{WML_NS, wml_attr};
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style {
    pub style_id: String,
    pub name: Option<String>,
}

/// Paragraph and character styles from `word/styles.xml`, keyed by style id.
#[derive(Clone, Debug, Default)]
pub struct Styles {
    paragraph_styles: HashMap<String, Style>,
    character_styles: HashMap<String, Style>,
}

impl Styles {
    pub fn new(paragraph_styles: Vec<Style>, character_styles: Vec<Style>) -> Self {
        let by_id = |styles: Vec<Style>| {
            styles
                .into_iter()
                .map(|s| (s.style_id.clone(), s))
                .collect::<HashMap<_, _>>()
        };
        Self {
            paragraph_styles: by_id(paragraph_styles),
            character_styles: by_id(character_styles),
        }
    }

    pub fn parse(xml_content: &str) -> Result<Self, Error> {
        let xml = roxmltree::Document::parse(xml_content)?;
        let mut paragraph_styles = HashMap::new();
        let mut character_styles = HashMap::new();

        for style_node in xml.root_element().children() {
            if style_node.tag_name().name() != "style"
                || style_node.tag_name().namespace() != Some(WML_NS)
            {
                continue;
            }
            let Some(style_id) = style_node.attribute((WML_NS, "styleId")) else {
                continue;
            };
            let styles = match style_node.attribute((WML_NS, "type")) {
                Some("paragraph") => &mut paragraph_styles,
                Some("character") => &mut character_styles,
                _ => continue,
            };
            let name = wml_attr(style_node, "name").map(|s| s.to_string());
            styles.insert(
                style_id.to_string(),
                Style {
                    style_id: style_id.to_string(),
                    name,
                },
            );
        }

        Ok(Self {
            paragraph_styles,
            character_styles,
        })
    }

    pub fn find_paragraph_style_by_id(&self, style_id: &str) -> Option<&Style> {
        self.paragraph_styles.get(style_id)
    }

    pub fn find_character_style_by_id(&self, style_id: &str) -> Option<&Style> {
        self.character_styles.get(style_id)
    }
}
