use std::collections::HashMap;

use super::{WML_NS, wml_attr};
use crate::error::Error;
use crate::model::NumberingLevel;

/// List definitions from `word/numbering.xml`.
#[derive(Clone, Debug, Default)]
pub struct Numbering {
    abstract_nums: HashMap<String, HashMap<String, NumberingLevel>>,
    num_to_abstract: HashMap<String, String>,
}

impl Numbering {
    pub fn parse(xml_content: &str) -> Result<Self, Error> {
        let xml = roxmltree::Document::parse(xml_content)?;
        let mut abstract_nums: HashMap<String, HashMap<String, NumberingLevel>> = HashMap::new();
        let mut num_to_abstract: HashMap<String, String> = HashMap::new();

        for node in xml.root_element().children() {
            if node.tag_name().namespace() != Some(WML_NS) {
                continue;
            }
            match node.tag_name().name() {
                "abstractNum" => {
                    let Some(abs_id) = node.attribute((WML_NS, "abstractNumId")) else {
                        continue;
                    };
                    let mut levels = HashMap::new();
                    for lvl in node.children() {
                        if lvl.tag_name().name() != "lvl"
                            || lvl.tag_name().namespace() != Some(WML_NS)
                        {
                            continue;
                        }
                        let Some(ilvl) = lvl.attribute((WML_NS, "ilvl")) else {
                            continue;
                        };
                        let format = wml_attr(lvl, "numFmt").unwrap_or("bullet").to_string();
                        levels.insert(
                            ilvl.to_string(),
                            NumberingLevel {
                                level: ilvl.to_string(),
                                is_ordered: format != "bullet",
                                format,
                            },
                        );
                    }
                    abstract_nums.insert(abs_id.to_string(), levels);
                }
                "num" => {
                    let Some(num_id) = node.attribute((WML_NS, "numId")) else {
                        continue;
                    };
                    let Some(abs_id) = wml_attr(node, "abstractNumId") else {
                        continue;
                    };
                    num_to_abstract.insert(num_id.to_string(), abs_id.to_string());
                }
                _ => {}
            }
        }

        Ok(Self {
            abstract_nums,
            num_to_abstract,
        })
    }

    pub fn find_level(&self, num_id: &str, level: &str) -> Option<&NumberingLevel> {
        let abs_id = self.num_to_abstract.get(num_id)?;
        self.abstract_nums.get(abs_id)?.get(level)
    }
}
