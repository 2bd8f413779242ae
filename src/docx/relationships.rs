use std::collections::HashMap;

use crate::error::Error;

/// Relationship id → target path, from a part's `.rels` file.
#[derive(Clone, Debug, Default)]
pub struct Relationships {
    targets: HashMap<String, String>,
}

impl Relationships {
    pub fn parse(xml_content: &str) -> Result<Self, Error> {
        let xml = roxmltree::Document::parse(xml_content)?;
        let mut targets = HashMap::new();
        for node in xml.root_element().children() {
            if node.tag_name().name() == "Relationship"
                && let (Some(id), Some(target)) = (node.attribute("Id"), node.attribute("Target"))
            {
                targets.insert(id.to_string(), target.to_string());
            }
        }
        Ok(Self { targets })
    }

    pub fn find_target(&self, id: &str) -> Option<&str> {
        self.targets.get(id).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Relationships {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            targets: iter
                .into_iter()
                .map(|(id, target)| (id.into(), target.into()))
                .collect(),
        }
    }
}
