use std::collections::HashMap;

use crate::error::Error;

// Used when [Content_Types].xml has no entry for an image extension.
const FALLBACK_IMAGE_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("bmp", "image/bmp"),
];

/// MIME types of package parts, from `[Content_Types].xml`.
#[derive(Clone, Debug, Default)]
pub struct ContentTypes {
    overrides: HashMap<String, String>, // lowercase part name without leading '/'
    extension_defaults: HashMap<String, String>, // lowercase extension
}

impl ContentTypes {
    pub fn parse(xml_content: &str) -> Result<Self, Error> {
        let xml = roxmltree::Document::parse(xml_content)?;
        let mut overrides = HashMap::new();
        let mut extension_defaults = HashMap::new();
        for node in xml.root_element().children() {
            let Some(content_type) = node.attribute("ContentType") else {
                continue;
            };
            match node.tag_name().name() {
                "Override" => {
                    if let Some(part_name) = node.attribute("PartName") {
                        let part_name = part_name.strip_prefix('/').unwrap_or(part_name);
                        overrides.insert(part_name.to_ascii_lowercase(), content_type.to_string());
                    }
                }
                "Default" => {
                    if let Some(extension) = node.attribute("Extension") {
                        extension_defaults
                            .insert(extension.to_ascii_lowercase(), content_type.to_string());
                    }
                }
                _ => {}
            }
        }
        Ok(Self {
            overrides,
            extension_defaults,
        })
    }

    pub fn find_content_type(&self, path: &str) -> Option<String> {
        let path = path.strip_prefix('/').unwrap_or(path);
        // Part names compare case-insensitively.
        if let Some(content_type) = self.overrides.get(&path.to_ascii_lowercase()) {
            return Some(content_type.clone());
        }
        let file_name = path.rsplit('/').next().unwrap_or(path);
        let (_, extension) = file_name.rsplit_once('.')?;
        let extension = extension.to_ascii_lowercase();
        self.extension_defaults
            .get(&extension)
            .cloned()
            .or_else(|| {
                FALLBACK_IMAGE_TYPES
                    .iter()
                    .find(|(ext, _)| *ext == extension)
                    .map(|(_, content_type)| content_type.to_string())
            })
    }
}
