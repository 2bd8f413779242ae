use crate::xml::{XmlElement, XmlNode};

/// A footnote as found in `word/footnotes.xml`, before its body is read.
#[derive(Clone, Debug, PartialEq)]
pub struct RawFootnote {
    pub id: String,
    pub body: Vec<XmlNode>,
}

/// Collects the footnotes of a `w:footnotes` root element. Separator and
/// continuation-separator footnotes only hold the rule drawn above the notes,
/// so they are skipped.
pub fn raw_footnotes(root: &XmlElement) -> Vec<RawFootnote> {
    root.elements_named("w:footnote")
        .filter(|note| {
            !matches!(
                note.attribute("w:type"),
                Some("separator" | "continuationSeparator")
            )
        })
        .filter_map(|note| {
            let id = note.attribute("w:id")?;
            Some(RawFootnote {
                id: id.to_string(),
                body: note.children.clone(),
            })
        })
        .collect()
}
