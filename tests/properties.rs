mod common;

use docxide_model::model::{Node, NumberingLevel, ParagraphProperties, RunProperties};
use docxide_model::{Numbering, Style, Styles};

use common::{Lookups, element, messages};

const NUMBERING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="0">
    <w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/></w:lvl>
    <w:lvl w:ilvl="1"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%2."/></w:lvl>
  </w:abstractNum>
  <w:num w:numId="7"><w:abstractNumId w:val="0"/></w:num>
</w:numbering>"#;

fn lookups() -> Lookups {
    Lookups {
        styles: Styles::new(
            vec![Style {
                style_id: "Heading1".into(),
                name: Some("Heading 1".into()),
            }],
            vec![Style {
                style_id: "Emphasis".into(),
                name: Some("Emphasis".into()),
            }],
        ),
        numbering: Numbering::parse(NUMBERING_XML).expect("numbering.xml"),
        ..Default::default()
    }
}

#[test]
fn paragraph_style_is_resolved_to_its_name() {
    let lookups = lookups();
    let result = lookups.reader().read_paragraph_properties(&element(
        r#"<w:pPr><w:pStyle w:val="Heading1"/><w:jc w:val="both"/></w:pPr>"#,
    ));
    assert!(result.warnings.is_empty());
    assert_eq!(
        result.value,
        ParagraphProperties {
            style_id: Some("Heading1".into()),
            style_name: Some("Heading 1".into()),
            alignment: Some("both".into()),
            numbering: None,
        }
    );
}

#[test]
fn unknown_paragraph_style_keeps_id_and_warns() {
    let lookups = lookups();
    let result = lookups
        .reader()
        .read_paragraph_properties(&element(r#"<w:pPr><w:pStyle w:val="Missing"/></w:pPr>"#));
    assert_eq!(result.value.style_id.as_deref(), Some("Missing"));
    assert_eq!(result.value.style_name, None);
    assert_eq!(
        messages(&result.warnings),
        ["Paragraph style with ID Missing was not found"]
    );
}

#[test]
fn empty_style_id_is_kept_but_not_resolved() {
    let lookups = lookups();
    let result = lookups
        .reader()
        .read_paragraph_properties(&element(r#"<w:pPr><w:pStyle w:val=""/></w:pPr>"#));
    assert!(result.warnings.is_empty());
    assert_eq!(result.value.style_id.as_deref(), Some(""));
    assert_eq!(result.value.style_name, None);
}

#[test]
fn numbering_is_looked_up_by_num_id_and_level() {
    let lookups = lookups();
    let reader = lookups.reader();

    let ordered = reader.read_paragraph_properties(&element(
        r#"<w:pPr><w:numPr><w:ilvl w:val="1"/><w:numId w:val="7"/></w:numPr></w:pPr>"#,
    ));
    assert_eq!(
        ordered.value.numbering,
        Some(NumberingLevel {
            level: "1".into(),
            is_ordered: true,
            format: "decimal".into(),
        })
    );

    let bullet = reader.read_paragraph_properties(&element(
        r#"<w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="7"/></w:numPr></w:pPr>"#,
    ));
    assert_eq!(bullet.value.numbering.map(|n| n.is_ordered), Some(false));

    let unknown = reader.read_paragraph_properties(&element(
        r#"<w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="99"/></w:numPr></w:pPr>"#,
    ));
    assert_eq!(unknown.value.numbering, None);
    assert!(unknown.warnings.is_empty());
}

#[test]
fn run_flags_are_set_by_presence() {
    let lookups = lookups();
    let result = lookups.reader().read_run_properties(&element(
        r#"<w:rPr><w:rStyle w:val="Emphasis"/><w:b w:val="0"/><w:i/><w:u w:val="single"/><w:vertAlign w:val="superscript"/></w:rPr>"#,
    ));
    assert!(result.warnings.is_empty());
    assert_eq!(
        result.value,
        RunProperties {
            style_id: Some("Emphasis".into()),
            style_name: Some("Emphasis".into()),
            vertical_alignment: Some("superscript".into()),
            is_bold: true,
            is_underline: true,
            is_italic: true,
        }
    );
}

#[test]
fn empty_run_properties_are_all_false() {
    let lookups = lookups();
    let result = lookups.reader().read_run_properties(&element("<w:rPr/>"));
    assert_eq!(result.value, RunProperties::default());
}

#[test]
fn unknown_run_style_warns_through_the_run() {
    let lookups = lookups();
    let result = lookups.reader().read_element(&element(
        r#"<w:r><w:rPr><w:rStyle w:val="Ghost"/></w:rPr><w:t>boo</w:t></w:r>"#,
    ));
    let [Node::Run(run)] = result.value.as_slice() else {
        panic!("expected one run, got {:?}", result.value);
    };
    assert_eq!(run.properties.style_id.as_deref(), Some("Ghost"));
    assert_eq!(run.children, vec![Node::Text("boo".into())]);
    assert_eq!(
        messages(&result.warnings),
        ["Run style with ID Ghost was not found"]
    );
}

#[test]
fn styles_are_parsed_by_type() {
    let styles = Styles::parse(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
            <w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/></w:style>
            <w:style w:type="character" w:styleId="Strong"><w:name w:val="Strong"/></w:style>
            <w:style w:type="table" w:styleId="Grid"><w:name w:val="Table Grid"/></w:style>
        </w:styles>"#,
    )
    .expect("styles.xml");
    assert_eq!(
        styles.find_paragraph_style_by_id("Title").and_then(|s| s.name.as_deref()),
        Some("Title")
    );
    assert!(styles.find_character_style_by_id("Title").is_none());
    assert!(styles.find_character_style_by_id("Strong").is_some());
    assert!(styles.find_paragraph_style_by_id("Grid").is_none());
}
