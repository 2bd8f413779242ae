mod common;

use docxide_model::Relationships;
use docxide_model::model::{Hyperlink, Node, Run, RunProperties};

use common::{Lookups, element, messages};

fn lookups() -> Lookups {
    Lookups {
        relationships: [("rId7", "media/page.html")].into_iter().collect::<Relationships>(),
        ..Default::default()
    }
}

fn link_text_run() -> Node {
    Node::Run(Run {
        children: vec![Node::Text("click".into())],
        properties: RunProperties::default(),
    })
}

#[test]
fn hyperlink_with_relationship_wraps_children() {
    let lookups = lookups();
    let result = lookups.reader().read_element(&element(
        r#"<w:hyperlink r:id="rId7"><w:r><w:t>click</w:t></w:r></w:hyperlink>"#,
    ));
    assert!(result.warnings.is_empty());
    assert_eq!(
        result.value,
        vec![Node::Hyperlink(Hyperlink {
            children: vec![link_text_run()],
            href: "media/page.html".into(),
        })]
    );
}

#[test]
fn hyperlink_without_relationship_is_unwrapped() {
    let lookups = lookups();
    let result = lookups
        .reader()
        .read_element(&element(r#"<w:hyperlink><w:r><w:t>click</w:t></w:r></w:hyperlink>"#));
    assert!(result.warnings.is_empty());
    assert_eq!(result.value, vec![link_text_run()]);
}

#[test]
fn hyperlink_with_empty_relationship_id_is_unwrapped() {
    let lookups = lookups();
    let result = lookups.reader().read_element(&element(
        r#"<w:hyperlink r:id=""><w:r><w:t>click</w:t></w:r></w:hyperlink>"#,
    ));
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    assert_eq!(result.value, vec![link_text_run()]);
}

#[test]
fn hyperlink_to_bookmark_uses_anchor() {
    let lookups = lookups();
    let result = lookups.reader().read_element(&element(
        r#"<w:hyperlink w:anchor="_Toc1"><w:r><w:t>click</w:t></w:r></w:hyperlink>"#,
    ));
    assert_eq!(
        result.value,
        vec![Node::Hyperlink(Hyperlink {
            children: vec![link_text_run()],
            href: "#_Toc1".into(),
        })]
    );
}

#[test]
fn unknown_relationship_degrades_to_children_with_warning() {
    let lookups = lookups();
    let result = lookups.reader().read_element(&element(
        r#"<w:hyperlink r:id="rId404"><w:r><w:t>click</w:t></w:r><w:blink/></w:hyperlink>"#,
    ));
    assert_eq!(result.value, vec![link_text_run()]);
    assert_eq!(
        messages(&result.warnings),
        [
            "An unrecognised element was ignored: w:blink",
            "Could not find relationship with ID rId404; hyperlink was ignored",
        ]
    );
}

#[test]
fn relationships_are_parsed_from_rels_part() {
    let rels = Relationships::parse(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
        <Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
            <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
            <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com/" TargetMode="External"/>
        </Relationships>"#,
    )
    .expect("rels");
    assert_eq!(rels.find_target("rId1"), Some("styles.xml"));
    assert_eq!(rels.find_target("rId2"), Some("https://example.com/"));
    assert_eq!(rels.find_target("rId3"), None);
}
