use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use docxide_model::model::{Document, Node};

#[derive(Parser)]
#[command(name = "docxide-model", version, about = "Read a DOCX file into a document model and print its outline")]
struct Cli {
    /// Input DOCX file
    input: PathBuf,

    /// Read every image's bytes and print their size
    #[arg(long)]
    images: bool,

    /// Only report warnings, don't print the outline
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result = match docxide_model::read_docx(&cli.input) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for warning in &result.warnings {
        log::warn!("{warning}");
    }

    if !cli.quiet {
        print!("{}", outline(&result.value, cli.images));
    }

    ExitCode::SUCCESS
}

fn outline(doc: &Document, images: bool) -> String {
    let mut out = String::new();
    write_nodes(&mut out, &doc.children, 0, images);
    for footnote in doc.footnotes.sorted() {
        let _ = writeln!(out, "footnote {}", footnote.id);
        write_nodes(&mut out, &footnote.body, 1, images);
    }
    out
}

fn write_nodes(out: &mut String, nodes: &[Node], depth: usize, images: bool) {
    for node in nodes {
        write_node(out, node, depth, images);
    }
}

fn write_node(out: &mut String, node: &Node, depth: usize, images: bool) {
    let indent = "  ".repeat(depth);
    match node {
        Node::Paragraph(p) => {
            let mut line = format!("{indent}paragraph");
            if let Some(name) = p.properties.style_name.as_ref().or(p.properties.style_id.as_ref()) {
                let _ = write!(line, " [{name}]");
            }
            if let Some(alignment) = &p.properties.alignment {
                let _ = write!(line, " align={alignment}");
            }
            if let Some(numbering) = &p.properties.numbering {
                let kind = if numbering.is_ordered { "ordered" } else { "bullet" };
                let _ = write!(line, " list={kind}/{}", numbering.level);
            }
            let _ = writeln!(out, "{line}");
            write_nodes(out, &p.children, depth + 1, images);
        }
        Node::Run(r) => {
            let props = &r.properties;
            let flags: Vec<&str> = [
                (props.is_bold, "bold"),
                (props.is_italic, "italic"),
                (props.is_underline, "underline"),
            ]
            .into_iter()
            .filter_map(|(on, name)| on.then_some(name))
            .chain(props.vertical_alignment.as_deref())
            .chain(props.style_name.as_deref().or(props.style_id.as_deref()))
            .collect();
            if flags.is_empty() {
                let _ = writeln!(out, "{indent}run");
            } else {
                let _ = writeln!(out, "{indent}run ({})", flags.join(", "));
            }
            write_nodes(out, &r.children, depth + 1, images);
        }
        Node::Text(text) => {
            let _ = writeln!(out, "{indent}{text:?}");
        }
        Node::Tab => {
            let _ = writeln!(out, "{indent}tab");
        }
        Node::LineBreak => {
            let _ = writeln!(out, "{indent}line break");
        }
        Node::Hyperlink(h) => {
            let _ = writeln!(out, "{indent}hyperlink -> {}", h.href);
            write_nodes(out, &h.children, depth + 1, images);
        }
        Node::Table(t) => {
            let _ = writeln!(out, "{indent}table");
            write_nodes(out, &t.children, depth + 1, images);
        }
        Node::TableRow(r) => {
            let _ = writeln!(out, "{indent}row");
            write_nodes(out, &r.children, depth + 1, images);
        }
        Node::TableCell(c) => {
            let _ = writeln!(out, "{indent}cell");
            write_nodes(out, &c.children, depth + 1, images);
        }
        Node::FootnoteReference(f) => {
            let _ = writeln!(out, "{indent}footnote reference {}", f.footnote_id);
        }
        Node::Image(img) => {
            let mut line = format!(
                "{indent}image {} ({})",
                img.path,
                img.content_type.as_deref().unwrap_or("unknown type")
            );
            if let Some(alt) = &img.alt_text {
                let _ = write!(line, " alt={alt:?}");
            }
            if images {
                match img.read() {
                    Ok(bytes) => {
                        let _ = write!(line, " {} bytes", bytes.len());
                    }
                    Err(e) => log::warn!("Could not read image {}: {e}", img.path),
                }
            }
            let _ = writeln!(out, "{line}");
        }
    }
}
