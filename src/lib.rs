mod docx;
mod error;
pub mod model;
mod results;
pub mod xml;

pub use docx::{
    ContentTypes, DocumentReader, DocxFile, Numbering, RawFootnote, Relationships, Style, Styles,
    ZipDocxFile, raw_footnotes,
};
pub use error::Error;
pub use results::{ReadResult, Warning};

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use model::Document;

pub fn read_docx(input: &Path) -> Result<ReadResult<Document>, Error> {
    let file = std::fs::File::open(input).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => Error::Io(
            std::io::Error::new(e.kind(), format!("{}: {}", e, input.display())),
        ),
        _ => Error::Io(e),
    })?;
    read_docx_file(Arc::new(ZipDocxFile::new(file)?))
}

pub fn read_docx_bytes(input: Vec<u8>) -> Result<ReadResult<Document>, Error> {
    read_docx_file(Arc::new(ZipDocxFile::new(Cursor::new(input))?))
}

/// Converts the package behind `file`. Images in the returned document keep
/// `file` alive so their bytes can be read later.
pub fn read_docx_file(file: Arc<dyn DocxFile>) -> Result<ReadResult<Document>, Error> {
    let t0 = Instant::now();

    let result = docx::read(file)?;

    log::info!(
        "Timing: read={:.1}ms ({} top-level nodes, {} footnotes, {} warnings)",
        t0.elapsed().as_secs_f64() * 1000.0,
        result.value.children.len(),
        result.value.footnotes.len(),
        result.warnings.len(),
    );

    Ok(result)
}
