#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("invalid DOCX: {0}")]
    InvalidDocx(String),
    #[error("missing part in DOCX archive: {0}")]
    MissingPart(String),
}
