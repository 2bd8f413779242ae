use std::collections::HashMap;
use std::io::{Read, Seek};
use std::sync::Mutex;

use crate::error::Error;

/// Read access to the parts of a DOCX package.
pub trait DocxFile: Send + Sync {
    /// Reads the part at `path`, failing with [`Error::MissingPart`] if the
    /// package has no such part.
    fn read(&self, path: &str) -> Result<Vec<u8>, Error>;
}

pub struct ZipDocxFile<R> {
    zip: Mutex<zip::ZipArchive<R>>,
}

impl<R: Read + Seek> ZipDocxFile<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let zip = zip::ZipArchive::new(reader).map_err(|e| match e {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::InvalidArchive(_) => {
                Error::InvalidDocx(format!("file is not a ZIP archive ({e})"))
            }
            e => Error::Zip(e),
        })?;
        Ok(Self {
            zip: Mutex::new(zip),
        })
    }
}

impl<R: Read + Seek + Send> DocxFile for ZipDocxFile<R> {
    fn read(&self, path: &str) -> Result<Vec<u8>, Error> {
        let mut zip = self
            .zip
            .lock()
            .map_err(|_| Error::InvalidDocx("archive lock poisoned".into()))?;
        let mut entry = match zip.by_name(path) {
            Ok(entry) => entry,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(Error::MissingPart(path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        let mut data = Vec::new();
        entry.read_to_end(&mut data)?;
        Ok(data)
    }
}

impl DocxFile for HashMap<String, Vec<u8>> {
    fn read(&self, path: &str) -> Result<Vec<u8>, Error> {
        self.get(path)
            .cloned()
            .ok_or_else(|| Error::MissingPart(path.to_string()))
    }
}

/// Reads a text part, treating an absent part as `None`.
pub(crate) fn read_optional_text(file: &dyn DocxFile, path: &str) -> Result<Option<String>, Error> {
    match file.read(path) {
        Ok(bytes) => String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| Error::InvalidDocx(format!("{path} is not valid UTF-8"))),
        Err(Error::MissingPart(_)) => {
            log::debug!("Optional part {path} not present");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Resolves a relationship target against the `word/` directory. Targets
/// starting with `/` are already package-absolute.
pub(crate) fn join_zip_path(base: &str, target: &str) -> String {
    target
        .strip_prefix('/')
        .map(String::from)
        .unwrap_or_else(|| format!("{}/{}", base, target))
}
