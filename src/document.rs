//! Client-side checks on the file picked for upload.
//!
//! Only PDFs are forwarded to the extraction service. A file is treated as a
//! PDF when its extension maps to `application/pdf` and its content starts
//! with the `%PDF-` header; anything else is rejected before a request is
//! made.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Please select a PDF file.")]
    NotPdf { mime: &'static str },
    #[error("Could not read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is empty.", path.display())]
    Empty { path: PathBuf },
}

/// A PDF read from disk, ready to be sent as a multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ValidationError> {
        let path = path.as_ref();

        let mime = mime_for_path(path);
        if mime != PDF_MIME {
            return Err(ValidationError::NotPdf { mime });
        }

        let bytes = fs::read(path).map_err(|source| ValidationError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, bytes)
    }

    pub fn from_bytes<P: AsRef<Path>>(path: P, bytes: Vec<u8>) -> Result<Self, ValidationError> {
        let path = path.as_ref();

        if bytes.is_empty() {
            return Err(ValidationError::Empty {
                path: path.to_path_buf(),
            });
        }
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(ValidationError::NotPdf {
                mime: "application/octet-stream",
            });
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());

        Ok(Self { file_name, bytes })
    }

    pub fn mime(&self) -> &'static str {
        PDF_MIME
    }
}

/// Guess a MIME type from the file extension, the way a browser file picker
/// would label the selection.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => PDF_MIME,
        Some("txt") => "text/plain",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}
