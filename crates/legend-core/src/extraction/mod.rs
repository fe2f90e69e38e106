pub mod tesseract;

use crate::error::LegendError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Kind of uploaded document, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Image,
    /// Text that has already been through OCR.
    Text,
}

impl DocumentKind {
    pub fn from_name(name: &str) -> Result<DocumentKind, LegendError> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "jpg" | "jpeg" | "png" => Ok(DocumentKind::Image),
            "txt" => Ok(DocumentKind::Text),
            _ => Err(LegendError::UnsupportedFile(name.to_string())),
        }
    }
}

/// An uploaded legend document.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        SourceDocument {
            name: name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, LegendError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(SourceDocument { name, bytes })
    }

    pub fn kind(&self) -> Result<DocumentKind, LegendError> {
        DocumentKind::from_name(&self.name)
    }
}

/// OCR text of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentText {
    pub name: String,
    pub text: String,
}

/// A document that produced no text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionWarning {
    pub document: String,
    pub reason: String,
}

/// Text of all readable documents, in upload order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedText {
    pub documents: Vec<DocumentText>,
    pub warnings: Vec<ExtractionWarning>,
}

impl ExtractedText {
    /// All document texts joined in order, without a separator.
    pub fn concatenated(&self) -> String {
        self.documents.iter().map(|d| d.text.as_str()).collect()
    }
}

/// Read uploaded files in the order given.
///
/// A file that cannot be read is logged and reported as a warning instead
/// of aborting the run.
pub fn read_documents<P: AsRef<Path>>(
    paths: &[P],
) -> (Vec<SourceDocument>, Vec<ExtractionWarning>) {
    let mut documents = Vec::with_capacity(paths.len());
    let mut warnings = Vec::new();

    for path in paths {
        let path = path.as_ref();
        match SourceDocument::from_path(path) {
            Ok(document) => documents.push(document),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                warnings.push(ExtractionWarning {
                    document: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    (documents, warnings)
}

/// Trait for OCR/text extraction backends.
pub trait TextExtractor: Send + Sync {
    /// Extract the full text of a document.
    fn extract_text(&self, document: &SourceDocument) -> Result<String, LegendError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Run `extractor` over every document.
///
/// A document that fails to extract is logged and reported as a warning;
/// the remaining documents are still processed.
pub fn extract_documents(
    documents: &[SourceDocument],
    extractor: &dyn TextExtractor,
) -> ExtractedText {
    let mut out = ExtractedText::default();

    for document in documents {
        tracing::debug!(
            document = %document.name,
            backend = extractor.backend_name(),
            "extracting text"
        );
        match extractor.extract_text(document) {
            Ok(text) => out.documents.push(DocumentText {
                name: document.name.clone(),
                text,
            }),
            Err(e) => {
                tracing::warn!(document = %document.name, error = %e, "skipping unreadable document");
                out.warnings.push(ExtractionWarning {
                    document: document.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    out
}
