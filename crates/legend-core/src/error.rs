use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LegendError {
    #[error("text extraction failed: {0}")]
    Extraction(String),

    #[error("tesseract not found. Install it: brew install tesseract (macOS) or apt install tesseract-ocr (Linux)")]
    TesseractNotFound,

    #[error("pdftoppm not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftoppmNotFound,

    #[error("{tool} failed with exit code {code}: {stderr}")]
    ToolFailed {
        tool: String,
        code: i32,
        stderr: String,
    },

    #[error("unsupported file '{0}'. Expected a PDF, JPG, PNG or TXT file.")]
    UnsupportedFile(String),

    #[error("failed to load genus keywords from {path}: {reason}")]
    LookupLoad { path: PathBuf, reason: String },

    #[error("invalid genus keywords: {0}")]
    LookupInvalid(String),

    #[error("failed to load config from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("unknown category '{0}' (expected Tree, Accent, Shrub or Groundcover)")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
