use crate::error::LegendError;
use crate::extraction::{DocumentKind, SourceDocument, TextExtractor};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// OCR backend using the `tesseract` command line tool.
///
/// PDFs are rasterized page by page with `pdftoppm` (from poppler-utils)
/// first. Plain text documents are passed through untouched.
pub struct TesseractExtractor {
    language: String,
    dpi: u32,
}

impl TesseractExtractor {
    pub fn new() -> Self {
        TesseractExtractor {
            language: "eng".to_string(),
            dpi: 300,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Check if tesseract is available on the system.
    pub fn is_available() -> bool {
        Command::new("tesseract")
            .arg("--version")
            .output()
            .map(|o| o.status.success() || !o.stdout.is_empty())
            .unwrap_or(false)
    }

    fn ocr_image(&self, image_path: &Path) -> Result<String, LegendError> {
        let stdout = run_tool(
            "tesseract",
            Command::new("tesseract")
                .arg(image_path)
                .arg("stdout")
                .arg("-l")
                .arg(&self.language)
                .arg("--dpi")
                .arg(self.dpi.to_string()),
        )?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    fn ocr_pdf(&self, pdf_bytes: &[u8]) -> Result<String, LegendError> {
        let dir = tempfile::tempdir().map_err(|e| LegendError::Extraction(e.to_string()))?;
        let pdf_path = dir.path().join("legend.pdf");
        std::fs::write(&pdf_path, pdf_bytes).map_err(|e| LegendError::Extraction(e.to_string()))?;

        let prefix = dir.path().join("page");
        run_tool(
            "pdftoppm",
            Command::new("pdftoppm")
                .arg("-r")
                .arg(self.dpi.to_string())
                .arg("-png")
                .arg(&pdf_path)
                .arg(&prefix),
        )?;

        let pages = page_images(dir.path())?;
        tracing::debug!(pages = pages.len(), "rasterized PDF");

        let mut text = String::new();
        for page in &pages {
            text.push_str(&self.ocr_image(page)?);
        }
        Ok(text)
    }
}

impl Default for TesseractExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for TesseractExtractor {
    fn extract_text(&self, document: &SourceDocument) -> Result<String, LegendError> {
        match document.kind()? {
            DocumentKind::Text => Ok(String::from_utf8_lossy(&document.bytes).into_owned()),
            DocumentKind::Pdf => self.ocr_pdf(&document.bytes),
            DocumentKind::Image => {
                let suffix = Path::new(&document.name)
                    .extension()
                    .map(|e| format!(".{}", e.to_string_lossy()))
                    .unwrap_or_default();
                let mut tmpfile = tempfile::Builder::new()
                    .suffix(&suffix)
                    .tempfile()
                    .map_err(|e| LegendError::Extraction(e.to_string()))?;
                tmpfile
                    .write_all(&document.bytes)
                    .map_err(|e| LegendError::Extraction(e.to_string()))?;
                self.ocr_image(tmpfile.path())
            }
        }
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}

/// Run an external tool and return its stdout.
fn run_tool(tool: &str, command: &mut Command) -> Result<Vec<u8>, LegendError> {
    let output = command.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            match tool {
                "pdftoppm" => LegendError::PdftoppmNotFound,
                _ => LegendError::TesseractNotFound,
            }
        } else {
            LegendError::Extraction(format!("{} failed: {}", tool, e))
        }
    })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(LegendError::ToolFailed {
            tool: tool.to_string(),
            code,
            stderr,
        });
    }

    Ok(output.stdout)
}

/// Page images written by pdftoppm, in page order.
///
/// pdftoppm zero-pads page numbers depending on the page count
/// ("page-1.png" or "page-01.png"), so sort numerically.
fn page_images(dir: &Path) -> Result<Vec<PathBuf>, LegendError> {
    let mut pages: Vec<(u32, PathBuf)> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter_map(|path| page_number(&path).map(|n| (n, path)))
        .collect();
    pages.sort_by_key(|(n, _)| *n);
    Ok(pages.into_iter().map(|(_, path)| path).collect())
}

fn page_number(path: &Path) -> Option<u32> {
    if path.extension()?.to_str()? != "png" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    stem.strip_prefix("page-")?.parse().ok()
}
