use legend_core::error::LegendError;
use legend_core::extraction::{extract_documents, read_documents};
use legend_core::extraction::tesseract::TesseractExtractor;
use std::path::PathBuf;

use super::load_config;

pub fn run(input_files: Vec<PathBuf>, config: Option<PathBuf>) -> Result<(), LegendError> {
    let config = load_config(config.as_deref())?;
    let (documents, unreadable) = read_documents(&input_files);
    let extractor = TesseractExtractor::new()
        .with_language(config.ocr.language)
        .with_dpi(config.ocr.dpi);

    let extracted = extract_documents(&documents, &extractor);
    for doc in &extracted.documents {
        println!("===== {} =====", doc.name);
        println!("{}", doc.text.trim_end());
        println!();
    }
    for w in unreadable.iter().chain(&extracted.warnings) {
        eprintln!("  warning: {}: {}", w.document, w.reason);
    }

    if extracted.documents.is_empty() {
        return Err(LegendError::Extraction(
            "none of the documents could be read".into(),
        ));
    }
    Ok(())
}
