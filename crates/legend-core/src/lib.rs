pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod keywords;
pub mod model;
pub mod parsing;

use aggregate::aggregate;
use config::{DocumentMode, ExtractConfig};
use error::LegendError;
use extraction::{
    extract_documents, read_documents, ExtractionWarning, SourceDocument, TextExtractor,
};
use keywords::GenusLookup;
use model::{Category, PlantSchedule};
use parsing::{parse_entries, SkippedLine};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling parsing and classification.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub lookup: GenusLookup,
    pub fallback: Category,
    pub mode: DocumentMode,
}

impl ExtractOptions {
    /// Build options from a config, loading its keyword file if one is set.
    pub fn from_config(config: &ExtractConfig) -> Result<Self, LegendError> {
        let lookup = match &config.keywords {
            Some(path) => keywords::load_lookup(path)?,
            None => GenusLookup::default(),
        };
        Ok(ExtractOptions {
            lookup,
            fallback: config.fallback,
            mode: config.mode,
        })
    }
}

/// Per-document part of an extraction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub name: String,
    pub characters: usize,
    /// Schedule of this document alone. Only built in per-document mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<PlantSchedule>,
}

/// Result of an extraction run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedSchedule {
    pub schedule: PlantSchedule,
    pub documents: Vec<DocumentSummary>,
    /// Documents that could not be read.
    pub warnings: Vec<ExtractionWarning>,
    pub skipped_lines: Vec<SkippedLine>,
}

/// Parse and aggregate a single block of OCR text.
///
/// Empty text, or text without any quantity-first lines, yields an empty
/// schedule.
pub fn parse_schedule(text: &str, options: &ExtractOptions) -> ParsedSchedule {
    let parsed = parse_entries(text, &options.lookup, options.fallback);
    let schedule = aggregate(&parsed.entries);

    tracing::info!(
        entries = parsed.entries.len(),
        rows = schedule.len(),
        skipped = parsed.skipped_lines.len(),
        "parsed plant schedule"
    );

    ParsedSchedule {
        schedule,
        documents: vec![],
        warnings: vec![],
        skipped_lines: parsed.skipped_lines,
    }
}

/// Main API entry point: OCR every document and build one plant schedule.
///
/// Unreadable documents are left out and reported in `warnings`. With
/// [`DocumentMode::Concatenate`] the document texts are joined in order
/// and parsed as one; with [`DocumentMode::PerDocument`] each document is
/// parsed on its own and the entries are merged.
pub fn extract_schedule(
    documents: &[SourceDocument],
    extractor: &dyn TextExtractor,
    options: &ExtractOptions,
) -> ParsedSchedule {
    let extracted = extract_documents(documents, extractor);

    let mut result = match options.mode {
        DocumentMode::Concatenate => {
            let mut result = parse_schedule(&extracted.concatenated(), options);
            result.documents = extracted
                .documents
                .iter()
                .map(|d| DocumentSummary {
                    name: d.name.clone(),
                    characters: d.text.chars().count(),
                    subtotal: None,
                })
                .collect();
            result
        }
        DocumentMode::PerDocument => {
            let mut entries = Vec::new();
            let mut summaries = Vec::new();
            let mut skipped_lines = Vec::new();
            for document in &extracted.documents {
                let parsed = parse_entries(&document.text, &options.lookup, options.fallback);
                tracing::debug!(
                    document = %document.name,
                    entries = parsed.entries.len(),
                    "parsed document"
                );
                summaries.push(DocumentSummary {
                    name: document.name.clone(),
                    characters: document.text.chars().count(),
                    subtotal: Some(aggregate(&parsed.entries)),
                });
                entries.extend(parsed.entries);
                skipped_lines.extend(parsed.skipped_lines);
            }
            ParsedSchedule {
                schedule: aggregate(&entries),
                documents: summaries,
                warnings: vec![],
                skipped_lines,
            }
        }
    };

    result.warnings = extracted.warnings;
    result
}

/// Read files from disk and run [`extract_schedule`] over them.
///
/// Files that cannot be read are reported in `warnings` ahead of any
/// extraction failures and are otherwise left out.
pub fn extract_files<P: AsRef<Path>>(
    paths: &[P],
    extractor: &dyn TextExtractor,
    options: &ExtractOptions,
) -> ParsedSchedule {
    let (documents, unreadable) = read_documents(paths);
    let mut result = extract_schedule(&documents, extractor, options);
    result.warnings.splice(0..0, unreadable);
    result
}
