pub mod normalize;
pub mod patterns;

use crate::classify::classify;
use crate::keywords::GenusLookup;
use crate::model::{Category, PlantEntry};
use normalize::{normalize_name, remove_spans};
use patterns::{match_dimensions, match_entry_prefix, match_heading, match_size};
use serde::{Deserialize, Serialize};

/// Entries parsed from one block of OCR text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsedEntries {
    pub entries: Vec<PlantEntry>,
    /// Non-empty lines that were neither headings nor entries.
    pub skipped_lines: Vec<SkippedLine>,
}

/// A line that was dropped as OCR noise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedLine {
    pub line_text: String,
    pub reason: String,
}

/// What a single line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Heading(Category),
    Entry(PlantEntry),
    Skipped(SkippedLine),
}

/// Accumulator threaded through the line scan.
#[derive(Debug, Clone, Default)]
pub struct ScanState {
    /// Category of the most recent section heading, if any.
    pub current: Option<Category>,
    pub parsed: ParsedEntries,
}

impl ScanState {
    /// Start a scan under an already known heading category.
    pub fn with_category(category: Category) -> Self {
        ScanState {
            current: Some(category),
            parsed: ParsedEntries::default(),
        }
    }

    fn step(mut self, line: &str, lookup: &GenusLookup, fallback: Category) -> Self {
        match parse_line(line, self.current, lookup, fallback) {
            LineOutcome::Heading(category) => self.current = Some(category),
            LineOutcome::Entry(entry) => self.parsed.entries.push(entry),
            LineOutcome::Skipped(skipped) => self.parsed.skipped_lines.push(skipped),
        }
        self
    }
}

/// Parse raw OCR text into plant entries.
///
/// Lines are trimmed and empty lines discarded. Heading lines switch the
/// current category; quantity-first lines become entries; everything else
/// is recorded as skipped. Never fails.
pub fn parse_entries(raw_text: &str, lookup: &GenusLookup, fallback: Category) -> ParsedEntries {
    scan(raw_text, ScanState::default(), lookup, fallback).parsed
}

/// Run the line scan starting from `state`.
pub fn scan(
    raw_text: &str,
    state: ScanState,
    lookup: &GenusLookup,
    fallback: Category,
) -> ScanState {
    raw_text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(state, |state, line| state.step(line, lookup, fallback))
}

/// Classify a single trimmed line given the current heading category.
pub fn parse_line(
    line: &str,
    current: Option<Category>,
    lookup: &GenusLookup,
    fallback: Category,
) -> LineOutcome {
    if let Some(category) = match_heading(line) {
        return LineOutcome::Heading(category);
    }

    let Some(prefix) = match_entry_prefix(line) else {
        return LineOutcome::Skipped(SkippedLine {
            line_text: line.to_string(),
            reason: "no leading quantity".into(),
        });
    };

    let desc = prefix.description;
    let dimensions = match_dimensions(desc);
    let size = match_size(desc, dimensions.as_ref().map(|d| &d.span));

    let spans: Vec<_> = size
        .iter()
        .map(|s| s.span.clone())
        .chain(dimensions.iter().map(|d| d.span.clone()))
        .collect();
    let name = normalize_name(&remove_spans(desc, &spans));

    let category = current.unwrap_or_else(|| classify(&name, fallback, lookup));

    LineOutcome::Entry(PlantEntry {
        category,
        quantity: prefix.quantity,
        name,
        size: size.map(|s| s.text).unwrap_or_default(),
        dimensions: dimensions.map(|d| d.text).unwrap_or_default(),
    })
}
