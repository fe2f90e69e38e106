use legend_core::config::DocumentMode;
use legend_core::error::LegendError;
use legend_core::export::{export_file_name, write_csv, write_json};
use legend_core::extraction::tesseract::TesseractExtractor;
use legend_core::keywords::load_lookup;
use legend_core::model::Category;
use legend_core::{extract_files, ExtractOptions, ParsedSchedule};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::load_config;
use crate::output;

pub struct ExtractArgs {
    pub input_files: Vec<PathBuf>,
    pub project: Option<String>,
    pub output_format: String,
    pub out: Option<PathBuf>,
    pub per_document: bool,
    pub config: Option<PathBuf>,
    pub keywords: Option<PathBuf>,
    pub fallback: Option<String>,
    pub show_skipped: bool,
}

pub fn run(args: ExtractArgs) -> Result<(), LegendError> {
    let mut config = load_config(args.config.as_deref())?;

    // Command line flags override the config file.
    if args.project.is_some() {
        config.project = args.project;
    }
    if args.per_document {
        config.mode = DocumentMode::PerDocument;
    }
    if let Some(ref fallback) = args.fallback {
        config.fallback = fallback.parse::<Category>()?;
    }

    let mut options = ExtractOptions::from_config(&config)?;
    if let Some(ref path) = args.keywords {
        options.lookup = load_lookup(path)?;
    }

    let extractor = TesseractExtractor::new()
        .with_language(config.ocr.language.clone())
        .with_dpi(config.ocr.dpi);

    let parsed = extract_files(&args.input_files, &extractor, &options);

    if parsed.documents.is_empty() && !parsed.warnings.is_empty() {
        for w in &parsed.warnings {
            eprintln!("  {}: {}", w.document, w.reason);
        }
        return Err(LegendError::Extraction(
            "none of the documents could be read".into(),
        ));
    }

    let project = config.project.as_deref().unwrap_or("Untitled");

    match args.out {
        Some(path) => {
            let path = resolve_out_path(&path, project);
            write_export(&path, &parsed, project, &config.tool_name)?;
            eprintln!(
                "Extracted {} row(s), {} plant(s) from {} document(s), written to {}",
                parsed.schedule.len(),
                parsed.schedule.total_quantity(),
                parsed.documents.len(),
                path.display()
            );
            report_diagnostics(&parsed, args.show_skipped);
        }
        None => {
            match args.output_format.as_str() {
                "json" => output::json::print(&parsed.schedule, project, &config.tool_name)?,
                "csv" => {
                    let stdout = std::io::stdout();
                    write_csv(stdout.lock(), &parsed.schedule, project, &config.tool_name)?;
                }
                _ => output::table::print(&parsed, project, &config.tool_name),
            }
            report_diagnostics(&parsed, args.show_skipped);
        }
    }

    Ok(())
}

/// A directory gets the conventional export file name inside it.
fn resolve_out_path(path: &Path, project: &str) -> PathBuf {
    if path.is_dir() {
        path.join(export_file_name(project, "csv"))
    } else {
        path.to_path_buf()
    }
}

fn write_export(
    path: &Path,
    parsed: &ParsedSchedule,
    project: &str,
    tool_name: &str,
) -> Result<(), LegendError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let file = BufWriter::new(File::create(path)?);
    if is_json {
        write_json(file, &parsed.schedule, project, tool_name)?;
    } else {
        write_csv(file, &parsed.schedule, project, tool_name)?;
    }
    tracing::info!(path = %path.display(), json = is_json, "wrote export");
    Ok(())
}

fn report_diagnostics(parsed: &ParsedSchedule, show_skipped: bool) {
    for w in &parsed.warnings {
        eprintln!("  warning: {} skipped: {}", w.document, w.reason);
    }
    if parsed.skipped_lines.is_empty() {
        return;
    }
    if show_skipped {
        eprintln!("  skipped lines:");
        for line in &parsed.skipped_lines {
            eprintln!("    {:<60} ({})", line.line_text, line.reason);
        }
    } else {
        eprintln!(
            "  {} line(s) skipped during parsing (use --show-skipped to list them)",
            parsed.skipped_lines.len()
        );
    }
}
