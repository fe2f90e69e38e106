//! Tabular export of a plant schedule.
//!
//! The exported table starts with a project metadata row (only the
//! `Category` column filled) followed by one row per schedule entry.

use crate::error::LegendError;
use crate::model::PlantSchedule;
use serde::Serialize;
use std::io::Write;

/// Column headers of the exported table.
pub const COLUMNS: [&str; 5] = [
    "Category",
    "Quantity",
    "Botanical / Common Name",
    "Size",
    "Height × Width",
];

/// One row of the exported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    pub category: String,
    pub quantity: Option<u64>,
    pub name: String,
    pub size: String,
    pub dimensions: String,
}

impl ExportRow {
    fn fields(&self) -> [String; 5] {
        [
            self.category.clone(),
            self.quantity.map(|q| q.to_string()).unwrap_or_default(),
            self.name.clone(),
            self.size.clone(),
            self.dimensions.clone(),
        ]
    }
}

/// "Project: <project> — Generated by <tool>"
pub fn metadata_line(project: &str, tool: &str) -> String {
    format!("Project: {project} — Generated by {tool}")
}

/// Metadata row followed by the schedule rows.
pub fn export_rows(schedule: &PlantSchedule, project: &str, tool: &str) -> Vec<ExportRow> {
    let mut rows = Vec::with_capacity(schedule.len() + 1);
    rows.push(ExportRow {
        category: metadata_line(project, tool),
        quantity: None,
        name: String::new(),
        size: String::new(),
        dimensions: String::new(),
    });
    rows.extend(schedule.iter().map(|r| ExportRow {
        category: r.category.to_string(),
        quantity: Some(r.quantity),
        name: r.name.clone(),
        size: r.size.clone(),
        dimensions: r.dimensions.clone(),
    }));
    rows
}

/// Write the export table as CSV: column header record, metadata row, data rows.
pub fn write_csv<W: Write>(
    writer: W,
    schedule: &PlantSchedule,
    project: &str,
    tool: &str,
) -> Result<(), LegendError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;
    for row in export_rows(schedule, project, tool) {
        wtr.write_record(row.fields())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the export table as a pretty-printed JSON array of rows, metadata
/// row first.
pub fn write_json<W: Write>(
    writer: W,
    schedule: &PlantSchedule,
    project: &str,
    tool: &str,
) -> Result<(), LegendError> {
    serde_json::to_writer_pretty(writer, &export_rows(schedule, project, tool))?;
    Ok(())
}

/// File name for an export: `Plant_Schedule_<project>.<ext>` with spaces
/// in the project name replaced by underscores.
pub fn export_file_name(project: &str, extension: &str) -> String {
    format!("Plant_Schedule_{}.{}", project.replace(' ', "_"), extension)
}
