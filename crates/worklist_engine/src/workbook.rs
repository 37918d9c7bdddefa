use std::path::Path;

use batch_logging::batch_info;
use thiserror::Error;
use worklist_core::layout;
use worklist_core::{BatchStats, ResultRecord};

use crate::persist::{save_workbook_atomic, PersistError};

/// Header block and guidance rows written into a fresh template.
#[derive(Debug, Clone)]
pub struct TemplateProfile {
    pub title: String,
    pub description: String,
    pub instructions: String,
    /// Placeholder rows the human is expected to overwrite or extend.
    pub sample_items: Vec<String>,
    /// Genuinely blank rows appended below the samples to invite input.
    pub blank_rows: u32,
}

impl Default for TemplateProfile {
    fn default() -> Self {
        Self {
            title: "URL batch worklist".to_string(),
            description: "Runs the configured operation against every URL listed below and records the outcome."
                .to_string(),
            instructions: "Usage: enter one URL per row in column A starting at row 6 (example: https://example.com), then save and close the file."
                .to_string(),
            sample_items: vec![
                "https://example.com".to_string(),
                "https://google.com".to_string(),
                "https://github.com".to_string(),
                "https://stackoverflow.com".to_string(),
                "https://python.org".to_string(),
            ],
            blank_rows: 10,
        }
    }
}

#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("failed to read workbook: {0}")]
    Read(String),
    #[error("failed to write workbook: {0}")]
    Write(#[from] PersistError),
    #[error("worksheet {0:?} is missing")]
    SheetMissing(String),
}

const COLUMN_WIDTHS: [(&str, f64); 6] = [
    ("A", 35.0),
    ("B", 8.0),
    ("C", 18.0),
    ("D", 10.0),
    ("E", 50.0),
    ("F", 15.0),
];

/// Create a fresh template workbook conforming to the layout contract.
pub fn create_template(path: &Path, profile: &TemplateProfile) -> Result<(), WorkbookError> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    sheet.set_name(layout::SHEET_NAME);

    sheet
        .get_cell_mut((layout::INPUT_COL, layout::TITLE_ROW))
        .set_value(profile.title.as_str());
    sheet
        .get_cell_mut((layout::INPUT_COL, layout::DESCRIPTION_ROW))
        .set_value(profile.description.as_str());
    sheet
        .get_cell_mut((layout::INPUT_COL, layout::INSTRUCTIONS_ROW))
        .set_value(profile.instructions.as_str());

    for (i, header) in layout::COLUMN_HEADERS.iter().enumerate() {
        sheet
            .get_cell_mut((i as u32 + 1, layout::HEADER_ROW))
            .set_value(*header);
    }

    let mut row = layout::FIRST_DATA_ROW;
    for sample in &profile.sample_items {
        sheet
            .get_cell_mut((layout::INPUT_COL, row))
            .set_value(sample.as_str());
        row += 1;
    }
    // Materialize the blank input rows so the grid visibly extends below
    // the samples.
    for _ in 0..profile.blank_rows {
        sheet.get_cell_mut((layout::INPUT_COL, row)).set_value("");
        row += 1;
    }

    for (column, width) in COLUMN_WIDTHS {
        sheet.get_column_dimension_mut(column).set_width(width);
    }

    save_workbook_atomic(&book, path)?;
    batch_info!("created template {}", path.display());
    Ok(())
}

/// Read back the human-edited input column.
///
/// Walks column A from the first data row to the sheet's highest row and
/// returns the trimmed, non-empty lines in worksheet order.
pub fn read_input_items(path: &Path) -> Result<Vec<String>, WorkbookError> {
    let book = umya_spreadsheet::reader::xlsx::read(path)
        .map_err(|err| WorkbookError::Read(err.to_string()))?;
    let sheet = book
        .get_sheet_by_name(layout::SHEET_NAME)
        .ok_or_else(|| WorkbookError::SheetMissing(layout::SHEET_NAME.to_string()))?;

    let mut items = Vec::new();
    for row in layout::FIRST_DATA_ROW..=sheet.get_highest_row() {
        let value = sheet.get_value((layout::INPUT_COL, row));
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            items.push(trimmed.to_string());
        }
    }
    batch_info!("read {} input item(s) from {}", items.len(), path.display());
    Ok(items)
}

/// Overlay the result columns onto the edited workbook and append the
/// summary block.
///
/// Only columns B-F of the result rows and the summary cells are touched;
/// column A and everything else the user entered stays intact.
pub fn write_results(
    path: &Path,
    records: &[ResultRecord],
    stats: &BatchStats,
) -> Result<(), WorkbookError> {
    let mut book = umya_spreadsheet::reader::xlsx::read(path)
        .map_err(|err| WorkbookError::Read(err.to_string()))?;
    let sheet = book
        .get_sheet_by_name_mut(layout::SHEET_NAME)
        .ok_or_else(|| WorkbookError::SheetMissing(layout::SHEET_NAME.to_string()))?;

    for record in records {
        let row = layout::result_row(record.index);
        sheet
            .get_cell_mut((layout::SEQUENCE_COL, row))
            .set_value_number(record.index);
        sheet
            .get_cell_mut((layout::COMPLETED_COL, row))
            .set_value(record.completed_at.as_str());
        sheet
            .get_cell_mut((layout::STATUS_COL, row))
            .set_value(record.status.to_string());
        sheet
            .get_cell_mut((layout::DETAIL_COL, row))
            .set_value(record.detail.as_str());
        sheet
            .get_cell_mut((layout::REMARK_COL, row))
            .set_value(record.remark.to_string());
    }

    let mut row = layout::summary_start_row(records.len());
    set_summary_line(sheet, row, "Summary".to_string());
    row += 1;
    set_summary_line(sheet, row, format!("Total: {}", stats.total));
    row += 1;
    set_summary_line(sheet, row, format!("Success: {}", stats.success));
    row += 1;
    set_summary_line(sheet, row, format!("Failed: {}", stats.failure));
    if stats.total > 0 {
        row += 1;
        set_summary_line(sheet, row, format!("Success rate: {:.1}%", stats.success_rate()));
    }

    save_workbook_atomic(&book, path)?;
    batch_info!("wrote {} result row(s) to {}", records.len(), path.display());
    Ok(())
}

fn set_summary_line(sheet: &mut umya_spreadsheet::Worksheet, row: u32, text: String) {
    sheet.get_cell_mut((layout::INPUT_COL, row)).set_value(text);
}
