//! Fixed layout contract for the worklist workbook.
//!
//! Row 1 carries the title, rows 2-3 the description and usage
//! instructions, row 4 is blank, row 5 the column headers, and data starts
//! at row 6. Column A holds the human-entered input; columns B-F are
//! overwritten in place with the result fields. The summary block starts
//! two rows below the last result row.

pub const SHEET_NAME: &str = "Worklist";

pub const TITLE_ROW: u32 = 1;
pub const DESCRIPTION_ROW: u32 = 2;
pub const INSTRUCTIONS_ROW: u32 = 3;
pub const HEADER_ROW: u32 = 5;
pub const FIRST_DATA_ROW: u32 = 6;

pub const INPUT_COL: u32 = 1;
pub const SEQUENCE_COL: u32 = 2;
pub const COMPLETED_COL: u32 = 3;
pub const STATUS_COL: u32 = 4;
pub const DETAIL_COL: u32 = 5;
pub const REMARK_COL: u32 = 6;

pub const COLUMN_HEADERS: [&str; 6] = ["Input", "No.", "Completed", "Status", "Detail", "Remark"];

const SUMMARY_GAP_ROWS: u32 = 2;

/// Row the summary block starts on, for a batch of `result_count` rows.
pub fn summary_start_row(result_count: usize) -> u32 {
    FIRST_DATA_ROW + result_count as u32 + SUMMARY_GAP_ROWS
}

/// Worksheet row holding the result for the record at `index` (1-based).
pub fn result_row(index: u32) -> u32 {
    FIRST_DATA_ROW + index - 1
}
