//! Spreadsheet output for ranked rows.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::{error, info};

use crate::error::ReportError;
use crate::models::{RankedRow, YearSet};

pub const DEFAULT_REPORT_FILE: &str = "cvpr_top_contributors.xlsx";

const AUTHOR_COLUMN_WIDTH: f64 = 32.0;

/// Column headers: `Author`, each year ascending, `Total`
pub fn report_header(years: &YearSet) -> Vec<String> {
    let mut header = Vec::with_capacity(years.len() + 2);
    header.push("Author".to_string());
    header.extend(years.iter().map(|year| year.to_string()));
    header.push("Total".to_string());
    header
}

/// Write `rows` to an `.xlsx` file at `path`.
///
/// Refuses to write an empty report. Missing parent directories are
/// created. Every failure is logged and returned, never raised.
pub fn write_report(rows: &[RankedRow], years: &YearSet, path: &Path) -> Result<(), ReportError> {
    match try_write(rows, years, path) {
        Ok(()) => {
            let shown = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
            info!("Results successfully saved to {}", shown.display());
            Ok(())
        }
        Err(ReportError::NoRows) => {
            error!("No data to save to Excel");
            Err(ReportError::NoRows)
        }
        Err(e) => {
            error!("Error saving to Excel: {}", e);
            Err(e)
        }
    }
}

fn try_write(rows: &[RankedRow], years: &YearSet, path: &Path) -> Result<(), ReportError> {
    if rows.is_empty() {
        return Err(ReportError::NoRows);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, title) in report_header(years).iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, title.as_str(), &bold)?;
    }
    worksheet.set_column_width(0, AUTHOR_COLUMN_WIDTH)?;

    for (i, row) in rows.iter().enumerate() {
        let line = (i + 1) as u32;
        worksheet.write_string(line, 0, row.author.as_str())?;
        for (j, year) in years.iter().enumerate() {
            worksheet.write_number(line, (j + 1) as u16, f64::from(row.count(year)))?;
        }
        worksheet.write_number(line, (years.len() + 1) as u16, f64::from(row.total))?;
    }

    workbook.save(path)?;
    Ok(())
}
