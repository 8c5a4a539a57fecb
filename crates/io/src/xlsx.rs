// XLSX export of comparison results

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook};

use payrecon_core::{Labels, ResultRow};

// Column widths in characters, sized for full names and Russian labels.
const NAME_WIDTH: f64 = 40.0;
const DIFFERENCE_WIDTH: f64 = 15.0;
const STATUS_WIDTH: f64 = 25.0;

/// Export results to an XLSX workbook with a single named sheet.
///
/// Differences land as numeric cells in major units so spreadsheet formulas
/// work on them; the trailing total sums only the rows written.
pub fn export(rows: &[ResultRow], labels: &Labels, path: &Path) -> Result<(), String> {
    let mut workbook = XlsxWorkbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name(labels.sheet)
        .map_err(|e| format!("Failed to create sheet '{}': {}", labels.sheet, e))?;

    let header_format = Format::new().set_bold();
    for (col, title) in [labels.name, labels.difference, labels.status]
        .iter()
        .enumerate()
    {
        worksheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .map_err(|e| format!("Failed to write header: {}", e))?;
    }

    let mut total_cents: i64 = 0;
    for (i, row) in rows.iter().enumerate() {
        let excel_row = (i + 1) as u32;
        worksheet
            .write_string(excel_row, 0, &row.name)
            .map_err(|e| format!("Failed to write row {}: {}", excel_row, e))?;
        worksheet
            .write_number(excel_row, 1, row.difference_cents as f64 / 100.0)
            .map_err(|e| format!("Failed to write row {}: {}", excel_row, e))?;
        worksheet
            .write_string(excel_row, 2, row.status.label(labels.language))
            .map_err(|e| format!("Failed to write row {}: {}", excel_row, e))?;
        total_cents += row.difference_cents;
    }

    let total_row = rows.len() as u32 + 1;
    worksheet
        .write_string(total_row, 0, labels.total)
        .map_err(|e| format!("Failed to write total row: {}", e))?;
    worksheet
        .write_number(total_row, 1, total_cents as f64 / 100.0)
        .map_err(|e| format!("Failed to write total row: {}", e))?;

    worksheet
        .set_column_width(0, NAME_WIDTH)
        .map_err(|e| e.to_string())?;
    worksheet
        .set_column_width(1, DIFFERENCE_WIDTH)
        .map_err(|e| e.to_string())?;
    worksheet
        .set_column_width(2, STATUS_WIDTH)
        .map_err(|e| e.to_string())?;

    workbook
        .save(path)
        .map_err(|e| format!("Failed to save XLSX file: {}", e))?;
    Ok(())
}
