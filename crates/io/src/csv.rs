// CSV export of comparison results

use std::path::Path;

use payrecon_core::amount::format_amount;
use payrecon_core::{Labels, ResultRow};

/// Write results to a CSV file: header, one line per row, trailing total.
pub fn export(rows: &[ResultRow], labels: &Labels, path: &Path) -> Result<(), String> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(|e| e.to_string())?;
    write_rows(&mut writer, rows, labels)?;
    writer.flush().map_err(|e| e.to_string())?;
    Ok(())
}

/// Render results as an in-memory CSV document (for stdout output).
pub fn render(rows: &[ResultRow], labels: &Labels) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_rows(&mut writer, rows, labels)?;
    let bytes = writer.into_inner().map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

/// The trailing total sums only the rows actually written, so a filtered
/// export totals what the reader sees.
fn write_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    rows: &[ResultRow],
    labels: &Labels,
) -> Result<(), String> {
    writer
        .write_record([labels.name, labels.difference, labels.status])
        .map_err(|e| e.to_string())?;

    let mut total_cents: i64 = 0;
    for row in rows {
        let difference = format_amount(row.difference_cents);
        writer
            .write_record([
                row.name.as_str(),
                difference.as_str(),
                row.status.label(labels.language),
            ])
            .map_err(|e| e.to_string())?;
        total_cents += row.difference_cents;
    }

    let total = format_amount(total_cents);
    writer
        .write_record([labels.total, total.as_str(), ""])
        .map_err(|e| e.to_string())?;
    Ok(())
}
