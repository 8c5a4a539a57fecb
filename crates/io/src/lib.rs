// File I/O operations

pub mod csv;
pub mod text;
pub mod xlsx;

/// Build a dated export filename like `comparison_20240131.xlsx`.
pub fn dated_filename(prefix: &str, extension: &str) -> String {
    let date = chrono::Local::now().format("%Y%m%d");
    format!("{prefix}_{date}.{extension}")
}
