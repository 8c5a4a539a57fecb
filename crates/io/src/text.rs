// Dataset file reading

use std::io::Read;
use std::path::Path;

/// Read file and convert to UTF-8 if needed (handles Windows-1251 payroll
/// exports from older accounting software).
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path)
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| format!("{}: {}", path.display(), e))?;

    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1251.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}
