// src/file.rs

use std::{error::Error, fs, path::Path};

/// Read a whole page into memory. Decoding or I/O failure is fatal to the
/// run; the caller has already filtered missing files.
pub fn read_page(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path).map_err(|e| format!("read {}: {}", path.display(), e).into())
}

/// Whole-file replace. The rewritten content is fully built in memory
/// before this is called, so there are no partial writes to observe.
pub fn write_page(path: &Path, content: &str) -> Result<(), Box<dyn Error>> {
    fs::write(path, content).map_err(|e| format!("write {}: {}", path.display(), e).into())
}

/// Page stem: base file name with its extension removed.
/// `bladeball.html` → `bladeball`. Used as the game token in card links.
pub fn page_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
