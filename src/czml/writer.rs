use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::czml::{CzmlDocument, WriteError};

/// Write the document as pretty-printed UTF-8 JSON, replacing any existing file.
/// Missing parent directories are created first.
pub fn write_document(document: &CzmlDocument, path: &Path) -> Result<(), WriteError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    log::debug!("Wrote {} packets to {}", document.packets.len(), path.display());
    Ok(())
}
