//! Writing records to disk.
//!
//! A record is stored as `<technique_id>.json` inside the output directory.
//! The JSON is written to a short-named temporary file in the same directory
//! and persisted over the destination, so the destination is either the old
//! file or the complete new one. The temporary file is removed on every error
//! path; a process killed between create and persist can leave a `.tmp*`
//! file behind but never a partial record.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

use crate::error::Result;
use crate::record::Record;

/// Path of the file a record is written to.
pub fn output_path(dir: &Path, record: &Record) -> PathBuf {
    dir.join(format!("{}.json", record.technique_id))
}

/// Validate and write a record, replacing any existing file of the same name.
///
/// Validation runs before any filesystem access. Returns the written path.
pub fn write_record(dir: &Path, record: &Record) -> Result<PathBuf> {
    record.validate()?;
    let json = record.to_pretty_json()?;

    fs::create_dir_all(dir)?;
    let destination = output_path(dir, record);

    let mut temp = temp_file_in(dir)?;
    temp.write_all(json.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(&destination).map_err(|e| e.error)?;

    tracing::debug!(path = %destination.display(), bytes = json.len(), "record written");
    Ok(destination)
}

/// Temporary file with the mode a plain `File::create` would get.
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}
