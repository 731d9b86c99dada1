//! Output files are staged next to their destination and renamed into place
//! once complete, so a failed conversion never leaves a partial file.

use crate::error::ConvertError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::Builder;
use tracing::debug;

/// Directory that will hold `path`, `.` for bare file names
fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."))
}

/// Write `path` through `write`, replacing any existing file only after
/// `write` succeeds and the data is flushed to disk
pub fn write_atomic<F>(path: &Path, write: F) -> Result<(), ConvertError>
where
    F: FnOnce(&mut BufWriter<&File>) -> Result<(), ConvertError>,
{
    let dir = parent_dir(path);
    fs::create_dir_all(dir).map_err(|e| ConvertError::io(dir, e))?;

    let mut builder = Builder::new();
    builder.prefix(".pixdat-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    let staged = builder.tempfile_in(dir).map_err(|e| ConvertError::io(dir, e))?;

    {
        let mut writer = BufWriter::new(staged.as_file());
        write(&mut writer)?;
        writer.flush().map_err(|e| ConvertError::io(path, e))?;
    }
    staged.as_file().sync_all().map_err(|e| ConvertError::io(path, e))?;

    debug!(staged = %staged.path().display(), path = %path.display(), "persisting output");
    staged
        .persist(path)
        .map_err(|e| ConvertError::io(path, e.error))?;

    Ok(())
}

/// Write a byte buffer atomically
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    write_atomic(path, |w| w.write_all(bytes).map_err(|e| ConvertError::io(path, e)))
}
