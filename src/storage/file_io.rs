//! JSON store files
//!
//! Both stores are whole-file JSON documents. Reads tolerate a missing or
//! damaged file; writes replace the file in one rename so a crash leaves
//! either the old or the new collection on disk.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FintrackError;

/// Deserialize `path`, treating a missing file as an empty store
///
/// Unreadable or malformed files are a [`FintrackError::Storage`].
pub fn read_json<T, P>(path: P) -> Result<T, FintrackError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| store_error("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| store_error("parse", path, e))
}

/// Like [`read_json`], but a damaged store loads as empty with a warning
pub fn read_json_or_default<T, P>(path: P) -> T
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match read_json(path) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "discarding unreadable store file");
            T::default()
        }
    }
}

/// Replace `path` with the pretty-printed JSON of `data`
///
/// The document goes to `<name>.json.tmp` next to the target, is synced, and
/// is then renamed over it. Missing parent directories are created.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FintrackError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| store_error("create directory", parent, e))?;
    }

    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| store_error("create", &temp_path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| store_error("serialize", path, e))?;
    writer
        .flush()
        .and_then(|_| writer.get_ref().sync_all())
        .map_err(|e| store_error("sync", &temp_path, e))?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(store_error("replace", path, e));
    }

    tracing::debug!(path = %path.display(), "wrote store file");
    Ok(())
}

fn store_error(action: &str, path: &Path, err: impl std::fmt::Display) -> FintrackError {
    FintrackError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}
