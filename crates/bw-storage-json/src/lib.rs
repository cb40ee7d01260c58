//! JSON file persistence for the ledger and notification records.

mod ledger_store;
mod notification_store;

use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use bw_core::StoreError;
use serde::{de::DeserializeOwned, Serialize};

pub use ledger_store::JsonLedgerStore;
pub use notification_store::JsonNotificationStore;

const TMP_SUFFIX: &str = "tmp";

/// Reads a JSON document, returning `T::default()` when the file does not exist.
pub(crate) fn read_document<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(err) => return Err(err.into()),
    };
    if data.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(&data).map_err(|err| {
        StoreError::Serde(format!("{}: {}", path.display(), err))
    })
}

/// Serializes `value` next to `path` and renames it into place.
pub(crate) fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json =
        serde_json::to_string_pretty(value).map_err(|err| StoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
