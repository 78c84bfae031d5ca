//! Table File Manager
//!
//! Owns the on-disk representation of every table.
//!
//! ## Responsibilities
//! - Resolve `{data_dir}/{table}.json`
//! - Read a table on demand
//! - Rewrite a table atomically (temp file + rename)
//! - Create the data directory and file on first write
//! - Truncate a table file to zero bytes on drop

use std::fs::{self, OpenOptions, Permissions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, TabulaError};
use crate::record::Record;

/// Extension of every table file
pub const TABLE_FILE_EXTENSION: &str = "json";

/// Mode of a newly created table file (unix)
#[cfg(unix)]
const DEFAULT_FILE_MODE: u32 = 0o644;

/// Reads and writes whole tables as JSON arrays
///
/// Stateless apart from its settings; every call goes to disk.
#[derive(Debug, Clone)]
pub struct TableFileManager {
    /// Directory where table files live
    data_dir: PathBuf,

    /// Indent output
    pretty: bool,

    /// fsync before the rename
    sync_writes: bool,
}

impl TableFileManager {
    /// Create a manager for the config's data directory
    ///
    /// Nothing is created on disk until the first `save`.
    pub fn new(config: &Config) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            pretty: config.pretty_json,
            sync_writes: config.sync_writes,
        }
    }

    /// Load every record of a table
    ///
    /// Returns:
    /// - `Ok(vec![])` — file missing, empty, or `[]`
    /// - `Ok(records)` — records in file order
    /// - `Err(MalformedTable)` — file is not a JSON array of objects
    pub fn load(&self, table: &str) -> Result<Vec<Record>> {
        let path = self.path(table)?;

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(table = %table, "table file absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        // Zero bytes is what a drop leaves behind
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let records: Vec<Record> =
            serde_json::from_slice(&bytes).map_err(|source| TabulaError::MalformedTable {
                table: table.to_string(),
                source,
            })?;

        debug!(table = %table, records = records.len(), "loaded table file");
        Ok(records)
    }

    /// Replace the table file with `records`
    ///
    /// Steps:
    /// 1. Create the data directory if needed
    /// 2. Serialize the full table
    /// 3. Write it to a temp file in the same directory (and sync)
    /// 4. Rename the temp file over the table file
    pub fn save(&self, table: &str, records: &[Record]) -> Result<()> {
        let path = self.path(table)?;

        fs::create_dir_all(&self.data_dir)?;

        let payload = if self.pretty {
            serde_json::to_vec_pretty(records)?
        } else {
            serde_json::to_vec(records)?
        };

        let mut tmp = tempfile::Builder::new()
            .prefix(&format!(".{}.", table))
            .suffix(".tmp")
            .tempfile_in(&self.data_dir)?;
        tmp.as_file()
            .set_permissions(self.file_permissions(&path)?)?;
        tmp.write_all(&payload)?;
        tmp.flush()?;
        if self.sync_writes {
            tmp.as_file().sync_all()?;
        }

        let created = !path.exists();
        tmp.persist(&path)?;

        if created {
            info!(table = %table, path = %path.display(), "created table file");
        }
        debug!(table = %table, records = records.len(), bytes = payload.len(), "saved table file");
        Ok(())
    }

    /// Empty the table file
    ///
    /// Returns `Ok(false)` if there is no file to truncate.
    pub fn truncate(&self, table: &str) -> Result<bool> {
        let path = self.path(table)?;

        match OpenOptions::new().write(true).truncate(true).open(&path) {
            Ok(file) => {
                if self.sync_writes {
                    file.sync_all()?;
                }
                info!(table = %table, "truncated table file");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Whether the table has a file on disk
    pub fn exists(&self, table: &str) -> Result<bool> {
        Ok(self.path(table)?.is_file())
    }

    /// File path for a table name
    ///
    /// "customers" → "{data_dir}/customers.json"
    pub fn path(&self, table: &str) -> Result<PathBuf> {
        validate_table_name(table)?;
        Ok(self
            .data_dir
            .join(format!("{}.{}", table, TABLE_FILE_EXTENSION)))
    }

    /// Permissions for a rewritten table file
    ///
    /// An existing file keeps its own; a new one gets `0o644` on unix instead
    /// of the owner-only mode temp files are created with.
    fn file_permissions(&self, path: &Path) -> Result<Permissions> {
        match fs::metadata(path) {
            Ok(meta) => Ok(meta.permissions()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(default_permissions(&self.data_dir)?),
            Err(e) => Err(e.into()),
        }
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

// =============================================================================
// Private Helpers
// =============================================================================

/// A table name must map to exactly one file inside the data directory
fn validate_table_name(table: &str) -> Result<()> {
    let invalid = table.is_empty()
        || table == "."
        || table == ".."
        || table.contains(['/', '\\', '\0']);

    if invalid {
        return Err(TabulaError::InvalidTableName(table.to_string()));
    }
    Ok(())
}

#[cfg(unix)]
fn default_permissions(_dir: &Path) -> std::io::Result<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(Permissions::from_mode(DEFAULT_FILE_MODE))
}

#[cfg(not(unix))]
fn default_permissions(dir: &Path) -> std::io::Result<Permissions> {
    let mut permissions = fs::metadata(dir)?.permissions();
    permissions.set_readonly(false);
    Ok(permissions)
}
