//! Database Module
//!
//! The record store façade every caller talks to.
//!
//! ## Responsibilities
//! - Keep a per-table cache of records mirroring the table file
//! - Assign sequential ids (`max id + 1`) on create
//! - Rewrite the whole table file on every mutation
//! - Equality lookup on a single attribute

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::codec::Entity;
use crate::config::Config;
use crate::error::{Result, TabulaError};
use crate::handle::{EntityHandle, LiveRecord};
use crate::record::Record;
use crate::storage::TableFileManager;

/// A cached table row
enum Row {
    /// Loaded from disk, or written explicitly through `save`
    Stored(Record),

    /// Created in this process; re-serialized from the caller's handle
    Live { id: u64, entity: Arc<dyn LiveRecord> },
}

impl Row {
    fn id(&self) -> Option<u64> {
        match self {
            Row::Stored(record) => record.id(),
            Row::Live { id, .. } => Some(*id),
        }
    }

    fn record(&self) -> Result<Record> {
        match self {
            Row::Stored(record) => Ok(record.clone()),
            // The id is fixed once assigned, whatever the entity now says
            Row::Live { id, entity } => Ok(entity.snapshot()?.with_id(*id)),
        }
    }
}

/// In-memory mirror of one table file
#[derive(Default)]
struct TableCache {
    rows: Vec<Row>,
}

impl TableCache {
    fn from_records(records: Vec<Record>) -> Self {
        Self {
            rows: records.into_iter().map(Row::Stored).collect(),
        }
    }

    /// `max(ids ∪ {0}) + 1`, `None` once the highest id is `u64::MAX`
    fn next_id(&self) -> Option<u64> {
        self.rows
            .iter()
            .filter_map(Row::id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.rows.iter().position(|row| row.id() == Some(id))
    }

    fn records(&self) -> Result<Vec<Record>> {
        self.rows.iter().map(Row::record).collect()
    }
}

/// File-backed record store
///
/// ## Concurrency Model
///
/// Every operation takes `&self` and runs its load-modify-save cycle under
/// one `tables` mutex, so operations on a single `Database` never interleave.
/// Nothing coordinates separate `Database` instances or processes sharing a
/// data directory: the last writer of a table file wins.
///
/// ## Cache
///
/// A table is loaded on first access and then served from memory. `drop_table`
/// forgets it; the next access reloads from the (now empty) file.
pub struct Database {
    /// Database configuration
    config: Config,

    /// Reads and writes table files
    files: TableFileManager,

    /// Table name → cached rows
    tables: Mutex<HashMap<String, TableCache>>,
}

impl Database {
    /// Open a database on the config's data directory
    ///
    /// Table files are read lazily and the directory is created on first write.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        info!(data_dir = %config.data_dir.display(), "opened database");

        Ok(Self {
            files: TableFileManager::new(&config),
            config,
            tables: Mutex::new(HashMap::new()),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }

    /// Insert a new entity and assign its id
    ///
    /// Steps:
    /// 1. Load the table into the cache if needed
    /// 2. Next id = highest cached id + 1 (1 for an empty table)
    /// 3. Rewrite the table file with the new record appended
    /// 4. Assign the id to the entity and keep the handle in the cache
    ///
    /// The cache keeps a clone of `entity`, so later changes made through the
    /// handle are written by [`Database::update`]. No uniqueness check is done.
    ///
    /// Fails with [`TabulaError::IdExhausted`] if the table already holds id
    /// `u64::MAX`; nothing is written in that case.
    pub fn create<E>(&self, entity: &EntityHandle<E>, table: &str) -> Result<bool>
    where
        E: Entity + Send + Sync + 'static,
    {
        let mut tables = self.tables.lock();
        let cache = self.cached(&mut tables, table)?;

        let id = cache.next_id().ok_or_else(|| TabulaError::IdExhausted {
            table: table.to_string(),
        })?;
        if let Some(previous) = entity.id() {
            debug!(table = %table, previous, id, "re-identifying entity on create");
        }

        let mut records = cache.records()?;
        records.push(entity.read().to_record()?.with_id(id));
        self.files.save(table, &records)?;

        entity.write().set_id(id);
        cache.rows.push(Row::Live {
            id,
            entity: entity.live(),
        });

        debug!(table = %table, id, "created record");
        Ok(true)
    }

    /// Find the first record whose `field` equals `value`
    ///
    /// Equality is exact and type-sensitive: `1` does not match `"1"`.
    /// Returns `Ok(None)` if nothing matches.
    pub fn find_by(
        &self,
        table: &str,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Record>> {
        let value = value.into();

        let mut tables = self.tables.lock();
        let cache = self.cached(&mut tables, table)?;

        for row in &cache.rows {
            let record = row.record()?;
            if record.matches(field, &value) {
                return Ok(Some(record));
            }
        }

        Ok(None)
    }

    /// Flush the cached table to disk
    ///
    /// Re-serializes every row, picking up changes made through the handles
    /// passed to [`Database::create`]. Rows loaded from disk are written back
    /// unchanged; use [`Database::save`] to change one of those.
    pub fn update(&self, table: &str) -> Result<bool> {
        let mut tables = self.tables.lock();
        let cache = self.cached(&mut tables, table)?;

        self.persist(table, cache)?;

        debug!(table = %table, records = cache.rows.len(), "updated table");
        Ok(true)
    }

    /// Replace the record with `entity`'s id by `entity`'s current fields
    ///
    /// Returns `Ok(false)` if the entity has no id or the id is not in the table.
    /// The row is stored as a plain record afterwards and no longer follows
    /// any handle it was created from.
    pub fn save<E: Entity>(&self, entity: &E, table: &str) -> Result<bool> {
        let Some(id) = entity.id() else {
            return Ok(false);
        };

        let mut tables = self.tables.lock();
        let cache = self.cached(&mut tables, table)?;

        let Some(pos) = cache.position(id) else {
            return Ok(false);
        };

        let record = entity.to_record()?.with_id(id);
        let previous = std::mem::replace(&mut cache.rows[pos], Row::Stored(record));

        if let Err(e) = self.persist(table, cache) {
            cache.rows[pos] = previous;
            return Err(e);
        }

        debug!(table = %table, id, "saved record");
        Ok(true)
    }

    /// Delete the record with `entity`'s id
    ///
    /// Returns `Ok(false)`, leaving the file untouched, if the id is not cached.
    pub fn delete<E: Entity>(&self, entity: &E, table: &str) -> Result<bool> {
        let Some(id) = entity.id() else {
            warn!(table = %table, "delete of an entity without id");
            return Ok(false);
        };

        let mut tables = self.tables.lock();
        let cache = self.cached(&mut tables, table)?;

        let Some(pos) = cache.position(id) else {
            warn!(table = %table, id, "delete of unknown id");
            return Ok(false);
        };

        let removed = cache.rows.remove(pos);

        if let Err(e) = self.persist(table, cache) {
            cache.rows.insert(pos, removed);
            return Err(e);
        }

        debug!(table = %table, id, "deleted record");
        Ok(true)
    }

    /// Truncate the table file and forget its cache
    ///
    /// Returns `Ok(false)` if the table has no file.
    pub fn drop_table(&self, table: &str) -> Result<bool> {
        let mut tables = self.tables.lock();

        let dropped = self.files.truncate(table)?;
        tables.remove(table);

        info!(table = %table, dropped, "dropped table");
        Ok(dropped)
    }

    /// All records of a table, in insertion order
    pub fn get_records(&self, table: &str) -> Result<Vec<Record>> {
        let mut tables = self.tables.lock();
        let cache = self.cached(&mut tables, table)?;
        cache.records()
    }

    /// Number of records in a table
    pub fn count(&self, table: &str) -> Result<usize> {
        let mut tables = self.tables.lock();
        Ok(self.cached(&mut tables, table)?.rows.len())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// File backing a table
    pub fn table_path(&self, table: &str) -> Result<PathBuf> {
        self.files.path(table)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// The cache for `table`, loading the file on first access
    fn cached<'a>(
        &self,
        tables: &'a mut HashMap<String, TableCache>,
        table: &str,
    ) -> Result<&'a mut TableCache> {
        match tables.entry(table.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let records = self.files.load(table)?;
                debug!(table = %table, records = records.len(), "cached table");
                Ok(entry.insert(TableCache::from_records(records)))
            }
        }
    }

    /// Rewrite the table file from the cache
    fn persist(&self, table: &str, cache: &TableCache) -> Result<()> {
        let records = cache.records()?;
        self.files.save(table, &records)
    }
}
