//! Storage Module
//!
//! Durable storage of tables, one JSON file per table.
//!
//! ## Responsibilities
//! - Map a table name to its file path
//! - Load a whole table (missing file = empty table)
//! - Rewrite a whole table atomically on every mutation
//! - Truncate a table file on drop
//!
//! ## File Format
//! ```text
//! {data_dir}/{table}.json
//! ┌────────────────────────────────────────┐
//! │ [                                      │
//! │   {"name": "test 1", "id": 1},         │
//! │   {"name": "test 3", "id": 3}          │
//! │ ]                                      │
//! └────────────────────────────────────────┘
//! ```
//! A zero-byte file (left by a drop) and `[]` both read as zero records.

mod manager;

pub use manager::{TableFileManager, TABLE_FILE_EXTENSION};
