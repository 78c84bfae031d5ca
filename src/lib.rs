//! # Tabula
//!
//! A small file-backed record store with:
//! - One JSON file per table (`{data_dir}/{table}.json`)
//! - Sequential ids per table (`max id + 1`)
//! - A per-table in-memory cache kept in step with the file
//! - Whole-file atomic rewrites on every mutation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Controllers                            │
//! │          (customers, reservations: uniqueness policy)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Database                              │
//! │        (table cache, id assignment, create/find/...)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────────┐
//!   │    Codec    │          │ TableFileManager │
//!   │(Entity⇄Rec) │          │  (JSON on disk)  │
//!   └─────────────┘          └──────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use tabula::Database;
//! use tabula::controllers::CustomerController;
//!
//! # fn main() -> tabula::Result<()> {
//! let db = Arc::new(Database::open_path(Path::new("./db"))?);
//! let customers = CustomerController::new(Arc::clone(&db));
//!
//! let ada = customers.create_customer("Ada")?.expect("new name");
//! assert_eq!(ada.id(), Some(1));
//!
//! ada.write().set_name("Ada L.");
//! customers.update_customer()?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod codec;
pub mod handle;
pub mod storage;
pub mod database;

pub mod models;
pub mod controllers;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{TabulaError, Result};
pub use config::Config;
pub use record::Record;
pub use codec::Entity;
pub use handle::EntityHandle;
pub use database::Database;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Tabula
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
