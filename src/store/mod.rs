//! Persistence layer for the taskflow application.
//!
//! The collection is stored as a single JSON document - one fixed key in
//! a key-value sense - under the platform application-data directory.
//! Every mutation rewrites the whole document; there is no incremental
//! update and no other storage format.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::store::tasks::Tasks;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! tasks.create("Water the plants", None)?;
//! # Ok(())
//! # }
//! ```

/// JSON-file key-value backend holding the serialized collection.
pub mod store;

/// The task collection owner and its mutation operations.
pub mod tasks;
