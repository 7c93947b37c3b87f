//! # Taskflow - Task List Manager
//!
//! A command-line utility for managing a personal task list: creating,
//! editing, completing, filtering, sorting, searching, and deleting tasks.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, complete, and delete tasks with optional due dates
//! - **Derived Views**: Filter, sort, and search tasks without touching stored state
//! - **Statistics**: Totals, pending/done counts, and completion progress
//! - **Due Date Markers**: Overdue/today/upcoming classification recomputed at render time
//! - **Local Persistence**: The whole collection stored as a single JSON document
//!   in the platform application-data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
