//! Core library modules for the taskflow application.
//!
//! Serves as the main entry point for all taskflow library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage paths, messaging
//! - **Task Model**: The task record, filter/sort modes, and error taxonomy
//! - **Derived Views**: Pure filter/sort/search pipeline and aggregate statistics
//! - **Validation**: Blocking text/date rules plus the past-due advisory
//! - **User Interface**: Console table rendering and due date markers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::libs::query;
//! use taskflow::libs::task::{TaskFilter, TaskSort};
//! use taskflow::store::tasks::Tasks;
//!
//! # fn main() -> anyhow::Result<()> {
//! let tasks = Tasks::new()?;
//! let visible = query::run(tasks.all(), TaskFilter::Pending, TaskSort::DueDate, "");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod due;
pub mod messages;
pub mod query;
pub mod task;
pub mod validate;
pub mod view;
