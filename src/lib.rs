//! # Taskdeck - a personal task list backed by SQLite
//!
//! Tasks have a title, optional details and category, a priority and an
//! optional due date. They can be searched, filtered, sorted, marked done,
//! and moved in and out of CSV files.
//!
//! ## Layout
//!
//! - [`db`]: the SQLite connection, schema migrations and the task store
//! - [`libs`]: task values, queries, highlighting, CSV transfer, config, output
//! - [`commands`]: the command-line subcommands and the interactive browser
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
