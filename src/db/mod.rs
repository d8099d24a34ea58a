//! Database layer for taskdeck.
//!
//! A single SQLite file holds the `tasks` table and the `migrations` table
//! that tracks its schema version.
//!
//! ```rust,no_run
//! use taskdeck::db::tasks::Tasks;
//! use taskdeck::libs::query::TaskQuery;
//!
//! let mut tasks = Tasks::open("tasks.db")?;
//! for task in tasks.fetch(&TaskQuery::new())? {
//!     println!("{} {}", task.id, task.title);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection opening and schema initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// The task store.
pub mod tasks;
