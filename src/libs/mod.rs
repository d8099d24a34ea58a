//! Core library modules for taskdeck.
//!
//! - [`task`]: the task record, creation and update values, input validation
//! - [`query`]: filter and sort choices and the SQL they produce
//! - [`highlight`]: deadline and priority tags for rendering rows
//! - [`transfer`]: CSV export and import
//! - [`config`], [`data_storage`]: settings and file locations
//! - [`messages`], [`view`]: console output
//!
//! ```rust,no_run
//! use taskdeck::db::tasks::Tasks;
//! use taskdeck::libs::task::NewTask;
//!
//! let mut tasks = Tasks::new()?;
//! tasks.create(&NewTask::new("Renew passport").category("admin"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod highlight;
pub mod messages;
pub mod query;
pub mod task;
pub mod transfer;
pub mod view;
