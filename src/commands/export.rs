//! CSV export of the tasks matching a set of filters.

use super::filters::FilterArgs;
use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, query::TaskQuery, transfer::export_csv},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination CSV file; overwritten if it exists
    path: PathBuf,

    #[command(flatten)]
    filters: FilterArgs,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::new()?;
    export(&mut tasks, &args.filters.to_query(&config), &args.path)
}

/// Writes the tasks `query` selects, in the order it selects them.
pub fn export(tasks: &mut Tasks, query: &TaskQuery, path: &Path) -> Result<()> {
    let rows = tasks.fetch(query)?;
    export_csv(path, &rows)?;
    msg_success!(Message::ExportCompleted {
        count: rows.len(),
        path: path.display().to_string(),
    });
    Ok(())
}
