//! Command-line interface for taskdeck.
//!
//! Each subcommand lives in its own module with an `XArgs` struct for its
//! flags and a `cmd` entry point. The `browse` session reuses the same entry
//! points for its actions.
//!
//! ```bash
//! taskdeck add "Pay rent" --category home --priority high --due 2025-03-01
//! taskdeck list --status all --sort due
//! taskdeck done 3 4
//! taskdeck export tasks.csv --category home
//! taskdeck browse
//! ```

pub mod add;
pub mod browse;
pub mod categories;
pub mod clear;
pub mod delete;
pub mod done;
pub mod edit;
pub mod export;
pub mod filters;
pub mod form;
pub mod import;
pub mod init;
pub mod list;
pub mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Interactive configuration setup")]
    Init,
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Mark tasks as done, or active again with --undo")]
    Done(done::DoneArgs),
    #[command(about = "Flip the done state of tasks")]
    Toggle(done::ToggleArgs),
    #[command(about = "Delete tasks")]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete all completed tasks")]
    Clear(clear::ClearArgs),
    #[command(about = "List tasks", visible_alias = "ls")]
    List(list::ListArgs),
    #[command(about = "List categories in use")]
    Categories,
    #[command(about = "Show task totals")]
    Stats,
    #[command(about = "Export tasks to CSV")]
    Export(export::ExportArgs),
    #[command(about = "Import tasks from CSV")]
    Import(import::ImportArgs),
    #[command(about = "Browse and manage tasks interactively")]
    Browse,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Toggle(args) => done::toggle_cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Categories => categories::cmd(),
            Commands::Stats => stats::cmd(),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Browse => browse::cmd(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn edit_rejects_due_with_clear_due() {
        let result = Cli::try_parse_from(["taskdeck", "edit", "3", "--due", "2025-01-01", "--clear-due"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_alias_parses_filters() {
        let cli = Cli::try_parse_from(["taskdeck", "ls", "--status", "done", "--sort", "priority", "--desc"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }
}
