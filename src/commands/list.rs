use super::filters::FilterArgs;
use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        highlight::Highlighter,
        messages::Message,
        query::TaskQuery,
        task::{today, Task, TaskStats},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    filters: FilterArgs,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::new()?;
    show(&mut tasks, &args.filters.to_query(&config), &config.highlighter())?;
    Ok(())
}

/// Prints the tasks matching `query` followed by the collection totals.
pub fn show(tasks: &mut Tasks, query: &TaskQuery, highlighter: &Highlighter) -> Result<Vec<Task>> {
    let rows = tasks.fetch(query)?;
    if rows.is_empty() {
        msg_info!(Message::NoTasksFound);
    } else {
        msg_print!(Message::TasksHeader(rows.len()), true);
        View::tasks(&rows, highlighter, today());
    }
    msg_print!(stats_line(&tasks.stats()?));
    Ok(rows)
}

pub fn stats_line(stats: &TaskStats) -> Message {
    Message::StatsLine {
        total: stats.total,
        active: stats.active,
        done: stats.done,
        overdue: stats.overdue,
    }
}
