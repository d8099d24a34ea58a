use crate::libs::config::Config;
use crate::libs::query::{SortColumn, SortDirection, SortSpec, StatusFilter, TaskQuery};
use crate::libs::task::Priority;
use clap::Args;

/// Search, filter and sort flags shared by `list` and `export`.
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Text to look for in title, details or category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Completion status to show [default: from configuration]
    #[arg(long, value_enum)]
    pub status: Option<StatusFilter>,

    /// Only tasks with this priority
    #[arg(short, long, value_enum)]
    pub priority: Option<Priority>,

    /// Only tasks in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Column to sort by
    #[arg(long, value_enum, default_value = "order")]
    pub sort: SortColumn,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,
}

impl FilterArgs {
    pub fn to_query(&self, config: &Config) -> TaskQuery {
        let direction = if self.desc { SortDirection::Desc } else { SortDirection::Asc };
        TaskQuery {
            search: self.search.clone(),
            status: self.status.unwrap_or(config.default_status),
            priority: self.priority,
            category: self.category.clone().filter(|c| !c.is_empty()),
            sort: SortSpec::new(self.sort, direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        filters: FilterArgs,
    }

    #[test]
    fn status_falls_back_to_configuration() {
        let cli = TestCli::parse_from(["taskdeck"]);
        let query = cli.filters.to_query(&Config::default());
        assert_eq!(query, TaskQuery::new().status(StatusFilter::Active));
    }

    #[test]
    fn flags_map_onto_query() {
        let cli = TestCli::parse_from([
            "taskdeck", "--search", "bank", "--status", "all", "-p", "high", "-c", "finance", "--sort", "due", "--desc",
        ]);
        let query = cli.filters.to_query(&Config::default());
        assert_eq!(
            query,
            TaskQuery::new()
                .search("bank")
                .status(StatusFilter::All)
                .priority(Some(Priority::High))
                .category(Some("finance".to_string()))
                .sort(SortSpec::new(SortColumn::DueDate, SortDirection::Desc))
        );
    }
}
