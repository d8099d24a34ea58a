//! Query builder: turns the view's filter and sort choices into SQL.
//!
//! A [`TaskQuery`] is a plain value owned by whoever drives the view. It is
//! passed to [`crate::db::tasks::Tasks::fetch`] on every read; nothing about
//! the current filters is kept anywhere else.
//!
//! Filters are independent and AND-combined. The free-text search is an OR
//! over title, details and category. Every ordering ends with
//! `order_index ASC, id ASC` so rows with equal sort keys keep a stable order.

use crate::libs::task::Priority;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which completion states to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Done,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::Active, StatusFilter::Done, StatusFilter::All];
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Done => "done",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortColumn {
    /// Manual order: creation order unless rearranged.
    #[default]
    #[value(name = "order")]
    OrderIndex,
    Title,
    Category,
    Priority,
    #[value(name = "due")]
    DueDate,
    #[value(name = "status")]
    IsDone,
    #[value(name = "created")]
    CreatedAt,
}

impl SortColumn {
    pub const ALL: [SortColumn; 7] = [
        SortColumn::OrderIndex,
        SortColumn::Title,
        SortColumn::Category,
        SortColumn::Priority,
        SortColumn::DueDate,
        SortColumn::IsDone,
        SortColumn::CreatedAt,
    ];

    /// SQL expression to sort by. Priority sorts by rank, not by its text.
    fn sql_expr(&self) -> &'static str {
        match self {
            SortColumn::OrderIndex => "order_index",
            SortColumn::Title => "title",
            SortColumn::Category => "category",
            SortColumn::Priority => "CASE priority WHEN 'Low' THEN 0 WHEN 'Medium' THEN 1 ELSE 2 END",
            SortColumn::DueDate => "due_date",
            SortColumn::IsDone => "is_done",
            SortColumn::CreatedAt => "created_at",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::OrderIndex => "order",
            SortColumn::Title => "title",
            SortColumn::Category => "category",
            SortColumn::Priority => "priority",
            SortColumn::DueDate => "due date",
            SortColumn::IsDone => "status",
            SortColumn::CreatedAt => "created",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    fn sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    fn flipped(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Applies a click on a column heading: the current column flips its
    /// direction, any other column starts ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column;
            self.direction = SortDirection::Asc;
        }
    }

    pub fn order_by(&self) -> String {
        let dir = self.direction.sql();
        match self.column {
            SortColumn::OrderIndex => format!("order_index {dir}, id ASC"),
            column => format!("{} {}, order_index ASC, id ASC", column.sql_expr(), dir),
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.direction {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        };
        write!(f, "{} {}", self.column.label(), arrow)
    }
}

/// The current view: search text, filters and sort.
///
/// `None` for `priority` or `category` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskQuery {
    pub search: Option<String>,
    pub status: StatusFilter,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub sort: SortSpec,
}

/// SQL fragments produced from a [`TaskQuery`]. `where_clause` is empty when
/// no filter is active and never includes the `WHERE` keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlParts {
    pub where_clause: String,
    pub params: Vec<Value>,
    pub order_by: String,
}

impl TaskQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = priority;
        self
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Resets search and filters. The sort order is kept.
    pub fn reset_filters(&mut self, status: StatusFilter) {
        self.search = None;
        self.status = status;
        self.priority = None;
        self.category = None;
    }

    pub fn to_sql(&self) -> SqlParts {
        let mut predicates: Vec<&str> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        if let Some(text) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            predicates.push(
                "(title LIKE ? ESCAPE '\\' OR details LIKE ? ESCAPE '\\' OR category LIKE ? ESCAPE '\\')",
            );
            let pattern = format!("%{}%", escape_like(text));
            params.extend(std::iter::repeat(Value::Text(pattern)).take(3));
        }

        match self.status {
            StatusFilter::All => {}
            StatusFilter::Active => predicates.push("is_done = 0"),
            StatusFilter::Done => predicates.push("is_done = 1"),
        }

        if let Some(priority) = self.priority {
            predicates.push("priority = ?");
            params.push(Value::Text(priority.as_str().to_string()));
        }

        if let Some(category) = &self.category {
            predicates.push("category = ?");
            params.push(Value::Text(category.clone()));
        }

        SqlParts {
            where_clause: predicates.join(" AND "),
            params,
            order_by: self.sort.order_by(),
        }
    }

    /// One-line summary of the active filters for the browse session.
    pub fn describe(&self) -> String {
        let mut parts = vec![format!("status={}", self.status)];
        if let Some(text) = self.search.as_deref().filter(|t| !t.trim().is_empty()) {
            parts.push(format!("search=\"{}\"", text.trim()));
        }
        if let Some(priority) = self.priority {
            parts.push(format!("priority={}", priority));
        }
        if let Some(category) = &self.category {
            parts.push(format!("category={}", category));
        }
        parts.push(format!("sort={}", self.sort));
        parts.join(", ")
    }
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_has_no_filter_and_manual_order() {
        let parts = TaskQuery::new().to_sql();
        assert_eq!(parts.where_clause, "");
        assert!(parts.params.is_empty());
        assert_eq!(parts.order_by, "order_index ASC, id ASC");
    }

    #[test]
    fn filters_are_and_combined_in_a_fixed_order() {
        let parts = TaskQuery::new()
            .search("report")
            .status(StatusFilter::Active)
            .priority(Some(Priority::High))
            .category(Some("work".to_string()))
            .to_sql();

        assert_eq!(
            parts.where_clause,
            "(title LIKE ? ESCAPE '\\' OR details LIKE ? ESCAPE '\\' OR category LIKE ? ESCAPE '\\') \
             AND is_done = 0 AND priority = ? AND category = ?"
        );
        assert_eq!(
            parts.params,
            vec![
                Value::Text("%report%".to_string()),
                Value::Text("%report%".to_string()),
                Value::Text("%report%".to_string()),
                Value::Text("High".to_string()),
                Value::Text("work".to_string()),
            ]
        );
    }

    #[test]
    fn blank_search_adds_no_predicate() {
        let parts = TaskQuery::new().search("   ").status(StatusFilter::Done).to_sql();
        assert_eq!(parts.where_clause, "is_done = 1");
        assert!(parts.params.is_empty());
    }

    #[test]
    fn search_wildcards_match_literally() {
        let parts = TaskQuery::new().search(" 50%_off\\ ").to_sql();
        assert_eq!(parts.params[0], Value::Text("%50\\%\\_off\\\\%".to_string()));
    }

    #[test]
    fn sort_clause_always_ends_with_stable_tiebreak() {
        let sort = SortSpec::new(SortColumn::DueDate, SortDirection::Desc);
        assert_eq!(sort.order_by(), "due_date DESC, order_index ASC, id ASC");

        let sort = SortSpec::new(SortColumn::Priority, SortDirection::Asc);
        assert_eq!(
            sort.order_by(),
            "CASE priority WHEN 'Low' THEN 0 WHEN 'Medium' THEN 1 ELSE 2 END ASC, order_index ASC, id ASC"
        );
    }

    #[test]
    fn manual_order_descending_keeps_id_tiebreak_ascending() {
        let sort = SortSpec::new(SortColumn::OrderIndex, SortDirection::Desc);
        assert_eq!(sort.order_by(), "order_index DESC, id ASC");
    }

    #[test]
    fn toggling_same_column_flips_direction() {
        let mut sort = SortSpec::default();
        sort.toggle(SortColumn::Title);
        assert_eq!(sort, SortSpec::new(SortColumn::Title, SortDirection::Asc));
        sort.toggle(SortColumn::Title);
        assert_eq!(sort, SortSpec::new(SortColumn::Title, SortDirection::Desc));
        sort.toggle(SortColumn::Title);
        assert_eq!(sort, SortSpec::new(SortColumn::Title, SortDirection::Asc));
    }

    #[test]
    fn selecting_new_column_resets_to_ascending() {
        let mut sort = SortSpec::new(SortColumn::Title, SortDirection::Desc);
        sort.toggle(SortColumn::CreatedAt);
        assert_eq!(sort, SortSpec::new(SortColumn::CreatedAt, SortDirection::Asc));
    }

    #[test]
    fn reset_keeps_sort() {
        let sort = SortSpec::new(SortColumn::Title, SortDirection::Desc);
        let mut query = TaskQuery::new()
            .search("x")
            .priority(Some(Priority::Low))
            .category(Some("home".to_string()))
            .sort(sort);

        query.reset_filters(StatusFilter::Active);

        assert_eq!(query, TaskQuery::new().status(StatusFilter::Active).sort(sort));
    }

    #[test]
    fn describe_lists_active_filters() {
        let query = TaskQuery::new()
            .status(StatusFilter::Active)
            .priority(Some(Priority::High))
            .sort(SortSpec::new(SortColumn::DueDate, SortDirection::Asc));
        assert_eq!(query.describe(), "status=active, priority=High, sort=due date ↑");
    }
}
