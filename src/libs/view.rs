use super::highlight::{Highlighter, RowTag};
use super::task::{format_due_date, Task};
use chrono::NaiveDate;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints tasks as a table, colored by their row tags.
    pub fn tasks(tasks: &[Task], highlighter: &Highlighter, today: NaiveDate) {
        let mut table = Table::new();

        table.set_titles(row!["ID", "TITLE", "CATEGORY", "PRIORITY", "DUE", "STATUS", "CREATED"]);
        for task in tasks {
            let style = style_spec(&highlighter.tags(task, today));
            let cells = [
                task.id.to_string(),
                task.title.clone(),
                task.category.clone().unwrap_or_default(),
                task.priority.to_string(),
                format_due_date(task.due_date),
                status_label(task).to_string(),
                task.created_at.replace('T', " "),
            ];
            table.add_row(Row::new(cells.iter().map(|text| Cell::new(text).style_spec(&style)).collect()));
        }
        table.printstd();
    }

    pub fn categories(categories: &[String]) {
        let mut table = Table::new();
        table.set_titles(row!["CATEGORY"]);
        for category in categories {
            table.add_row(row![category]);
        }
        table.printstd();
    }
}

pub fn status_label(task: &Task) -> &'static str {
    if task.is_done {
        "Done"
    } else {
        "Active"
    }
}

/// Maps row tags to a prettytable style: gray for done, red for overdue,
/// yellow for due today, green for due soon, bold for high priority.
fn style_spec(tags: &[RowTag]) -> String {
    let mut spec = String::new();
    for tag in tags {
        match tag {
            RowTag::Done => spec.push_str("FD"),
            RowTag::Overdue => spec.push_str("Fr"),
            RowTag::Today => spec.push_str("Fy"),
            RowTag::Soon => spec.push_str("Fg"),
            RowTag::HighPriority => spec.push('b'),
        }
    }
    spec
}
