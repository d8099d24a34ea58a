//! CSV export and import.
//!
//! Export writes the rows of the current view with the header
//! `id,title,details,category,priority,due_date,is_done,created_at,updated_at,order_index`.
//!
//! Import looks columns up by header name, so column order does not matter
//! and unknown columns are ignored. Identity, order and timestamps are always
//! assigned fresh, so `id`, `order_index`, `created_at`, `updated_at` and
//! `is_done` in the file have no effect. Bad values inside a row are coerced:
//! an unknown priority becomes Medium and an invalid due date is dropped.
//! Rows without a title are skipped. A file that cannot be opened aborts the
//! import before anything is written.

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{format_due_date, non_empty, parse_due_date, NewTask, Task};
use crate::{msg_bail_anyhow, msg_warning};
use anyhow::Result;
use csv::StringRecord;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// One exported row. Field order defines the CSV header.
#[derive(Debug, Serialize)]
struct CsvTask<'a> {
    id: i64,
    title: &'a str,
    details: &'a str,
    category: &'a str,
    priority: &'a str,
    due_date: String,
    is_done: u8,
    created_at: &'a str,
    updated_at: &'a str,
    order_index: i64,
}

impl<'a> From<&'a Task> for CsvTask<'a> {
    fn from(task: &'a Task) -> Self {
        CsvTask {
            id: task.id,
            title: &task.title,
            details: task.details.as_deref().unwrap_or(""),
            category: task.category.as_deref().unwrap_or(""),
            priority: task.priority.as_str(),
            due_date: format_due_date(task.due_date),
            is_done: u8::from(task.is_done),
            created_at: &task.created_at,
            updated_at: &task.updated_at,
            order_index: task.order_index,
        }
    }
}

/// The columns import cares about. Anything missing reads as empty.
#[derive(Debug, Default)]
struct CsvImportRow {
    title: String,
    details: String,
    category: String,
    priority: String,
    due_date: String,
}

/// Header positions of the imported columns, found by name.
#[derive(Debug, Default)]
struct ImportColumns {
    title: Option<usize>,
    details: Option<usize>,
    category: Option<usize>,
    priority: Option<usize>,
    due_date: Option<usize>,
}

impl ImportColumns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
        };
        ImportColumns {
            title: find("title"),
            details: find("details"),
            category: find("category"),
            priority: find("priority"),
            due_date: find("due_date"),
        }
    }

    /// Fields past the end of a short record read as empty.
    fn row(&self, record: &StringRecord) -> CsvImportRow {
        let field = |column: Option<usize>| column.and_then(|i| record.get(i)).unwrap_or("").to_string();
        CsvImportRow {
            title: field(self.title),
            details: field(self.details),
            category: field(self.category),
            priority: field(self.priority),
            due_date: field(self.due_date),
        }
    }
}

impl CsvImportRow {
    fn into_new_task(self) -> Option<NewTask> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }

        Some(NewTask {
            title: title.to_string(),
            details: non_empty(self.details),
            category: non_empty(self.category),
            priority: self.priority.parse().unwrap_or_default(),
            due_date: parse_due_date(&self.due_date).unwrap_or(None),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Tasks parsed from a CSV source, ready to insert.
#[derive(Debug, Default)]
pub struct ParsedImport {
    pub tasks: Vec<NewTask>,
    pub skipped: usize,
}

pub fn write_csv<W: Write>(writer: W, tasks: &[Task]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    if tasks.is_empty() {
        // serde writes the header with the first row only
        wtr.write_record(["id", "title", "details", "category", "priority", "due_date", "is_done", "created_at", "updated_at", "order_index"])?;
    }
    for task in tasks {
        wtr.serialize(CsvTask::from(task))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `tasks` to a new file at `path`, replacing any existing file.
pub fn export_csv(path: &Path, tasks: &[Task]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, tasks)
}

pub fn read_csv<R: Read>(reader: R) -> Result<ParsedImport> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = ImportColumns::from_headers(rdr.headers()?);
    let mut parsed = ParsedImport::default();

    for record in rdr.records() {
        match record {
            Ok(record) => match columns.row(&record).into_new_task() {
                Some(task) => parsed.tasks.push(task),
                None => parsed.skipped += 1,
            },
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                msg_warning!(Message::ImportRecordSkipped(line, e.to_string()));
                parsed.skipped += 1;
            }
        }
    }

    Ok(parsed)
}

/// Reads the whole file first, then inserts every accepted row in one
/// transaction.
pub fn import_csv(tasks: &mut Tasks, path: &Path) -> Result<ImportSummary> {
    if !path.is_file() {
        msg_bail_anyhow!(Message::FileNotFound(path.display().to_string()));
    }

    let parsed = read_csv(File::open(path)?)?;
    let ids = tasks.create_many(&parsed.tasks)?;

    Ok(ImportSummary {
        imported: ids.len(),
        skipped: parsed.skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::Priority;
    use chrono::NaiveDate;

    #[test]
    fn import_uses_header_names_and_ignores_identity_columns() {
        let data = "order_index,priority,title,id,due_date,category,is_done\n\
                    7,High,Call bank,42,2025-09-05,finance,1\n";

        let parsed = read_csv(data.as_bytes()).unwrap();

        assert_eq!(parsed.skipped, 0);
        assert_eq!(
            parsed.tasks,
            vec![NewTask::new("Call bank")
                .category("finance")
                .priority(Priority::High)
                .due_date(NaiveDate::from_ymd_opt(2025, 9, 5))]
        );
    }

    #[test]
    fn import_coerces_bad_values_and_skips_untitled_rows() {
        let data = "title,details,priority,due_date\n\
                    Water plants,,urgent,tomorrow\n\
                    \"  \",x,Low,\n\
                    Read book,\"chapter 3, then notes\",low,2025-13-01\n";

        let parsed = read_csv(data.as_bytes()).unwrap();

        assert_eq!(parsed.skipped, 1);
        assert_eq!(
            parsed.tasks,
            vec![
                NewTask::new("Water plants"),
                NewTask::new("Read book").details("chapter 3, then notes").priority(Priority::Low),
            ]
        );
    }

    #[test]
    fn import_tolerates_short_rows() {
        let data = "title,details,category\nOnly title\nWith details,some notes\n";
        let parsed = read_csv(data.as_bytes()).unwrap();
        assert_eq!(parsed.skipped, 0);
        assert_eq!(
            parsed.tasks,
            vec![NewTask::new("Only title"), NewTask::new("With details").details("some notes")]
        );
    }

    #[test]
    fn import_without_title_column_skips_every_row() {
        let data = "details,category\nnotes,home\n";
        let parsed = read_csv(data.as_bytes()).unwrap();
        assert!(parsed.tasks.is_empty());
        assert_eq!(parsed.skipped, 1);
    }

    #[test]
    fn export_of_empty_view_still_has_header() {
        let mut out = Vec::new();
        write_csv(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "id,title,details,category,priority,due_date,is_done,created_at,updated_at,order_index\n"
        );
    }

    #[test]
    fn export_quotes_fields_with_delimiters() {
        let task = Task {
            id: 3,
            title: "Say \"hi\", then leave".to_string(),
            details: None,
            category: Some("home".to_string()),
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2025, 9, 5),
            is_done: true,
            order_index: 2,
            created_at: "2025-09-01T10:00:00".to_string(),
            updated_at: "2025-09-02T11:00:00".to_string(),
        };

        let mut out = Vec::new();
        write_csv(&mut out, &[task]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "id,title,details,category,priority,due_date,is_done,created_at,updated_at,order_index\n\
             3,\"Say \"\"hi\"\", then leave\",,home,High,2025-09-05,1,2025-09-01T10:00:00,2025-09-02T11:00:00,2\n"
        );
    }
}
