//! Task store: CRUD, filtered queries and statistics over the `tasks` table.
//!
//! The store trusts its input. Titles and dates are validated before they
//! get here (see [`crate::libs::task`]).
//!
//! Updates and deletes of an id that does not exist succeed without effect.
//!
//! ```rust,no_run
//! use taskdeck::db::tasks::Tasks;
//! use taskdeck::libs::query::{StatusFilter, TaskQuery};
//! use taskdeck::libs::task::{NewTask, Priority, TaskUpdate};
//!
//! let mut tasks = Tasks::new()?;
//! let id = tasks.create(&NewTask::new("Pay rent").priority(Priority::High))?;
//! tasks.update(id, &TaskUpdate::default().done(true))?;
//! let open = tasks.fetch(&TaskQuery::new().status(StatusFilter::Active))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use crate::libs::query::TaskQuery;
use crate::libs::task::{format_due_date, now_timestamp, NewTask, Task, TaskStats, TaskUpdate, DATE_FORMAT};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::{debug, warn};

const SELECT_TASKS: &str = "SELECT id, title, details, category, priority, due_date, is_done, order_index, created_at, updated_at FROM tasks";
const NEXT_ORDER_INDEX: &str = "SELECT COALESCE(MAX(order_index), 0) + 1 FROM tasks";
const INSERT_TASK: &str = "INSERT INTO tasks (title, details, category, priority, due_date, is_done, order_index, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7, ?7)";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_DONE: &str = "DELETE FROM tasks WHERE is_done = 1";
const SELECT_CATEGORIES: &str = "SELECT DISTINCT category FROM tasks WHERE category IS NOT NULL AND category <> '' ORDER BY category";
const SELECT_STATS: &str = "SELECT
    COUNT(*),
    COALESCE(SUM(is_done = 1), 0),
    COALESCE(SUM(is_done = 0), 0),
    COALESCE(SUM(is_done = 0 AND due_date IS NOT NULL AND due_date <> '' AND due_date < ?1), 0)
FROM tasks";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    /// Opens the configured database.
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Self {
        Tasks { conn: db.conn }
    }

    /// Inserts a task at the end of the manual order and returns its id.
    pub fn create(&mut self, task: &NewTask) -> Result<i64> {
        let tx = self.conn.transaction()?;
        let id = insert_task(&tx, task, &now_timestamp())?;
        tx.commit()?;

        debug!(id, "task created");
        Ok(id)
    }

    /// Inserts several tasks in one transaction, in slice order.
    pub fn create_many(&mut self, tasks: &[NewTask]) -> Result<Vec<i64>> {
        let now = now_timestamp();
        let tx = self.conn.transaction()?;
        let ids = tasks
            .iter()
            .map(|task| insert_task(&tx, task, &now))
            .collect::<rusqlite::Result<Vec<_>>>()?;
        tx.commit()?;

        debug!(count = ids.len(), "tasks created");
        Ok(ids)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_TASKS), params![id], task_from_row)
            .optional()?;
        Ok(task)
    }

    /// Writes the fields set in `update` and refreshes `updated_at`. An empty
    /// update does not touch the database.
    pub fn update(&mut self, id: i64, update: &TaskUpdate) -> Result<()> {
        if update.is_empty() {
            return Ok(());
        }
        apply_update(&self.conn, id, update, &now_timestamp())?;
        Ok(())
    }

    /// Marks every task in `ids` done (or not done) with a single timestamp
    /// and returns how many of them existed.
    pub fn set_done(&mut self, ids: &[i64], done: bool) -> Result<usize> {
        let update = TaskUpdate::default().done(done);
        let now = now_timestamp();
        let tx = self.conn.transaction()?;
        let mut affected = 0;
        for &id in ids {
            affected += apply_update(&tx, id, &update, &now)?;
        }
        tx.commit()?;

        debug!(requested = ids.len(), affected, done, "tasks marked");
        Ok(affected)
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        debug!(id, affected, "task delete");
        Ok(())
    }

    /// Deletes all tasks in `ids` and returns how many existed.
    pub fn delete_many(&mut self, ids: &[i64]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut deleted = 0;
        for &id in ids {
            deleted += tx.execute(DELETE_TASK, params![id])?;
        }
        tx.commit()?;

        debug!(requested = ids.len(), deleted, "tasks delete");
        Ok(deleted)
    }

    /// Removes every completed task and returns the number removed.
    pub fn bulk_delete_done(&mut self) -> Result<usize> {
        let deleted = self.conn.execute(DELETE_DONE, [])?;
        debug!(deleted, "completed tasks removed");
        Ok(deleted)
    }

    pub fn fetch(&mut self, query: &TaskQuery) -> Result<Vec<Task>> {
        let parts = query.to_sql();
        let mut sql = SELECT_TASKS.to_string();
        if !parts.where_clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&parts.where_clause);
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(&parts.order_by);

        let mut stmt = self.conn.prepare(&sql)?;
        let tasks = stmt
            .query_map(params_from_iter(parts.params.iter()), task_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(rows = tasks.len(), "tasks fetched");
        Ok(tasks)
    }

    /// Distinct non-empty categories, sorted.
    pub fn categories(&mut self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_CATEGORIES)?;
        let categories = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(categories)
    }

    pub fn stats(&mut self) -> Result<TaskStats> {
        self.stats_on(crate::libs::task::today())
    }

    /// Statistics with `today` as the reference date for overdue tasks.
    pub fn stats_on(&mut self, today: NaiveDate) -> Result<TaskStats> {
        let stats = self.conn.query_row(SELECT_STATS, params![today], |row| {
            Ok(TaskStats {
                total: row.get(0)?,
                done: row.get(1)?,
                active: row.get(2)?,
                overdue: row.get(3)?,
            })
        })?;
        Ok(stats)
    }
}

fn insert_task(conn: &Connection, task: &NewTask, now: &str) -> rusqlite::Result<i64> {
    let order_index: i64 = conn.query_row(NEXT_ORDER_INDEX, [], |row| row.get(0))?;
    conn.execute(
        INSERT_TASK,
        params![
            task.title,
            task.details.as_deref().unwrap_or(""),
            task.category.as_deref().unwrap_or(""),
            task.priority,
            format_due_date(task.due_date),
            order_index,
            now,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn apply_update(conn: &Connection, id: i64, update: &TaskUpdate, now: &str) -> rusqlite::Result<usize> {
    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(title) = &update.title {
        sets.push("title = ?");
        values.push(Value::Text(title.clone()));
    }
    if let Some(details) = &update.details {
        sets.push("details = ?");
        values.push(Value::Text(details.clone()));
    }
    if let Some(category) = &update.category {
        sets.push("category = ?");
        values.push(Value::Text(category.clone()));
    }
    if let Some(priority) = update.priority {
        sets.push("priority = ?");
        values.push(Value::Text(priority.as_str().to_string()));
    }
    if let Some(due_date) = update.due_date {
        sets.push("due_date = ?");
        values.push(Value::Text(format_due_date(due_date)));
    }
    if let Some(is_done) = update.is_done {
        sets.push("is_done = ?");
        values.push(Value::Integer(i64::from(is_done)));
    }

    sets.push("updated_at = ?");
    values.push(Value::Text(now.to_string()));
    values.push(Value::Integer(id));

    let sql = format!("UPDATE tasks SET {} WHERE id = ?", sets.join(", "));
    let affected = conn.execute(&sql, params_from_iter(values))?;
    if affected == 0 {
        debug!(id, "update matched no task");
    }
    Ok(affected)
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    let id: i64 = row.get(0)?;
    let details: Option<String> = row.get(2)?;
    let category: Option<String> = row.get(3)?;
    let due_raw: Option<String> = row.get(5)?;

    Ok(Task {
        id,
        title: row.get(1)?,
        details: details.filter(|s| !s.is_empty()),
        category: category.filter(|s| !s.is_empty()),
        priority: row.get::<_, Option<_>>(4)?.unwrap_or_default(),
        due_date: stored_due_date(id, due_raw),
        is_done: row.get(6)?,
        order_index: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn stored_due_date(id: i64, raw: Option<String>) -> Option<NaiveDate> {
    let raw = raw.filter(|s| !s.trim().is_empty())?;
    match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            warn!("{}", crate::libs::messages::Message::InvalidStoredDueDate(id, raw));
            None
        }
    }
}
