//! Deadline and priority highlighting for task rows.
//!
//! Tags are derived on every render from a task and today's date. They are
//! never stored and have no effect on which rows a query returns.

use crate::libs::task::{Priority, Task};
use chrono::{Duration, NaiveDate};

pub const DEFAULT_SOON_DAYS: i64 = 3;

/// Largest accepted "soon" window, about a century.
pub const MAX_SOON_DAYS: i64 = 36_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowTag {
    Done,
    Overdue,
    Today,
    Soon,
    HighPriority,
}


/// Tags rows using a configurable "soon" window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlighter {
    soon_window: Duration,
}

impl Highlighter {
    /// `soon_days` is clamped to `0..=MAX_SOON_DAYS`.
    pub fn new(soon_days: i64) -> Self {
        Self {
            soon_window: Duration::days(soon_days.clamp(0, MAX_SOON_DAYS)),
        }
    }

    /// A done task gets `Done` and no deadline tag. An open task with a due
    /// date gets at most one of `Overdue`, `Today` or `Soon`. `HighPriority`
    /// is added for High tasks either way.
    pub fn tags(&self, task: &Task, today: NaiveDate) -> Vec<RowTag> {
        let mut tags = Vec::new();

        if task.is_done {
            tags.push(RowTag::Done);
        } else if let Some(due) = task.due_date {
            if due < today {
                tags.push(RowTag::Overdue);
            } else if due == today {
                tags.push(RowTag::Today);
            } else if today.checked_add_signed(self.soon_window).map_or(true, |limit| due <= limit) {
                tags.push(RowTag::Soon);
            }
        }

        if task.priority == Priority::High {
            tags.push(RowTag::HighPriority);
        }

        tags
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_SOON_DAYS)
    }
}

/// [`Highlighter::tags`] with the default three-day window.
pub fn row_tags(task: &Task, today: NaiveDate) -> Vec<RowTag> {
    Highlighter::default().tags(task, today)
}
