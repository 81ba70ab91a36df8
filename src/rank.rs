use crate::models::Task;
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;

pub const DUE_DATE_WEIGHT: i64 = 100;
pub const STATUS_WEIGHT: i64 = 50;
pub const PRIORITY_WEIGHT: i64 = 10;

/// Sort key for a task relative to `today`.
///
/// Undated tasks always order after dated ones. Within each group the
/// scalar part is compared, lower first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    undated: bool,
    score: i64,
}

impl SortKey {
    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn is_undated(&self) -> bool {
        self.undated
    }
}

/// 1970-01-01 counted from 0001-01-01
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Days since the Unix epoch
fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

/// Compute the ranking key of a single task
pub fn sort_key(task: &Task, today: NaiveDate) -> SortKey {
    let status = STATUS_WEIGHT * i64::from(task.completed);
    let priority = PRIORITY_WEIGHT * task.priority.value();

    match task.due_date {
        Some(due) => {
            let due_term = DUE_DATE_WEIGHT * (2 * day_number(due) - day_number(today));
            SortKey {
                undated: false,
                score: due_term + status + priority,
            }
        }
        None => SortKey {
            undated: true,
            score: status + priority,
        },
    }
}

/// Comparator over tasks, most urgent first. Ties fall back to id.
pub fn compare(a: &Task, b: &Task, today: NaiveDate) -> Ordering {
    sort_key(a, today)
        .cmp(&sort_key(b, today))
        .then_with(|| a.id.cmp(&b.id))
}

/// Order tasks for display
pub fn rank<'a, I>(tasks: I, today: NaiveDate) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut keyed: Vec<(SortKey, &Task)> = tasks
        .into_iter()
        .map(|t| (sort_key(t, today), t))
        .collect();
    keyed.sort_by(|(ka, a), (kb, b)| ka.cmp(kb).then_with(|| a.id.cmp(&b.id)));
    keyed.into_iter().map(|(_, t)| t).collect()
}
