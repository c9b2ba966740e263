//! Overdue detection against the start of the local calendar day.

use chrono::{Local, NaiveDateTime, NaiveTime};

use crate::domain::Task;

/// Midnight at the start of the day containing `now`.
pub fn start_of_day(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN)
}

/// Start of the current day in local time.
pub fn local_start_of_day() -> NaiveDateTime {
    start_of_day(Local::now().naive_local())
}

/// An active task with a due date strictly before `day_start`.
pub fn is_overdue(task: &Task, day_start: NaiveDateTime) -> bool {
    !task.completed && task.due.is_some_and(|due| due < day_start)
}
