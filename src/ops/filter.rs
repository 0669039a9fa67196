use chrono::{DateTime, TimeZone};

use crate::model::task::Task;
use crate::model::view_mode::ViewMode;

use super::calendar::{WeekWindow, local_date, previous_day, same_local_day};

/// Whether `task` belongs in `mode`'s list at reference instant `now`
pub fn matches_view<Tz: TimeZone>(task: &Task, mode: ViewMode, now: &DateTime<Tz>) -> bool {
    match mode {
        ViewMode::Today => {
            task.is_open() || task.closed_at.is_some_and(|c| same_local_day(&c, now))
        }
        // Open tasks never show here, even if created yesterday
        ViewMode::Yesterday => {
            let yesterday = previous_day(now);
            task.closed_at
                .is_some_and(|c| local_date(&c, &now.timezone()) == yesterday)
        }
        ViewMode::Week => {
            let tz = now.timezone();
            let week = WeekWindow::containing(now);
            week.contains(&task.created_at, &tz)
                || task.closed_at.is_some_and(|c| week.contains(&c, &tz))
        }
        ViewMode::All => true,
    }
}

/// Derive the displayed list: filter by `mode`, then order by type priority.
///
/// The sort is stable, so tasks of the same type keep their collection order.
/// `tasks` itself is never reordered.
pub fn visible_tasks<'a, Tz: TimeZone>(
    now: &DateTime<Tz>,
    tasks: &'a [Task],
    mode: ViewMode,
) -> Vec<&'a Task> {
    let mut visible: Vec<&Task> = tasks
        .iter()
        .filter(|task| matches_view(task, mode, now))
        .collect();
    visible.sort_by_key(|task| task.task_type.priority());
    visible
}
