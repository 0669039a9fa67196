use chrono::{DateTime, SubsecRound, Utc};

use crate::model::task::{Task, TaskDraft, TaskId, TaskStatus};

/// Timestamps are kept at millisecond precision
pub fn stamp(now: DateTime<Utc>) -> DateTime<Utc> {
    now.trunc_subsecs(3)
}

/// Create a task from `draft` and prepend it to `tasks`.
///
/// A draft whose title is blank after trimming is refused: `tasks` is left
/// untouched and `None` is returned. The title is stored as typed.
pub fn create_task(tasks: &mut Vec<Task>, draft: &TaskDraft, now: DateTime<Utc>) -> Option<TaskId> {
    if !draft.is_submittable() {
        tracing::debug!("refused draft with blank title");
        return None;
    }

    let mut id = TaskId::generate();
    while find_task(tasks, &id).is_some() {
        id = TaskId::generate();
    }

    let description = if draft.description.is_empty() {
        None
    } else {
        Some(draft.description.clone())
    };
    let task = Task::new(
        id.clone(),
        draft.title.clone(),
        description,
        draft.effective_type(),
        stamp(now),
    );
    tracing::info!(id = %id, task_type = task.task_type.tag(), "created task");
    tasks.insert(0, task);
    Some(id)
}

/// Flip a task between open and closed. Returns false if `id` is unknown.
pub fn toggle_status(tasks: &mut [Task], id: &TaskId, now: DateTime<Utc>) -> bool {
    let Some(task) = find_task_mut(tasks, id) else {
        tracing::debug!(id = %id, "toggle for unknown task ignored");
        return false;
    };
    let new_status = task.status.toggled();
    set_status(task, new_status, now);
    tracing::info!(id = %id, status = new_status.label(), "toggled task");
    true
}

/// Set status directly, keeping `closed_at` in step with it
pub fn set_status(task: &mut Task, new_status: TaskStatus, now: DateTime<Utc>) {
    if task.status == new_status {
        return;
    }
    task.status = new_status;
    task.closed_at = match new_status {
        TaskStatus::Closed => Some(stamp(now)),
        TaskStatus::Open => None,
    };
}

pub fn find_task<'a>(tasks: &'a [Task], id: &TaskId) -> Option<&'a Task> {
    tasks.iter().find(|t| &t.id == id)
}

pub fn find_task_mut<'a>(tasks: &'a mut [Task], id: &TaskId) -> Option<&'a mut Task> {
    tasks.iter_mut().find(|t| &t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskType;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 12, 15, 0, 0).unwrap()
    }

    #[test]
    fn create_prepends_open_task() {
        let mut tasks = Vec::new();
        let first = create_task(&mut tasks, &TaskDraft::new("first"), now()).unwrap();
        let second = create_task(&mut tasks, &TaskDraft::new("second"), now()).unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, second);
        assert_eq!(tasks[1].id, first);
        assert_ne!(first, second);
        assert_eq!(tasks[0].status, TaskStatus::Open);
        assert_eq!(tasks[0].closed_at, None);
        assert_eq!(tasks[0].created_at, now());
        assert_eq!(tasks[0].task_type, TaskType::PlannedFeature);
    }

    #[test]
    fn create_keeps_chosen_type_and_description() {
        let mut tasks = Vec::new();
        let draft = TaskDraft {
            title: "crash on save".into(),
            description: "stack trace attached".into(),
            task_type: Some(TaskType::SuddenBugFix),
        };
        create_task(&mut tasks, &draft, now()).unwrap();
        assert_eq!(tasks[0].task_type, TaskType::SuddenBugFix);
        assert_eq!(tasks[0].description(), Some("stack trace attached"));
        assert_eq!(tasks[0].title(), "crash on save");
    }

    #[test]
    fn create_stores_empty_description_as_none() {
        let mut tasks = Vec::new();
        create_task(&mut tasks, &TaskDraft::new("x"), now()).unwrap();
        assert_eq!(tasks[0].description(), None);
    }

    #[test]
    fn create_refuses_blank_title() {
        let mut tasks = Vec::new();
        assert!(create_task(&mut tasks, &TaskDraft::new("  "), now()).is_none());
        assert!(create_task(&mut tasks, &TaskDraft::new(""), now()).is_none());
        assert!(tasks.is_empty());
    }

    #[test]
    fn create_truncates_to_millis() {
        let mut tasks = Vec::new();
        let t = Utc.with_ymd_and_hms(2024, 6, 12, 15, 0, 0).unwrap()
            + chrono::Duration::nanoseconds(123_456_789);
        create_task(&mut tasks, &TaskDraft::new("x"), t).unwrap();
        assert_eq!(tasks[0].created_at.timestamp_subsec_nanos(), 123_000_000);
    }

    #[test]
    fn toggle_round_trip() {
        let mut tasks = Vec::new();
        let id = create_task(&mut tasks, &TaskDraft::new("x"), now()).unwrap();
        let later = now() + chrono::Duration::hours(2);

        assert!(toggle_status(&mut tasks, &id, later));
        assert_eq!(tasks[0].status, TaskStatus::Closed);
        assert_eq!(tasks[0].closed_at, Some(later));

        assert!(toggle_status(&mut tasks, &id, later + chrono::Duration::hours(1)));
        assert_eq!(tasks[0].status, TaskStatus::Open);
        assert_eq!(tasks[0].closed_at, None);
        assert_eq!(tasks[0].created_at, now());
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut tasks = Vec::new();
        create_task(&mut tasks, &TaskDraft::new("x"), now()).unwrap();
        let before = tasks.clone();
        assert!(!toggle_status(&mut tasks, &TaskId::from("missing"), now()));
        assert_eq!(tasks, before);
    }

    #[test]
    fn toggle_touches_only_target() {
        let mut tasks = Vec::new();
        let a = create_task(&mut tasks, &TaskDraft::new("a"), now()).unwrap();
        create_task(&mut tasks, &TaskDraft::new("b"), now()).unwrap();
        toggle_status(&mut tasks, &a, now());
        assert!(find_task(&tasks, &a).is_some_and(|t| !t.is_open()));
        assert!(tasks[0].is_open());
    }

    #[test]
    fn set_status_same_state_keeps_closed_at() {
        let mut tasks = Vec::new();
        let id = create_task(&mut tasks, &TaskDraft::new("x"), now()).unwrap();
        toggle_status(&mut tasks, &id, now());
        let task = find_task_mut(&mut tasks, &id).unwrap();
        set_status(task, TaskStatus::Closed, now() + chrono::Duration::days(1));
        assert_eq!(task.closed_at, Some(now()));
    }
}
