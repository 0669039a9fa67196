use chrono::{DateTime, TimeZone, Utc};

use crate::model::task::{Task, TaskDraft, TaskId, TaskType};
use crate::model::view_mode::ViewMode;

use super::filter;
use super::task_ops;

/// Session state behind the task list: the collection, the selected view,
/// and the creation form's draft.
#[derive(Debug, Clone, Default)]
pub struct TaskView {
    tasks: Vec<Task>,
    view: ViewMode,
    draft: TaskDraft,
    form_open: bool,
}

impl TaskView {
    pub fn new(view: ViewMode) -> Self {
        TaskView {
            view,
            ..Default::default()
        }
    }

    /// A view seeded with the sample task shown on first launch
    pub fn with_welcome_task(view: ViewMode, now: DateTime<Utc>) -> Self {
        let mut tv = TaskView::new(view);
        tv.tasks.push(Task::new(
            TaskId::from("1"),
            "Welcome to Task Tracker".to_string(),
            Some("This is a sample task. Create new tasks to get started!".to_string()),
            TaskType::PlannedFeature,
            task_ops::stamp(now),
        ));
        tv
    }

    /// The collection in storage order (newest first)
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn select_view(&mut self, view: ViewMode) {
        if self.view != view {
            tracing::debug!(from = %self.view, to = %view, "view changed");
        }
        self.view = view;
    }

    /// The tasks to display for the current view at `now`
    pub fn visible_tasks<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<&Task> {
        filter::visible_tasks(now, &self.tasks, self.view)
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Show or hide the creation form. Hiding keeps the draft.
    pub fn set_form_open(&mut self, open: bool) {
        self.form_open = open;
    }

    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    /// Create a task from the current draft.
    ///
    /// On success the draft is reset and the form closes. A blank title
    /// leaves everything, form included, as it was.
    pub fn submit_draft(&mut self, now: DateTime<Utc>) -> Option<TaskId> {
        let id = task_ops::create_task(&mut self.tasks, &self.draft, now)?;
        self.draft = TaskDraft::default();
        self.form_open = false;
        Some(id)
    }

    /// Flip a task's status. Unknown ids are ignored.
    pub fn toggle_status(&mut self, id: &TaskId, now: DateTime<Utc>) -> bool {
        task_ops::toggle_status(&mut self.tasks, id, now)
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        task_ops::find_task(&self.tasks, id)
    }
}
