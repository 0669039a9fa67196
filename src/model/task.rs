use std::fmt;

use chrono::{DateTime, Utc};

/// Opaque task identifier, unique within a session
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// A fresh random identifier (UUID v4)
    pub fn generate() -> Self {
        TaskId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId(s.to_string())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of work a task represents. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskType {
    SuddenBugFix,
    #[default]
    PlannedFeature,
    BackgroundTask,
}

impl TaskType {
    /// All types, in display priority order
    pub const ALL: [TaskType; 3] = [
        TaskType::SuddenBugFix,
        TaskType::PlannedFeature,
        TaskType::BackgroundTask,
    ];

    /// Sort key for the task list: bug fixes first, background work last
    pub fn priority(self) -> u8 {
        match self {
            TaskType::SuddenBugFix => 0,
            TaskType::PlannedFeature => 1,
            TaskType::BackgroundTask => 2,
        }
    }

    /// Human-readable label shown on cards and in the form
    pub fn label(self) -> &'static str {
        match self {
            TaskType::SuddenBugFix => "Bug Fix",
            TaskType::PlannedFeature => "Feature",
            TaskType::BackgroundTask => "Background",
        }
    }

    /// The snake_case tag, as used in config files
    pub fn tag(self) -> &'static str {
        match self {
            TaskType::SuddenBugFix => "sudden_bug_fix",
            TaskType::PlannedFeature => "planned_feature",
            TaskType::BackgroundTask => "background_task",
        }
    }

    pub fn from_tag(s: &str) -> Option<TaskType> {
        TaskType::ALL.into_iter().find(|t| t.tag() == s)
    }

    /// Next type in the form's type selector (wraps)
    pub fn next(self) -> TaskType {
        match self {
            TaskType::SuddenBugFix => TaskType::PlannedFeature,
            TaskType::PlannedFeature => TaskType::BackgroundTask,
            TaskType::BackgroundTask => TaskType::SuddenBugFix,
        }
    }

    /// Previous type in the form's type selector (wraps)
    pub fn prev(self) -> TaskType {
        match self {
            TaskType::SuddenBugFix => TaskType::BackgroundTask,
            TaskType::PlannedFeature => TaskType::SuddenBugFix,
            TaskType::BackgroundTask => TaskType::PlannedFeature,
        }
    }
}

/// Open/closed state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Open,
    Closed,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Open => "Open",
            TaskStatus::Closed => "Closed",
        }
    }

    pub fn toggled(self) -> TaskStatus {
        match self {
            TaskStatus::Open => TaskStatus::Closed,
            TaskStatus::Closed => TaskStatus::Open,
        }
    }
}

/// A single tracked task.
///
/// `closed_at` is `Some` exactly when `status` is `Closed`. Fields are private
/// to the crate so that invariant can only be changed through `task_ops`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub(crate) id: TaskId,
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) task_type: TaskType,
    pub(crate) status: TaskStatus,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) closed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new open task
    pub fn new(
        id: TaskId,
        title: String,
        description: Option<String>,
        task_type: TaskType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Task {
            id,
            title,
            description,
            task_type,
            status: TaskStatus::Open,
            created_at,
            closed_at: None,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn task_type(&self) -> TaskType {
        self.task_type
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == TaskStatus::Open
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn closed_at(&self) -> Option<DateTime<Utc>> {
        self.closed_at
    }
}

/// Pending input of the creation form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// `None` means "not chosen"; creation falls back to `PlannedFeature`
    pub task_type: Option<TaskType>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        TaskDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Type the draft would be created with
    pub fn effective_type(&self) -> TaskType {
        self.task_type.unwrap_or_default()
    }

    /// Whether the draft would be accepted by `create_task`
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_priority_order() {
        assert!(TaskType::SuddenBugFix.priority() < TaskType::PlannedFeature.priority());
        assert!(TaskType::PlannedFeature.priority() < TaskType::BackgroundTask.priority());
    }

    #[test]
    fn type_tag_round_trip() {
        for t in TaskType::ALL {
            assert_eq!(TaskType::from_tag(t.tag()), Some(t));
        }
        assert_eq!(TaskType::from_tag("feature"), None);
    }

    #[test]
    fn type_cycle_wraps() {
        assert_eq!(TaskType::BackgroundTask.next(), TaskType::SuddenBugFix);
        assert_eq!(TaskType::SuddenBugFix.prev(), TaskType::BackgroundTask);
        for t in TaskType::ALL {
            assert_eq!(t.next().prev(), t);
        }
    }

    #[test]
    fn draft_defaults_to_planned_feature() {
        let draft = TaskDraft::new("x");
        assert_eq!(draft.effective_type(), TaskType::PlannedFeature);
    }

    #[test]
    fn draft_whitespace_title_not_submittable() {
        assert!(!TaskDraft::new("   \t").is_submittable());
        assert!(!TaskDraft::default().is_submittable());
        assert!(TaskDraft::new(" a ").is_submittable());
    }
}
