//! View Model
//!
//! Pure state → display decisions. Components only format what these
//! functions return.

use crate::models::{Task, TaskId};
use crate::session::Session;

pub const NO_DESCRIPTION: &str = "No description";
pub const EMPTY_LIST: &str = "No tasks yet. Create one!";

/// Which top-level region is visible. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    SignedOut,
    SignedIn { username: String },
}

impl Screen {
    pub fn for_session(session: &Session) -> Self {
        match session.username() {
            Some(username) if session.is_authenticated() => Self::SignedIn {
                username: username.to_string(),
            },
            _ => Self::SignedOut,
        }
    }
}

/// One rendered task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TaskRow {
    pub fn css_class(&self) -> &'static str {
        if self.completed { "task-item completed" } else { "task-item" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.completed { "Mark as Incomplete" } else { "Mark as Complete" }
    }
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        let description = task
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION);
        Self {
            id: task.id,
            title: task.title.clone(),
            description: description.to_string(),
            completed: task.completed,
        }
    }
}

/// Contents of the task list region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListView {
    /// Nothing fetched yet
    Loading,
    Empty,
    Rows(Vec<TaskRow>),
}

impl TaskListView {
    pub fn from_tasks(tasks: Option<&[Task]>) -> Self {
        match tasks {
            None => Self::Loading,
            Some([]) => Self::Empty,
            Some(tasks) => Self::Rows(tasks.iter().map(TaskRow::from).collect()),
        }
    }
}
