//! Frontend Models
//!
//! Data structures matching the task service's wire format.

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Server-assigned task identifier
pub type TaskId = i64;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Body for create and update calls. Update replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl TaskDraft {
    /// A fresh, incomplete task, sent as typed. Blank descriptions become `null`.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: (!description.trim().is_empty()).then(|| description.to_string()),
            completed: false,
        }
    }

    /// Full record for `task` with its completion flag flipped
    pub fn toggled(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            completed: !task.completed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ClientError::validation("Task title cannot be empty!"));
        }
        Ok(())
    }
}

/// Username/password pair for register (JSON) and login (form)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }

    /// `action` names the form in the message, e.g. "login"
    pub fn validate(&self, action: &str) -> Result<()> {
        if !self.is_complete() {
            return Err(ClientError::validation(format!(
                "Username and password are required for {action}."
            )));
        }
        Ok(())
    }
}

/// Login response from `/token`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Register response from `/register/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisteredUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
}
