use crate::error::ParseError;
use crate::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ParseError> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ParseError::UnknownPriority {
                value: other.to_string(),
            }),
        }
    }
}

/// A planning checklist item. `due_date` is a free-text date string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub due_date: Option<String>,
    pub priority: TaskPriority,
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub due_date: Option<String>,
    pub priority: TaskPriority,
    pub category: Option<String>,
}

impl NewTask {
    #[must_use]
    pub fn into_record(self, id: RecordId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            is_completed: self.is_completed,
            due_date: self.due_date,
            priority: self.priority,
            category: self.category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub is_completed: Option<bool>,
    pub due_date: Option<Option<String>>,
    pub priority: Option<TaskPriority>,
    pub category: Option<Option<String>>,
}

impl TaskPatch {
    pub fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(is_completed) = self.is_completed {
            task.is_completed = is_completed;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category) = self.category {
            task.category = category;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }

    #[test]
    fn priority_serializes_lowercase() {
        let task = NewTask {
            title: "Book florist".to_string(),
            description: None,
            is_completed: false,
            due_date: None,
            priority: TaskPriority::High,
            category: None,
        }
        .into_record(4);
        let value = serde_json::to_value(task).expect("serialize task");
        assert_eq!(value["priority"], "high");
        assert_eq!(value["isCompleted"], false);
    }
}
