use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Work,
    School,
    Personal,
    Others,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::School => "school",
            Self::Personal => "personal",
            Self::Others => "others",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "work" => Some(Self::Work),
            "school" => Some(Self::School),
            "personal" => Some(Self::Personal),
            "others" => Some(Self::Others),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn from_i32(n: i32) -> Option<Self> {
        match n {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// A task as returned by the remote store. Dates travel as ISO `yyyy-MM-dd`
/// strings at every boundary; the store is the sole authority on `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_finished: bool,
    pub created_date: String,
    pub due_date: String,
    pub priority: i32,
}

/// The full-record payload sent to `createTask` and `updateTask`. Updates
/// always carry every field, even when only one changed (full-replace, not
/// partial patch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub name: String,
    pub category: String,
    pub description: String,
    pub is_finished: bool,
    pub created_date: String,
    pub due_date: String,
    pub priority: i32,
}

impl Task {
    /// Rebuild the wire payload for a full-replace update of this record.
    pub fn to_input(&self) -> TaskInput {
        TaskInput {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone().unwrap_or_default(),
            is_finished: self.is_finished,
            created_date: self.created_date.clone(),
            due_date: self.due_date.clone(),
            priority: self.priority,
        }
    }
}
