use serde::Serialize;

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaskDraft {
    /// Trims the title and drops a blank description.
    pub fn new(title: &str, description: &str) -> Self {
        let description = description.trim();
        Self {
            title: title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        }
    }
}
