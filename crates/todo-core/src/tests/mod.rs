
use crate::{Task, TaskId, Timestamp};

pub(crate) fn task(id: TaskId, title: &str, description: Option<&str>, completed: bool) -> Task {
    let now = Timestamp::now();
    Task {
        id,
        user_id: None,
        title: title.to_string(),
        description: description.map(String::from),
        completed,
        created_at: now,
        updated_at: now,
    }
}
