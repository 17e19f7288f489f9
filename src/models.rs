// Data model for the to-do list

use crate::ids::{IdGenerator, TaskId};
use serde::{Deserialize, Serialize};

/// A single to-do entry
///
/// Only the `done` flag is ever mutated; `id` and `label` are fixed at
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub label: String,
    pub done: bool,
}

/// The four starter tasks shown on first launch: two active, two completed
pub fn sample_tasks(ids: &mut dyn IdGenerator) -> Vec<Task> {
    vec![
        Task {
            id: ids.next_id(),
            label: "Learn Java".to_string(),
            done: false,
        },
        Task {
            id: ids.next_id(),
            label: "Complete Math homework".to_string(),
            done: false,
        },
        Task {
            id: ids.next_id(),
            label: "Complete Mini Project".to_string(),
            done: true,
        },
        Task {
            id: ids.next_id(),
            label: "Buy groceries".to_string(),
            done: true,
        },
    ]
}
