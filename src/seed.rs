use chrono::{Duration, Utc};

use crate::models::{Todo, TodoId};

fn todo(id: &str, title: &str, description: &str, completed: bool, age_days: i64) -> Todo {
    let created = Utc::now() - Duration::days(age_days);
    Todo {
        id: TodoId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        completed,
        created_at: created,
        updated_at: created,
    }
}

/// Fixed starter set loaded into the store at server start.
pub fn seed_todos() -> Vec<Todo> {
    vec![
        todo("1", "Buy groceries", "Buy groceries for the week", false, 3),
        todo("2", "Finish the project", "Finish the project for the client", true, 2),
        todo("3", "Read a book", "Read a book for the week", false, 1),
        todo("4", "Go to the gym", "Go to the gym for the week", false, 0),
        todo("5", "Call mom", "Call mom to check in", true, 2),
        todo("6", "Plan vacation", "Research and plan summer vacation", false, 0),
    ]
}
