use thiserror::Error;

use crate::models::{CreateTodoRequest, Todo, UpdateTodoRequest};
use crate::repository::{RepoError, TodoRepository};

/// Domain error taxonomy. The controller maps these to status codes by
/// variant, never by message text; the messages are diagnostic only.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Todo not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl TodoError {
    fn validation(reason: &str) -> Self {
        Self::Validation(reason.to_string())
    }
}

/// Validation and business-rule layer. The sole authority that turns a
/// missing record into `NotFound` and bad input into `Validation`.
pub struct TodoService {
    repo: TodoRepository,
}

impl TodoService {
    pub fn new(repo: TodoRepository) -> Self {
        Self { repo }
    }

    pub fn get_all_todos(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.repo.find_all()?)
    }

    pub fn get_todo_by_id(&self, id: &str) -> Result<Todo, TodoError> {
        self.repo.find_by_id(id)?.ok_or(TodoError::NotFound)
    }

    /// Trims title and description before persisting; description defaults
    /// to the empty string so searches against it are always defined.
    pub fn create_todo(&self, data: CreateTodoRequest) -> Result<Todo, TodoError> {
        let title = data.title.as_deref().unwrap_or("").trim().to_string();
        if title.is_empty() {
            return Err(TodoError::validation("Title is required"));
        }

        let description = data
            .description
            .as_deref()
            .map(str::trim)
            .unwrap_or("")
            .to_string();

        Ok(self.repo.create(title, description)?)
    }

    /// Partial update: only explicitly provided fields are cleaned and
    /// forwarded; everything else in storage is left untouched.
    pub fn update_todo(&self, id: &str, data: UpdateTodoRequest) -> Result<Todo, TodoError> {
        if data.is_empty() {
            return Err(TodoError::validation(
                "At least one field must be provided for update",
            ));
        }

        let title = match data.title {
            Some(title) => {
                let trimmed = title.trim().to_string();
                if trimmed.is_empty() {
                    return Err(TodoError::validation("Title cannot be empty"));
                }
                Some(trimmed)
            }
            None => None,
        };

        let patch = UpdateTodoRequest {
            title,
            description: data.description.map(|d| d.trim().to_string()),
            completed: data.completed,
        };

        self.repo.update(id, &patch)?.ok_or(TodoError::NotFound)
    }

    pub fn delete_todo(&self, id: &str) -> Result<(), TodoError> {
        if self.repo.delete(id)? {
            Ok(())
        } else {
            Err(TodoError::NotFound)
        }
    }

    pub fn toggle_todo(&self, id: &str) -> Result<Todo, TodoError> {
        self.repo.toggle(id)?.ok_or(TodoError::NotFound)
    }

    pub fn todo_exists(&self, id: &str) -> Result<bool, TodoError> {
        Ok(self.repo.exists(id)?)
    }

    pub fn get_todos_by_status(&self, completed: bool) -> Result<Vec<Todo>, TodoError> {
        let todos = self.repo.find_all()?;
        Ok(todos.into_iter().filter(|t| t.completed == completed).collect())
    }

    /// Case-insensitive substring match against title or description.
    /// Empty-term policing happens at the HTTP boundary, not here.
    pub fn search_todos_by_title(&self, term: &str) -> Result<Vec<Todo>, TodoError> {
        let needle = term.to_lowercase();
        let todos = self.repo.find_all()?;
        Ok(todos
            .into_iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .collect())
    }
}
