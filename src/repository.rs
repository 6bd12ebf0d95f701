use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use crate::models::{Todo, UpdateTodoRequest};
use crate::store::{Store, StoreError};

/// Store faults surface from this layer as a single "operation failed" kind.
/// A missing record is not a failure here; it stays `Ok(None)` / `Ok(false)`
/// and the service decides what it means.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("todo store operation failed: {0}")]
    Store(#[from] StoreError),
}

/// Thin pass-through over the store. Constructed once at startup with an
/// injected store instance; nothing in here is global.
pub struct TodoRepository {
    store: Arc<dyn Store>,
}

impl TodoRepository {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn find_all(&self) -> Result<Vec<Todo>, RepoError> {
        Ok(self.store.list()?)
    }

    pub fn find_by_id(&self, id: &str) -> Result<Option<Todo>, RepoError> {
        Ok(self.store.get(id)?)
    }

    /// Fields are expected to be validated and trimmed by the caller.
    pub fn create(&self, title: String, description: String) -> Result<Todo, RepoError> {
        Ok(self.store.insert(Todo::new(title, description))?)
    }

    /// Partial update: only fields present in the patch overwrite the stored
    /// record. Refreshes `updated_at` on success.
    pub fn update(&self, id: &str, patch: &UpdateTodoRequest) -> Result<Option<Todo>, RepoError> {
        let Some(mut todo) = self.store.get(id)? else {
            return Ok(None);
        };

        if let Some(title) = &patch.title {
            todo.title = title.clone();
        }
        if let Some(description) = &patch.description {
            todo.description = description.clone();
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        todo.updated_at = Utc::now();

        Ok(self.store.replace(id, todo)?)
    }

    pub fn delete(&self, id: &str) -> Result<bool, RepoError> {
        Ok(self.store.remove(id)?)
    }

    /// Reads the current flag and flips it through `update`.
    pub fn toggle(&self, id: &str) -> Result<Option<Todo>, RepoError> {
        let Some(todo) = self.store.get(id)? else {
            return Ok(None);
        };

        let patch = UpdateTodoRequest {
            completed: Some(!todo.completed),
            ..UpdateTodoRequest::default()
        };
        self.update(id, &patch)
    }

    pub fn exists(&self, id: &str) -> Result<bool, RepoError> {
        Ok(self.find_by_id(id)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn repo() -> TodoRepository {
        TodoRepository::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn create_assigns_id_and_timestamps() {
        let repo = repo();
        let todo = repo.create("Buy milk".to_string(), String::new()).unwrap();
        assert!(!todo.id.as_str().is_empty());
        assert!(!todo.completed);
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn update_touches_only_patched_fields() {
        let repo = repo();
        let todo = repo.create("Title".to_string(), "desc".to_string()).unwrap();

        let patch = UpdateTodoRequest {
            completed: Some(true),
            ..UpdateTodoRequest::default()
        };
        let updated = repo.update(todo.id.as_str(), &patch).unwrap().unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "Title");
        assert_eq!(updated.description, "desc");
        assert!(updated.updated_at >= todo.updated_at);
        assert_eq!(updated.created_at, todo.created_at);
    }

    #[test]
    fn update_unknown_id_is_none() {
        let repo = repo();
        let patch = UpdateTodoRequest {
            title: Some("X".to_string()),
            ..UpdateTodoRequest::default()
        };
        assert!(repo.update("missing", &patch).unwrap().is_none());
    }

    #[test]
    fn toggle_flips_completed() {
        let repo = repo();
        let todo = repo.create("A".to_string(), String::new()).unwrap();

        let toggled = repo.toggle(todo.id.as_str()).unwrap().unwrap();
        assert!(toggled.completed);
        let toggled = repo.toggle(todo.id.as_str()).unwrap().unwrap();
        assert!(!toggled.completed);
    }

    #[test]
    fn toggle_unknown_id_is_none() {
        let repo = repo();
        assert!(repo.toggle("missing").unwrap().is_none());
    }

    #[test]
    fn exists_tracks_lifecycle() {
        let repo = repo();
        let todo = repo.create("A".to_string(), String::new()).unwrap();

        assert!(repo.exists(todo.id.as_str()).unwrap());
        assert!(repo.delete(todo.id.as_str()).unwrap());
        assert!(!repo.exists(todo.id.as_str()).unwrap());
    }
}
