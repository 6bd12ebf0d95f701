use std::sync::Mutex;

use thiserror::Error;

use crate::models::Todo;

/// Infra-level store fault. Absence of a record is never an error at this
/// layer; it comes back as `None` or `false`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    Poisoned,
}

/// Minimal CRUD contract over the todo collection. Implementations hand out
/// clones only, so callers can never mutate the authoritative records.
pub trait Store: Send + Sync {
    /// Snapshot of all records.
    fn list(&self) -> Result<Vec<Todo>, StoreError>;
    fn get(&self, id: &str) -> Result<Option<Todo>, StoreError>;
    fn insert(&self, todo: Todo) -> Result<Todo, StoreError>;
    /// Swaps the record with the given id for `todo`. `None` when absent.
    fn replace(&self, id: &str, todo: Todo) -> Result<Option<Todo>, StoreError>;
    /// `false` when there was nothing to remove.
    fn remove(&self, id: &str) -> Result<bool, StoreError>;
}

/// Linear-scan in-memory store. Axum handles requests concurrently, so every
/// primitive takes the mutex for the duration of its scan.
pub struct MemoryStore {
    todos: Mutex<Vec<Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_todos(Vec::new())
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Mutex::new(todos),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Todo>>, StoreError> {
        self.todos.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn list(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn get(&self, id: &str) -> Result<Option<Todo>, StoreError> {
        let todos = self.lock()?;
        Ok(todos.iter().find(|t| t.id.as_str() == id).cloned())
    }

    fn insert(&self, todo: Todo) -> Result<Todo, StoreError> {
        let mut todos = self.lock()?;
        todos.push(todo.clone());
        Ok(todo)
    }

    fn replace(&self, id: &str, todo: Todo) -> Result<Option<Todo>, StoreError> {
        let mut todos = self.lock()?;
        match todos.iter_mut().find(|t| t.id.as_str() == id) {
            Some(slot) => {
                *slot = todo.clone();
                Ok(Some(todo))
            }
            None => Ok(None),
        }
    }

    fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut todos = self.lock()?;
        match todos.iter().position(|t| t.id.as_str() == id) {
            Some(idx) => {
                todos.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(title: &str) -> Todo {
        Todo::new(title.to_string(), String::new())
    }

    #[test]
    fn insert_then_get_returns_a_copy() {
        let store = MemoryStore::new();
        let created = store.insert(todo("Buy milk")).unwrap();

        let mut fetched = store.get(created.id.as_str()).unwrap().unwrap();
        fetched.title = "mutated".to_string();

        // Mutating the returned copy must not touch the stored record.
        let again = store.get(created.id.as_str()).unwrap().unwrap();
        assert_eq!(again.title, "Buy milk");
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn replace_unknown_id_is_none() {
        let store = MemoryStore::new();
        let t = todo("A");
        assert!(store.replace("missing", t).unwrap().is_none());
    }

    #[test]
    fn replace_swaps_the_record() {
        let store = MemoryStore::new();
        let created = store.insert(todo("Old")).unwrap();

        let mut replacement = created.clone();
        replacement.title = "New".to_string();
        let replaced = store.replace(created.id.as_str(), replacement).unwrap().unwrap();
        assert_eq!(replaced.title, "New");
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn remove_is_idempotent_in_outcome() {
        let store = MemoryStore::new();
        let created = store.insert(todo("A")).unwrap();

        assert!(store.remove(created.id.as_str()).unwrap());
        assert!(!store.remove(created.id.as_str()).unwrap());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn list_snapshots_all_records() {
        let store = MemoryStore::with_todos(vec![todo("A"), todo("B")]);
        assert_eq!(store.list().unwrap().len(), 2);
    }
}
