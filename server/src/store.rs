//! In-memory todo store.
//!
//! Records are kept in insertion order in a `Vec` and looked up by linear
//! scan. Ids come from a monotonic counter, so an id is never handed out twice
//! even after the record holding it has been deleted.

use tokio::sync::RwLock;

use crate::types::Todo;

/// Records the service starts with unless seeding is disabled.
pub const SEED_TODOS: [&str; 5] = ["Buy milk", "Buy eggs", "Buy bread", "Buy butter", "Buy cheese"];

#[derive(Debug)]
struct Inner {
    todos: Vec<Todo>,
    next_id: u64,
}

/// Ordered collection of todos shared between request handlers.
///
/// Reads take the shared lock, mutations the exclusive one. Id assignment and
/// append happen under the same write guard.
#[derive(Debug)]
pub struct TodoStore {
    inner: RwLock<Inner>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::from_todos(Vec::new())
    }

    /// A store holding the five seed records with ids 1 through 5.
    pub fn seeded() -> Self {
        Self::from_todos(
            SEED_TODOS
                .iter()
                .zip(1..)
                .map(|(text, id)| Todo::new(id, *text)),
        )
    }

    /// Build a store from existing records. The next id is one past the
    /// largest id present.
    pub fn from_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        let todos: Vec<Todo> = todos.into_iter().collect();
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { todos, next_id }),
        }
    }

    pub async fn create(&self, text: String) -> Todo {
        let mut inner = self.inner.write().await;
        let todo = Todo {
            id: inner.next_id,
            text,
        };
        inner.next_id += 1;
        inner.todos.push(todo.clone());
        todo
    }

    pub async fn get(&self, id: u64) -> Option<Todo> {
        let inner = self.inner.read().await;
        inner.todos.iter().find(|t| t.id == id).cloned()
    }

    /// Replace the text of `id`, leaving its id and position untouched.
    pub async fn update(&self, id: u64, text: String) -> Option<Todo> {
        let mut inner = self.inner.write().await;
        let todo = inner.todos.iter_mut().find(|t| t.id == id)?;
        todo.text = text;
        Some(todo.clone())
    }

    /// Remove `id`, returning the removed record.
    pub async fn delete(&self, id: u64) -> Option<Todo> {
        let mut inner = self.inner.write().await;
        let pos = inner.todos.iter().position(|t| t.id == id)?;
        Some(inner.todos.remove(pos))
    }

    /// Snapshot of all records, in insertion order or reversed.
    pub async fn list(&self, reverse: bool) -> Vec<Todo> {
        let inner = self.inner.read().await;
        let mut todos = inner.todos.clone();
        if reverse {
            todos.reverse();
        }
        todos
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.todos.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.todos.is_empty()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
