//! # Todo Store
//!
//! A single-slot container holding at most one [`Todo`]. Every operation
//! first seeds the default todo if the slot is empty, then acts on it while
//! still holding the lock.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument};

use crate::models::{Todo, TodoDraft, TodoPatch};
use crate::services::clock::Clock;

pub struct TodoStore {
    slot: Mutex<Option<Todo>>,
    clock: Arc<dyn Clock>,
}

impl TodoStore {
    /// Creates an empty store. Nothing is seeded until the first access.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: Mutex::new(None),
            clock,
        }
    }

    /// Locks the slot, filling it with the seed todo if it is empty.
    async fn seeded(&self) -> MutexGuard<'_, Option<Todo>> {
        let mut slot = self.slot.lock().await;
        if slot.is_none() {
            debug!("Storage empty, seeding default todo");
            *slot = Some(Todo::seed(self.clock.now()));
        }
        slot
    }

    /// Returns the stored todos, which is always exactly one after seeding.
    #[instrument(skip_all)]
    pub async fn list(&self) -> Vec<Todo> {
        self.seeded().await.iter().cloned().collect()
    }

    /// Replaces whatever is stored with a fresh record built from `draft`.
    #[instrument(skip_all)]
    pub async fn create(&self, draft: TodoDraft) -> Todo {
        let mut slot = self.seeded().await;
        let todo = Todo::from_draft(draft, self.clock.now());
        *slot = Some(todo.clone());

        info!(title = %todo.title, "Todo replaced");
        todo
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: u64) -> Option<Todo> {
        self.seeded()
            .await
            .as_ref()
            .filter(|todo| todo.id == id)
            .cloned()
    }

    /// Merges `patch` into the todo with `id`. Returns `None` if there is none.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: u64, patch: TodoPatch) -> Option<Todo> {
        let mut slot = self.seeded().await;
        let todo = slot.as_mut().filter(|todo| todo.id == id)?;
        patch.apply(todo, self.clock.now());

        info!("Todo updated");
        Some(todo.clone())
    }

    /// Removes and returns the todo with `id`, leaving the slot empty.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Option<Todo> {
        let mut slot = self.seeded().await;
        let removed = slot.take_if(|todo| todo.id == id);

        if removed.is_some() {
            info!("Todo deleted");
        } else {
            debug!("No todo with requested id, nothing deleted");
        }
        removed
    }
}
