use super::store::JsonStore;
use crate::libs::task::{Task, TaskError};
use crate::libs::validate;
use anyhow::Result;
use chrono::NaiveDate;

/// Owner of the ordered task collection.
///
/// Tasks are kept newest-first by insertion. Every mutation persists the
/// candidate collection first and commits it in memory only after the
/// write succeeds, so memory and disk never diverge: a failed write
/// surfaces as [`TaskError::Persistence`] and leaves the collection
/// untouched.
pub struct Tasks {
    store: JsonStore,
    tasks: Vec<Task>,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        Ok(Self::with_store(JsonStore::new()?))
    }

    /// Builds a collection owner over an explicit backend. The backend's
    /// current content becomes the in-memory state.
    pub fn with_store(store: JsonStore) -> Self {
        let tasks = store.load();
        Tasks { store, tasks }
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Validates the text, builds a task with a fresh id, and inserts it
    /// at the front of the collection.
    pub fn create(&mut self, text: &str, due_date: Option<NaiveDate>) -> Result<Task, TaskError> {
        let text = validate::task_text(text)?;
        let task = Task::new(&text, due_date);

        let mut next = self.tasks.clone();
        next.insert(0, task.clone());
        self.commit(next)?;

        Ok(task)
    }

    /// Flips completion on the task with the given id.
    pub fn toggle(&mut self, id: &str) -> Result<Task, TaskError> {
        let idx = self.position(id)?;

        let mut next = self.tasks.clone();
        next[idx].completed = !next[idx].completed;
        let task = next[idx].clone();
        self.commit(next)?;

        Ok(task)
    }

    /// Replaces text and due date in place. Id, completion state, and
    /// creation timestamp are never touched.
    pub fn update(&mut self, id: &str, text: &str, due_date: Option<NaiveDate>) -> Result<Task, TaskError> {
        let text = validate::task_text(text)?;
        let idx = self.position(id)?;

        let mut next = self.tasks.clone();
        next[idx].text = text;
        next[idx].due_date = due_date;
        let task = next[idx].clone();
        self.commit(next)?;

        Ok(task)
    }

    /// Removes the task with the given id and returns it.
    pub fn delete(&mut self, id: &str) -> Result<Task, TaskError> {
        let idx = self.position(id)?;

        let mut next = self.tasks.clone();
        let task = next.remove(idx);
        self.commit(next)?;

        Ok(task)
    }

    /// Removes every task and returns how many there were. Zero is a
    /// valid result; the caller decides the messaging for an already
    /// empty collection.
    pub fn delete_all(&mut self) -> Result<usize, TaskError> {
        let removed = self.tasks.len();
        self.commit(Vec::new())?;
        Ok(removed)
    }

    fn position(&self, id: &str) -> Result<usize, TaskError> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    // Persist first, commit in memory second.
    fn commit(&mut self, next: Vec<Task>) -> Result<(), TaskError> {
        self.store.save(&next).map_err(|e| TaskError::Persistence(e.to_string()))?;
        self.tasks = next;
        Ok(())
    }
}
