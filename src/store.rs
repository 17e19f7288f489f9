// In-memory task-list state machine

use crate::draft::{DraftValidation, validate_draft};
use crate::ids::{IdGenerator, RandomIds, TaskId};
use crate::models::{Task, sample_tasks};
use crate::snapshot::{RestoreError, SNAPSHOT_VERSION, Snapshot};
use std::collections::HashSet;
use tracing::debug;

/// Owns the ordered task collection and the draft input
///
/// All operations run to completion on the caller's thread; the store has
/// exactly one writer at a time by construction. Stale ids are ignored
/// rather than treated as errors, since a front end only ever presents ids
/// it just read.
pub struct TaskListStore {
    tasks: Vec<Task>,
    draft: String,
    ids: Box<dyn IdGenerator>,
    revision: u64,
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListStore {
    /// Store seeded with the four sample tasks and an empty draft
    pub fn new() -> Self {
        let mut ids: Box<dyn IdGenerator> = Box::new(RandomIds);
        let seed = sample_tasks(ids.as_mut());
        Self::with_parts(seed, String::new(), ids)
    }

    /// Store with an explicit initial collection and an empty draft
    pub fn with_seed(seed: Vec<Task>) -> Self {
        Self::with_parts(seed, String::new(), Box::new(RandomIds))
    }

    /// Store with explicit contents and id source
    pub fn with_parts(seed: Vec<Task>, draft: String, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            tasks: seed,
            draft,
            ids,
            revision: 0,
        }
    }

    // ========================================================================
    // Draft input
    // ========================================================================

    /// Current draft text, verbatim
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft input verbatim
    ///
    /// No trimming and no length clamp happen here; validity is computed,
    /// not enforced, on every change.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.revision += 1;
    }

    /// Validation of the current draft
    pub fn validation(&self) -> DraftValidation {
        validate_draft(&self.draft)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new task from the current draft
    ///
    /// When the draft fails validation this is a defensive no-op returning
    /// `None`; the front end is expected to have disabled the action
    /// already. On success the new task carries the trimmed label, starts
    /// active, and the draft is cleared.
    pub fn add_task(&mut self) -> Option<TaskId> {
        let validation = validate_draft(&self.draft);
        if !validation.valid {
            debug!(draft = %self.draft, "add rejected by validation");
            return None;
        }

        let id = self.ids.next_id();
        self.tasks.push(Task {
            id,
            label: validation.trimmed,
            done: false,
        });
        self.draft.clear();
        self.revision += 1;

        debug!(%id, "task added");
        Some(id)
    }

    /// Flip the done flag of the task with the given id, in place
    ///
    /// Returns false for a stale id, leaving the store untouched.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                self.revision += 1;
                debug!(%id, done = task.done, "task toggled");
                true
            }
            None => {
                debug!(%id, "toggle target missing");
                false
            }
        }
    }

    /// Remove the task with the given id, preserving the order of the rest
    ///
    /// Returns false for a stale id.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            self.revision += 1;
            debug!(%id, "task deleted");
        } else {
            debug!(%id, "delete target missing");
        }
        removed
    }

    /// Remove every completed task, preserving the order of the active ones
    ///
    /// Returns how many tasks were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.revision += 1;
            debug!(removed, "completed tasks cleared");
        }
        removed
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Full collection, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks not yet done, in collection order
    pub fn active_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.done)
    }

    /// Done tasks, in collection order
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.done)
    }

    /// Number of tasks in the collection
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when the collection holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Counter bumped on every observable state change
    ///
    /// No-op mutations (rejected add, stale-id toggle/delete, clear with
    /// nothing completed) leave it untouched, so a front end polling this
    /// never redraws for nothing.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ========================================================================
    // Lifecycle snapshots
    // ========================================================================

    /// Export the full state as a flat record
    pub fn export(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            tasks: self.tasks.clone(),
            draft: self.draft.clone(),
        }
    }

    /// Rebuild a store from a flat record
    ///
    /// Fails fast on a record that would produce a corrupt store: an
    /// unsupported version or duplicate task ids. Labels are not
    /// re-validated; the length rule is a creation-time input rule.
    pub fn restore(snapshot: Snapshot) -> Result<Self, RestoreError> {
        Self::restore_with_ids(snapshot, Box::new(RandomIds))
    }

    /// Rebuild a store from a flat record with an explicit id source
    pub fn restore_with_ids(
        snapshot: Snapshot,
        ids: Box<dyn IdGenerator>,
    ) -> Result<Self, RestoreError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(RestoreError::UnsupportedVersion(snapshot.version));
        }

        let mut seen = HashSet::new();
        for task in &snapshot.tasks {
            if !seen.insert(task.id) {
                return Err(RestoreError::DuplicateId(task.id));
            }
        }

        debug!(tasks = snapshot.tasks.len(), "store restored from snapshot");
        Ok(Self::with_parts(snapshot.tasks, snapshot.draft, ids))
    }
}
