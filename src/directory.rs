//! Student directory: the caller-facing facade over a [`RecordStore`].
//!
//! This module provides:
//! - [`StudentDirectory`]: validates input, runs the store operation and
//!   re-reads every record before returning
//! - [`Refreshed`]: an operation result bundled with the post-mutation list
//! - [`DirectoryEvent`]: change notifications on a broadcast channel
//!
//! Callers never keep a list that silently goes stale: each mutation hands
//! back the authoritative list, and observers may subscribe for events.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::error::AppError;
use crate::storage::{StudentId, StudentRecord};
use crate::traits::RecordStore;
use crate::validation::{validate, StudentForm};

/// Capacity of the event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// A change published after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DirectoryEvent {
    /// A student was added.
    Created {
        /// The new id.
        id: StudentId,
    },
    /// A student's fields were replaced.
    Updated {
        /// The edited id.
        id: StudentId,
    },
    /// A student was removed.
    Deleted {
        /// The removed id.
        id: StudentId,
    },
    /// Every student was removed.
    Cleared {
        /// How many rows were removed.
        removed: u64,
    },
}

/// Result of a mutation together with the store contents after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refreshed<T> {
    /// What the store operation returned.
    pub value: T,
    /// Every student, read after the mutation committed.
    pub students: Vec<StudentRecord>,
}

/// Facade that owns the read-your-writes contract.
pub struct StudentDirectory<S> {
    store: S,
    events: broadcast::Sender<DirectoryEvent>,
}

impl<S: RecordStore> StudentDirectory<S> {
    /// Wrap a store.
    #[must_use]
    pub fn new(store: S) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { store, events }
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Receive an event for every later mutation that changed something.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DirectoryEvent> {
        self.events.subscribe()
    }

    /// Every student currently stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the read fails.
    pub async fn students(&self) -> Result<Vec<StudentRecord>, AppError> {
        Ok(self.store.list_all().await?)
    }

    /// A single student, for example to pre-fill an edit form.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the read fails.
    pub async fn find(&self, id: StudentId) -> Result<Option<StudentRecord>, AppError> {
        Ok(self.store.get(id).await?)
    }

    /// Validate and add a student.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] before touching the store if the form
    /// is incomplete, or [`AppError::Store`] if the write or refresh fails.
    pub async fn add(&self, form: &StudentForm) -> Result<Refreshed<StudentId>, AppError> {
        let fields = validate(form)?;
        let id = self.store.create(&fields).await?;
        tracing::info!(id, "student added");
        self.publish(DirectoryEvent::Created { id });
        self.refreshed(id).await
    }

    /// Validate and replace a student's fields.
    ///
    /// `value` is `false` when the id does not exist; nothing changes then.
    ///
    /// # Errors
    ///
    /// Same as [`StudentDirectory::add`].
    pub async fn edit(
        &self,
        id: StudentId,
        form: &StudentForm,
    ) -> Result<Refreshed<bool>, AppError> {
        let fields = validate(form)?;
        let updated = self.store.update(id, &fields).await?;
        if updated {
            tracing::info!(id, "student edited");
            self.publish(DirectoryEvent::Updated { id });
        } else {
            tracing::debug!(id, "edit skipped, no such student");
        }
        self.refreshed(updated).await
    }

    /// Remove a student. `value` is `false` when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the write or refresh fails.
    pub async fn remove(&self, id: StudentId) -> Result<Refreshed<bool>, AppError> {
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::info!(id, "student removed");
            self.publish(DirectoryEvent::Deleted { id });
        }
        self.refreshed(deleted).await
    }

    /// Remove every student. `value` is the number removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the write or refresh fails.
    pub async fn remove_all(&self) -> Result<Refreshed<u64>, AppError> {
        let removed = self.store.delete_all().await?;
        if removed > 0 {
            tracing::info!(removed, "all students removed");
            self.publish(DirectoryEvent::Cleared { removed });
        }
        self.refreshed(removed).await
    }

    async fn refreshed<T>(&self, value: T) -> Result<Refreshed<T>, AppError> {
        let students = self.store.list_all().await?;
        Ok(Refreshed { value, students })
    }

    fn publish(&self, event: DirectoryEvent) {
        // No receivers is fine.
        let _ = self.events.send(event);
    }
}
