// Task identifiers and the id-generation capability

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque unique identifier for a task
///
/// Assigned once at creation and used as the sole lookup key. Callers must
/// not read ordering or timing out of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The wrapped UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Source of fresh task ids
///
/// The only hard requirement is uniqueness across a store's lifetime with
/// overwhelming probability.
pub trait IdGenerator: Send {
    /// Produce the next id
    fn next_id(&mut self) -> TaskId;
}

/// Random ids (UUIDv7)
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> TaskId {
        TaskId(Uuid::now_v7())
    }
}

/// Monotonic counter ids, for deterministic tests and tooling
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u128,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TaskId {
        self.next += 1;
        TaskId(Uuid::from_u128(self.next))
    }
}
