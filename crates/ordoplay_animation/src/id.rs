// SPDX-License-Identifier: MIT OR Apache-2.0
//! Identifiers for elements and timelines.

use std::cell::Cell;
use std::fmt;

/// Unique identifier for an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl ElementId {
    /// Create an element ID from the next value of a generator
    pub fn generate(ids: &dyn IdGenerator) -> Self {
        Self(ids.next_id())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimelineId(pub u64);

impl TimelineId {
    /// Create a timeline ID from the next value of a generator
    pub fn generate(ids: &dyn IdGenerator) -> Self {
        Self(ids.next_id())
    }
}

impl fmt::Display for TimelineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of identifiers.
///
/// Implementations must hand out unique, non-zero values, increasing with
/// every call.
pub trait IdGenerator {
    /// Produce the next identifier
    fn next_id(&self) -> u64;
}

/// Counter-backed generator starting at 1
#[derive(Debug)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    /// Create a generator starting at 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a generator whose first ID is `first` (raised to 1 if zero)
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Cell::new(first.max(1)),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> u64 {
        let id = self.next.get();
        self.next.set(id + 1);
        id
    }
}
