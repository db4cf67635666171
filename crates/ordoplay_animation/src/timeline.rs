// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline grouping elements.

use crate::element::Element;
use crate::id::{ElementId, IdGenerator, TimelineId};
use indexmap::IndexMap;

/// Aggregate start, end and duration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Timings {
    /// Earliest start
    pub start_time: f64,
    /// Latest end
    pub end_time: f64,
    /// `end_time - start_time`
    pub duration: f64,
}

impl Timings {
    /// Timings spanning `[start_time, end_time]`
    pub fn spanning(start_time: f64, end_time: f64) -> Self {
        Self {
            start_time,
            end_time,
            duration: end_time - start_time,
        }
    }
}

/// A group of elements sharing one elapsed time
#[derive(Debug)]
pub struct Timeline {
    id: TimelineId,
    /// Elements in insertion order
    elements: IndexMap<ElementId, Element>,
    timings: Timings,
}

impl Timeline {
    /// Create an empty timeline
    pub fn new(id: TimelineId) -> Self {
        Self {
            id,
            elements: IndexMap::new(),
            timings: Timings::default(),
        }
    }

    /// Create an empty timeline with the next ID from `ids`
    pub fn generate(ids: &dyn IdGenerator) -> Self {
        Self::new(TimelineId::generate(ids))
    }

    /// Timeline ID
    pub fn id(&self) -> TimelineId {
        self.id
    }

    /// Earliest element mount time
    pub fn start_time(&self) -> f64 {
        self.timings.start_time
    }

    /// Latest element unmount time
    pub fn end_time(&self) -> f64 {
        self.timings.end_time
    }

    /// Span from first mount to last unmount
    pub fn duration(&self) -> f64 {
        self.timings.duration
    }

    /// All aggregate timings
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Add an element, replacing any element with the same ID
    pub fn add_element(&mut self, element: Element) {
        self.elements.insert(element.id(), element);
        self.update_timings();
    }

    /// Remove an element, keeping the order of the rest
    pub fn remove_element(&mut self, element_id: ElementId) -> Option<Element> {
        let removed = self.elements.shift_remove(&element_id);
        if removed.is_some() {
            self.update_timings();
        }
        removed
    }

    /// Remove every element
    pub fn remove_all_elements(&mut self) {
        self.elements.clear();
        self.update_timings();
    }

    /// Get an element
    pub fn element(&self, element_id: ElementId) -> Option<&Element> {
        self.elements.get(&element_id)
    }

    /// Get a mutable element.
    ///
    /// Boundary changes made through this reference are not seen by
    /// [`Timeline::timings`] until [`Timeline::update_timings`] runs.
    pub fn element_mut(&mut self, element_id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&element_id)
    }

    /// Get all elements in insertion order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Get all elements mutably, in insertion order
    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.values_mut()
    }

    /// Get element count
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the timeline has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Push an elapsed time to every element
    pub fn update(&mut self, elapsed_time: f64) {
        for element in self.elements.values_mut() {
            element.update(elapsed_time);
        }
    }

    /// Recompute aggregate timings from the current element boundaries
    pub fn update_timings(&mut self) {
        self.timings = self.compute_timings();
    }

    fn compute_timings(&self) -> Timings {
        let mut elements = self.elements.values();
        let Some(first) = elements.next() else {
            return Timings::default();
        };

        let (start, end) = elements.fold(
            (first.mount_time(), first.unmount_time()),
            |(start, end), element| {
                (start.min(element.mount_time()), end.max(element.unmount_time()))
            },
        );

        Timings::spanning(start, end)
    }
}
