// SPDX-License-Identifier: MIT OR Apache-2.0
//! Time-bounded animation elements.
//!
//! An element owns four ordered boundaries:
//!
//! ```text
//! mount_time <= update_start_time <= update_end_time <= unmount_time
//! ```
//!
//! and fires lifecycle hooks as the elapsed time passed to [`Element::update`]
//! crosses them. Every boundary range is inclusive on both ends, so a single
//! update landing exactly on `update_start_time` runs both the before-update
//! and update phases.

use crate::id::{ElementId, IdGenerator};
use crate::range::map_range;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One of the four element boundaries, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Start of the active window
    MountTime,
    /// Start of the update sub-range
    UpdateStartTime,
    /// End of the update sub-range
    UpdateEndTime,
    /// End of the active window
    UnmountTime,
}

impl Boundary {
    /// All boundaries, earliest first
    pub const ALL: [Boundary; 4] = [
        Boundary::MountTime,
        Boundary::UpdateStartTime,
        Boundary::UpdateEndTime,
        Boundary::UnmountTime,
    ];

    fn index(self) -> usize {
        match self {
            Self::MountTime => 0,
            Self::UpdateStartTime => 1,
            Self::UpdateEndTime => 2,
            Self::UnmountTime => 3,
        }
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::MountTime => "mount time",
            Self::UpdateStartTime => "update start time",
            Self::UpdateEndTime => "update end time",
            Self::UnmountTime => "unmount time",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when writing an element boundary
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElementError {
    /// NaN or infinite value
    #[error("{boundary} must be a finite number, got {value}")]
    NotFinite {
        /// Boundary being written
        boundary: Boundary,
        /// Rejected value
        value: f64,
    },

    /// Negative value
    #[error("{boundary} cannot be less than 0, got {value}")]
    Negative {
        /// Boundary being written
        boundary: Boundary,
        /// Rejected value
        value: f64,
    },

    /// Value lies after a boundary that must not precede it
    #[error("{boundary} ({value}) cannot be greater than {other} ({limit})")]
    GreaterThan {
        /// Boundary being written
        boundary: Boundary,
        /// Rejected value
        value: f64,
        /// Boundary that was violated
        other: Boundary,
        /// Current value of `other`
        limit: f64,
    },

    /// Value lies before a boundary that must not follow it
    #[error("{boundary} ({value}) cannot be less than {other} ({limit})")]
    LessThan {
        /// Boundary being written
        boundary: Boundary,
        /// Rejected value
        value: f64,
        /// Boundary that was violated
        other: Boundary,
        /// Current value of `other`
        limit: f64,
    },
}

/// Full set of element boundaries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementConfig {
    /// Start of the active window
    pub mount_time: f64,
    /// End of the active window
    pub unmount_time: f64,
    /// Start of the update sub-range
    pub update_start_time: f64,
    /// End of the update sub-range
    pub update_end_time: f64,
}

impl ElementConfig {
    /// Boundaries indexed in [`Boundary::ALL`] order
    fn values(&self) -> [f64; 4] {
        [
            self.mount_time,
            self.update_start_time,
            self.update_end_time,
            self.unmount_time,
        ]
    }

    /// Check every boundary against the other three
    pub fn validate(&self) -> Result<(), ElementError> {
        let values = self.values();
        for boundary in Boundary::ALL {
            check_boundary(&values, boundary, values[boundary.index()])?;
        }
        Ok(())
    }

    /// Length of the active window
    pub fn duration(&self) -> f64 {
        self.unmount_time - self.mount_time
    }
}

/// Validate `value` as the new `boundary` given the current `values`
fn check_boundary(values: &[f64; 4], boundary: Boundary, value: f64) -> Result<(), ElementError> {
    if !value.is_finite() {
        return Err(ElementError::NotFinite { boundary, value });
    }
    if value < 0.0 {
        return Err(ElementError::Negative { boundary, value });
    }

    for other in Boundary::ALL {
        let limit = values[other.index()];
        match other.index().cmp(&boundary.index()) {
            Ordering::Less if value < limit => {
                return Err(ElementError::LessThan {
                    boundary,
                    value,
                    other,
                    limit,
                });
            }
            Ordering::Greater if value > limit => {
                return Err(ElementError::GreaterThan {
                    boundary,
                    value,
                    other,
                    limit,
                });
            }
            _ => {}
        }
    }

    Ok(())
}

/// Details passed to the unmount hook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnmountInfo {
    /// Time moved below `mount_time`
    pub is_before_mount: bool,
    /// Time moved above `unmount_time`
    pub is_after_unmount: bool,
}

/// Registered lifecycle hooks, one slot each
#[derive(Default)]
struct ElementHooks {
    on_mount: Option<Box<dyn FnMut()>>,
    on_before_update: Option<Box<dyn FnMut()>>,
    on_update: Option<Box<dyn FnMut(f64)>>,
    on_after_update: Option<Box<dyn FnMut()>>,
    on_unmount: Option<Box<dyn FnMut(UnmountInfo)>>,
}

impl fmt::Debug for ElementHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementHooks")
            .field("on_mount", &self.on_mount.is_some())
            .field("on_before_update", &self.on_before_update.is_some())
            .field("on_update", &self.on_update.is_some())
            .field("on_after_update", &self.on_after_update.is_some())
            .field("on_unmount", &self.on_unmount.is_some())
            .finish()
    }
}

/// A time-bounded animation unit
#[derive(Debug)]
pub struct Element {
    id: ElementId,
    mount_time: f64,
    update_start_time: f64,
    update_end_time: f64,
    unmount_time: f64,
    /// Sticky phase flags
    mounted: bool,
    before_update_entered: bool,
    after_update_entered: bool,
    hooks: ElementHooks,
}

impl Element {
    /// Create an element from a complete boundary set
    pub fn new(id: ElementId, config: ElementConfig) -> Result<Self, ElementError> {
        config.validate()?;

        Ok(Self {
            id,
            mount_time: config.mount_time,
            update_start_time: config.update_start_time,
            update_end_time: config.update_end_time,
            unmount_time: config.unmount_time,
            mounted: false,
            before_update_entered: false,
            after_update_entered: false,
            hooks: ElementHooks::default(),
        })
    }

    /// Create an element with the next ID from `ids`
    pub fn generate(ids: &dyn IdGenerator, config: ElementConfig) -> Result<Self, ElementError> {
        config.validate()?;
        Self::new(ElementId::generate(ids), config)
    }

    /// Element ID
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Start of the active window
    pub fn mount_time(&self) -> f64 {
        self.mount_time
    }

    /// Start of the update sub-range
    pub fn update_start_time(&self) -> f64 {
        self.update_start_time
    }

    /// End of the update sub-range
    pub fn update_end_time(&self) -> f64 {
        self.update_end_time
    }

    /// End of the active window
    pub fn unmount_time(&self) -> f64 {
        self.unmount_time
    }

    /// Length of the active window
    pub fn duration(&self) -> f64 {
        self.unmount_time - self.mount_time
    }

    /// Current boundaries
    pub fn config(&self) -> ElementConfig {
        ElementConfig {
            mount_time: self.mount_time,
            unmount_time: self.unmount_time,
            update_start_time: self.update_start_time,
            update_end_time: self.update_end_time,
        }
    }

    /// Whether the element is inside its active window
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Read a boundary
    pub fn boundary(&self, boundary: Boundary) -> f64 {
        match boundary {
            Boundary::MountTime => self.mount_time,
            Boundary::UpdateStartTime => self.update_start_time,
            Boundary::UpdateEndTime => self.update_end_time,
            Boundary::UnmountTime => self.unmount_time,
        }
    }

    /// Write a boundary, keeping the old value if the ordering would break
    pub fn set_boundary(&mut self, boundary: Boundary, value: f64) -> Result<(), ElementError> {
        check_boundary(&self.config().values(), boundary, value)?;

        let slot = match boundary {
            Boundary::MountTime => &mut self.mount_time,
            Boundary::UpdateStartTime => &mut self.update_start_time,
            Boundary::UpdateEndTime => &mut self.update_end_time,
            Boundary::UnmountTime => &mut self.unmount_time,
        };
        *slot = value;
        Ok(())
    }

    /// Set the start of the active window
    pub fn set_mount_time(&mut self, value: f64) -> Result<(), ElementError> {
        self.set_boundary(Boundary::MountTime, value)
    }

    /// Set the start of the update sub-range
    pub fn set_update_start_time(&mut self, value: f64) -> Result<(), ElementError> {
        self.set_boundary(Boundary::UpdateStartTime, value)
    }

    /// Set the end of the update sub-range
    pub fn set_update_end_time(&mut self, value: f64) -> Result<(), ElementError> {
        self.set_boundary(Boundary::UpdateEndTime, value)
    }

    /// Set the end of the active window
    pub fn set_unmount_time(&mut self, value: f64) -> Result<(), ElementError> {
        self.set_boundary(Boundary::UnmountTime, value)
    }

    /// Called once when time enters the active window
    pub fn on_mount(&mut self, callback: impl FnMut() + 'static) {
        self.hooks.on_mount = Some(Box::new(callback));
    }

    /// Called once when time enters `[mount_time, update_start_time]`
    pub fn on_before_update(&mut self, callback: impl FnMut() + 'static) {
        self.hooks.on_before_update = Some(Box::new(callback));
    }

    /// Called with progress in `[0, 1]` on every update inside the update sub-range.
    ///
    /// Without before/after hooks, it also receives `0` and `1` on entering
    /// the windows either side of the sub-range.
    pub fn on_update(&mut self, callback: impl FnMut(f64) + 'static) {
        self.hooks.on_update = Some(Box::new(callback));
    }

    /// Called once when time enters `[update_end_time, unmount_time]`
    pub fn on_after_update(&mut self, callback: impl FnMut() + 'static) {
        self.hooks.on_after_update = Some(Box::new(callback));
    }

    /// Called once when time leaves the active window
    pub fn on_unmount(&mut self, callback: impl FnMut(UnmountInfo) + 'static) {
        self.hooks.on_unmount = Some(Box::new(callback));
    }

    /// Drop every registered hook
    pub fn clear_hooks(&mut self) {
        self.hooks = ElementHooks::default();
    }

    /// Run the phase state machine for `elapsed_time`
    pub fn update(&mut self, elapsed_time: f64) {
        if self.is_in_mount_range(elapsed_time) {
            self.handle_mount();

            if self.is_in_before_update(elapsed_time) {
                self.handle_before_update();
            }

            if self.is_in_update_range(elapsed_time) {
                self.handle_update(elapsed_time);
            }

            if self.is_in_after_update(elapsed_time) {
                self.handle_after_update();
            }
        } else {
            self.handle_unmount(elapsed_time);
        }
    }

    fn handle_mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        tracing::trace!("Element {} mounted", self.id);

        if let Some(callback) = self.hooks.on_mount.as_mut() {
            callback();
        }
    }

    fn handle_before_update(&mut self) {
        if self.before_update_entered {
            return;
        }
        self.before_update_entered = true;

        if let Some(callback) = self.hooks.on_before_update.as_mut() {
            callback();
        } else if let Some(callback) = self.hooks.on_update.as_mut() {
            callback(0.0);
        }
    }

    fn handle_update(&mut self, elapsed_time: f64) {
        let progress = map_range(
            elapsed_time,
            self.update_start_time,
            self.update_end_time,
            0.0,
            1.0,
        );

        if let Some(callback) = self.hooks.on_update.as_mut() {
            callback(progress);
            self.reset_update_flags();
        }
    }

    fn handle_after_update(&mut self) {
        if self.after_update_entered {
            return;
        }
        self.after_update_entered = true;

        if let Some(callback) = self.hooks.on_after_update.as_mut() {
            callback();
        } else if let Some(callback) = self.hooks.on_update.as_mut() {
            callback(1.0);
        }
    }

    fn handle_unmount(&mut self, elapsed_time: f64) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        tracing::trace!("Element {} unmounted at {}", self.id, elapsed_time);

        let info = UnmountInfo {
            is_before_mount: elapsed_time < self.mount_time,
            is_after_unmount: elapsed_time > self.unmount_time,
        };
        if let Some(callback) = self.hooks.on_unmount.as_mut() {
            callback(info);
        }

        self.reset_update_flags();
    }

    fn reset_update_flags(&mut self) {
        self.before_update_entered = false;
        self.after_update_entered = false;
    }

    fn is_in_mount_range(&self, time: f64) -> bool {
        time >= self.mount_time && time <= self.unmount_time
    }

    fn is_in_before_update(&self, time: f64) -> bool {
        time >= self.mount_time && time <= self.update_start_time
    }

    fn is_in_update_range(&self, time: f64) -> bool {
        time >= self.update_start_time && time <= self.update_end_time
    }

    fn is_in_after_update(&self, time: f64) -> bool {
        time >= self.update_end_time && time <= self.unmount_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const CONFIG: ElementConfig = ElementConfig {
        mount_time: 800.0,
        unmount_time: 3000.0,
        update_start_time: 1000.0,
        update_end_time: 2000.0,
    };

    fn element() -> Element {
        Element::new(ElementId(1), CONFIG).unwrap()
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move || handle.set(handle.get() + 1))
    }

    fn progress_log(element: &mut Element) -> Rc<RefCell<Vec<f64>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let handle = Rc::clone(&log);
        element.on_update(move |progress| handle.borrow_mut().push(progress));
        log
    }

    fn unmount_log(element: &mut Element) -> Rc<RefCell<Vec<UnmountInfo>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let handle = Rc::clone(&log);
        element.on_unmount(move |info| handle.borrow_mut().push(info));
        log
    }

    #[test]
    fn test_boundaries_after_creation() {
        let element = element();
        assert_eq!(element.id(), ElementId(1));
        assert_eq!(element.mount_time(), 800.0);
        assert_eq!(element.update_start_time(), 1000.0);
        assert_eq!(element.update_end_time(), 2000.0);
        assert_eq!(element.unmount_time(), 3000.0);
        assert_eq!(element.duration(), 2200.0);
        assert_eq!(element.config(), CONFIG);
        assert!(!element.is_mounted());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ElementConfig {
            mount_time: 1000.0,
            unmount_time: 500.0,
            update_start_time: 1000.0,
            update_end_time: 1000.0,
        };
        let err = Element::new(ElementId(1), config).unwrap_err();
        assert_eq!(
            err,
            ElementError::GreaterThan {
                boundary: Boundary::MountTime,
                value: 1000.0,
                other: Boundary::UnmountTime,
                limit: 500.0,
            }
        );

        let negative = ElementConfig { mount_time: -1.0, ..CONFIG };
        assert!(matches!(
            Element::new(ElementId(1), negative),
            Err(ElementError::Negative { boundary: Boundary::MountTime, .. })
        ));
    }

    #[test]
    fn test_generate_uses_ids() {
        let ids = crate::id::SequentialIds::starting_at(7);
        let element = Element::generate(&ids, CONFIG).unwrap();
        assert_eq!(element.id(), ElementId(7));
    }

    #[test]
    fn test_rejected_config_keeps_next_id() {
        let ids = crate::id::SequentialIds::starting_at(7);
        let invalid = ElementConfig { mount_time: -1.0, ..CONFIG };
        assert!(Element::generate(&ids, invalid).is_err());

        let element = Element::generate(&ids, CONFIG).unwrap();
        assert_eq!(element.id(), ElementId(7));
    }

    #[test]
    fn test_mount_fires_once() {
        let mut element = element();
        let (count, callback) = counter();
        element.on_mount(callback);

        element.update(1000.0);
        element.update(1100.0);
        element.update(1200.0);

        assert_eq!(count.get(), 1);
        assert!(element.is_mounted());
    }

    #[test]
    fn test_before_update_fires_once() {
        let mut element = element();
        let (count, callback) = counter();
        element.on_before_update(callback);

        element.update(850.0);
        element.update(900.0);
        element.update(950.0);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_update_progress() {
        let mut element = element();
        element.on_before_update(|| {});
        element.on_after_update(|| {});
        let log = progress_log(&mut element);

        element.update(1000.0);
        element.update(1500.0);
        element.update(2000.0);

        assert_eq!(*log.borrow(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_update_falls_back_for_missing_hooks() {
        let mut element = element();
        let log = progress_log(&mut element);

        element.update(1000.0);
        element.update(1500.0);
        element.update(2000.0);

        // before-update fallback, 0, 0.5, 1, after-update fallback
        assert_eq!(*log.borrow(), vec![0.0, 0.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn test_after_update_fires_once() {
        let mut element = element();
        let (count, callback) = counter();
        element.on_after_update(callback);

        element.update(2000.0);
        element.update(2100.0);
        element.update(2200.0);

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_update_range_rearms_phase_hooks() {
        let mut element = element();
        let (before, before_cb) = counter();
        let (after, after_cb) = counter();
        element.on_before_update(before_cb);
        element.on_after_update(after_cb);
        element.on_update(|_| {});

        element.update(900.0);
        element.update(1500.0);
        element.update(900.0);
        element.update(2500.0);
        element.update(1500.0);
        element.update(2500.0);

        assert_eq!(before.get(), 2);
        assert_eq!(after.get(), 2);
    }

    #[test]
    fn test_without_update_hook_phase_hooks_stay_sticky() {
        let mut element = element();
        let (before, before_cb) = counter();
        element.on_before_update(before_cb);

        element.update(900.0);
        element.update(1500.0);
        element.update(900.0);

        assert_eq!(before.get(), 1);
    }

    #[test]
    fn test_unmount_without_hook() {
        let mut element = element();
        element.update(1000.0);
        element.update(3001.0);
        assert!(!element.is_mounted());
    }

    #[test]
    fn test_unmount_fires_once() {
        let mut element = element();
        let log = unmount_log(&mut element);

        element.update(1000.0);
        element.update(3100.0);
        element.update(3200.0);
        element.update(3300.0);

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_unmount_never_fires_before_mount() {
        let mut element = element();
        let log = unmount_log(&mut element);

        element.update(100.0);
        element.update(4000.0);

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_unmount_info() {
        let mut element = element();
        let log = unmount_log(&mut element);

        element.update(1000.0);
        element.update(3001.0);
        element.update(2500.0);
        element.update(50.0);

        assert_eq!(
            *log.borrow(),
            vec![
                UnmountInfo { is_before_mount: false, is_after_unmount: true },
                UnmountInfo { is_before_mount: true, is_after_unmount: false },
            ]
        );
    }

    #[test]
    fn test_remount_fires_phase_hooks_again() {
        let mut element = element();
        let (mount, mount_cb) = counter();
        let (before, before_cb) = counter();
        element.on_mount(mount_cb);
        element.on_before_update(before_cb);

        element.update(900.0);
        element.update(5000.0);
        element.update(900.0);

        assert_eq!(mount.get(), 2);
        assert_eq!(before.get(), 2);
    }

    #[test]
    fn test_hook_registration_replaces() {
        let mut element = element();
        let (first, first_cb) = counter();
        let (second, second_cb) = counter();
        element.on_mount(first_cb);
        element.on_mount(second_cb);

        element.update(900.0);

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_clear_hooks() {
        let mut element = element();
        let (count, callback) = counter();
        element.on_mount(callback);
        element.clear_hooks();

        element.update(900.0);

        assert_eq!(count.get(), 0);
        assert!(element.is_mounted());
    }

    #[test]
    fn test_collapsed_update_range() {
        let config = ElementConfig {
            mount_time: 0.0,
            unmount_time: 1000.0,
            update_start_time: 500.0,
            update_end_time: 500.0,
        };
        let mut element = Element::new(ElementId(1), config).unwrap();
        element.on_before_update(|| {});
        element.on_after_update(|| {});
        let log = progress_log(&mut element);

        element.update(500.0);

        assert_eq!(*log.borrow(), vec![1.0]);
    }

    #[test]
    fn test_set_boundaries() {
        let mut element = element();

        element.set_mount_time(0.0).unwrap();
        assert_eq!(element.mount_time(), 0.0);

        element.set_update_start_time(1500.0).unwrap();
        assert_eq!(element.update_start_time(), 1500.0);

        element.set_update_end_time(2500.0).unwrap();
        assert_eq!(element.update_end_time(), 2500.0);

        element.set_unmount_time(3500.0).unwrap();
        assert_eq!(element.unmount_time(), 3500.0);

        assert_eq!(element.duration(), 3500.0);
    }

    #[test]
    fn test_mount_time_errors() {
        let mut element = element();

        assert!(matches!(
            element.set_mount_time(-1.0),
            Err(ElementError::Negative { boundary: Boundary::MountTime, .. })
        ));
        assert!(matches!(
            element.set_mount_time(1500.0),
            Err(ElementError::GreaterThan { other: Boundary::UpdateStartTime, .. })
        ));
        assert!(matches!(
            element.set_mount_time(4000.0),
            Err(ElementError::GreaterThan { boundary: Boundary::MountTime, .. })
        ));
        assert!(matches!(
            element.set_mount_time(f64::NAN),
            Err(ElementError::NotFinite { .. })
        ));

        assert_eq!(element.mount_time(), 800.0);
    }

    #[test]
    fn test_update_start_time_errors() {
        let mut element = element();

        assert!(matches!(
            element.set_update_start_time(-1.0),
            Err(ElementError::Negative { .. })
        ));
        assert!(matches!(
            element.set_update_start_time(500.0),
            Err(ElementError::LessThan { other: Boundary::MountTime, .. })
        ));
        assert!(matches!(
            element.set_update_start_time(2500.0),
            Err(ElementError::GreaterThan { other: Boundary::UpdateEndTime, .. })
        ));

        assert_eq!(element.update_start_time(), 1000.0);
    }

    #[test]
    fn test_update_end_time_errors() {
        let mut element = element();

        assert!(matches!(
            element.set_update_end_time(900.0),
            Err(ElementError::LessThan { other: Boundary::UpdateStartTime, .. })
        ));
        assert!(matches!(
            element.set_update_end_time(500.0),
            Err(ElementError::LessThan { other: Boundary::MountTime, .. })
        ));
        assert!(matches!(
            element.set_update_end_time(3500.0),
            Err(ElementError::GreaterThan { other: Boundary::UnmountTime, .. })
        ));

        assert_eq!(element.update_end_time(), 2000.0);
    }

    #[test]
    fn test_unmount_time_errors() {
        let mut element = element();

        assert!(matches!(
            element.set_unmount_time(-1.0),
            Err(ElementError::Negative { .. })
        ));
        assert!(matches!(
            element.set_unmount_time(500.0),
            Err(ElementError::LessThan { other: Boundary::MountTime, .. })
        ));
        assert!(matches!(
            element.set_unmount_time(1500.0),
            Err(ElementError::LessThan { other: Boundary::UpdateEndTime, .. })
        ));

        assert_eq!(element.unmount_time(), 3000.0);
    }

    #[test]
    fn test_error_message() {
        let mut element = element();
        let err = element.set_mount_time(1500.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "mount time (1500) cannot be greater than update start time (1000)"
        );
    }
}
