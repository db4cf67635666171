// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback transport driving one or more timelines.
//!
//! The player never ticks on its own. The host calls [`Player::update`]
//! periodically (once per frame, say); each call reads the injected
//! [`Clock`], turns the time since playback started into a normalized
//! progress scaled by the current speed, and pushes the matching elapsed
//! time to every timeline.

use crate::clock::{Clock, MonotonicClock};
use crate::config::{check_at_least, check_at_most, check_positive, PlayerConfig, SpeedField};
use crate::element::{Element, ElementConfig, ElementError};
use crate::id::{ElementId, IdGenerator, SequentialIds, TimelineId};
use crate::range::{lerp, map_range, RangeMapper};
use crate::timeline::{Timeline, Timings};
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;

/// Error from a player operation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlayerError {
    /// Speed setting is zero, negative or not finite
    #[error("{field} must be a positive finite number, got {value}")]
    InvalidSpeedValue {
        /// Setting being written
        field: SpeedField,
        /// Rejected value
        value: f64,
    },

    /// Speed setting below a bound
    #[error("{field} ({value}) cannot be less than {bound} ({limit})")]
    SpeedBelow {
        /// Setting being written
        field: SpeedField,
        /// Rejected value
        value: f64,
        /// Setting acting as the bound
        bound: SpeedField,
        /// Current value of `bound`
        limit: f64,
    },

    /// Speed setting above a bound
    #[error("{field} ({value}) cannot be greater than {bound} ({limit})")]
    SpeedAbove {
        /// Setting being written
        field: SpeedField,
        /// Rejected value
        value: f64,
        /// Setting acting as the bound
        bound: SpeedField,
        /// Current value of `bound`
        limit: f64,
    },

    /// Normalized seek outside `[0, 1]`
    #[error("normalized progress must be within [0, 1], got {0}")]
    ProgressOutOfRange(f64),

    /// Absolute seek outside the player's time range
    #[error("time {value} is outside the playable range [{start}, {end}]")]
    TimeOutOfRange {
        /// Requested time
        value: f64,
        /// Player start time
        start: f64,
        /// Player end time
        end: f64,
    },

    /// No timeline with this ID
    #[error("timeline {0} does not exist")]
    TimelineNotFound(TimelineId),

    /// Element construction failed
    #[error(transparent)]
    Element(#[from] ElementError),
}

/// Transport hooks, one slot each
#[derive(Default)]
struct PlayerHooks {
    on_play: Option<Box<dyn FnMut()>>,
    on_pause: Option<Box<dyn FnMut()>>,
    on_stop: Option<Box<dyn FnMut()>>,
    on_finish: Option<Box<dyn FnMut()>>,
}

fn fire(hook: &mut Option<Box<dyn FnMut()>>) {
    if let Some(callback) = hook.as_mut() {
        callback();
    }
}

/// Clock-driven playback over a set of timelines
pub struct Player {
    timelines: IndexMap<TimelineId, Timeline>,
    default_timeline_id: TimelineId,
    timings: Timings,
    settings: PlayerConfig,
    is_playing: bool,
    /// Normalized position in `[0, 1]`
    progress: f64,
    elapsed_time: f64,
    /// Clock reading at which progress 0 would have been
    start_timestamp: f64,
    clock: Rc<dyn Clock>,
    ids: Rc<dyn IdGenerator>,
    hooks: PlayerHooks,
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("timelines", &self.timelines)
            .field("default_timeline_id", &self.default_timeline_id)
            .field("timings", &self.timings)
            .field("settings", &self.settings)
            .field("is_playing", &self.is_playing)
            .field("progress", &self.progress)
            .field("elapsed_time", &self.elapsed_time)
            .finish_non_exhaustive()
    }
}

impl Player {
    /// Create a player with default speed settings, a wall clock and sequential IDs
    pub fn new() -> Self {
        Self::build(
            PlayerConfig::default(),
            Rc::new(MonotonicClock::new()),
            Rc::new(SequentialIds::new()),
        )
    }

    /// Create a player with custom speed settings
    pub fn with_config(config: PlayerConfig) -> Result<Self, PlayerError> {
        Self::from_parts(
            config,
            Rc::new(MonotonicClock::new()),
            Rc::new(SequentialIds::new()),
        )
    }

    /// Create a player with injected clock and ID source
    pub fn from_parts(
        config: PlayerConfig,
        clock: Rc<dyn Clock>,
        ids: Rc<dyn IdGenerator>,
    ) -> Result<Self, PlayerError> {
        config.validate()?;
        Ok(Self::build(config, clock, ids))
    }

    fn build(settings: PlayerConfig, clock: Rc<dyn Clock>, ids: Rc<dyn IdGenerator>) -> Self {
        let default_timeline = Timeline::generate(ids.as_ref());
        let default_timeline_id = default_timeline.id();

        let mut timelines = IndexMap::new();
        timelines.insert(default_timeline_id, default_timeline);

        let start_timestamp = clock.now();

        Self {
            timelines,
            default_timeline_id,
            timings: Timings::default(),
            settings,
            is_playing: false,
            progress: 0.0,
            elapsed_time: 0.0,
            start_timestamp,
            clock,
            ids,
            hooks: PlayerHooks::default(),
        }
    }

    // --- Playback state ---

    /// Whether playback is running
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Normalized position in `[0, 1]`
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Elapsed time last pushed to the timelines
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Always 0
    pub fn start_time(&self) -> f64 {
        self.timings.start_time
    }

    /// Latest timeline end time
    pub fn end_time(&self) -> f64 {
        self.timings.end_time
    }

    /// Total playback length at speed 1
    pub fn duration(&self) -> f64 {
        self.timings.duration
    }

    /// All aggregate timings
    pub fn timings(&self) -> Timings {
        self.timings
    }

    // --- Transport ---

    /// Start or resume playback from the current progress
    pub fn play(&mut self) {
        if self.is_playing {
            return;
        }
        self.is_playing = true;
        self.anchor_clock();
        tracing::debug!("Playback started at progress {:.3}", self.progress);

        fire(&mut self.hooks.on_play);
    }

    /// Pause playback, keeping the current progress
    pub fn pause(&mut self) {
        if !self.is_playing {
            return;
        }
        self.is_playing = false;
        tracing::debug!("Playback paused at progress {:.3}", self.progress);

        fire(&mut self.hooks.on_pause);
    }

    /// Halt playback and rewind to the beginning
    pub fn stop(&mut self) {
        self.is_playing = false;
        self.apply_progress(0.0);
        tracing::debug!("Playback stopped");

        fire(&mut self.hooks.on_stop);
    }

    /// Seek to a normalized progress in `[0, 1]`, pausing playback
    pub fn from_progress(&mut self, progress: f64) -> Result<(), PlayerError> {
        if !(0.0..=1.0).contains(&progress) {
            return Err(PlayerError::ProgressOutOfRange(progress));
        }

        self.pause();
        self.apply_progress(progress);
        Ok(())
    }

    /// Seek to an absolute time in `[start_time, end_time]`, pausing playback
    pub fn from_time(&mut self, time: f64) -> Result<(), PlayerError> {
        let Timings {
            start_time,
            end_time,
            duration,
        } = self.timings;

        if !(start_time..=end_time).contains(&time) {
            return Err(PlayerError::TimeOutOfRange {
                value: time,
                start: start_time,
                end: end_time,
            });
        }

        self.pause();
        let progress = if duration > 0.0 {
            RangeMapper::normalizing(start_time, end_time).map(time)
        } else {
            0.0
        };
        self.apply_progress(progress);
        Ok(())
    }

    /// Advance playback from the clock.
    ///
    /// Does nothing while paused. Reaching the end fires the finish hook and
    /// pauses.
    pub fn update(&mut self) {
        if !self.is_playing {
            return;
        }

        self.progress = self.clock_progress();
        self.elapsed_time = self.elapsed_for(self.progress);
        self.update_timelines(self.elapsed_time);

        if self.progress >= 1.0 {
            tracing::debug!("Playback finished");
            fire(&mut self.hooks.on_finish);
            self.pause();
        }
    }

    fn apply_progress(&mut self, progress: f64) {
        self.progress = progress;
        self.elapsed_time = self.elapsed_for(progress);
        tracing::debug!("Seek to progress {:.3} ({})", progress, self.elapsed_time);
        self.update_timelines(self.elapsed_time);
    }

    fn elapsed_for(&self, progress: f64) -> f64 {
        map_range(progress, 0.0, 1.0, 0.0, self.timings.duration)
    }

    /// Progress implied by the clock, clamped to `[0, 1]`
    fn clock_progress(&self) -> f64 {
        let span = self.timings.duration / self.settings.speed;
        if span <= 0.0 {
            return 1.0;
        }

        let delta = self.clock.now() - self.start_timestamp;
        (delta / span).clamp(0.0, 1.0)
    }

    /// Move the clock origin so the current progress maps to "now"
    fn anchor_clock(&mut self) {
        let offset = lerp(0.0, self.timings.duration / self.settings.speed, self.progress);
        self.start_timestamp = self.clock.now() - offset;
    }

    fn update_timelines(&mut self, elapsed_time: f64) {
        for timeline in self.timelines.values_mut() {
            timeline.update(elapsed_time);
        }
    }

    // --- Speed ---

    /// Current speed settings
    pub fn config(&self) -> PlayerConfig {
        self.settings
    }

    /// Current playback speed
    pub fn speed(&self) -> f64 {
        self.settings.speed
    }

    /// Lower speed bound
    pub fn min_speed(&self) -> f64 {
        self.settings.min_speed
    }

    /// Upper speed bound
    pub fn max_speed(&self) -> f64 {
        self.settings.max_speed
    }

    /// Speed restored by [`Player::reset_speed`]
    pub fn default_speed(&self) -> f64 {
        self.settings.default_speed
    }

    /// Multiplier applied by speed steps
    pub fn speed_scale(&self) -> f64 {
        self.settings.speed_scale
    }

    /// Set the playback speed, keeping the current progress
    pub fn set_speed(&mut self, value: f64) -> Result<(), PlayerError> {
        self.settings.check_in_bounds(SpeedField::Speed, value)?;
        self.apply_speed(value);
        Ok(())
    }

    /// Set the lower speed bound
    pub fn set_min_speed(&mut self, value: f64) -> Result<(), PlayerError> {
        let field = SpeedField::MinSpeed;
        check_positive(field, value)?;
        check_at_most(field, value, SpeedField::MaxSpeed, self.settings.max_speed)?;
        check_at_most(field, value, SpeedField::Speed, self.settings.speed)?;
        check_at_most(field, value, SpeedField::DefaultSpeed, self.settings.default_speed)?;

        self.settings.min_speed = value;
        Ok(())
    }

    /// Set the upper speed bound
    pub fn set_max_speed(&mut self, value: f64) -> Result<(), PlayerError> {
        let field = SpeedField::MaxSpeed;
        check_positive(field, value)?;
        check_at_least(field, value, SpeedField::MinSpeed, self.settings.min_speed)?;
        check_at_least(field, value, SpeedField::Speed, self.settings.speed)?;
        check_at_least(field, value, SpeedField::DefaultSpeed, self.settings.default_speed)?;

        self.settings.max_speed = value;
        Ok(())
    }

    /// Set the speed restored by [`Player::reset_speed`]
    pub fn set_default_speed(&mut self, value: f64) -> Result<(), PlayerError> {
        self.settings.check_in_bounds(SpeedField::DefaultSpeed, value)?;
        self.settings.default_speed = value;
        Ok(())
    }

    /// Set the multiplier applied by speed steps
    pub fn set_speed_scale(&mut self, value: f64) -> Result<(), PlayerError> {
        check_positive(SpeedField::SpeedScale, value)?;
        self.settings.speed_scale = value;
        Ok(())
    }

    /// Multiply the speed by the speed scale if the result stays below `max_speed`
    pub fn increase_speed(&mut self) {
        let next = self.settings.speed * self.settings.speed_scale;
        if self.settings.allows_step(next) {
            self.apply_speed(next);
        }
    }

    /// Divide the speed by the speed scale if the result stays above `min_speed`
    pub fn decrease_speed(&mut self) {
        let next = self.settings.speed / self.settings.speed_scale;
        if self.settings.allows_step(next) {
            self.apply_speed(next);
        }
    }

    /// Restore the default speed
    pub fn reset_speed(&mut self) -> Result<(), PlayerError> {
        self.set_speed(self.settings.default_speed)
    }

    fn apply_speed(&mut self, value: f64) {
        self.settings.speed = value;
        self.anchor_clock();
        tracing::debug!("Playback speed set to {}", value);
    }

    // --- Timelines ---

    /// ID of the timeline created with the player
    pub fn default_timeline_id(&self) -> TimelineId {
        self.default_timeline_id
    }

    /// Shared ID source, for building elements outside the player
    pub fn id_generator(&self) -> Rc<dyn IdGenerator> {
        Rc::clone(&self.ids)
    }

    /// Get a timeline
    pub fn timeline(&self, timeline_id: TimelineId) -> Option<&Timeline> {
        self.timelines.get(&timeline_id)
    }

    /// Get a mutable timeline.
    ///
    /// Call [`Player::update_timings`] after changing its membership or
    /// element boundaries.
    pub fn timeline_mut(&mut self, timeline_id: TimelineId) -> Option<&mut Timeline> {
        self.timelines.get_mut(&timeline_id)
    }

    /// Get all timelines in creation order
    pub fn timelines(&self) -> impl Iterator<Item = &Timeline> {
        self.timelines.values()
    }

    /// Create an empty timeline
    pub fn create_timeline(&mut self) -> TimelineId {
        let timeline = Timeline::generate(self.ids.as_ref());
        let timeline_id = timeline.id();
        self.timelines.insert(timeline_id, timeline);
        self.refresh_timings();

        tracing::debug!("Created timeline {}", timeline_id);
        timeline_id
    }

    /// Remove a timeline (`None` selects the default one)
    pub fn remove_timeline(&mut self, timeline_id: Option<TimelineId>) -> Option<Timeline> {
        let timeline_id = self.resolve(timeline_id);
        let removed = self.timelines.shift_remove(&timeline_id);
        if removed.is_some() {
            self.refresh_timings();
            tracing::debug!("Removed timeline {}", timeline_id);
        }
        removed
    }

    /// Remove every timeline, including the default one
    pub fn remove_all_timelines(&mut self) {
        self.timelines.clear();
        self.refresh_timings();
    }

    /// Remove every element from a timeline (`None` selects the default one)
    pub fn clear_timeline(&mut self, timeline_id: Option<TimelineId>) -> Result<(), PlayerError> {
        self.existing_timeline_mut(timeline_id)?.remove_all_elements();
        self.refresh_timings();
        Ok(())
    }

    // --- Elements ---

    /// Build an element and add it to a timeline (`None` selects the default one)
    pub fn create_element(
        &mut self,
        config: ElementConfig,
        timeline_id: Option<TimelineId>,
    ) -> Result<&mut Element, PlayerError> {
        let timeline_id = self.resolve(timeline_id);
        if !self.timelines.contains_key(&timeline_id) {
            return Err(PlayerError::TimelineNotFound(timeline_id));
        }

        let element = Element::generate(self.ids.as_ref(), config)?;
        let element_id = element.id();
        self.add_element(element, Some(timeline_id))?;

        self.element_mut(element_id, Some(timeline_id))
            .ok_or(PlayerError::TimelineNotFound(timeline_id))
    }

    /// Add an element to a timeline (`None` selects the default one)
    pub fn add_element(
        &mut self,
        element: Element,
        timeline_id: Option<TimelineId>,
    ) -> Result<(), PlayerError> {
        self.existing_timeline_mut(timeline_id)?.add_element(element);
        self.refresh_timings();
        Ok(())
    }

    /// Remove an element from a timeline (`None` selects the default one)
    pub fn remove_element(
        &mut self,
        element_id: ElementId,
        timeline_id: Option<TimelineId>,
    ) -> Result<Option<Element>, PlayerError> {
        let removed = self.existing_timeline_mut(timeline_id)?.remove_element(element_id);
        if removed.is_some() {
            self.refresh_timings();
        }
        Ok(removed)
    }

    /// Get an element from a timeline (`None` selects the default one)
    pub fn element(&self, element_id: ElementId, timeline_id: Option<TimelineId>) -> Option<&Element> {
        self.timelines
            .get(&self.resolve(timeline_id))
            .and_then(|timeline| timeline.element(element_id))
    }

    /// Get a mutable element from a timeline (`None` selects the default one)
    pub fn element_mut(
        &mut self,
        element_id: ElementId,
        timeline_id: Option<TimelineId>,
    ) -> Option<&mut Element> {
        let timeline_id = self.resolve(timeline_id);
        self.timelines
            .get_mut(&timeline_id)
            .and_then(|timeline| timeline.element_mut(element_id))
    }

    fn resolve(&self, timeline_id: Option<TimelineId>) -> TimelineId {
        timeline_id.unwrap_or(self.default_timeline_id)
    }

    fn existing_timeline_mut(
        &mut self,
        timeline_id: Option<TimelineId>,
    ) -> Result<&mut Timeline, PlayerError> {
        let timeline_id = self.resolve(timeline_id);
        self.timelines
            .get_mut(&timeline_id)
            .ok_or(PlayerError::TimelineNotFound(timeline_id))
    }

    // --- Timings ---

    /// Recompute timeline and player timings from current element boundaries.
    ///
    /// Needed after editing boundaries directly while elements are already
    /// owned by a timeline.
    pub fn update_timings(&mut self) {
        for timeline in self.timelines.values_mut() {
            timeline.update_timings();
        }
        self.refresh_timings();
    }

    fn refresh_timings(&mut self) {
        let end_time = self
            .timelines
            .values()
            .map(Timeline::end_time)
            .fold(0.0, f64::max);

        self.timings = Timings::spanning(0.0, end_time);
    }

    // --- Hooks ---

    /// Called when playback starts from a paused state
    pub fn on_play(&mut self, callback: impl FnMut() + 'static) {
        self.hooks.on_play = Some(Box::new(callback));
    }

    /// Called when playback pauses
    pub fn on_pause(&mut self, callback: impl FnMut() + 'static) {
        self.hooks.on_pause = Some(Box::new(callback));
    }

    /// Called after [`Player::stop`] rewinds
    pub fn on_stop(&mut self, callback: impl FnMut() + 'static) {
        self.hooks.on_stop = Some(Box::new(callback));
    }

    /// Called when playback reaches the end, before pausing
    pub fn on_finish(&mut self, callback: impl FnMut() + 'static) {
        self.hooks.on_finish = Some(Box::new(callback));
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
