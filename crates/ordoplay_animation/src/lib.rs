// SPDX-License-Identifier: MIT OR Apache-2.0
//! Time-driven animation sequencer for OrdoPlay.
//!
//! This crate decides which time-bounded elements are active for a given
//! elapsed time and fires their lifecycle hooks:
//! - Mount / unmount when time enters or leaves an element's window
//! - Before-update / update(progress) / after-update inside it
//!
//! ## Architecture
//!
//! The sequencer is built on:
//! - [`Element`]: four ordered boundaries and a phase state machine
//! - [`Timeline`]: a group of elements with aggregate timings
//! - [`Player`]: clock-driven transport over one or more timelines
//!
//! Everything runs synchronously inside [`Player::update`]; the host calls it
//! once per frame.

pub mod clock;
pub mod config;
pub mod element;
pub mod id;
pub mod player;
pub mod range;
pub mod timeline;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{PlayerConfig, SpeedField};
pub use element::{Boundary, Element, ElementConfig, ElementError, UnmountInfo};
pub use id::{ElementId, IdGenerator, SequentialIds, TimelineId};
pub use player::{Player, PlayerError};
pub use range::{lerp, map_range, RangeMapper};
pub use timeline::{Timeline, Timings};
