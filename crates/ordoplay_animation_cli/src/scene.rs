// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene files describing a player and its timelines.
//!
//! Scenes are stored as RON:
//!
//! ```ron
//! (
//!     version: 1,
//!     player: (max_speed: 2.0),
//!     timelines: [
//!         (
//!             name: "titles",
//!             elements: [
//!                 (label: "title", timing: (
//!                     mount_time: 0.0, unmount_time: 1500.0,
//!                     update_start_time: 250.0, update_end_time: 1000.0,
//!                 )),
//!             ],
//!         ),
//!     ],
//! )
//! ```
//!
//! The first timeline fills the player's default timeline; every further
//! one gets a timeline of its own.

use anyhow::{bail, Context, Result};
use ordoplay_animation::{Clock, Element, ElementConfig, Player, PlayerConfig, SequentialIds};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::rc::Rc;

/// Current scene format version
pub const SCENE_FORMAT_VERSION: u32 = 1;

fn default_version() -> u32 {
    SCENE_FORMAT_VERSION
}

/// A labelled element in a scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneElement {
    /// Name used in log output
    pub label: String,
    /// Element boundaries
    pub timing: ElementConfig,
}

/// One timeline worth of elements
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneTimeline {
    /// Name used in log output
    #[serde(default)]
    pub name: String,
    /// Elements in playback order
    #[serde(default)]
    pub elements: Vec<SceneElement>,
}

/// A complete scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Scene format version
    #[serde(default = "default_version")]
    pub version: u32,
    /// Speed settings
    #[serde(default)]
    pub player: PlayerConfig,
    /// Timelines in creation order
    #[serde(default)]
    pub timelines: Vec<SceneTimeline>,
}

impl Scene {
    /// Load a scene from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid scene {}", path.display()))
    }

    /// Parse a scene from RON text
    pub fn parse(content: &str) -> Result<Self> {
        let scene: Scene = ron::from_str(content)?;

        if scene.version > SCENE_FORMAT_VERSION {
            bail!(
                "Scene version {} is newer than supported version {}",
                scene.version,
                SCENE_FORMAT_VERSION
            );
        }

        Ok(scene)
    }

    /// Total element count across timelines
    pub fn element_count(&self) -> usize {
        self.timelines.iter().map(|t| t.elements.len()).sum()
    }

    /// Build a player driven by `clock`, with logging hooks on every element
    pub fn build(&self, clock: Rc<dyn Clock>) -> Result<Player> {
        let mut player = Player::from_parts(self.player, clock, Rc::new(SequentialIds::new()))
            .context("Invalid player settings")?;

        for (index, scene_timeline) in self.timelines.iter().enumerate() {
            let timeline_id = if index == 0 {
                player.default_timeline_id()
            } else {
                player.create_timeline()
            };

            for entry in &scene_timeline.elements {
                let element = player
                    .create_element(entry.timing, Some(timeline_id))
                    .with_context(|| {
                        format!(
                            "Invalid element '{}' in timeline '{}'",
                            entry.label, scene_timeline.name
                        )
                    })?;
                attach_logging(element, &entry.label);
            }

            tracing::debug!(
                "Timeline '{}' ({}) holds {} elements",
                scene_timeline.name,
                timeline_id,
                scene_timeline.elements.len()
            );
        }

        Ok(player)
    }
}

/// Log every lifecycle hook of `element` under `label`
fn attach_logging(element: &mut Element, label: &str) {
    let label: Rc<str> = Rc::from(label);

    let name = Rc::clone(&label);
    element.on_mount(move || tracing::info!("[{}] mount", name));

    let name = Rc::clone(&label);
    element.on_before_update(move || tracing::info!("[{}] before update", name));

    let name = Rc::clone(&label);
    element.on_update(move |progress| tracing::debug!("[{}] update {:.3}", name, progress));

    let name = Rc::clone(&label);
    element.on_after_update(move || tracing::info!("[{}] after update", name));

    element.on_unmount(move |info| {
        tracing::info!(
            "[{}] unmount (before mount: {}, after unmount: {})",
            label,
            info.is_before_mount,
            info.is_after_unmount
        );
    });
}
