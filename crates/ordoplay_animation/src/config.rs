// SPDX-License-Identifier: MIT OR Apache-2.0
//! Player speed configuration.

use crate::player::PlayerError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Speed setting names used in errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedField {
    /// Current playback speed
    Speed,
    /// Lower speed bound
    MinSpeed,
    /// Upper speed bound
    MaxSpeed,
    /// Speed restored by a reset
    DefaultSpeed,
    /// Multiplier for speed steps
    SpeedScale,
}

impl SpeedField {
    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::MinSpeed => "min speed",
            Self::MaxSpeed => "max speed",
            Self::DefaultSpeed => "default speed",
            Self::SpeedScale => "speed scale",
        }
    }
}

impl fmt::Display for SpeedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Speed settings for a [`Player`](crate::Player)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial playback speed
    pub speed: f64,
    /// Lower speed bound
    pub min_speed: f64,
    /// Upper speed bound
    pub max_speed: f64,
    /// Speed restored by a reset
    pub default_speed: f64,
    /// Multiplier applied by speed steps
    pub speed_scale: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            min_speed: 0.1,
            max_speed: 1.0,
            default_speed: 1.0,
            speed_scale: 1.1,
        }
    }
}

impl PlayerConfig {
    /// Check every setting and the bounds between them
    pub fn validate(&self) -> Result<(), PlayerError> {
        check_positive(SpeedField::SpeedScale, self.speed_scale)?;
        check_positive(SpeedField::MinSpeed, self.min_speed)?;
        check_positive(SpeedField::MaxSpeed, self.max_speed)?;
        check_at_most(SpeedField::MinSpeed, self.min_speed, SpeedField::MaxSpeed, self.max_speed)?;
        self.check_in_bounds(SpeedField::Speed, self.speed)?;
        self.check_in_bounds(SpeedField::DefaultSpeed, self.default_speed)
    }

    /// Whether a speed step to `value` stays strictly inside `(min_speed, max_speed)`
    pub fn allows_step(&self, value: f64) -> bool {
        value.is_finite() && value > self.min_speed && value < self.max_speed
    }

    /// Check a speed value against `[min_speed, max_speed]`
    pub(crate) fn check_in_bounds(&self, field: SpeedField, value: f64) -> Result<(), PlayerError> {
        check_positive(field, value)?;
        check_at_least(field, value, SpeedField::MinSpeed, self.min_speed)?;
        check_at_most(field, value, SpeedField::MaxSpeed, self.max_speed)
    }
}

pub(crate) fn check_positive(field: SpeedField, value: f64) -> Result<(), PlayerError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlayerError::InvalidSpeedValue { field, value })
    }
}

pub(crate) fn check_at_least(
    field: SpeedField,
    value: f64,
    bound: SpeedField,
    limit: f64,
) -> Result<(), PlayerError> {
    if value < limit {
        return Err(PlayerError::SpeedBelow {
            field,
            value,
            bound,
            limit,
        });
    }
    Ok(())
}

pub(crate) fn check_at_most(
    field: SpeedField,
    value: f64,
    bound: SpeedField,
    limit: f64,
) -> Result<(), PlayerError> {
    if value > limit {
        return Err(PlayerError::SpeedAbove {
            field,
            value,
            bound,
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.speed, 1.0);
        assert_eq!(config.min_speed, 0.1);
        assert_eq!(config.max_speed, 1.0);
        assert_eq!(config.default_speed, 1.0);
        assert_eq!(config.speed_scale, 1.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bounds() {
        let config = PlayerConfig {
            min_speed: 2.0,
            ..PlayerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PlayerError::SpeedAbove {
                field: SpeedField::MinSpeed,
                bound: SpeedField::MaxSpeed,
                ..
            })
        ));

        let config = PlayerConfig {
            speed: 3.0,
            ..PlayerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PlayerError::SpeedAbove { field: SpeedField::Speed, .. })
        ));

        let config = PlayerConfig {
            speed_scale: 0.0,
            ..PlayerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PlayerError::InvalidSpeedValue { field: SpeedField::SpeedScale, .. })
        ));
    }

    #[test]
    fn test_allows_step() {
        let config = PlayerConfig::default();
        assert!(config.allows_step(0.5));
        assert!(!config.allows_step(1.0));
        assert!(!config.allows_step(0.1));
        assert!(!config.allows_step(1.1));
        assert!(!config.allows_step(0.05));
        assert!(!config.allows_step(f64::NAN));
    }
}
