// SPDX-License-Identifier: MIT OR Apache-2.0
//! Range mapping and interpolation helpers.

/// Linear interpolation between two values
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Map `value` from the range `[from_start, from_end]` onto `[to_start, to_end]`.
///
/// The mapping is not clamped, so values outside the source range land
/// outside the target range. A degenerate source range (`from_start == from_end`)
/// maps everything to `to_end`.
pub fn map_range(value: f64, from_start: f64, from_end: f64, to_start: f64, to_end: f64) -> f64 {
    let span = from_end - from_start;
    if span == 0.0 {
        return to_end;
    }
    (to_end - to_start) * (value - from_start) / span + to_start
}

/// A range mapping with both ranges bound up front
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMapper {
    /// Source range start
    pub from_start: f64,
    /// Source range end
    pub from_end: f64,
    /// Target range start
    pub to_start: f64,
    /// Target range end
    pub to_end: f64,
}

impl RangeMapper {
    /// Create a mapper from `[from_start, from_end]` to `[to_start, to_end]`
    pub fn new(from_start: f64, from_end: f64, to_start: f64, to_end: f64) -> Self {
        Self {
            from_start,
            from_end,
            to_start,
            to_end,
        }
    }

    /// Mapper onto the normalized `[0, 1]` range
    pub fn normalizing(from_start: f64, from_end: f64) -> Self {
        Self::new(from_start, from_end, 0.0, 1.0)
    }

    /// Map a single value
    pub fn map(&self, value: f64) -> f64 {
        map_range(value, self.from_start, self.from_end, self.to_start, self.to_end)
    }

    /// The mapper going the other way
    pub fn inverse(&self) -> Self {
        Self::new(self.to_start, self.to_end, self.from_start, self.from_end)
    }
}
