//! Levels (building stories).

use crate::room::Room;
use serde::{Deserialize, Serialize};

fn nan() -> f64 {
    f64::NAN
}

/// One story of a building: a rectangular floor extent and its rooms.
///
/// `level` is 1-based and expected to match the position in
/// [`PlanSpecification::levels`](crate::PlanSpecification); room order is
/// rendering order only and carries no other meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// 1-based level number.
    #[serde(default)]
    pub level: u32,
    /// Floor width in plan units.
    #[serde(default = "nan")]
    pub width: f64,
    /// Floor height in plan units.
    #[serde(default = "nan")]
    pub height: f64,
    /// Rooms on this level, in rendering order.
    #[serde(default)]
    pub rooms: Vec<Room>,
}

impl Level {
    /// Construct an empty level.
    #[must_use]
    pub fn new(level: u32, width: f64, height: f64) -> Self {
        Self {
            level,
            width,
            height,
            rooms: Vec::new(),
        }
    }

    /// With rooms.
    #[inline]
    #[must_use]
    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }

    /// True when width and height are both finite.
    #[inline]
    #[must_use]
    pub fn has_finite_extent(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}
