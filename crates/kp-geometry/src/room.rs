//! Rooms and their semantic kinds.

use crate::rect::Rect;
use serde::{Deserialize, Serialize};

/// Semantic room category.
///
/// The wire format uses lowercase strings (`"bedroom"`, `"garage"`, ...);
/// anything the drafting collaborator invents outside this set decodes to
/// [`RoomKind::Other`] so a single odd room never aborts parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    /// Sleeping room; counted against the requested bedroom total.
    Bedroom,
    /// Bathroom; counted against the requested bathroom total.
    Bathroom,
    /// Living room.
    Living,
    /// Kitchen.
    Kitchen,
    /// Dining room.
    Dining,
    /// Entryway.
    Entry,
    /// Hallway.
    Hall,
    /// Garage; required when the feature list asks for one.
    Garage,
    /// Office; required when the feature list asks for one.
    Office,
    /// Anything else.
    #[serde(other)]
    Other,
}

impl RoomKind {
    /// Wire-format name, also used as the rendered label fallback.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomKind::Bedroom => "bedroom",
            RoomKind::Bathroom => "bathroom",
            RoomKind::Living => "living",
            RoomKind::Kitchen => "kitchen",
            RoomKind::Dining => "dining",
            RoomKind::Entry => "entry",
            RoomKind::Hall => "hall",
            RoomKind::Garage => "garage",
            RoomKind::Office => "office",
            RoomKind::Other => "other",
        }
    }
}

impl std::fmt::Display for RoomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn nan() -> f64 {
    f64::NAN
}

/// One room of a level: an axis-aligned rectangle with a semantic kind.
///
/// Position and size are in abstract plan units relative to the enclosing
/// level's floor origin. Missing numeric fields deserialize to NaN so the
/// validator can report them instead of the parser rejecting the whole
/// specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Identifier, unique within its level.
    #[serde(default)]
    pub id: String,
    /// Semantic category.
    #[serde(rename = "type")]
    pub kind: RoomKind,
    /// Display label; the kind name is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Declared level number; must match the enclosing level.
    #[serde(default)]
    pub level: u32,
    /// Left edge.
    #[serde(default = "nan")]
    pub x: f64,
    /// Top edge.
    #[serde(default = "nan")]
    pub y: f64,
    /// Width.
    #[serde(default = "nan")]
    pub w: f64,
    /// Height.
    #[serde(default = "nan")]
    pub h: f64,
}

impl Room {
    /// Construct a room with position and size.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: RoomKind, level: u32, rect: Rect) -> Self {
        Self {
            id: id.into(),
            kind,
            label: None,
            level,
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
        }
    }

    /// With a display label.
    #[inline]
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Bounding rectangle.
    #[inline]
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    /// Label to draw: the explicit label when present and non-empty,
    /// otherwise the kind name.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => self.kind.as_str(),
        }
    }

    /// True when x, y, w and h are all finite.
    #[inline]
    #[must_use]
    pub fn has_finite_geometry(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }
}
