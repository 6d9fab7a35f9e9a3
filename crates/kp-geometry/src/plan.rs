//! The plan specification.

use crate::level::Level;
use serde::{Deserialize, Serialize};

/// A multi-level floor plan as drafted by the collaborator.
///
/// Values of this type are never mutated: a repair round produces a new
/// specification, and the validator and renderer only read it. Defaulted
/// fields let a structurally thin draft still parse, so its defects surface
/// as violations rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSpecification {
    /// Declared story count; must match the levels array and the
    /// requirements.
    #[serde(default)]
    pub stories: u8,
    /// Levels, bottom story first.
    #[serde(default)]
    pub levels: Vec<Level>,
}

impl PlanSpecification {
    /// Construct a specification from levels.
    #[must_use]
    pub fn new(stories: u8, levels: Vec<Level>) -> Self {
        Self { stories, levels }
    }

    /// Iterate over all rooms across all levels.
    pub fn rooms(&self) -> impl Iterator<Item = &crate::Room> {
        self.levels.iter().flat_map(|level| level.rooms.iter())
    }
}
