//! Violation messages.

/// One failed constraint.
///
/// The `Display` output is the violation's canonical human-readable message.
/// Messages name the offending room ids and level numbers so the full list
/// can be replayed verbatim into a repair request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    /// The specification has no levels at all.
    #[error("plan specification has no levels")]
    MissingLevels,

    /// Declared story count differs from the requested one.
    #[error("stories mismatch: wanted {wanted}, got {got}")]
    StoriesMismatch {
        /// Requested story count.
        wanted: u8,
        /// Declared story count.
        got: u8,
    },

    /// The levels array length differs from the requested story count.
    #[error("level count mismatch: expected {expected}, got {got}")]
    LevelCountMismatch {
        /// Requested story count.
        expected: u8,
        /// Number of levels present.
        got: usize,
    },

    /// A level's width or height is not a finite number.
    #[error("level {level} has invalid width/height")]
    LevelExtentNotFinite {
        /// Offending level number.
        level: u32,
    },

    /// A level's width or height is zero or negative.
    #[error("level {level} has non-positive dimensions")]
    LevelExtentNotPositive {
        /// Offending level number.
        level: u32,
    },

    /// A room's declared level differs from the level it is nested under.
    #[error("room {id} level mismatch: declared {declared}, nested under level {level}")]
    RoomLevelMismatch {
        /// Offending room id.
        id: String,
        /// The room's declared level number.
        declared: u32,
        /// The enclosing level number.
        level: u32,
    },

    /// A room's x, y, w or h is not a finite number.
    #[error("room {id} has invalid numeric values")]
    RoomGeometryNotFinite {
        /// Offending room id.
        id: String,
    },

    /// A room's width or height is zero or negative.
    #[error("room {id} has invalid size")]
    RoomSizeNotPositive {
        /// Offending room id.
        id: String,
    },

    /// A room's position has a negative coordinate.
    #[error("room {id} has negative coordinates")]
    RoomNegativeCoordinates {
        /// Offending room id.
        id: String,
    },

    /// A room extends past its level's floor extent.
    #[error("room {id} out of bounds on level {level}")]
    RoomOutOfBounds {
        /// Offending room id.
        id: String,
        /// Enclosing level number.
        level: u32,
    },

    /// A room is below the minimum dimension.
    #[error("room {id} too small (< {min} units)")]
    RoomTooSmall {
        /// Offending room id.
        id: String,
        /// Minimum allowed dimension.
        min: f64,
    },

    /// Two rooms on one level have a positive-area intersection.
    #[error("rooms overlap on level {level}: {a} & {b}")]
    RoomsOverlap {
        /// Level number both rooms sit on.
        level: u32,
        /// First room id (array order).
        a: String,
        /// Second room id (array order).
        b: String,
    },

    /// Bedroom total differs from the requested count.
    #[error("bedrooms mismatch: wanted {wanted}, got {got}")]
    BedroomCountMismatch {
        /// Requested bedroom count.
        wanted: u32,
        /// Bedrooms present across all levels.
        got: u32,
    },

    /// Bathroom total differs from the requested count.
    #[error("bathrooms mismatch: wanted {wanted}, got {got}")]
    BathroomCountMismatch {
        /// Requested bathroom count.
        wanted: u32,
        /// Bathrooms present across all levels.
        got: u32,
    },

    /// A requested feature has no corresponding room anywhere in the plan.
    #[error("feature requested: {feature} (missing)")]
    FeatureMissing {
        /// The feature keyword from the requirements.
        feature: String,
    },
}
