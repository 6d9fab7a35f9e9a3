//! Keyplan Geometry Types
//!
//! Shared value types for the floor-plan pipeline:
//!
//! - [`PlanSpecification`]: a multi-level floor plan as produced by the
//!   drafting collaborator
//! - [`Level`]: one story with a rectangular floor extent and its rooms
//! - [`Room`]: an axis-aligned rectangle with a semantic [`RoomKind`]
//! - [`Rect`]: the overlap primitive shared by validation
//! - [`Requirements`]: the user's normalized, strongly-typed constraints
//!
//! These types carry no behavior beyond construction, serde mapping, and the
//! rectangle overlap test. All constraint enforcement lives downstream in the
//! validator; specifications arrive from an untrusted collaborator and are
//! represented as-is so every defect can be reported.

mod level;
mod plan;
mod rect;
mod requirements;
mod room;

pub use level::Level;
pub use plan::PlanSpecification;
pub use rect::Rect;
pub use requirements::{CountText, RawRequirements, Requirements};
pub use room::{Room, RoomKind};
