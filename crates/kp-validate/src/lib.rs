//! Keyplan Constraint Validator
//!
//! Pure validation of a drafted [`PlanSpecification`] against the user's
//! [`Requirements`]. The single entry point is [`validate`]:
//!
//! - it is total: any specification yields a (possibly empty) list of
//!   [`Violation`]s, never a panic or an error;
//! - it performs every check instead of stopping at the first failure, so a
//!   single pass gives the drafting collaborator the complete defect list
//!   for its one repair attempt;
//! - its output order is deterministic and stable for identical input.
//!
//! [`PlanSpecification`]: kp_geometry::PlanSpecification
//! [`Requirements`]: kp_geometry::Requirements

mod validate;
mod violation;

pub use validate::{validate, MIN_ROOM_DIM};
pub use violation::Violation;
