//! Pipeline error taxonomy.
//!
//! The validator never errors, it returns violations. The renderer and the
//! raster encoder fail loudly. The orchestrator is the only component that
//! decides whether a failure is recoverable (enter the repair cycle) or
//! terminal (one of these variants).

use crate::parse::SpecParseError;
use crate::ports::{CollaboratorError, RasterError};
use crate::stage::StageError;
use kp_render::RenderError;
use kp_validate::Violation;

/// Which validation pass produced a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStage {
    /// The first validation of the collaborator's draft.
    Initial,
    /// Validation of a repaired specification.
    PostRepair,
}

impl std::fmt::Display for ValidationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationStage::Initial => f.write_str("initial validation"),
            ValidationStage::PostRepair => f.write_str("post-repair validation"),
        }
    }
}

/// Terminal pipeline failure.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The initial draft could not be parsed as a specification. Repair is
    /// not attempted; it only applies to parseable-but-invalid specs.
    #[error("draft {source}")]
    MalformedDraft {
        /// Parse failure with the truncated raw text.
        #[source]
        source: SpecParseError,
    },

    /// A repair response could not be parsed. Carries the violations that
    /// triggered the repair so callers still see why it was requested.
    #[error("repair response {source}")]
    MalformedRepair {
        /// Parse failure with the truncated raw text.
        #[source]
        source: SpecParseError,
        /// The violations the failed repair was asked to fix.
        prior_violations: Vec<Violation>,
    },

    /// Violations remain after the repair budget was spent. The full list
    /// is surfaced, never a partial one.
    #[error("plan rejected at {stage}: {} violation(s)", violations.len())]
    Rejected {
        /// Which validation pass rejected the specification.
        stage: ValidationStage,
        /// Every violation from that pass.
        violations: Vec<Violation>,
    },

    /// Transport-level collaborator failure.
    #[error("drafting collaborator failed: {0}")]
    Collaborator(#[from] CollaboratorError),

    /// An accepted specification failed to render. The validator should
    /// have rejected it first, so this indicates a pipeline bug and is
    /// logged distinctly from ordinary rejections.
    #[error("rendering failed: {0}")]
    RenderFailed(#[from] RenderError),

    /// The external raster encoder failed; no partial image is returned.
    #[error("rasterization failed: {0}")]
    RasterizationFailed(#[from] RasterError),

    /// The orchestrator attempted an illegal stage transition: a pipeline
    /// bug, never a data error.
    #[error("pipeline sequencing fault: {0}")]
    Sequencing(#[from] StageError),
}

impl PipelineError {
    /// Violations attached to this failure, if any.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            PipelineError::Rejected { violations, .. } => violations,
            PipelineError::MalformedRepair {
                prior_violations, ..
            } => prior_violations,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_names_the_stage() {
        let err = PipelineError::Rejected {
            stage: ValidationStage::PostRepair,
            violations: vec![Violation::MissingLevels],
        };
        assert_eq!(
            err.to_string(),
            "plan rejected at post-repair validation: 1 violation(s)"
        );
        assert_eq!(err.violations(), &[Violation::MissingLevels]);
    }

    #[test]
    fn non_rejection_errors_carry_no_violations() {
        let err = PipelineError::RasterizationFailed(RasterError("boom".to_string()));
        assert!(err.violations().is_empty());
        assert_eq!(err.to_string(), "rasterization failed: raster encoding failed: boom");
    }
}
