//! Pipeline stage machine.
//!
//! One invocation walks `Drafting -> Validating -> {Accepted | Repairing ->
//! Revalidating -> {Accepted | Repairing | Rejected}}`, with `MalformedInput`
//! as the terminal stage for collaborator text that cannot be parsed. Every
//! advance the orchestrator makes is checked against this table; an illegal
//! transition is a pipeline bug, not a data error.

/// Pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Waiting on the collaborator's initial draft.
    Drafting,
    /// Validating the initial draft.
    Validating,
    /// Waiting on a collaborator repair.
    Repairing,
    /// Validating a repaired specification.
    Revalidating,
    /// Terminal: specification accepted, rendering may proceed.
    Accepted,
    /// Terminal: violations remain after the repair budget.
    Rejected,
    /// Terminal: collaborator output could not be parsed.
    MalformedInput,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Drafting => "drafting",
            Stage::Validating => "validating",
            Stage::Repairing => "repairing",
            Stage::Revalidating => "revalidating",
            Stage::Accepted => "accepted",
            Stage::Rejected => "rejected",
            Stage::MalformedInput => "malformed-input",
        };
        f.write_str(name)
    }
}

/// Illegal stage transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal pipeline stage transition: {from} -> {to}")]
pub struct StageError {
    /// Stage the pipeline was in.
    pub from: Stage,
    /// Stage it tried to enter.
    pub to: Stage,
}

/// Stages reachable from `from`.
#[must_use]
pub fn allowed_transitions(from: Stage) -> Vec<Stage> {
    use Stage::*;
    match from {
        Drafting => vec![Validating, MalformedInput],
        // Rejected directly from Validating covers a zero-repair budget.
        Validating => vec![Accepted, Repairing, Rejected],
        Repairing => vec![Revalidating, MalformedInput],
        Revalidating => vec![Accepted, Repairing, Rejected],
        Accepted | Rejected | MalformedInput => vec![],
    }
}

/// Validate a stage transition.
///
/// # Errors
///
/// [`StageError`] when the transition is not in the table.
pub fn validate_transition(from: Stage, to: Stage) -> Result<(), StageError> {
    if allowed_transitions(from).contains(&to) {
        Ok(())
    } else {
        Err(StageError { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_transitions() {
        assert!(validate_transition(Stage::Drafting, Stage::Validating).is_ok());
        assert!(validate_transition(Stage::Validating, Stage::Accepted).is_ok());
        assert!(validate_transition(Stage::Validating, Stage::Repairing).is_ok());
        assert!(validate_transition(Stage::Repairing, Stage::Revalidating).is_ok());
        assert!(validate_transition(Stage::Revalidating, Stage::Accepted).is_ok());
        assert!(validate_transition(Stage::Revalidating, Stage::Rejected).is_ok());
    }

    #[test]
    fn malformed_input_paths() {
        assert!(validate_transition(Stage::Drafting, Stage::MalformedInput).is_ok());
        assert!(validate_transition(Stage::Repairing, Stage::MalformedInput).is_ok());
        // A parsed-but-invalid draft is never malformed input.
        assert!(validate_transition(Stage::Validating, Stage::MalformedInput).is_err());
    }

    #[test]
    fn terminal_stages_have_no_exits() {
        for terminal in [Stage::Accepted, Stage::Rejected, Stage::MalformedInput] {
            assert!(allowed_transitions(terminal).is_empty());
        }
    }

    #[test]
    fn no_skipping_validation() {
        assert!(validate_transition(Stage::Drafting, Stage::Accepted).is_err());
        assert!(validate_transition(Stage::Drafting, Stage::Repairing).is_err());
        assert!(validate_transition(Stage::Repairing, Stage::Accepted).is_err());
    }

    #[test]
    fn transition_check_matches_table() {
        let all = [
            Stage::Drafting,
            Stage::Validating,
            Stage::Repairing,
            Stage::Revalidating,
            Stage::Accepted,
            Stage::Rejected,
            Stage::MalformedInput,
        ];
        for from in all {
            for to in all {
                let listed = allowed_transitions(from).contains(&to);
                assert_eq!(validate_transition(from, to).is_ok(), listed);
            }
        }
    }
}
