//! Pipeline configuration.

use kp_render::RenderOptions;

/// Pipeline policy knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Repair requests allowed after a failed validation.
    ///
    /// Defaults to 1: repairs consume a collaborator invocation and an
    /// unbounded loop risks nontermination when the collaborator cannot
    /// satisfy the constraints. 0 rejects immediately on the first failed
    /// validation.
    pub max_repair_attempts: u32,
    /// Rendering constants for the accepted specification.
    pub render: RenderOptions,
}

impl PipelineConfig {
    /// Default configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a repair budget.
    #[inline]
    #[must_use]
    pub fn with_max_repair_attempts(mut self, attempts: u32) -> Self {
        self.max_repair_attempts = attempts;
        self
    }

    /// With render options.
    #[inline]
    #[must_use]
    pub fn with_render_options(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_repair_attempts: 1,
            render: RenderOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_exactly_one_repair() {
        assert_eq!(PipelineConfig::default().max_repair_attempts, 1);
    }

    #[test]
    fn builder() {
        let config = PipelineConfig::new()
            .with_max_repair_attempts(3)
            .with_render_options(RenderOptions::new().with_px_per_unit(10.0));
        assert_eq!(config.max_repair_attempts, 3);
        assert_eq!(config.render.px_per_unit, 10.0);
    }
}
