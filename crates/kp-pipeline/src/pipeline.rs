//! The plan pipeline orchestrator.

use crate::config::PipelineConfig;
use crate::error::{PipelineError, ValidationStage};
use crate::parse::parse_plan_spec;
use crate::ports::{DraftingCollaborator, RasterEncoder};
use crate::stage::{validate_transition, Stage};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use kp_geometry::{PlanSpecification, RawRequirements, Requirements};
use kp_render::render_plan_svg;
use kp_validate::validate;
use serde::Serialize;

/// Raster width normalization bounds; requested widths outside this range
/// are clamped before the encoder sees them.
const MIN_RASTER_WIDTH: u32 = 400;
const MAX_RASTER_WIDTH: u32 = 4000;

/// Clamp a requested raster width to the supported range.
#[inline]
#[must_use]
pub fn clamp_raster_width(width: u32) -> u32 {
    width.clamp(MIN_RASTER_WIDTH, MAX_RASTER_WIDTH)
}

/// Everything a successful invocation produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOutcome {
    /// The accepted specification.
    pub plan_specification: PlanSpecification,
    /// The deterministic SVG document.
    pub vector_document: String,
    /// Width-normalized raster bytes, base64-encoded.
    pub raster_bytes_base64: String,
}

/// Sequences draft, validation, bounded repair, rendering and
/// rasterization for one plan request.
///
/// Stateless across invocations; a single pipeline value may serve
/// concurrent requests, which share nothing but the process-lifetime font
/// cache inside the renderer.
#[derive(Debug)]
pub struct PlanPipeline<C, R> {
    collaborator: C,
    encoder: R,
    config: PipelineConfig,
}

impl<C, R> PlanPipeline<C, R>
where
    C: DraftingCollaborator,
    R: RasterEncoder,
{
    /// Build a pipeline with default configuration.
    #[must_use]
    pub fn new(collaborator: C, encoder: R) -> Self {
        Self {
            collaborator,
            encoder,
            config: PipelineConfig::default(),
        }
    }

    /// With a configuration.
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run one invocation from raw survey answers.
    ///
    /// Normalizes the requirements at the boundary, then runs the typed
    /// pipeline.
    ///
    /// # Errors
    ///
    /// Any [`PipelineError`]; see [`run_normalized`](Self::run_normalized).
    pub async fn run(&self, raw: &RawRequirements) -> Result<PlanOutcome, PipelineError> {
        let requirements = Requirements::from_raw(raw);
        self.run_normalized(&requirements).await
    }

    /// Run one invocation from already-normalized requirements.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::MalformedDraft`] / [`PipelineError::MalformedRepair`]
    ///   when collaborator text cannot be parsed;
    /// - [`PipelineError::Rejected`] when violations remain after the repair
    ///   budget;
    /// - [`PipelineError::Collaborator`], [`PipelineError::RenderFailed`],
    ///   [`PipelineError::RasterizationFailed`] for the respective stage
    ///   failures.
    pub async fn run_normalized(
        &self,
        requirements: &Requirements,
    ) -> Result<PlanOutcome, PipelineError> {
        let mut stage = Stage::Drafting;

        let spec = self.draft(requirements, &mut stage).await?;
        self.advance(&mut stage, Stage::Validating)?;
        let spec = self.validate_with_repair(requirements, spec, &mut stage).await?;

        let vector_document = self.render(&spec)?;
        let raster = self.rasterize(&vector_document).await?;

        Ok(PlanOutcome {
            plan_specification: spec,
            vector_document,
            raster_bytes_base64: STANDARD.encode(&raster),
        })
    }

    /// Obtain and parse the initial draft.
    async fn draft(
        &self,
        requirements: &Requirements,
        stage: &mut Stage,
    ) -> Result<PlanSpecification, PipelineError> {
        tracing::info!(
            stories = requirements.stories,
            bedrooms = requirements.bedrooms,
            bathrooms = requirements.bathrooms,
            "requesting plan draft"
        );

        let text = self.collaborator.draft(requirements).await?;
        match parse_plan_spec(&text) {
            Ok(spec) => Ok(spec),
            Err(source) => {
                self.advance(stage, Stage::MalformedInput)?;
                tracing::error!(reason = %source.reason, "draft was not parseable");
                Err(PipelineError::MalformedDraft { source })
            }
        }
    }

    /// Validate, spending the repair budget on failures.
    async fn validate_with_repair(
        &self,
        requirements: &Requirements,
        mut spec: PlanSpecification,
        stage: &mut Stage,
    ) -> Result<PlanSpecification, PipelineError> {
        let mut violations = validate(&spec, requirements);
        let mut pass = ValidationStage::Initial;
        let mut attempts = 0u32;

        while !violations.is_empty() {
            tracing::warn!(pass = %pass, count = violations.len(), "validation failed");

            if attempts >= self.config.max_repair_attempts {
                self.advance(stage, Stage::Rejected)?;
                return Err(PipelineError::Rejected {
                    stage: pass,
                    violations,
                });
            }

            attempts += 1;
            self.advance(stage, Stage::Repairing)?;
            tracing::info!(attempt = attempts, "requesting repair");

            let text = self
                .collaborator
                .repair(requirements, &spec, &violations)
                .await?;
            let repaired = match parse_plan_spec(&text) {
                Ok(repaired) => repaired,
                Err(source) => {
                    self.advance(stage, Stage::MalformedInput)?;
                    tracing::error!(reason = %source.reason, "repair response was not parseable");
                    return Err(PipelineError::MalformedRepair {
                        source,
                        prior_violations: violations,
                    });
                }
            };

            self.advance(stage, Stage::Revalidating)?;
            spec = repaired;
            violations = validate(&spec, requirements);
            pass = ValidationStage::PostRepair;
        }

        self.advance(stage, Stage::Accepted)?;
        tracing::info!("specification accepted");
        Ok(spec)
    }

    /// Render the accepted specification.
    fn render(&self, spec: &PlanSpecification) -> Result<String, PipelineError> {
        render_plan_svg(spec, &self.config.render).map_err(|e| {
            // The validator accepted this spec; a render failure here means
            // the pipeline is sequenced wrongly.
            tracing::error!(error = %e, "renderer rejected an accepted specification");
            PipelineError::from(e)
        })
    }

    /// Rasterize the vector document with a clamped target width.
    async fn rasterize(&self, vector_document: &str) -> Result<Vec<u8>, PipelineError> {
        let width = self.config.render.raster_width.map(clamp_raster_width);
        self.encoder
            .rasterize(vector_document, width)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "rasterization failed");
                PipelineError::from(e)
            })
    }

    /// Advance the stage machine, rejecting illegal transitions.
    fn advance(&self, stage: &mut Stage, to: Stage) -> Result<(), PipelineError> {
        validate_transition(*stage, to)?;
        tracing::debug!(from = %stage, to = %to, "stage transition");
        *stage = to;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_width_clamps_to_sane_range() {
        assert_eq!(clamp_raster_width(1600), 1600);
        assert_eq!(clamp_raster_width(10), 400);
        assert_eq!(clamp_raster_width(100_000), 4000);
        assert_eq!(clamp_raster_width(400), 400);
        assert_eq!(clamp_raster_width(4000), 4000);
    }
}
