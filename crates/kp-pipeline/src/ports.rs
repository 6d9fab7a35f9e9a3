//! Injected capability ports.
//!
//! The drafting collaborator and the raster encoder are external services;
//! the pipeline only knows these two traits. Production adapters wrap the
//! real services, tests use scripted fakes.

use async_trait::async_trait;
use kp_geometry::{PlanSpecification, Requirements};
use kp_validate::Violation;

/// Produces and repairs plan specifications from requirements.
///
/// Implementations return raw text; the pipeline owns extraction and
/// parsing, so a collaborator that wraps its output in Markdown fences or
/// prose still works.
#[async_trait]
pub trait DraftingCollaborator: Send + Sync {
    /// Draft an initial specification for the given requirements.
    async fn draft(&self, requirements: &Requirements) -> Result<String, CollaboratorError>;

    /// Produce a corrected specification.
    ///
    /// Receives the rejected specification and the complete violation list,
    /// which implementations are expected to replay verbatim to the
    /// drafting backend.
    async fn repair(
        &self,
        requirements: &Requirements,
        rejected: &PlanSpecification,
        violations: &[Violation],
    ) -> Result<String, CollaboratorError>;
}

/// Converts a vector document into raster bytes.
///
/// `width`, when given, has already been clamped by the pipeline; the
/// encoder preserves aspect ratio. A failing encoder returns an error; it
/// never produces partial or garbled image bytes.
#[async_trait]
pub trait RasterEncoder: Send + Sync {
    /// Rasterize an SVG document, optionally normalizing to `width` pixels.
    async fn rasterize(
        &self,
        vector_document: &str,
        width: Option<u32>,
    ) -> Result<Vec<u8>, RasterError>;
}

#[async_trait]
impl<T> DraftingCollaborator for std::sync::Arc<T>
where
    T: DraftingCollaborator + ?Sized,
{
    async fn draft(&self, requirements: &Requirements) -> Result<String, CollaboratorError> {
        (**self).draft(requirements).await
    }

    async fn repair(
        &self,
        requirements: &Requirements,
        rejected: &PlanSpecification,
        violations: &[Violation],
    ) -> Result<String, CollaboratorError> {
        (**self).repair(requirements, rejected, violations).await
    }
}

#[async_trait]
impl<T> RasterEncoder for std::sync::Arc<T>
where
    T: RasterEncoder + ?Sized,
{
    async fn rasterize(
        &self,
        vector_document: &str,
        width: Option<u32>,
    ) -> Result<Vec<u8>, RasterError> {
        (**self).rasterize(vector_document, width).await
    }
}

/// Transport-level drafting collaborator failure.
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    /// The collaborator could not be reached or refused the request.
    #[error("drafting collaborator unavailable: {0}")]
    Unavailable(String),

    /// The collaborator returned no usable text at all.
    #[error("drafting collaborator returned an empty response")]
    EmptyResponse,
}

/// Raster encoder failure. Deliberately opaque: the pipeline maps any
/// encoding problem to a single rendering-failure outcome.
#[derive(Debug, thiserror::Error)]
#[error("raster encoding failed: {0}")]
pub struct RasterError(pub String);
