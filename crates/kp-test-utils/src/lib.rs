//! Testing utilities for the keyplan workspace
//!
//! Shared fixtures and deterministic fakes for the collaborator and raster
//! encoder ports, so pipeline tests never touch a live service.

#![allow(missing_docs)]

use async_trait::async_trait;
use kp_geometry::{Level, PlanSpecification, RawRequirements, Rect, Requirements, Room, RoomKind};
use kp_pipeline::{CollaboratorError, DraftingCollaborator, RasterEncoder, RasterError};
use kp_validate::Violation;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Initialize tracing for a test binary; safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn room(id: &str, kind: RoomKind, level: u32, x: f64, y: f64, w: f64, h: f64) -> Room {
    Room::new(id, kind, level, Rect::new(x, y, w, h))
}

/// A 20x15 single level exactly filled by four rooms: living, kitchen, one
/// bedroom, one bathroom. Valid against `single_story_requirements()`.
pub fn accepted_single_level_plan() -> PlanSpecification {
    PlanSpecification::new(
        1,
        vec![Level::new(1, 20.0, 15.0).with_rooms(vec![
            room("living", RoomKind::Living, 1, 0.0, 0.0, 10.0, 8.0),
            room("kitchen", RoomKind::Kitchen, 1, 10.0, 0.0, 10.0, 8.0),
            room("bed1", RoomKind::Bedroom, 1, 0.0, 8.0, 12.0, 7.0),
            room("bath1", RoomKind::Bathroom, 1, 12.0, 8.0, 8.0, 7.0),
        ])],
    )
}

/// Like `accepted_single_level_plan` but missing its bedroom, so the
/// bedroom-count check fails.
pub fn bedroom_short_plan() -> PlanSpecification {
    PlanSpecification::new(
        1,
        vec![Level::new(1, 20.0, 15.0).with_rooms(vec![
            room("living", RoomKind::Living, 1, 0.0, 0.0, 10.0, 8.0),
            room("kitchen", RoomKind::Kitchen, 1, 10.0, 0.0, 10.0, 8.0),
            room("den", RoomKind::Other, 1, 0.0, 8.0, 12.0, 7.0),
            room("bath1", RoomKind::Bathroom, 1, 12.0, 8.0, 8.0, 7.0),
        ])],
    )
}

pub fn single_story_requirements() -> Requirements {
    Requirements::new(1, 1, 1)
}

pub fn single_story_survey() -> RawRequirements {
    RawRequirements {
        stories: Some("1 Story".into()),
        bedrooms: Some("1 Bed".into()),
        bathrooms: Some("1 Bath".into()),
        total_area: None,
        features: None,
    }
}

/// Wire-format JSON for a specification, as a collaborator would return it.
pub fn plan_json(spec: &PlanSpecification) -> String {
    serde_json::to_string(spec).expect("plan specifications serialize")
}

/// Collaborator fake that replays canned responses in order (drafts and
/// repairs draw from the same queue) and records every call.
#[derive(Debug, Default)]
pub struct ScriptedCollaborator {
    responses: Mutex<VecDeque<String>>,
    draft_calls: AtomicUsize,
    repair_calls: AtomicUsize,
    repair_feedback: Mutex<Vec<Vec<Violation>>>,
}

impl ScriptedCollaborator {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    pub fn drafts(&self) -> usize {
        self.draft_calls.load(Ordering::SeqCst)
    }

    pub fn repairs(&self) -> usize {
        self.repair_calls.load(Ordering::SeqCst)
    }

    /// Violation lists passed to each repair call, in order.
    pub fn repair_feedback(&self) -> Vec<Vec<Violation>> {
        self.repair_feedback.lock().clone()
    }

    fn next_response(&self) -> Result<String, CollaboratorError> {
        self.responses
            .lock()
            .pop_front()
            .ok_or_else(|| CollaboratorError::Unavailable("script exhausted".to_string()))
    }
}

#[async_trait]
impl DraftingCollaborator for ScriptedCollaborator {
    async fn draft(&self, _requirements: &Requirements) -> Result<String, CollaboratorError> {
        self.draft_calls.fetch_add(1, Ordering::SeqCst);
        self.next_response()
    }

    async fn repair(
        &self,
        _requirements: &Requirements,
        _rejected: &PlanSpecification,
        violations: &[Violation],
    ) -> Result<String, CollaboratorError> {
        self.repair_calls.fetch_add(1, Ordering::SeqCst);
        self.repair_feedback.lock().push(violations.to_vec());
        self.next_response()
    }
}

/// Raster encoder fake: returns fixed PNG-magic bytes and records the
/// widths it was asked for.
#[derive(Debug, Default)]
pub struct PngStubEncoder {
    widths: Mutex<Vec<Option<u32>>>,
}

impl PngStubEncoder {
    pub const BYTES: &'static [u8] = b"\x89PNG\r\n\x1a\nstub";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn widths(&self) -> Vec<Option<u32>> {
        self.widths.lock().clone()
    }
}

#[async_trait]
impl RasterEncoder for PngStubEncoder {
    async fn rasterize(
        &self,
        _vector_document: &str,
        width: Option<u32>,
    ) -> Result<Vec<u8>, RasterError> {
        self.widths.lock().push(width);
        Ok(Self::BYTES.to_vec())
    }
}

/// Raster encoder fake that always fails.
#[derive(Debug, Default)]
pub struct FailingRasterEncoder;

#[async_trait]
impl RasterEncoder for FailingRasterEncoder {
    async fn rasterize(
        &self,
        _vector_document: &str,
        _width: Option<u32>,
    ) -> Result<Vec<u8>, RasterError> {
        Err(RasterError("stub encoder always fails".to_string()))
    }
}
