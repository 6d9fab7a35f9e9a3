//! The validation pass.

use crate::violation::Violation;
use kp_geometry::{PlanSpecification, Requirements, RoomKind};

/// Minimum room width/height in plan units. Rejects degenerate slivers the
/// drafting collaborator sometimes produces when squeezing counts to fit.
pub const MIN_ROOM_DIM: f64 = 2.0;

/// Keyword in the feature list -> room kind that must exist somewhere.
const FEATURE_RULES: &[(&str, RoomKind)] =
    &[("garage", RoomKind::Garage), ("office", RoomKind::Office)];

/// Validate a drafted specification against the normalized requirements.
///
/// Returns every violation found, in deterministic order: story/level-count
/// checks, then each level in array order (level extent, each room in room
/// order, then that level's pairwise overlap scan), then aggregate room
/// counts, then feature presence. An empty vector means the specification is
/// accepted.
///
/// Checks that depend on values another check already rejected are skipped
/// for that value only: a level with a non-finite extent skips its room
/// checks, and a room with non-finite geometry skips its remaining checks,
/// so one defect does not cascade into meaningless messages.
#[must_use]
pub fn validate(spec: &PlanSpecification, requirements: &Requirements) -> Vec<Violation> {
    let mut violations = Vec::new();

    if spec.levels.is_empty() {
        return vec![Violation::MissingLevels];
    }

    if spec.stories != requirements.stories {
        violations.push(Violation::StoriesMismatch {
            wanted: requirements.stories,
            got: spec.stories,
        });
    }

    if spec.levels.len() != usize::from(requirements.stories) {
        violations.push(Violation::LevelCountMismatch {
            expected: requirements.stories,
            got: spec.levels.len(),
        });
    }

    let mut bedrooms = 0u32;
    let mut bathrooms = 0u32;

    for level in &spec.levels {
        if !level.has_finite_extent() {
            violations.push(Violation::LevelExtentNotFinite { level: level.level });
            continue;
        }

        if level.width <= 0.0 || level.height <= 0.0 {
            violations.push(Violation::LevelExtentNotPositive { level: level.level });
        }

        for room in &level.rooms {
            if room.level != level.level {
                violations.push(Violation::RoomLevelMismatch {
                    id: room.id.clone(),
                    declared: room.level,
                    level: level.level,
                });
            }

            if !room.has_finite_geometry() {
                violations.push(Violation::RoomGeometryNotFinite {
                    id: room.id.clone(),
                });
                continue;
            }

            if room.w <= 0.0 || room.h <= 0.0 {
                violations.push(Violation::RoomSizeNotPositive {
                    id: room.id.clone(),
                });
            }

            if room.x < 0.0 || room.y < 0.0 {
                violations.push(Violation::RoomNegativeCoordinates {
                    id: room.id.clone(),
                });
            }

            if room.x + room.w > level.width || room.y + room.h > level.height {
                violations.push(Violation::RoomOutOfBounds {
                    id: room.id.clone(),
                    level: level.level,
                });
            }

            if room.w < MIN_ROOM_DIM || room.h < MIN_ROOM_DIM {
                violations.push(Violation::RoomTooSmall {
                    id: room.id.clone(),
                    min: MIN_ROOM_DIM,
                });
            }

            match room.kind {
                RoomKind::Bedroom => bedrooms += 1,
                RoomKind::Bathroom => bathrooms += 1,
                _ => {}
            }
        }

        // Pairwise interior-overlap scan. O(n^2) per level; room counts are
        // tens at most.
        for (i, a) in level.rooms.iter().enumerate() {
            for b in &level.rooms[i + 1..] {
                if a.rect().overlaps(&b.rect()) {
                    violations.push(Violation::RoomsOverlap {
                        level: level.level,
                        a: a.id.clone(),
                        b: b.id.clone(),
                    });
                }
            }
        }
    }

    if requirements.bedrooms > 0 && bedrooms != requirements.bedrooms {
        violations.push(Violation::BedroomCountMismatch {
            wanted: requirements.bedrooms,
            got: bedrooms,
        });
    }

    if requirements.bathrooms > 0 && bathrooms != requirements.bathrooms {
        violations.push(Violation::BathroomCountMismatch {
            wanted: requirements.bathrooms,
            got: bathrooms,
        });
    }

    for (keyword, kind) in FEATURE_RULES {
        if requirements.mentions_feature(keyword)
            && !spec.rooms().any(|room| room.kind == *kind)
        {
            violations.push(Violation::FeatureMissing {
                feature: (*keyword).to_string(),
            });
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use kp_geometry::{Level, Rect, Room};
    use pretty_assertions::assert_eq;

    fn room(id: &str, kind: RoomKind, level: u32, x: f64, y: f64, w: f64, h: f64) -> Room {
        Room::new(id, kind, level, Rect::new(x, y, w, h))
    }

    /// 20x15 single level, exactly filled, one bedroom and one bathroom.
    fn accepted_plan() -> PlanSpecification {
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

    fn requirements() -> Requirements {
        Requirements::new(1, 1, 1)
    }

    #[test]
    fn accepts_a_conforming_plan() {
        assert_eq!(validate(&accepted_plan(), &requirements()), vec![]);
    }

    #[test]
    fn empty_levels_short_circuits() {
        let spec = PlanSpecification::new(1, vec![]);
        assert_eq!(
            validate(&spec, &requirements()),
            vec![Violation::MissingLevels]
        );
    }

    #[test]
    fn defaulted_spec_reports_missing_levels_not_nothing() {
        let spec: PlanSpecification = serde_json::from_str("{}").unwrap();
        let violations = validate(&spec, &requirements());
        assert_eq!(violations, vec![Violation::MissingLevels]);
    }

    #[test]
    fn stories_and_level_count_mismatch() {
        let two_story = Requirements::new(2, 0, 0);
        let violations = validate(&accepted_plan(), &two_story);
        assert!(violations.contains(&Violation::StoriesMismatch { wanted: 2, got: 1 }));
        assert!(violations.contains(&Violation::LevelCountMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn free_text_two_story_survey_rejects_a_single_level_plan() {
        let raw: kp_geometry::RawRequirements = serde_json::from_str(
            r#"{"stories":"2 Story","bedrooms":"3 Bed","bathrooms":"2 Bath"}"#,
        )
        .unwrap();
        let req = Requirements::from_raw(&raw);
        let violations = validate(&accepted_plan(), &req);
        assert!(violations.contains(&Violation::StoriesMismatch { wanted: 2, got: 1 }));
        assert!(violations.contains(&Violation::LevelCountMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn overlapping_rooms_reported_once_per_pair() {
        let spec = PlanSpecification::new(
            1,
            vec![Level::new(1, 30.0, 30.0).with_rooms(vec![
                room("a", RoomKind::Living, 1, 0.0, 0.0, 10.0, 10.0),
                room("b", RoomKind::Kitchen, 1, 5.0, 5.0, 10.0, 10.0),
            ])],
        );
        let overlaps: Vec<_> = validate(&spec, &Requirements::new(1, 0, 0))
            .into_iter()
            .filter(|v| matches!(v, Violation::RoomsOverlap { .. }))
            .collect();
        assert_eq!(
            overlaps,
            vec![Violation::RoomsOverlap {
                level: 1,
                a: "a".to_string(),
                b: "b".to_string(),
            }]
        );
    }

    #[test]
    fn edge_adjacent_rooms_do_not_overlap() {
        let spec = PlanSpecification::new(
            1,
            vec![Level::new(1, 8.0, 4.0).with_rooms(vec![
                room("left", RoomKind::Living, 1, 0.0, 0.0, 4.0, 4.0),
                room("right", RoomKind::Dining, 1, 4.0, 0.0, 4.0, 4.0),
            ])],
        );
        assert_eq!(validate(&spec, &Requirements::new(1, 0, 0)), vec![]);
    }

    #[test]
    fn minimum_size_violation() {
        let spec = PlanSpecification::new(
            1,
            vec![Level::new(1, 20.0, 15.0).with_rooms(vec![room(
                "sliver",
                RoomKind::Other,
                1,
                0.0,
                0.0,
                1.0,
                1.0,
            )])],
        );
        let violations = validate(&spec, &Requirements::new(1, 0, 0));
        assert!(violations.contains(&Violation::RoomTooSmall {
            id: "sliver".to_string(),
            min: MIN_ROOM_DIM,
        }));
    }

    #[test]
    fn out_of_bounds_and_negative_coordinates() {
        let spec = PlanSpecification::new(
            1,
            vec![Level::new(1, 10.0, 10.0).with_rooms(vec![
                room("far", RoomKind::Other, 1, 6.0, 6.0, 6.0, 6.0),
                room("neg", RoomKind::Other, 1, -1.0, 0.0, 4.0, 4.0),
            ])],
        );
        let violations = validate(&spec, &Requirements::new(1, 0, 0));
        assert!(violations.contains(&Violation::RoomOutOfBounds {
            id: "far".to_string(),
            level: 1,
        }));
        assert!(violations.contains(&Violation::RoomNegativeCoordinates {
            id: "neg".to_string(),
        }));
    }

    #[test]
    fn non_finite_room_skips_dependent_checks() {
        let mut spec = accepted_plan();
        spec.levels[0].rooms[0].x = f64::NAN;
        let violations = validate(&spec, &requirements());
        assert!(violations.contains(&Violation::RoomGeometryNotFinite {
            id: "living".to_string(),
        }));
        // No bounds/size noise for the same room.
        assert!(!violations
            .iter()
            .any(|v| matches!(v, Violation::RoomOutOfBounds { id, .. } if id == "living")));
    }

    #[test]
    fn non_finite_level_skips_its_rooms() {
        let mut spec = accepted_plan();
        spec.levels[0].width = f64::INFINITY;
        let violations = validate(&spec, &requirements());
        assert!(violations.contains(&Violation::LevelExtentNotFinite { level: 1 }));
        // Rooms on the broken level were skipped, so the bedroom total is 0
        // and the aggregate check fires.
        assert!(violations.contains(&Violation::BedroomCountMismatch { wanted: 1, got: 0 }));
    }

    #[test]
    fn room_level_mismatch() {
        let mut spec = accepted_plan();
        spec.levels[0].rooms[2].level = 2;
        let violations = validate(&spec, &requirements());
        assert!(violations.contains(&Violation::RoomLevelMismatch {
            id: "bed1".to_string(),
            declared: 2,
            level: 1,
        }));
    }

    #[test]
    fn aggregate_counts_span_levels() {
        let spec = PlanSpecification::new(
            2,
            vec![
                Level::new(1, 20.0, 15.0).with_rooms(vec![
                    room("living", RoomKind::Living, 1, 0.0, 0.0, 20.0, 15.0),
                ]),
                Level::new(2, 20.0, 15.0).with_rooms(vec![
                    room("bed1", RoomKind::Bedroom, 2, 0.0, 0.0, 10.0, 15.0),
                    room("bed2", RoomKind::Bedroom, 2, 10.0, 0.0, 10.0, 15.0),
                ]),
            ],
        );
        let req = Requirements::new(2, 3, 0);
        let violations = validate(&spec, &req);
        assert!(violations.contains(&Violation::BedroomCountMismatch { wanted: 3, got: 2 }));
    }

    #[test]
    fn zero_requested_count_is_unconstrained() {
        // One bedroom present, none requested: no violation.
        let violations = validate(&accepted_plan(), &Requirements::new(1, 0, 0));
        assert!(!violations
            .iter()
            .any(|v| matches!(v, Violation::BedroomCountMismatch { .. })));
    }

    #[test]
    fn feature_rules() {
        let req = Requirements::new(1, 1, 1).with_features("Garage and Office please");
        let violations = validate(&accepted_plan(), &req);
        assert!(violations.contains(&Violation::FeatureMissing {
            feature: "garage".to_string(),
        }));
        assert!(violations.contains(&Violation::FeatureMissing {
            feature: "office".to_string(),
        }));

        let mut spec = accepted_plan();
        spec.levels[0].rooms[0] = room("garage", RoomKind::Garage, 1, 0.0, 0.0, 10.0, 8.0);
        let violations = validate(&spec, &req);
        assert!(!violations.iter().any(
            |v| matches!(v, Violation::FeatureMissing { feature } if feature == "garage")
        ));
        assert!(violations.contains(&Violation::FeatureMissing {
            feature: "office".to_string(),
        }));
    }

    #[test]
    fn output_order_is_stable() {
        let mut spec = accepted_plan();
        spec.stories = 2;
        spec.levels[0].rooms[3].w = 1.0;
        let first = validate(&spec, &requirements());
        let second = validate(&spec, &requirements());
        assert_eq!(first, second);
        // Structural checks come before per-room ones.
        assert_eq!(
            first.first(),
            Some(&Violation::StoriesMismatch { wanted: 1, got: 2 })
        );
    }
}
