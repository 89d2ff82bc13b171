//! Exercise catalog and per-exercise threshold profiles
//!
//! Adding an exercise means adding one enum variant plus one `profile()`
//! table row; the state machine itself never changes.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::types::RepPhase;

/// The supported exercises (closed set, selected explicitly, never inferred)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExerciseKind {
    Squat,
    // The app's historical id has no underscore
    #[serde(rename = "PUSHUP")]
    PushUp,
    BicepCurl,
    OverheadPress,
}

/// Which direction of the angle cycle counts the rep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementFamily {
    /// Rest position is extended; rep counts on the return to extension
    /// (squat, push-up, curl)
    Standard,
    /// Rest position is contracted; rep counts on the return to contraction
    /// (overhead press)
    Inverted,
}

/// Per-exercise angle thresholds and joint selection
///
/// Invariant: `extended_deg > contracted_deg`. Angles in degrees, 0-180.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdProfile {
    /// Angle above which the limb counts as extended
    pub extended_deg: f64,
    /// Angle below which the limb counts as contracted
    pub contracted_deg: f64,
    /// Canonical names of the joint triple (a, vertex, c)
    pub joints: [&'static str; 3],
    /// Label for the measured angle, for gauges
    pub joint_label: &'static str,
    /// Setup guidance shown before the set starts
    pub guidance: &'static str,
    /// Transition family
    pub family: MovementFamily,
}

impl ExerciseKind {
    /// Threshold profile for this exercise (static lookup table)
    pub fn profile(&self) -> ThresholdProfile {
        match self {
            ExerciseKind::Squat => ThresholdProfile {
                extended_deg: 165.0,
                contracted_deg: 90.0,
                joints: ["left_hip", "left_knee", "left_ankle"],
                joint_label: "Knee Angle",
                guidance: "Side view. Bend knees.",
                family: MovementFamily::Standard,
            },
            ExerciseKind::PushUp => ThresholdProfile {
                extended_deg: 160.0,
                contracted_deg: 80.0,
                joints: ["left_shoulder", "left_elbow", "left_wrist"],
                joint_label: "Elbow Angle",
                guidance: "Side view. Chest to floor.",
                family: MovementFamily::Standard,
            },
            ExerciseKind::BicepCurl => ThresholdProfile {
                extended_deg: 150.0,
                contracted_deg: 60.0,
                joints: ["left_shoulder", "left_elbow", "left_wrist"],
                joint_label: "Elbow Angle",
                guidance: "Side view. Curl up.",
                family: MovementFamily::Standard,
            },
            ExerciseKind::OverheadPress => ThresholdProfile {
                extended_deg: 160.0,
                contracted_deg: 70.0,
                joints: ["left_shoulder", "left_elbow", "left_wrist"],
                joint_label: "Shoulder/Elbow",
                guidance: "Front/Side. Push up.",
                family: MovementFamily::Inverted,
            },
        }
    }

    /// Phase the movement rests in before the first rep
    pub fn initial_phase(&self) -> RepPhase {
        match self.profile().family {
            MovementFamily::Standard => RepPhase::Extended,
            MovementFamily::Inverted => RepPhase::Contracted,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ExerciseKind::Squat => "Bodyweight Squat",
            ExerciseKind::PushUp => "Push Up",
            ExerciseKind::BicepCurl => "Bicep Curl",
            ExerciseKind::OverheadPress => "Overhead Press",
        }
    }

    /// Primary muscle group
    pub fn muscle_group(&self) -> &'static str {
        match self {
            ExerciseKind::Squat => "Legs",
            ExerciseKind::PushUp => "Chest",
            ExerciseKind::BicepCurl => "Arms",
            ExerciseKind::OverheadPress => "Shoulders",
        }
    }

    /// Setup description shown in the exercise picker
    pub fn description(&self) -> &'static str {
        match self {
            ExerciseKind::Squat => {
                "Stand with feet shoulder-width apart. Lower your hips back and down."
            }
            ExerciseKind::PushUp => "Plank position. Lower chest to floor, then push back up.",
            ExerciseKind::BicepCurl => "Keep elbows at side. Curl weight up towards shoulders.",
            ExerciseKind::OverheadPress => "Press weight vertically overhead from shoulder level.",
        }
    }

    /// All supported exercises
    pub fn all() -> [ExerciseKind; 4] {
        [
            ExerciseKind::Squat,
            ExerciseKind::PushUp,
            ExerciseKind::BicepCurl,
            ExerciseKind::OverheadPress,
        ]
    }
}

impl std::fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            ExerciseKind::Squat => "SQUAT",
            ExerciseKind::PushUp => "PUSHUP",
            ExerciseKind::BicepCurl => "BICEP_CURL",
            ExerciseKind::OverheadPress => "OVERHEAD_PRESS",
        };
        write!(f, "{}", id)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_ordered_for_every_exercise() {
        for kind in ExerciseKind::all() {
            let p = kind.profile();
            assert!(
                p.extended_deg > p.contracted_deg,
                "{} profile must keep extended > contracted",
                kind
            );
        }
    }

    #[test]
    fn test_thresholds_within_angle_range() {
        for kind in ExerciseKind::all() {
            let p = kind.profile();
            assert!(p.contracted_deg > 0.0 && p.extended_deg < 180.0);
        }
    }

    #[test]
    fn test_initial_phase_per_family() {
        assert_eq!(ExerciseKind::Squat.initial_phase(), RepPhase::Extended);
        assert_eq!(ExerciseKind::PushUp.initial_phase(), RepPhase::Extended);
        assert_eq!(ExerciseKind::BicepCurl.initial_phase(), RepPhase::Extended);
        assert_eq!(
            ExerciseKind::OverheadPress.initial_phase(),
            RepPhase::Contracted
        );
    }

    #[test]
    fn test_wire_id_matches_display_for_every_exercise() {
        // Clients echo the id from status responses back into requests,
        // so the serde form and the Display form must be the same string
        for kind in ExerciseKind::all() {
            let wire = serde_json::to_string(&kind).unwrap();
            assert_eq!(wire, format!("\"{}\"", kind));
            let back: ExerciseKind = serde_json::from_str(&wire).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_squat_measures_lower_body() {
        let p = ExerciseKind::Squat.profile();
        assert_eq!(p.joints, ["left_hip", "left_knee", "left_ankle"]);
    }
}
