//! Rep-counting engine: per-exercise threshold state machine
//!
//! Transitions (Standard family — squat, push-up, curl):
//! - EXTENDED → CONTRACTED: angle < contracted threshold ("Hold...")
//! - CONTRACTED → EXTENDED: angle > extended threshold (rep counted, "Up!")
//! - proximity coaching inside a 20° band of the uncrossed threshold
//!
//! Transitions (Inverted family — overhead press):
//! - CONTRACTED → EXTENDED: angle > extended threshold ("Good extension!")
//! - EXTENDED → CONTRACTED: angle < contracted threshold (rep counted)
//!
//! A rep counts exactly once per full cycle through both thresholds; the
//! machine only advances when the opposite boundary is crossed, so noisy
//! re-crossings of the same boundary can never double-count.

use crate::core::{angle_at, AngleWindow};
use crate::types::{
    ExerciseKind, Feedback, Frame, FrameResult, JointSample, MovementFamily, Point, RepPhase,
    ThresholdProfile,
};
use crate::{MIN_JOINT_CONFIDENCE, PROXIMITY_BAND_DEG};

/// Rep-counting state machine, one instance per exercise set
///
/// Single-threaded and frame-driven: the caller invokes [`process`] once
/// per frame and must not overlap calls against the same instance.
///
/// [`process`]: RepEngine::process
#[derive(Debug)]
pub struct RepEngine {
    /// The exercise being tracked (immutable for the engine's lifetime)
    kind: ExerciseKind,
    /// Threshold profile for the exercise
    profile: ThresholdProfile,
    /// Current phase of the repetition cycle
    phase: RepPhase,
    /// Reps counted in the active set
    rep_count: u32,
    /// Moving average over raw joint angles
    window: AngleWindow,
    /// Last coaching message worth keeping (stale on purpose; avoids flicker)
    last_feedback: &'static str,
    /// Last smoothed angle from a visible pose
    last_angle: f64,
    /// Frames processed since construction or reset
    frame_count: u64,
}

impl RepEngine {
    /// Create an engine for one exercise
    pub fn new(kind: ExerciseKind) -> Self {
        Self {
            kind,
            profile: kind.profile(),
            phase: kind.initial_phase(),
            rep_count: 0,
            window: AngleWindow::new(),
            last_feedback: Feedback::GetIntoPosition.message(),
            last_angle: 0.0,
            frame_count: 0,
        }
    }

    /// Process one frame of pose input
    ///
    /// Never fails: missing or low-confidence joints degrade to a
    /// "can't see you" result without touching count or phase.
    pub fn process(&mut self, joints: &[JointSample]) -> FrameResult {
        if joints.is_empty() {
            return FrameResult::new(
                self.rep_count,
                Feedback::NoPose.message(),
                false,
                0.0,
                self.phase,
            );
        }

        let [name_a, name_b, name_c] = self.profile.joints;
        let (a, b, c) = match (
            find_joint(joints, name_a),
            find_joint(joints, name_b),
            find_joint(joints, name_c),
        ) {
            (Some(a), Some(b), Some(c)) => (a, b, c),
            _ => {
                return FrameResult::new(
                    self.rep_count,
                    Feedback::JointsHidden.message(),
                    false,
                    0.0,
                    self.phase,
                );
            }
        };

        let raw_angle = angle_at(a, b, c);
        let angle = self.window.push(raw_angle);
        self.last_angle = angle;
        self.frame_count += 1;

        let (new_phase, feedback) = self.compute_transition(angle);
        let is_new_rep = feedback.map(|f| f.is_rep()).unwrap_or(false);

        self.phase = new_phase;
        if is_new_rep {
            self.rep_count += 1;
        }
        if let Some(fb) = feedback {
            self.last_feedback = fb.message();
        }

        FrameResult::new(self.rep_count, self.last_feedback, is_new_rep, angle, self.phase)
    }

    /// Evaluate the transition table for a smoothed angle
    fn compute_transition(&self, angle: f64) -> (RepPhase, Option<Feedback>) {
        let up = self.profile.extended_deg;
        let down = self.profile.contracted_deg;

        match self.profile.family {
            MovementFamily::Standard => match self.phase {
                RepPhase::Extended => {
                    if angle < down {
                        (RepPhase::Contracted, Some(Feedback::Hold))
                    } else if angle < down + PROXIMITY_BAND_DEG {
                        (RepPhase::Extended, Some(Feedback::GoLower))
                    } else {
                        (RepPhase::Extended, None)
                    }
                }
                RepPhase::Contracted => {
                    if angle > up {
                        (RepPhase::Extended, Some(Feedback::Up))
                    } else if angle > up - PROXIMITY_BAND_DEG {
                        (RepPhase::Contracted, Some(Feedback::ExtendFully))
                    } else {
                        (RepPhase::Contracted, None)
                    }
                }
                // No transitions into or out of MID exist yet
                RepPhase::Mid => (self.phase, None),
            },
            MovementFamily::Inverted => match self.phase {
                RepPhase::Contracted => {
                    if angle > up {
                        (RepPhase::Extended, Some(Feedback::GoodExtension))
                    } else {
                        (RepPhase::Contracted, None)
                    }
                }
                RepPhase::Extended => {
                    if angle < down {
                        (RepPhase::Contracted, Some(Feedback::RepComplete))
                    } else {
                        (RepPhase::Extended, None)
                    }
                }
                RepPhase::Mid => (self.phase, None),
            },
        }
    }

    /// Reset between sets: zero the count, forget the angle history,
    /// return to the exercise's starting phase
    pub fn reset(&mut self) {
        self.rep_count = 0;
        self.phase = self.kind.initial_phase();
        self.window.clear();
        self.last_feedback = Feedback::GetReady.message();
        self.last_angle = 0.0;
        self.frame_count = 0;
    }

    /// The exercise this engine tracks
    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    /// Active threshold profile (for ROM gauges)
    pub fn thresholds(&self) -> ThresholdProfile {
        self.profile
    }

    /// Current phase
    pub fn phase(&self) -> RepPhase {
        self.phase
    }

    /// Reps counted so far
    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// Frames processed since construction or reset
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Current result without processing a frame
    pub fn current_result(&self) -> FrameResult {
        FrameResult::new(
            self.rep_count,
            self.last_feedback,
            false,
            self.last_angle,
            self.phase,
        )
    }
}

/// Look up a joint by canonical name with confidence gating
///
/// Exact-or-contains matching is deliberate: pose backends prefix keypoint
/// names differently ("left_knee" vs "body_left_knee") and the tolerance
/// costs nothing. A scored joint must clear the confidence gate; an
/// unscored joint is trusted.
fn find_joint(joints: &[JointSample], name: &str) -> Option<Point> {
    let joint = joints.iter().find(|j| j.name == name || j.name.contains(name))?;
    match joint.score {
        Some(score) if score <= MIN_JOINT_CONFIDENCE => None,
        _ => Some(joint.point()),
    }
}

/// Build a synthetic single-limb frame whose joint triple subtends `angle_deg`
///
/// Stands in for a live pose source in the CLI's interactive mode and in
/// tests: the vertex sits mid-frame with one ray along +x and the other
/// rotated by the requested angle.
pub fn synthetic_frame(kind: ExerciseKind, angle_deg: f64) -> Frame {
    let [name_a, name_b, name_c] = kind.profile().joints;
    let b = Point::new(0.5, 0.5);
    let theta = angle_deg.to_radians();

    Frame::new(vec![
        JointSample::with_score(name_a, b.x + 0.4, b.y, 0.9),
        JointSample::with_score(name_b, b.x, b.y, 0.9),
        JointSample::with_score(name_c, b.x + 0.4 * theta.cos(), b.y + 0.4 * theta.sin(), 0.9),
    ])
}

// =============================================================================
// TESTS
// =============================================================================
