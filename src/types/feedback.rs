//! Coaching feedback vocabulary

use serde::{Deserialize, Serialize};

/// Every message the engine can produce for the athlete
///
/// The message text is the contract with the speech/audio sink, so it is
/// centralized here rather than scattered through the transition logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    /// No keypoints in the frame at all
    NoPose,
    /// A required joint is missing or below the confidence gate
    JointsHidden,
    /// Neutral message when the engine is first constructed
    GetIntoPosition,
    /// Neutral message after a reset between sets
    GetReady,
    /// Standard family: contracted threshold crossed, bottom of the movement
    Hold,
    /// Standard family: inside the proximity band above the contracted threshold
    GoLower,
    /// Standard family: rep counted on return to extension
    Up,
    /// Standard family: inside the proximity band below the extended threshold
    ExtendFully,
    /// Inverted family: extended threshold crossed
    GoodExtension,
    /// Inverted family: rep counted on return to contraction
    RepComplete,
}

impl Feedback {
    /// The exact message spoken/shown to the athlete
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::NoPose => "No pose detected",
            Feedback::JointsHidden => "Adjust Camera - Joints Hidden",
            Feedback::GetIntoPosition => "Get into position",
            Feedback::GetReady => "Get Ready",
            Feedback::Hold => "Hold...",
            Feedback::GoLower => "Go lower...",
            Feedback::Up => "Up!",
            Feedback::ExtendFully => "Extend fully...",
            Feedback::GoodExtension => "Good extension!",
            Feedback::RepComplete => "Rep complete!",
        }
    }

    /// Does this message mark a counted rep?
    pub fn is_rep(&self) -> bool {
        matches!(self, Feedback::Up | Feedback::RepComplete)
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
