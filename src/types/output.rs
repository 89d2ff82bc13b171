//! Per-frame engine output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::RepPhase;

/// Result of processing one pose frame
///
/// Ephemeral: consumed by presentation and audio, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameResult {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Reps counted so far in the active set
    pub rep_count: u32,
    /// Current coaching message (retained across silent frames)
    pub feedback: String,
    /// Did a rep complete on this exact frame?
    pub is_new_rep: bool,
    /// Moving-average joint angle in degrees (0 when the pose is not visible)
    pub smoothed_angle: f64,
    /// Phase of the repetition cycle
    pub phase: RepPhase,
}

impl FrameResult {
    /// Create new result
    pub fn new(
        rep_count: u32,
        feedback: impl Into<String>,
        is_new_rep: bool,
        smoothed_angle: f64,
        phase: RepPhase,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            rep_count,
            feedback: feedback.into(),
            is_new_rep,
            smoothed_angle,
            phase,
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let color = self.phase.color_code();
        let reset = RepPhase::color_reset();
        let emoji = self.phase.emoji();
        let rep_mark = if self.is_new_rep { " ✓" } else { "" };

        format!(
            "{}{} reps={}{} | angle={:.1}° | phase={} | {}{}",
            color, emoji, self.rep_count, rep_mark, self.smoothed_angle, self.phase, self.feedback, reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "reps={} | angle={:.1} | phase={} | rep={} | feedback={}",
            self.rep_count, self.smoothed_angle, self.phase, self.is_new_rep, self.feedback
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parseable_format() {
        let result = FrameResult::new(3, "Up!", true, 171.2, RepPhase::Extended);
        let s = result.to_parseable_string();
        assert!(s.contains("reps=3"));
        assert!(s.contains("phase=EXTENDED"));
        assert!(s.contains("rep=true"));
        assert!(s.contains("feedback=Up!"));
    }

    #[test]
    fn test_json_round_trip() {
        let result = FrameResult::new(0, "Get Ready", false, 0.0, RepPhase::Contracted);
        let json = serde_json::to_string(&result).unwrap();
        let back: FrameResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rep_count, 0);
        assert_eq!(back.phase, RepPhase::Contracted);
    }
}
