//! Rep phase definitions

use serde::{Deserialize, Serialize};

/// Phase of the tracked limb within a repetition cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepPhase {
    /// Joint angle above the extended threshold (limb near straight)
    Extended,
    /// Joint angle below the contracted threshold (limb bent)
    Contracted,
    /// Reserved. Present in the vocabulary but never produced by the
    /// current transition logic; kept for forward compatibility.
    Mid,
}

impl RepPhase {
    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            RepPhase::Extended => "\x1b[32m",   // Green
            RepPhase::Contracted => "\x1b[33m", // Orange/Yellow
            RepPhase::Mid => "\x1b[90m",        // Gray
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get emoji for phase
    pub fn emoji(&self) -> &'static str {
        match self {
            RepPhase::Extended => "⬆",
            RepPhase::Contracted => "⬇",
            RepPhase::Mid => "↔",
        }
    }
}

impl std::fmt::Display for RepPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RepPhase::Extended => "EXTENDED",
            RepPhase::Contracted => "CONTRACTED",
            RepPhase::Mid => "MID",
        };
        write!(f, "{}", name)
    }
}
