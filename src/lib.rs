//! Aurafit: rep-counting engine for the Aura fitness tracker
//!
//! Pipeline: pose frame → joint lookup → angle geometry → smoothing → rep state machine

pub mod core;
pub mod types;

// =============================================================================
// TUNING CONSTANTS
// =============================================================================

/// Minimum keypoint confidence; a scored joint at or below this is treated as absent
pub const MIN_JOINT_CONFIDENCE: f64 = 0.3;

/// Moving-average window over raw joint angles (frames)
/// 5 frames at typical camera rates is well under 200 ms of lag
pub const SMOOTHING_WINDOW: usize = 5;

/// Width of the proximity-coaching band inside an uncrossed threshold (degrees)
pub const PROXIMITY_BAND_DEG: f64 = 20.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
