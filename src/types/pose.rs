//! Pose input types
//!
//! Produced fresh every frame by whatever pose source drives the engine
//! (live model, recorded fixture, synthetic generator). The engine is
//! coordinate-space agnostic: it only ever computes angles.

use serde::{Deserialize, Serialize};

/// A 2D position in the pose source's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A named keypoint estimate with optional confidence score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JointSample {
    /// Keypoint name; vendor prefixes are tolerated by the engine's lookup
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Detection confidence, 0.0-1.0; absent means the source reports none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl JointSample {
    /// Create a sample without a confidence score
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            score: None,
        }
    }

    /// Create a sample with a confidence score
    pub fn with_score(name: impl Into<String>, x: f64, y: f64, score: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            score: Some(score),
        }
    }

    /// Position of this sample
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One recorded frame of pose input, as stored in JSONL replay files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    pub joints: Vec<JointSample>,
}

impl Frame {
    pub fn new(joints: Vec<JointSample>) -> Self {
        Self { joints }
    }
}

// =============================================================================
// TESTS
// =============================================================================
