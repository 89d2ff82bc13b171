//! Angle smoothing window
//!
//! Joint estimates are noisy frame-to-frame; a short moving average keeps
//! single-frame jitter from crossing a rep threshold.

use std::collections::VecDeque;

use crate::SMOOTHING_WINDOW;

/// Fixed-capacity FIFO window over raw angle samples
#[derive(Debug)]
pub struct AngleWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl Default for AngleWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl AngleWindow {
    /// Create a window with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(SMOOTHING_WINDOW)
    }

    /// Create a window with a custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::new(),
            capacity,
        }
    }

    /// Append a raw angle, evict the oldest sample past capacity, and
    /// return the mean of everything currently held
    ///
    /// The first push after a `clear()` returns the raw angle unchanged.
    pub fn push(&mut self, angle: f64) -> f64 {
        self.samples.push_back(angle);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
        let sum: f64 = self.samples.iter().sum();
        sum / self.samples.len() as f64
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop all samples; no smoothing across a reset boundary
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================
