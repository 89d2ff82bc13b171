//! Core types for Aurafit

mod exercise;
mod feedback;
mod output;
mod pose;
mod session;
mod state;

pub use exercise::{ExerciseKind, MovementFamily, ThresholdProfile};
pub use feedback::Feedback;
pub use output::FrameResult;
pub use pose::{Frame, JointSample, Point};
pub use session::{SetLog, WorkoutExercise, WorkoutSession};
pub use state::RepPhase;
