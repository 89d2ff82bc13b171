//! Workout session records for the history store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ExerciseKind;

/// One completed and logged set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLog {
    pub id: String,
    pub reps: u32,
    pub weight: f64,
    pub timestamp: DateTime<Utc>,
}

impl SetLog {
    pub fn new(id: impl Into<String>, reps: u32, weight: f64) -> Self {
        Self {
            id: id.into(),
            reps,
            weight,
            timestamp: Utc::now(),
        }
    }
}

/// All sets of one exercise within a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub exercise: ExerciseKind,
    pub sets: Vec<SetLog>,
}

/// A full workout session, persisted by the history store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub id: String,
    pub name: String,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    pub exercises: Vec<WorkoutExercise>,
}

impl WorkoutSession {
    /// Start a fresh session named after today's date
    pub fn start(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: format!("Workout {}", now.format("%Y-%m-%d")),
            start_time: now,
            end_time: None,
            exercises: Vec::new(),
        }
    }

    /// Append a set, grouping consecutive sets of the same exercise
    pub fn log_set(&mut self, exercise: ExerciseKind, set: SetLog) {
        match self.exercises.last_mut() {
            Some(entry) if entry.exercise == exercise => entry.sets.push(set),
            _ => self.exercises.push(WorkoutExercise {
                exercise,
                sets: vec![set],
            }),
        }
    }

    /// Total reps across all exercises
    pub fn total_reps(&self) -> u32 {
        self.exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .map(|s| s.reps)
            .sum()
    }

    /// Mark the session finished
    pub fn finish(&mut self) {
        self.end_time = Some(Utc::now());
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_set_groups_same_exercise() {
        let mut session = WorkoutSession::start("s1");
        session.log_set(ExerciseKind::Squat, SetLog::new("a", 10, 0.0));
        session.log_set(ExerciseKind::Squat, SetLog::new("b", 8, 0.0));
        session.log_set(ExerciseKind::PushUp, SetLog::new("c", 12, 0.0));

        assert_eq!(session.exercises.len(), 2);
        assert_eq!(session.exercises[0].sets.len(), 2);
        assert_eq!(session.total_reps(), 30);
    }

    #[test]
    fn test_finish_sets_end_time() {
        let mut session = WorkoutSession::start("s1");
        assert!(session.end_time.is_none());
        session.finish();
        assert!(session.end_time.is_some());
    }
}
