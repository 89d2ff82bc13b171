//! Workout history store
//!
//! One JSON file holding every saved session, newest first. Stands in for
//! the app's offline database; the engine itself never touches it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::WorkoutSession;

/// File-backed store for completed workout sessions
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at `dir` (created on first save)
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join("sessions.json"),
        }
    }

    /// Load all saved sessions, newest first
    ///
    /// A missing file is an empty history, not an error.
    pub fn load_sessions(&self) -> io::Result<Vec<WorkoutSession>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        serde_json::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Save a session, replacing any previous version with the same id
    /// and keeping the list newest-first
    pub fn save_session(&self, session: &WorkoutSession) -> io::Result<()> {
        let mut sessions = self.load_sessions()?;
        sessions.retain(|s| s.id != session.id);
        sessions.insert(0, session.clone());
        self.write(&sessions)
    }

    /// Remove a session by id; removing an unknown id is a no-op
    pub fn delete_session(&self, session_id: &str) -> io::Result<()> {
        let mut sessions = self.load_sessions()?;
        sessions.retain(|s| s.id != session_id);
        self.write(&sessions)
    }

    fn write(&self, sessions: &[WorkoutSession]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(sessions)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}

// =============================================================================
// TESTS
// =============================================================================
