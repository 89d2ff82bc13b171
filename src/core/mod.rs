//! Core modules for Aurafit

pub mod api;
pub mod engine;
pub mod geometry;
pub mod smoothing;
pub mod storage;

pub use api::{create_router, run_server};
pub use engine::RepEngine;
pub use geometry::{angle_at, midpoint};
pub use smoothing::AngleWindow;
pub use storage::SessionStore;
