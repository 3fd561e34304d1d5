//! Deterministic stand-ins for the scheduler and environment boundaries.
//!
//! Used by the crate's own tests and by hosts that want to script a session
//! against a virtual clock.

pub mod environment;
pub mod time;

pub use environment::RecordingEnvironment;
pub use time::ManualScheduler;
