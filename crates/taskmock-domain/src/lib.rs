//! taskmock-domain: Entity model and session-scoped services
//!
//! This crate provides the domain layer for taskmock, including:
//! - Task and List entity definitions
//! - The shared identifier generator
//! - The session clock used for `touched` timestamps

pub mod clock;
pub mod id;
pub mod model;

// Re-export commonly used types
pub use clock::SessionClock;
pub use id::IdGenerator;
pub use model::{List, Task};
