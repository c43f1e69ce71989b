//! Core domain logic for the student records manager.
//! This crate is the single source of truth for record invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::student::{Student, StudentId, StudentUpdate};
pub use repo::student_repo::{InMemoryStudentRepository, StudentRepository};
pub use service::student_service::{MutationOutcome, StudentService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
