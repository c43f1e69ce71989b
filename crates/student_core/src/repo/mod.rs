//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract used by the service layer.
//! - Keep collection details out of service orchestration.
//!
//! # Invariants
//! - Insertion order is preserved.
//! - Ids are not unique; lookups resolve to the first match.

pub mod student_repo;
