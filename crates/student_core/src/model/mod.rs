//! Domain model for student records.
//!
//! # Responsibility
//! - Define the record shape shared by repository, service and shell layers.
//!
//! # Invariants
//! - A record's `id` is fixed at construction and never rewritten.
//! - Field updates only overwrite values that are actually provided.

pub mod student;
