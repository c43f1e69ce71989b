//! Student use-case service.
//!
//! # Responsibility
//! - Provide add/delete/update/list entry points for the shell.
//! - Construct and locate records on behalf of callers.
//!
//! # Invariants
//! - Service layer remains storage-agnostic.
//! - Lookup misses are reported as `MutationOutcome::NotFound`, never as
//!   silent success.
//! - Log lines carry ids and counts only.

use crate::model::student::{Student, StudentId, StudentUpdate};
use crate::repo::student_repo::StudentRepository;
use log::{debug, info};

/// Result of a delete/update call against a possibly absent id.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// At least one record matched and was changed or removed.
    Applied { affected: usize },
    /// No record carried the requested id; nothing changed.
    NotFound,
}

impl MutationOutcome {
    pub fn is_found(self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Use-case service wrapper for student CRUD operations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds a record and appends it. Duplicate ids are accepted.
    pub fn add(
        &mut self,
        id: StudentId,
        name: impl Into<String>,
        age: i64,
        major: impl Into<String>,
    ) {
        self.repo.add(Student::new(id, name, age, major));
        info!(
            "event=student_add module=service status=ok id={} total={}",
            id,
            self.repo.len()
        );
    }

    /// Removes every record with `id`.
    pub fn delete(&mut self, id: StudentId) -> MutationOutcome {
        let removed = self.repo.remove(id);
        if removed == 0 {
            info!("event=student_delete module=service status=not_found id={id}");
            return MutationOutcome::NotFound;
        }
        info!("event=student_delete module=service status=ok id={id} removed={removed}");
        MutationOutcome::Applied { affected: removed }
    }

    /// Applies `patch` to the first record with `id`.
    ///
    /// An empty patch on an existing record still reports `Applied`.
    pub fn update(&mut self, id: StudentId, patch: &StudentUpdate) -> MutationOutcome {
        let Some(student) = self.repo.get_mut(id) else {
            info!("event=student_update module=service status=not_found id={id}");
            return MutationOutcome::NotFound;
        };
        student.apply(patch);
        info!(
            "event=student_update module=service status=ok id={} empty_patch={}",
            id,
            patch.is_empty()
        );
        MutationOutcome::Applied { affected: 1 }
    }

    /// Read-only lookup of the first record with `id`.
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.repo.get(id)
    }

    /// Snapshot of all records in insertion order.
    pub fn get_all(&self) -> Vec<Student> {
        let students = self.repo.get_all();
        debug!(
            "event=student_list module=service status=ok count={}",
            students.len()
        );
        students
    }
}
