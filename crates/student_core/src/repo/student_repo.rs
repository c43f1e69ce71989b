//! Student repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide add/remove/lookup/list primitives over the student collection.
//! - Hand out snapshots so callers cannot mutate stored state by accident.
//!
//! # Invariants
//! - `add` never fails and never checks for duplicate ids.
//! - `remove` drops every record with the given id.
//! - `get`/`get_mut` resolve to the first record in insertion order.

use crate::model::student::{Student, StudentId};

/// Repository interface for student records.
///
/// Backends other than [`InMemoryStudentRepository`] can implement this
/// without any change to the service layer.
pub trait StudentRepository {
    fn add(&mut self, student: Student);
    /// Returns how many records were removed.
    fn remove(&mut self, id: StudentId) -> usize;
    fn get(&self, id: StudentId) -> Option<&Student>;
    fn get_mut(&mut self, id: StudentId) -> Option<&mut Student>;
    /// Returns an owned copy of all records in insertion order.
    fn get_all(&self) -> Vec<Student>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed student repository living for one process.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: Vec<Student>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    fn remove(&mut self, id: StudentId) -> usize {
        let before = self.students.len();
        self.students.retain(|student| student.id() != id);
        before - self.students.len()
    }

    fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|student| student.id() == id)
    }

    fn get_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|student| student.id() == id)
    }

    fn get_all(&self) -> Vec<Student> {
        self.students.clone()
    }

    fn len(&self) -> usize {
        self.students.len()
    }
}
