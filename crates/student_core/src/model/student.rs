//! Student record model.
//!
//! # Responsibility
//! - Hold one student's fields.
//! - Apply partial in-place updates and render the fixed display line.
//!
//! # Invariants
//! - `id` is never changed after construction.
//! - Empty strings and a zero age in an update mean "keep current value".
//! - No range validation: negative ages are stored as given.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Caller-supplied student identifier.
///
/// Not checked for collisions; duplicates are allowed by the repository.
pub type StudentId = i64;

/// One student's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    pub name: String,
    pub age: i64,
    pub major: String,
}

/// Partial update for a [`Student`].
///
/// `None`, empty strings and an age of `0` all mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub major: Option<String>,
}

impl StudentUpdate {
    /// Returns whether applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        non_blank(self.name.as_deref()).is_none()
            && non_zero(self.age).is_none()
            && non_blank(self.major.as_deref()).is_none()
    }
}

impl Student {
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        age: i64,
        major: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            major: major.into(),
        }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Overwrites each provided, non-empty field in place.
    ///
    /// `Some(0)` counts as absent and keeps the current age.
    pub fn update(&mut self, name: Option<&str>, age: Option<i64>, major: Option<&str>) {
        if let Some(name) = non_blank(name) {
            self.name = name.to_string();
        }
        if let Some(age) = non_zero(age) {
            self.age = age;
        }
        if let Some(major) = non_blank(major) {
            self.major = major.to_string();
        }
    }

    /// Applies a bundled [`StudentUpdate`].
    pub fn apply(&mut self, patch: &StudentUpdate) {
        self.update(patch.name.as_deref(), patch.age, patch.major.as_deref());
    }

    /// Fixed-format line: `ID: {id}, Name: {name}, Age: {age}, Major: {major}`.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, Major: {}",
            self.id, self.name, self.age, self.major
        )
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn non_zero(value: Option<i64>) -> Option<i64> {
    value.filter(|value| *value != 0)
}

#[cfg(test)]
mod tests {
    use super::{Student, StudentUpdate};

    #[test]
    fn display_uses_fixed_format() {
        let student = Student::new(1, "Ann", 20, "CS");
        assert_eq!(student.display(), "ID: 1, Name: Ann, Age: 20, Major: CS");
    }

    #[test]
    fn update_skips_none_and_empty_values() {
        let mut student = Student::new(1, "Ann", 20, "CS");
        student.update(Some(""), None, None);
        assert_eq!(student, Student::new(1, "Ann", 20, "CS"));
    }

    #[test]
    fn update_keeps_age_on_zero_and_accepts_negative() {
        let mut student = Student::new(1, "Ann", 20, "CS");
        student.update(None, Some(0), None);
        assert_eq!(student.age, 20);
        student.update(None, Some(-3), None);
        assert_eq!(student.age, -3);
    }

    #[test]
    fn update_patch_emptiness_ignores_blank_strings() {
        let blank = StudentUpdate {
            name: Some(String::new()),
            age: None,
            major: Some(String::new()),
        };
        assert!(blank.is_empty());

        let zero_age = StudentUpdate {
            age: Some(0),
            ..StudentUpdate::default()
        };
        assert!(zero_age.is_empty());

        let age_only = StudentUpdate {
            age: Some(21),
            ..StudentUpdate::default()
        };
        assert!(!age_only.is_empty());
    }
}
