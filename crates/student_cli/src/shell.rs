//! Interactive menu shell.
//!
//! # Responsibility
//! - Print the menu, collect operator input and call the service.
//! - Report accurate outcomes for lookups that miss.
//!
//! # Invariants
//! - Invalid numeric input re-prompts the same field; the session survives.
//! - End of input ends the session cleanly.
//! - Only menu text is written to the output stream; diagnostics go to the log.

use crate::error::{InputError, ShellResult};
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use student_core::{MutationOutcome, StudentId, StudentRepository, StudentService, StudentUpdate};

const MENU: &str = "\nStudent Management System
1. Add Student
2. Delete Student
3. Update Student Information
4. View All Students
5. Exit";

const FIELD_ID: &str = "student ID";
const FIELD_AGE: &str = "age";

enum Step {
    Continue,
    Quit,
}

/// Text-menu front end over one service.
pub struct Shell<'svc, R: StudentRepository, I: BufRead, O: Write> {
    service: &'svc mut StudentService<R>,
    input: I,
    output: O,
}

impl<'svc, R: StudentRepository, I: BufRead, O: Write> Shell<'svc, R, I, O> {
    pub fn new(service: &'svc mut StudentService<R>, input: I, output: O) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs the menu loop until Exit is chosen or input ends.
    pub fn run(&mut self) -> ShellResult<()> {
        info!("event=shell_start module=shell status=ok");
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                info!("event=shell_stop module=shell status=ok reason=eof");
                return Ok(());
            };
            debug!("event=menu_choice module=shell choice={choice:?}");

            let step = match choice.as_str() {
                "1" => self.add_student()?,
                "2" => self.delete_student()?,
                "3" => self.update_student()?,
                "4" => self.view_all_students()?,
                "5" => {
                    writeln!(self.output, "Exiting...")?;
                    Step::Quit
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Step::Continue
                }
            };

            if let Step::Quit = step {
                info!("event=shell_stop module=shell status=ok reason=exit_or_eof");
                self.output.flush()?;
                return Ok(());
            }
        }
    }

    fn add_student(&mut self) -> ShellResult<Step> {
        let Some(id) = self.prompt_number("Enter student ID: ", FIELD_ID)? else {
            return Ok(Step::Quit);
        };
        let Some(name) = self.prompt("Enter student name: ")? else {
            return Ok(Step::Quit);
        };
        let Some(age) = self.prompt_number("Enter student age: ", FIELD_AGE)? else {
            return Ok(Step::Quit);
        };
        let Some(major) = self.prompt("Enter student major: ")? else {
            return Ok(Step::Quit);
        };

        self.service.add(id, name, age, major);
        writeln!(self.output, "Student added successfully.")?;
        Ok(Step::Continue)
    }

    fn delete_student(&mut self) -> ShellResult<Step> {
        let Some(id) = self.prompt_number("Enter student ID to delete: ", FIELD_ID)? else {
            return Ok(Step::Quit);
        };

        match self.service.delete(id) {
            MutationOutcome::Applied { .. } => {
                writeln!(self.output, "Student deleted successfully.")?
            }
            MutationOutcome::NotFound => self.report_missing(id)?,
        }
        Ok(Step::Continue)
    }

    fn update_student(&mut self) -> ShellResult<Step> {
        let Some(id) = self.prompt_number("Enter student ID to update: ", FIELD_ID)? else {
            return Ok(Step::Quit);
        };
        let Some(name) = self.prompt("Enter new name (or leave blank): ")? else {
            return Ok(Step::Quit);
        };
        let age = loop {
            let Some(raw) = self.prompt("Enter new age (or leave blank): ")? else {
                return Ok(Step::Quit);
            };
            match parse_optional_number(FIELD_AGE, &raw) {
                Ok(age) => break age,
                Err(err) => self.report_input_error(&err)?,
            }
        };
        let Some(major) = self.prompt("Enter new major (or leave blank): ")? else {
            return Ok(Step::Quit);
        };

        let patch = StudentUpdate {
            name: Some(name).filter(|value| !value.is_empty()),
            age,
            major: Some(major).filter(|value| !value.is_empty()),
        };
        match self.service.update(id, &patch) {
            MutationOutcome::Applied { .. } => {
                writeln!(self.output, "Student information updated successfully.")?
            }
            MutationOutcome::NotFound => self.report_missing(id)?,
        }
        Ok(Step::Continue)
    }

    fn view_all_students(&mut self) -> ShellResult<Step> {
        let students = self.service.get_all();
        if students.is_empty() {
            writeln!(self.output, "No students found.")?;
        }
        for student in &students {
            writeln!(self.output, "{}", student.display())?;
        }
        Ok(Step::Continue)
    }

    fn report_missing(&mut self, id: StudentId) -> ShellResult<()> {
        writeln!(self.output, "No student found with ID {id}.")?;
        Ok(())
    }

    fn report_input_error(&mut self, err: &InputError) -> ShellResult<()> {
        let InputError::InvalidNumber { field, .. } = err;
        warn!("event=input_rejected module=shell status=invalid_number field={field:?}");
        writeln!(self.output, "{err}")?;
        Ok(())
    }

    /// Prompts until `field` parses as an integer. `None` on end of input.
    fn prompt_number(&mut self, prompt: &str, field: &'static str) -> ShellResult<Option<i64>> {
        loop {
            let Some(raw) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match parse_number(field, &raw) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.report_input_error(&err)?,
            }
        }
    }

    /// Writes `prompt` and reads one trimmed line. `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> ShellResult<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Parses a trimmed integer entry for `field`.
pub fn parse_number(field: &'static str, raw: &str) -> Result<i64, InputError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidNumber {
            field,
            value: raw.trim().to_string(),
        })
}

/// Like [`parse_number`], but blank input means "no value".
pub fn parse_optional_number(field: &'static str, raw: &str) -> Result<Option<i64>, InputError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_number(field, raw).map(Some)
}

#[cfg(test)]
mod tests {
    use super::{parse_number, parse_optional_number};
    use crate::error::InputError;

    #[test]
    fn parse_number_trims_and_accepts_negative() {
        assert_eq!(parse_number("age", " -4 "), Ok(-4));
    }

    #[test]
    fn parse_number_rejects_non_integer() {
        let err = parse_number("student ID", "12a").unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidNumber {
                field: "student ID",
                value: "12a".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Invalid student ID: '12a' is not a whole number."
        );
    }

    #[test]
    fn parse_optional_number_treats_blank_as_absent() {
        assert_eq!(parse_optional_number("age", "   "), Ok(None));
        assert_eq!(parse_optional_number("age", "22"), Ok(Some(22)));
        assert!(parse_optional_number("age", "x").is_err());
    }
}
