//! Interactive front end for the student records manager.

pub mod error;
pub mod shell;

pub use error::{InputError, ShellError, ShellResult};
pub use shell::Shell;
