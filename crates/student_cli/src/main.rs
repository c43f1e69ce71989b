//! `student-records` entry point.
//!
//! # Responsibility
//! - Parse flags, start file logging and run the shell on stdin/stdout.
//! - Map shell failures to a non-zero exit status.

use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use student_cli::Shell;
use student_core::{
    core_version, default_log_level, init_logging, logging_status, InMemoryStudentRepository,
    LogLevel, StudentService,
};

/// In-memory student record manager with a text menu.
#[derive(Parser, Debug)]
#[command(name = "student-records")]
#[command(version)]
struct Args {
    /// trace|debug|info|warn|error (default: debug in debug builds, info otherwise)
    #[arg(long, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Absolute directory for rolling log files
    #[arg(long, value_name = "ABSOLUTE_PATH")]
    log_dir: Option<PathBuf>,

    /// Disable file logging
    #[arg(long)]
    no_log: bool,
}

impl Args {
    /// Level and directory for file logging, or `None` when disabled.
    fn log_target(&self) -> Option<(LogLevel, PathBuf)> {
        if self.no_log {
            return None;
        }
        let level = self.log_level.unwrap_or_else(default_log_level);
        let log_dir = self
            .log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("student-records").join("logs"));
        Some((level, log_dir))
    }
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    value.parse::<LogLevel>().map_err(|err| err.to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some((level, log_dir)) = args.log_target() {
        if let Err(err) = init_logging(level, &log_dir) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }
    if let Some((level, log_dir)) = logging_status() {
        info!(
            "event=cli_start module=cli status=ok version={} level={} log_dir={}",
            core_version(),
            level,
            log_dir.display()
        );
    }

    let mut service = StudentService::new(InMemoryStudentRepository::new());
    let stdin = std::io::stdin();
    let mut shell = Shell::new(&mut service, stdin.lock(), std::io::stdout());

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=shell_stop module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
