//! CLI argument definitions for `qrate`

use clap::{builder::BoolishValueParser, value_parser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use qrate::config::ConfigOverrides;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts
/// to lowercase strings for the tracing filter and config storage.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `endpoint`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ReviewTarget {
    /// Review a course.
    Course {
        /// Course code (e.g. "COMP 102")
        #[arg(long = "code", value_name = "CODE")]
        course_code: String,

        /// Full course name, sent along for display
        #[arg(long = "course-name", value_name = "NAME", default_value = "")]
        course_name: String,

        /// Instructor who taught the offering
        #[arg(long, value_name = "NAME")]
        instructor: String,

        /// Academic term (e.g. "Fall 2024", "Winter 2025", "Summer 2025")
        #[arg(long, value_name = "TERM")]
        term: String,

        /// Overall rating
        #[arg(long, value_name = "1-5", value_parser = value_parser!(u8).range(1..=5), default_value_t = 4)]
        overall: u8,

        /// Difficulty rating
        #[arg(long, value_name = "1-5", value_parser = value_parser!(u8).range(1..=5), default_value_t = 3)]
        difficulty: u8,

        /// Usefulness rating
        #[arg(long, value_name = "1-5", value_parser = value_parser!(u8).range(1..=5), default_value_t = 4)]
        usefulness: u8,

        /// Workload rating
        #[arg(long, value_name = "1-5", value_parser = value_parser!(u8).range(1..=5), default_value_t = 3)]
        workload: u8,

        /// Teaching-quality rating
        #[arg(long, value_name = "1-5", value_parser = value_parser!(u8).range(1..=5), default_value_t = 4)]
        teaching: u8,

        /// Review text (at least 50 characters)
        #[arg(long, value_name = "TEXT")]
        comment: String,
    },
    /// Review a professor.
    Professor {
        /// Professor's display name (e.g. "Dr. Sarah Johnson")
        #[arg(long, value_name = "NAME")]
        name: String,

        /// Department the professor teaches in
        #[arg(long, value_name = "DEPT")]
        department: String,

        /// Course the review refers to (optional)
        #[arg(long = "code", value_name = "CODE")]
        course_code: Option<String>,

        /// Academic term (e.g. "Fall 2024", "Winter 2025", "Summer 2025")
        #[arg(long, value_name = "TERM")]
        term: String,

        /// Overall rating
        #[arg(long, value_name = "1-5", value_parser = value_parser!(u8).range(1..=5), default_value_t = 4)]
        overall: u8,

        /// Difficulty rating
        #[arg(long, value_name = "1-5", value_parser = value_parser!(u8).range(1..=5), default_value_t = 3)]
        difficulty: u8,

        /// Helpfulness rating
        #[arg(long, value_name = "1-5", value_parser = value_parser!(u8).range(1..=5), default_value_t = 4)]
        helpfulness: u8,

        /// Clarity rating
        #[arg(long, value_name = "1-5", value_parser = value_parser!(u8).range(1..=5), default_value_t = 4)]
        clarity: u8,

        /// Would you take this professor again? (yes/no)
        #[arg(long = "would-take-again", value_name = "YES|NO", value_parser = BoolishValueParser::new(), action = clap::ArgAction::Set, default_value = "true")]
        would_take_again: bool,

        /// Review text (at least 50 characters)
        #[arg(long, value_name = "TEXT")]
        comment: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Sign in with an institutional email.
    Login {
        /// Institutional email address (...@queensu.ca)
        #[arg(long, value_name = "EMAIL")]
        email: String,
        /// Account password
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// Create an account and sign in.
    Register {
        /// Institutional email address (...@queensu.ca)
        #[arg(long, value_name = "EMAIL")]
        email: String,
        /// Account password
        #[arg(long, value_name = "PASSWORD")]
        password: String,
        /// Repeat the password; registration fails on mismatch
        #[arg(long, value_name = "PASSWORD")]
        confirm: Option<String>,
    },
    /// Sign out of the current session (requires confirmation).
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Browse courses with optional search and filters.
    Courses {
        /// Match against course code, name or instructor
        #[arg(short, long, value_name = "TERM", default_value = "")]
        search: String,
        /// Keep only one department ("all" keeps everything)
        #[arg(short, long, value_name = "DEPT")]
        department: Option<String>,
        /// Keep only well-rated entries: 2+, 3+ or 4+ ("all" keeps everything)
        #[arg(short, long, value_name = "FLOOR")]
        rating: Option<String>,
    },
    /// Browse professors with optional search and filters.
    Professors {
        /// Match against name, department or taught courses
        #[arg(short, long, value_name = "TERM", default_value = "")]
        search: String,
        /// Keep only one department ("all" keeps everything)
        #[arg(short, long, value_name = "DEPT")]
        department: Option<String>,
        /// Keep only well-rated entries: 2+, 3+ or 4+ ("all" keeps everything)
        #[arg(short, long, value_name = "FLOOR")]
        rating: Option<String>,
    },
    /// Show one course with its ratings and review history.
    Course {
        /// Course identifier as used by the backend
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Show one professor's reviews, aggregated client-side.
    Professor {
        /// Professor's display name (e.g. "Dr. Sarah Johnson")
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Submit a course or professor review (requires sign-in).
    Review {
        #[command(subcommand)]
        target: ReviewTarget,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "qrate",
    about = "qRate command-line client",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override the backend endpoint for this run
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the session file path for this run
    #[arg(long = "session-file", value_name = "PATH")]
    pub session_file: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where
    /// `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.log_level.map(|lvl| lvl.to_string()),
            file: self
                .log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: if self.verbose { Some(true) } else { None },
            endpoint: self.endpoint.clone(),
            session_file: self
                .session_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
