//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `deploymap` library. It uses the `thiserror` library to create a single
//! `Error` enum that covers all anticipated failure modes, providing clear
//! and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur during diff-to-cluster resolution. Each variant corresponds to a
//!   specific type of error and includes contextual information to aid in
//!   debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library to simplify function signatures.
//!
//! Resolution is all-or-nothing: any error that reaches the caller aborts the
//! whole call with no partial result. The only tolerated failure is a file
//! that matched the cheap cluster-config marker but fails full YAML parsing;
//! discovery treats that as "not a cluster config" and keeps walking.

use thiserror::Error;

/// Main error type for deploymap operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing a cluster configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An error occurred with a path-related operation, typically a file
    /// that does not lie under the root it was expected to be relative to.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A directory traversal error, wrapped from `walkdir::Error`.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
