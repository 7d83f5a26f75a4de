//! # Error Handling
//!
//! Centralized error handling for `ci-audit`, built on `thiserror`.
//!
//! Two error policies coexist in this crate:
//!
//! - **Fail-fast**: loading the root CI configuration and its includes has no
//!   fallback. A missing or malformed file propagates as
//!   [`Error::ConfigLoad`], because silently treating it as empty would make
//!   all derived rule-consistency analysis meaningless and could mask a real
//!   CI configuration bug.
//!
//! - **Best-effort**: git queries (tracked files, submodule list) are
//!   advisory lookups. Their public accessors catch [`Error::GitCommand`]
//!   internally, log a warning, and return an empty result, since an empty
//!   answer is a safe default for the calling CI logic.
//!
//! The [`Result`] alias is used throughout the library to keep signatures
//! short.

use thiserror::Error;

/// Main error type for ci-audit operations
#[derive(Error, Debug)]
pub enum Error {
    /// The root CI configuration document or one of its includes could not
    /// be loaded.
    ///
    /// Covers a missing file, malformed YAML, a non-mapping document, and a
    /// missing or invalid `include` field. No partial configuration model is
    /// ever produced when this occurs.
    #[error("CI configuration load error for {path}: {message}")]
    ConfigLoad { path: String, message: String },

    /// A git invocation failed to spawn or exited non-zero.
    #[error("Git command failed: {command} - {stderr}")]
    GitCommand { command: String, stderr: String },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
