//! # CI Audit Library
//!
//! This library provides the core functionality for the `ci-audit`
//! command-line tool: analyzing a repository's CI setup as a one-shot,
//! synchronous step inside a CI pipeline. It can also be embedded in other
//! tooling that needs the same lookups.
//!
//! ## Quick Example
//!
//! ```
//! use ci_audit::config::CiConfig;
//!
//! let merged = serde_yaml::from_str(
//!     r#"
//! .rules:build-only:
//!   rules:
//!     - if: $CI_PIPELINE_SOURCE == "push"
//! build_job:
//!   extends: .rules:build-only
//!   script: make
//! "#,
//! )
//! .unwrap();
//!
//! let config = CiConfig::from_merged(merged);
//! assert!(config.declared_rules().contains(".rules:build-only"));
//! assert!(config.unused_rules().is_empty());
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration model (`config`)**: loads the root `.gitlab-ci.yml` and
//!   the documents it includes, merges them last-write-wins, and classifies
//!   the result into defaults, anchors, jobs, and rule fragments. Loading is
//!   fail-fast: a broken configuration is an error, never an empty model.
//! - **Git accessors (`git`)**: tracked files, submodule paths, and
//!   executable-bit checks. These are advisory lookups and degrade to empty
//!   results with a logged warning on failure.
//! - **Manifest discovery (`manifest`)**: finds per-directory
//!   `.build-test-rules.yml` files, skipping vendored dependencies.
//! - **Defaults (`defaults`)**: well-known filenames and the repository-root
//!   resolution, computed once at process start and passed explicitly.
//!
//! Everything is single-threaded and blocking; each model instance is
//! independent and immutable after construction.

pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod manifest;

#[cfg(test)]
mod config_proptest;
