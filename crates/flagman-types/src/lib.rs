//! Foundation types for flagman.
//!
//! This crate provides the manifest, flag, and change-record types shared by
//! the diff engine and the command-line tool.
//!
//! # Key Types
//!
//! - [`Manifest`] -- Flag definitions keyed by flag name
//! - [`FlagDefinition`] -- One flag's JSON-like definition
//! - [`FlagType`] -- The five manifest flag value types
//! - [`Change`] / [`ChangeKind`] -- Flag-level add/remove/change records

pub mod change;
pub mod error;
pub mod flag;
pub mod manifest;

pub use change::{flag_path, Change, ChangeKind, FLAGS_PREFIX};
pub use error::TypeError;
pub use flag::{FlagDefinition, FlagType};
pub use manifest::Manifest;
