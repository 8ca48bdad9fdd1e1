//! Increment Version - bump the minor component of a `VERSION` file
//!
//! The tool reads the version recorded in a plain text file (`0.1.0` when the
//! file does not exist yet), bumps it, writes it back and prints the new
//! version on stdout for the calling pipeline.
//!
//! # Examples
//!
//! ## Bumping a version string
//!
//! ```
//! use increment_version::commands::bump_version::increment_minor;
//! use semver::Version;
//!
//! let new = increment_minor("1.4.9").unwrap();
//! assert_eq!(new, Version::parse("1.5.0").unwrap());
//! ```
//!
//! ## Stepping a stored version
//!
//! ```
//! use increment_version::{
//!     commands::bump_version::{step, StepOptions},
//!     utils::version_file::MemoryStore,
//! };
//!
//! let mut store = MemoryStore::new(None);
//! let mut out = Vec::new();
//! let new = step(&mut store, &StepOptions::default(), &mut out).unwrap();
//!
//! assert_eq!(new.to_string(), "0.2.0");
//! assert_eq!(store.content(), Some("0.2.0"));
//! assert_eq!(out, b"0.2.0\n");
//! ```

pub mod commands;
pub mod error;
pub mod utils;

pub use commands::bump_version;
pub use error::StepError;

pub use semver::Version;

pub type Result<T> = anyhow::Result<T>;
