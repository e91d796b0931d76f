#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for getpath
//!
//! This crate provides the bounded path buffer the searches operate on,
//! the search outcome tags, and the output record of the computation.

pub mod outcome;
pub mod path;
pub mod pathconfig;

// Re-export commonly used types
pub use outcome::{ExecutableSource, Located, SearchOutcome};
pub use path::{is_absolute, BoundedPath, DELIM, MAX_PATH_LEN, SEP};
pub use pathconfig::PathConfig;
