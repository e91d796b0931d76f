#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Host capabilities used by runtime path discovery.
//!
//! This crate provides the seams between the search algorithm and the
//! operating system:
//! - Filesystem probes (file, executable, directory, symlink, bounded reads)
//! - Locator hooks (OS-reported executable path, executable suffix,
//!   framework library location)
//! - Decoding of native paths into the text representation used throughout
//!
//! Tests substitute their own [`FilesystemProbe`] and [`PlatformLocator`]
//! to drive the searches against a synthetic tree.

pub mod core;
pub mod encoding;
pub mod filesystem;
pub mod implementations;
pub mod locator;

pub use core::Platform;
pub use implementations::{ExeSuffixLocator, GenericLocator, MacOSLocator, OsFilesystem};

/// Re-export commonly used traits
pub use filesystem::FilesystemProbe;
pub use locator::PlatformLocator;
