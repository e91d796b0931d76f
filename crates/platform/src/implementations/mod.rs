//! Platform-specific implementations

pub mod generic;
pub mod macos;
pub mod os_filesystem;

pub use generic::{ExeSuffixLocator, GenericLocator};
pub use macos::MacOSLocator;
pub use os_filesystem::OsFilesystem;
