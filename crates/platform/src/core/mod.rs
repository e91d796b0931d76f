//! Bundles the filesystem probes with the locator hooks of one platform

use crate::filesystem::FilesystemProbe;
use crate::locator::PlatformLocator;

/// Everything the discovery algorithm needs from the host
pub struct Platform {
    filesystem: Box<dyn FilesystemProbe>,
    locator: Box<dyn PlatformLocator>,
}

impl Platform {
    /// Create a platform from explicit implementations
    #[must_use]
    pub fn new(filesystem: Box<dyn FilesystemProbe>, locator: Box<dyn PlatformLocator>) -> Self {
        Self {
            filesystem,
            locator,
        }
    }

    /// The platform this binary was compiled for
    #[must_use]
    pub fn current() -> Self {
        use crate::implementations::OsFilesystem;

        Self::new(Box::new(OsFilesystem::new()), current_locator())
    }

    /// Access filesystem probes
    #[must_use]
    pub fn filesystem(&self) -> &dyn FilesystemProbe {
        &*self.filesystem
    }

    /// Access locator hooks
    #[must_use]
    pub fn locator(&self) -> &dyn PlatformLocator {
        &*self.locator
    }
}

impl std::fmt::Debug for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Platform")
            .field("locator", &self.locator.name())
            .finish_non_exhaustive()
    }
}

#[cfg(all(target_os = "macos", feature = "framework"))]
fn current_locator() -> Box<dyn PlatformLocator> {
    Box::new(crate::implementations::MacOSLocator::framework())
}

#[cfg(all(target_os = "macos", not(feature = "framework")))]
fn current_locator() -> Box<dyn PlatformLocator> {
    Box::new(crate::implementations::MacOSLocator::new())
}

#[cfg(any(target_os = "cygwin", windows))]
fn current_locator() -> Box<dyn PlatformLocator> {
    Box::new(crate::implementations::ExeSuffixLocator::new())
}

#[cfg(not(any(target_os = "macos", target_os = "cygwin", windows)))]
fn current_locator() -> Box<dyn PlatformLocator> {
    Box::new(crate::implementations::GenericLocator::new())
}
