//! Platforms without any locator hooks (Linux and other Unix systems)

use crate::locator::PlatformLocator;

/// Relies entirely on the invocation name and `PATH`
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericLocator;

impl GenericLocator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PlatformLocator for GenericLocator {
    fn name(&self) -> &'static str {
        "generic"
    }
}

/// Cygwin and MinGW style platforms where executables carry `.exe`
#[derive(Debug, Default, Clone, Copy)]
pub struct ExeSuffixLocator;

impl ExeSuffixLocator {
    const SUFFIX: &'static str = ".exe";

    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PlatformLocator for ExeSuffixLocator {
    fn name(&self) -> &'static str {
        "exe-suffix"
    }

    fn executable_suffix(&self) -> Option<&'static str> {
        Some(Self::SUFFIX)
    }
}
