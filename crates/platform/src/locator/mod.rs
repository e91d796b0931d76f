//! Platform specific hooks of the executable locator

use getpath_errors::PathError;

/// Capabilities that differ between operating systems and build flavours.
///
/// Every hook has a neutral default so an implementation only overrides
/// what its platform actually provides.
pub trait PlatformLocator: Send + Sync {
    /// Short identifier for logging.
    fn name(&self) -> &'static str;

    /// The executable path as reported by the operating system.
    ///
    /// Only absolute answers are returned; anything else is `None` so the
    /// caller falls back to searching `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Decode`] if the reported path is not valid text.
    fn executable_path(&self) -> Result<Option<String>, PathError> {
        Ok(None)
    }

    /// Suffix executables must carry (`.exe`), if any.
    fn executable_suffix(&self) -> Option<&'static str> {
        None
    }

    /// Location of the shared runtime library when the runtime is loaded
    /// from a framework bundle.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Decode`] if the reported path is not valid text.
    fn runtime_library_path(&self) -> Result<Option<String>, PathError> {
        Ok(None)
    }
}
