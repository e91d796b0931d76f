//! macOS locator
//!
//! When a script names its interpreter as `#!/opt/runtime/bin/python`
//! the kernel may pass only `python` as the invocation name, and the
//! `PATH` search could then pick a different installation. Asking the
//! OS for the executable path avoids that.

use getpath_errors::PathError;
use getpath_types::is_absolute;

use crate::encoding::decode_path;
use crate::locator::PlatformLocator;

/// macOS implementation of the locator hooks
#[derive(Debug, Default, Clone, Copy)]
pub struct MacOSLocator {
    framework: bool,
}

impl MacOSLocator {
    #[must_use]
    pub fn new() -> Self {
        Self { framework: false }
    }

    /// Locator for a runtime built as a framework bundle
    #[must_use]
    pub fn framework() -> Self {
        Self { framework: true }
    }
}

impl PlatformLocator for MacOSLocator {
    fn name(&self) -> &'static str {
        if self.framework {
            "macos-framework"
        } else {
            "macos"
        }
    }

    fn executable_path(&self) -> Result<Option<String>, PathError> {
        let Ok(exe) = std::env::current_exe() else {
            return Ok(None);
        };
        let exe = decode_path(&exe, "executable path")?;
        Ok(is_absolute(&exe).then_some(exe))
    }

    fn runtime_library_path(&self) -> Result<Option<String>, PathError> {
        if !self.framework {
            return Ok(None);
        }
        loaded_image_path()
    }
}

/// Path of the image (executable or dylib) this code was loaded from.
#[cfg(target_os = "macos")]
#[allow(unsafe_code)]
fn loaded_image_path() -> Result<Option<String>, PathError> {
    use std::ffi::CStr;

    // SAFETY: Dl_info is plain data; dladdr fills it in or leaves it zeroed.
    let mut info: libc::Dl_info = unsafe { std::mem::zeroed() };
    let addr = loaded_image_path as *const libc::c_void;
    // SAFETY: `addr` points into this image and `info` is a valid out pointer.
    let found = unsafe { libc::dladdr(addr, &mut info) };
    if found == 0 || info.dli_fname.is_null() {
        return Ok(None);
    }
    // SAFETY: dladdr returned a NUL-terminated name owned by the loader.
    let name = unsafe { CStr::from_ptr(info.dli_fname) };
    name.to_str()
        .map(|name| Some(name.to_owned()))
        .map_err(|_| PathError::decode("framework location"))
}

#[cfg(not(target_os = "macos"))]
fn loaded_image_path() -> Result<Option<String>, PathError> {
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executable_path_is_absolute() {
        let locator = MacOSLocator::new();
        if let Some(path) = locator.executable_path().unwrap() {
            assert!(is_absolute(&path));
        }
        assert_eq!(locator.runtime_library_path().unwrap(), None);
    }
}
