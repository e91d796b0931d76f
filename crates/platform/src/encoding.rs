//! Conversion from native text to the internal path representation

use getpath_errors::PathError;
use std::ffi::OsStr;
use std::path::Path;

/// Convert an OS string, naming `what` in the error.
///
/// # Errors
///
/// Returns [`PathError::Decode`] if the text is not valid Unicode.
pub fn decode_os(text: &OsStr, what: &str) -> Result<String, PathError> {
    text.to_str()
        .map(str::to_owned)
        .ok_or_else(|| PathError::decode(what))
}

/// Convert a native path, naming `what` in the error.
///
/// # Errors
///
/// Returns [`PathError::Decode`] if the path is not valid Unicode.
pub fn decode_path(path: &Path, what: &str) -> Result<String, PathError> {
    decode_os(path.as_os_str(), what)
}

/// Convert raw file contents, naming `what` in the error.
///
/// # Errors
///
/// Returns [`PathError::Decode`] if the bytes are not valid UTF-8.
pub fn decode_bytes(bytes: &[u8], what: &str) -> Result<String, PathError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| PathError::decode(what))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bytes() {
        assert_eq!(decode_bytes(b"build/lib", "marker").unwrap(), "build/lib");
        let err = decode_bytes(b"\xff", "pybuilddir.txt").unwrap_err();
        assert_eq!(err, PathError::decode("pybuilddir.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_decode_os_invalid() {
        use std::os::unix::ffi::OsStrExt;
        let raw = OsStr::from_bytes(b"/usr/\xfe/bin");
        assert!(decode_os(raw, "executable path").is_err());
        assert_eq!(
            decode_path(Path::new("/usr/bin"), "executable path").unwrap(),
            "/usr/bin"
        );
    }
}
