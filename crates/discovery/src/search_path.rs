//! Module search path assembly

use getpath_errors::PathError;
use getpath_types::{is_absolute, BoundedPath, Located, DELIM, SEP};

use crate::context::SearchContext;

/// Location of the zipped standard library.
///
/// Placed under the installation root when the prefix was found as an
/// installed tree, under the compiled-in prefix otherwise.
pub(crate) fn archive_path(
    ctx: &SearchContext<'_>,
    prefix: &Located,
) -> Result<BoundedPath, PathError> {
    let mut archive = if prefix.outcome.is_installed() {
        let mut root = prefix.path.clone();
        root.strip_segments(2);
        if root.is_empty() {
            root.set(&SEP.to_string())?;
        }
        root
    } else {
        ctx.path(&ctx.defaults.prefix)?
    };
    archive.join(&ctx.defaults.zip_archive_name())?;
    Ok(archive)
}

/// Join the module search path from its parts, in search order.
///
/// The environment value comes first, then the archive, then every entry
/// of `default_path` (relative entries are placed under `prefix`), and
/// the extension module directory last.
///
/// ```
/// use getpath_discovery::assemble_module_search_path;
///
/// let path = assemble_module_search_path(
///     Some("/extra"),
///     "/usr/lib/py39.zip",
///     "lib-dynload",
///     "/usr",
///     "/usr/lib/py39/dynload",
/// );
/// # if cfg!(unix) {
/// assert_eq!(path, "/extra:/usr/lib/py39.zip:/usr/lib-dynload:/usr/lib/py39/dynload");
/// # }
/// ```
#[must_use]
pub fn assemble_module_search_path(
    pythonpath_env: Option<&str>,
    archive: &str,
    default_path: &str,
    prefix: &str,
    exec_prefix: &str,
) -> String {
    let mut entries: Vec<String> = Vec::new();
    if let Some(env) = pythonpath_env {
        entries.push(env.to_string());
    }
    entries.push(archive.to_string());

    for entry in default_path.split(DELIM) {
        if is_absolute(entry) {
            entries.push(entry.to_string());
            continue;
        }
        let mut resolved = prefix.to_string();
        if !prefix.is_empty() && !prefix.ends_with(SEP) && !entry.is_empty() {
            resolved.push(SEP);
        }
        resolved.push_str(entry);
        entries.push(resolved);
    }

    entries.push(exec_prefix.to_string());
    entries.join(&DELIM.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delimited(parts: &[&str]) -> String {
        parts.join(&DELIM.to_string())
    }

    #[test]
    fn test_environment_first_extensions_last() {
        let path = assemble_module_search_path(
            Some("/extra"),
            "/usr/lib/py39.zip",
            "lib-dynload",
            "/usr",
            "/usr/lib/py39/dynload",
        );
        assert_eq!(
            path,
            delimited(&[
                "/extra",
                "/usr/lib/py39.zip",
                "/usr/lib-dynload",
                "/usr/lib/py39/dynload"
            ])
        );
    }

    #[test]
    fn test_absolute_and_empty_entries() {
        let default_path = delimited(&["/abs/dir", "", "rel"]);
        let path =
            assemble_module_search_path(None, "/p/z.zip", &default_path, "/p/lib/", "/p/dyn");
        assert_eq!(
            path,
            delimited(&["/p/z.zip", "/abs/dir", "/p/lib/", "/p/lib/rel", "/p/dyn"])
        );
    }

    #[test]
    fn test_empty_default_path_yields_prefix() {
        let path = assemble_module_search_path(None, "/z.zip", "", "/usr/lib/python3.9", "/d");
        assert_eq!(path, delimited(&["/z.zip", "/usr/lib/python3.9", "/d"]));
    }
}
