//! Executable locator and anchor directory

use getpath_errors::PathError;
use getpath_events::{DiscoveryEvent, EventEmitter};
use getpath_types::{BoundedPath, ExecutableSource, DELIM, SEP};

use crate::context::SearchContext;

/// Links followed before giving up (the Linux 4.2 kernel limit)
pub const MAX_SYMLINK_HOPS: u32 = 40;

/// Full path of the running executable and how it was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExecutable {
    pub path: BoundedPath,
    pub source: ExecutableSource,
}

/// Find the full path of the executable invoked as `program_name`.
///
/// A name containing a separator is taken as given. Otherwise the OS
/// self-path query is tried, then every `PATH` entry in order. The result
/// is absolutized and, where the platform wants one, given its executable
/// suffix. An empty path means nothing matched.
pub(crate) fn locate_program(
    ctx: &SearchContext<'_>,
    program_name: &str,
    path_env: Option<&str>,
    events: &mut impl EventEmitter,
) -> Result<ResolvedExecutable, PathError> {
    let (mut path, source) = find_program(ctx, program_name, path_env)?;

    if !path.is_empty() {
        if !path.is_absolute() {
            path = ctx.absolutize(path.as_str())?;
        }
        if let Some(suffix) = ctx.locator().executable_suffix() {
            add_exe_suffix(ctx, &mut path, suffix)?;
        }
    }

    events.emit_discovery(DiscoveryEvent::ExecutableResolved {
        path: path.as_str().to_string(),
        source,
    });
    Ok(ResolvedExecutable { path, source })
}

fn find_program(
    ctx: &SearchContext<'_>,
    program_name: &str,
    path_env: Option<&str>,
) -> Result<(BoundedPath, ExecutableSource), PathError> {
    if program_name.contains(SEP) {
        return Ok((ctx.path(program_name)?, ExecutableSource::Argument));
    }

    if let Some(exe) = ctx.locator().executable_path()? {
        return Ok((ctx.path(&exe)?, ExecutableSource::OsQuery));
    }

    if let Some(path_env) = path_env {
        if let Some(found) = which(ctx, program_name, path_env)? {
            return Ok((found, ExecutableSource::PathSearch));
        }
    }

    Ok((ctx.empty(), ExecutableSource::Unresolved))
}

/// First `PATH` entry holding an executable file named `program_name`.
///
/// Empty entries stand for the current directory and yield a relative
/// candidate.
pub(crate) fn which(
    ctx: &SearchContext<'_>,
    program_name: &str,
    path_env: &str,
) -> Result<Option<BoundedPath>, PathError> {
    for dir in path_env.split(DELIM) {
        let mut candidate = ctx.path(dir)?;
        candidate.join(program_name)?;
        if ctx.fs().is_executable_file(candidate.as_str()) {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

/// Append `suffix` unless it is already there, keeping it only when the
/// suffixed path is an executable file.
fn add_exe_suffix(
    ctx: &SearchContext<'_>,
    path: &mut BoundedPath,
    suffix: &str,
) -> Result<(), PathError> {
    let text = path.as_str();
    let has_suffix = text.len() >= suffix.len()
        && text.is_char_boundary(text.len() - suffix.len())
        && text[text.len() - suffix.len()..].eq_ignore_ascii_case(suffix);
    if has_suffix {
        return Ok(());
    }

    let len = path.len();
    path.push_suffix(suffix)?;
    if !ctx.fs().is_executable_file(path.as_str()) {
        path.truncate(len);
    }
    Ok(())
}

/// Follow symbolic links until `path` names a regular entry.
///
/// Relative targets are resolved against the directory holding the link.
///
/// # Errors
///
/// [`PathError::SymlinkLoop`] once [`MAX_SYMLINK_HOPS`] links have been
/// followed; [`PathError::TooLong`] if a resolved path does not fit.
pub(crate) fn resolve_symlinks(
    ctx: &SearchContext<'_>,
    mut path: BoundedPath,
    events: &mut impl EventEmitter,
) -> Result<BoundedPath, PathError> {
    let mut hops = 0;
    while let Some(target) = ctx.fs().read_link(path.as_str())? {
        let from = path.as_str().to_string();
        if target.starts_with(SEP) {
            path.set(&target)?;
        } else {
            path.truncate_to_parent();
            path.join(&target)?;
        }
        events.emit_discovery(DiscoveryEvent::SymlinkFollowed {
            from,
            to: path.as_str().to_string(),
        });

        hops += 1;
        if hops >= MAX_SYMLINK_HOPS {
            return Err(PathError::SymlinkLoop {
                path: path.into_string(),
                hops,
            });
        }
    }
    Ok(path)
}

/// Directory of the symlink-free executable; every search starts here.
///
/// When the platform reports a framework library whose directory holds
/// the standard library, the library takes the executable's place.
pub(crate) fn anchor_directory(
    ctx: &SearchContext<'_>,
    program_full_path: &str,
    events: &mut impl EventEmitter,
) -> Result<BoundedPath, PathError> {
    let mut start = ctx.path(program_full_path)?;

    if let Some(library) = ctx.locator().runtime_library_path()? {
        let mut stdlib = ctx.path(&library)?;
        stdlib.truncate_to_parent();
        stdlib.join(ctx.lib_python())?;
        if ctx.has_landmark(&stdlib)? {
            tracing::debug!(library = %library, "anchoring at framework library");
            start.set(&library)?;
        }
    }

    let mut anchor = resolve_symlinks(ctx, start, events)?;
    anchor.truncate_to_parent();

    events.emit_discovery(DiscoveryEvent::AnchorResolved {
        anchor: anchor.as_str().to_string(),
    });
    Ok(anchor)
}
