//! Search for the platform dependent (extension module) directory

use getpath_config::constants::LIB_DYNLOAD;
use getpath_errors::PathError;
use getpath_events::{DiscoveryEvent, EventEmitter};
use getpath_platform::encoding::decode_bytes;
use getpath_types::{BoundedPath, Located, SearchOutcome};

use crate::context::SearchContext;
use crate::prefix::or_root;

/// Segments between an installed exec-prefix and `lib/python<ver>/lib-dynload`
const INSTALLED_DEPTH: usize = 3;

/// Locate `lib/python<ver>/lib-dynload`, returning the unreduced directory.
///
/// Mirrors the prefix search, with the build directory marker in place of
/// the build tree check and a directory in place of the landmark file.
pub(crate) fn search_exec_prefix(
    ctx: &SearchContext<'_>,
    anchor: &BoundedPath,
    home: Option<&str>,
    events: &mut impl EventEmitter,
) -> Result<Located, PathError> {
    let located = match find_exec_prefix(ctx, anchor, home)? {
        Some(located) => located,
        None => {
            events.emit_discovery(DiscoveryEvent::ExecPrefixNotFound);
            let mut fallback = ctx.path(&ctx.defaults.exec_prefix)?;
            fallback.join("lib")?;
            fallback.join(LIB_DYNLOAD)?;
            Located::new(fallback, SearchOutcome::NotFound)
        }
    };

    events.emit_discovery(DiscoveryEvent::ExecPrefixResolved {
        path: located.as_str().to_string(),
        outcome: located.outcome,
    });
    Ok(located)
}

fn find_exec_prefix(
    ctx: &SearchContext<'_>,
    anchor: &BoundedPath,
    home: Option<&str>,
) -> Result<Option<Located>, PathError> {
    if let Some(home) = home {
        let (home_prefix, home_exec_prefix) = SearchContext::split_home(home);
        let mut exec_prefix = ctx.path(home_exec_prefix.unwrap_or(home_prefix))?;
        exec_prefix.join(ctx.lib_python())?;
        exec_prefix.join(LIB_DYNLOAD)?;
        return Ok(Some(Located::new(exec_prefix, SearchOutcome::FoundInstalled)));
    }

    if let Some(build_dir) = build_dir(ctx, anchor)? {
        return Ok(Some(Located::new(build_dir, SearchOutcome::FoundBuildTree)));
    }

    let mut candidate = ctx.absolutize(anchor.as_str())?;
    while !candidate.is_empty() {
        let len = candidate.len();
        candidate.join(ctx.lib_python())?;
        candidate.join(LIB_DYNLOAD)?;
        if ctx.fs().is_dir(candidate.as_str()) {
            return Ok(Some(Located::new(candidate, SearchOutcome::FoundInstalled)));
        }
        candidate.truncate(len);
        candidate.truncate_to_parent();
    }

    let mut exec_prefix = ctx.path(&ctx.defaults.exec_prefix)?;
    exec_prefix.join(ctx.lib_python())?;
    exec_prefix.join(LIB_DYNLOAD)?;
    if ctx.fs().is_dir(exec_prefix.as_str()) {
        return Ok(Some(Located::new(exec_prefix, SearchOutcome::FoundInstalled)));
    }
    Ok(None)
}

/// Shared module directory named by the build directory marker.
///
/// The marker's first line is taken relative to the anchor. A marker
/// that exists but cannot be opened counts as absent.
fn build_dir(
    ctx: &SearchContext<'_>,
    anchor: &BoundedPath,
) -> Result<Option<BoundedPath>, PathError> {
    let marker_name = &ctx.defaults.build_dir_marker;
    let marker = anchor.joined(marker_name)?;
    if !ctx.fs().is_file(marker.as_str()) {
        return Ok(None);
    }
    let limit = ctx.max_path_len();
    let Some(contents) = ctx.fs().read_file(marker.as_str(), limit) else {
        return Ok(None);
    };

    let line = first_line(&contents, contents.len() >= limit, marker_name)?;
    Ok(Some(anchor.joined(&line)?))
}

/// Decode the first line of a marker file, without its line ending.
///
/// When the read stopped at the limit, a character cut in half at the
/// end is dropped; the line is then too long to join anyway.
fn first_line(contents: &[u8], truncated: bool, what: &str) -> Result<String, PathError> {
    let line = contents
        .split(|&b| b == b'\n')
        .next()
        .unwrap_or_default();
    let cut_by_limit = truncated && line.len() == contents.len();
    let line = match std::str::from_utf8(line) {
        Err(err) if cut_by_limit && err.error_len().is_none() => &line[..err.valid_up_to()],
        _ => line,
    };
    let line = decode_bytes(line, what)?;
    Ok(line.trim_end_matches('\r').to_string())
}

/// The exec-prefix reported to the runtime.
///
/// Installed trees lose `lib/python<ver>/lib-dynload`. A build tree
/// reports the shared module directory named by the marker, unshortened.
/// Otherwise the compiled-in exec-prefix is reported as is.
pub(crate) fn reported_exec_prefix(ctx: &SearchContext<'_>, located: &Located) -> String {
    match located.outcome {
        SearchOutcome::FoundInstalled => {
            let mut exec_prefix = located.path.clone();
            exec_prefix.strip_segments(INSTALLED_DEPTH);
            or_root(exec_prefix)
        }
        SearchOutcome::FoundBuildTree => located.as_str().to_string(),
        SearchOutcome::NotFound => ctx.defaults.exec_prefix.clone(),
    }
}
