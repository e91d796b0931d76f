//! Search for the platform independent library root

use getpath_errors::PathError;
use getpath_events::{DiscoveryEvent, EventEmitter};
use getpath_types::{BoundedPath, Located, SearchOutcome, SEP};

use crate::context::SearchContext;

/// Segments between an installed prefix and its `lib/python<ver>`
const INSTALLED_DEPTH: usize = 2;

/// Locate `lib/python<ver>`, returning the unreduced directory.
///
/// Order: home override (trusted without checks), build tree, ancestor
/// walk from the anchor, compiled-in prefix. When all of them fail the
/// compiled-in location is returned with [`SearchOutcome::NotFound`].
pub(crate) fn search_prefix(
    ctx: &SearchContext<'_>,
    anchor: &BoundedPath,
    home: Option<&str>,
    events: &mut impl EventEmitter,
) -> Result<Located, PathError> {
    let located = match find_prefix(ctx, anchor, home)? {
        Some(located) => located,
        None => {
            events.emit_discovery(DiscoveryEvent::PrefixNotFound);
            let mut fallback = ctx.path(&ctx.defaults.prefix)?;
            fallback.join(ctx.lib_python())?;
            Located::new(fallback, SearchOutcome::NotFound)
        }
    };

    events.emit_discovery(DiscoveryEvent::PrefixResolved {
        path: located.as_str().to_string(),
        outcome: located.outcome,
    });
    Ok(located)
}

fn find_prefix(
    ctx: &SearchContext<'_>,
    anchor: &BoundedPath,
    home: Option<&str>,
) -> Result<Option<Located>, PathError> {
    if let Some(home) = home {
        let (home_prefix, _) = SearchContext::split_home(home);
        let mut prefix = ctx.path(home_prefix)?;
        prefix.join(ctx.lib_python())?;
        return Ok(Some(Located::new(prefix, SearchOutcome::FoundInstalled)));
    }

    if let Some(lib) = build_tree_lib(ctx, anchor)? {
        return Ok(Some(Located::new(lib, SearchOutcome::FoundBuildTree)));
    }

    if let Some(prefix) = walk_ancestors(ctx, anchor)? {
        return Ok(Some(Located::new(prefix, SearchOutcome::FoundInstalled)));
    }

    let mut prefix = ctx.path(&ctx.defaults.prefix)?;
    prefix.join(ctx.lib_python())?;
    if ctx.has_landmark(&prefix)? {
        return Ok(Some(Located::new(prefix, SearchOutcome::FoundInstalled)));
    }
    Ok(None)
}

/// `<anchor>/<source tree>/Lib` when the anchor is an uninstalled build
fn build_tree_lib(
    ctx: &SearchContext<'_>,
    anchor: &BoundedPath,
) -> Result<Option<BoundedPath>, PathError> {
    let marker = anchor.joined(&ctx.defaults.build_marker)?;
    if !ctx.fs().is_file(marker.as_str()) {
        return Ok(None);
    }

    let vpath = &ctx.defaults.source_tree_path;
    if vpath.is_empty() {
        return Ok(None);
    }

    let mut lib = SearchContext::join_normalized(anchor, vpath)?;
    lib.join("Lib")?;
    if ctx.has_landmark(&lib)? {
        return Ok(Some(lib));
    }
    Ok(None)
}

/// Probe `<dir>/lib/python<ver>` for the anchor and each of its ancestors.
///
/// An anchor `N` segments deep costs exactly `N` probes; the root itself
/// is never tried.
fn walk_ancestors(
    ctx: &SearchContext<'_>,
    anchor: &BoundedPath,
) -> Result<Option<BoundedPath>, PathError> {
    let mut candidate = ctx.absolutize(anchor.as_str())?;
    while !candidate.is_empty() {
        let len = candidate.len();
        candidate.join(ctx.lib_python())?;
        if ctx.has_landmark(&candidate)? {
            return Ok(Some(candidate));
        }
        candidate.truncate(len);
        candidate.truncate_to_parent();
    }
    Ok(None)
}

/// The prefix reported to the runtime.
///
/// Installed trees lose their `lib/python<ver>` suffix (an empty result
/// becomes the root). A build tree reports the source tree root holding
/// `Lib`. Otherwise the compiled-in prefix is reported as is.
pub(crate) fn reported_prefix(ctx: &SearchContext<'_>, located: &Located) -> String {
    match located.outcome {
        SearchOutcome::FoundInstalled => {
            let mut prefix = located.path.clone();
            prefix.strip_segments(INSTALLED_DEPTH);
            or_root(prefix)
        }
        SearchOutcome::FoundBuildTree => or_root(located.path.parent()),
        SearchOutcome::NotFound => ctx.defaults.prefix.clone(),
    }
}

/// `path`, or the root separator when reduction left nothing
pub(crate) fn or_root(path: BoundedPath) -> String {
    if path.is_empty() {
        SEP.to_string()
    } else {
        path.into_string()
    }
}
