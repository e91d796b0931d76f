//! Redirection file lookup next to the executable

use getpath_config::find_config_value;
use getpath_errors::PathError;
use getpath_events::{DiscoveryEvent, EventEmitter};
use getpath_types::BoundedPath;

use crate::context::SearchContext;

/// Upper bound on the redirection file size we are willing to read
const REDIRECT_READ_LIMIT: usize = 64 * 1024;

/// Apply a redirection file found in the anchor directory or its parent.
///
/// The file's `home` value, if any, becomes the new anchor. A missing
/// file or key leaves the anchor alone.
pub(crate) fn apply_redirect(
    ctx: &SearchContext<'_>,
    anchor: BoundedPath,
    events: &mut impl EventEmitter,
) -> Result<BoundedPath, PathError> {
    let Some((file, contents)) = read_redirect_file(ctx, &anchor)? else {
        return Ok(anchor);
    };
    let Some(home) = find_config_value(&contents, "home") else {
        tracing::debug!(file = %file, "redirection file has no home key");
        return Ok(anchor);
    };

    let redirected = ctx.path(&home)?;
    events.emit_discovery(DiscoveryEvent::RedirectApplied {
        file: file.into_string(),
        home,
    });
    Ok(redirected)
}

fn read_redirect_file(
    ctx: &SearchContext<'_>,
    anchor: &BoundedPath,
) -> Result<Option<(BoundedPath, Vec<u8>)>, PathError> {
    let name = &ctx.defaults.redirect_file;

    let mut file = anchor.joined(name)?;
    if let Some(contents) = ctx.fs().read_file(file.as_str(), REDIRECT_READ_LIMIT) {
        return Ok(Some((file, contents)));
    }

    // one directory up
    file.strip_segments(2);
    file.join(name)?;
    Ok(ctx
        .fs()
        .read_file(file.as_str(), REDIRECT_READ_LIMIT)
        .map(|contents| (file, contents)))
}
