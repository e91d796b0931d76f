#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Startup path discovery for getpath
//!
//! Computes, once per process, where the runtime's standard library and
//! extension modules live. The stages run in a fixed order, each reading
//! the previous one's output:
//!
//! 1. locate the executable and resolve its symlinks to an anchor directory
//! 2. apply a redirection file found next to it
//! 3. search for the prefix, then the exec-prefix
//! 4. assemble the module search path
//!
//! Nothing is printed; warnings and trace events are returned in
//! [`Discovery::diagnostics`].

mod context;
mod exec_prefix;
mod executable;
mod prefix;
mod redirect;
mod search_path;

pub use executable::{ResolvedExecutable, MAX_SYMLINK_HOPS};
pub use search_path::assemble_module_search_path;

use getpath_config::{BuildDefaults, RuntimeInputs};
use getpath_errors::Error;
use getpath_events::{Diagnostics, DiscoveryEvent, EventEmitter};
use getpath_platform::Platform;
use getpath_types::{BoundedPath, ExecutableSource, Located, PathConfig, MAX_PATH_LEN};
use serde::Serialize;

use crate::context::SearchContext;

/// Everything one computation produced
#[derive(Debug, Clone, Serialize)]
pub struct Discovery {
    /// The completed output record
    pub config: PathConfig,
    pub executable_source: ExecutableSource,
    /// Directory every search started from, after redirection
    pub anchor: BoundedPath,
    /// Unreduced prefix search value and how it was found
    pub prefix: Located,
    /// Unreduced exec-prefix search value and how it was found
    pub exec_prefix: Located,
    pub archive_path: BoundedPath,
    pub diagnostics: Diagnostics,
}

/// Runs the discovery algorithm against one platform
pub struct PathCalculator<'a> {
    defaults: &'a BuildDefaults,
    platform: &'a Platform,
    max_path_len: usize,
}

impl<'a> PathCalculator<'a> {
    #[must_use]
    pub fn new(defaults: &'a BuildDefaults, platform: &'a Platform) -> Self {
        Self {
            defaults,
            platform,
            max_path_len: MAX_PATH_LEN,
        }
    }

    /// Bound every intermediate path to `max_path_len` bytes
    #[must_use]
    pub fn with_max_path_len(mut self, max_path_len: usize) -> Self {
        self.max_path_len = max_path_len;
        self
    }

    /// Fill in every field of `config` that is not already set.
    ///
    /// # Errors
    ///
    /// Returns an error if a path exceeds the length limit, a path or
    /// marker file cannot be decoded, or symlink resolution does not
    /// terminate. Missing landmarks are not errors.
    pub fn calculate(
        &self,
        mut config: PathConfig,
        inputs: &RuntimeInputs,
    ) -> Result<Discovery, Error> {
        let ctx = SearchContext::new(self.defaults, self.platform, self.max_path_len);
        let mut diagnostics = Diagnostics::new(inputs.warnings);

        tracing::debug!(
            program = %inputs.program_name,
            locator = self.platform.locator().name(),
            max_path_len = self.max_path_len,
            "calculating path configuration"
        );

        let executable = match config.program_full_path.as_deref() {
            Some(path) if PathConfig::is_set(config.program_full_path.as_ref()) => {
                diagnostics.emit_discovery(DiscoveryEvent::ExecutableResolved {
                    path: path.to_string(),
                    source: ExecutableSource::Override,
                });
                ResolvedExecutable {
                    path: ctx.path(path)?,
                    source: ExecutableSource::Override,
                }
            }
            _ => executable::locate_program(
                &ctx,
                &inputs.program_name,
                inputs.path_env.as_deref(),
                &mut diagnostics,
            )?,
        };

        let anchor =
            executable::anchor_directory(&ctx, executable.path.as_str(), &mut diagnostics)?;
        let anchor = redirect::apply_redirect(&ctx, anchor, &mut diagnostics)?;

        let home = inputs.home.as_deref().filter(|home| !home.is_empty());
        let prefix = prefix::search_prefix(&ctx, &anchor, home, &mut diagnostics)?;
        let archive = search_path::archive_path(&ctx, &prefix)?;
        diagnostics.emit_discovery(DiscoveryEvent::ArchivePathComputed {
            path: archive.as_str().to_string(),
        });
        let exec_prefix = exec_prefix::search_exec_prefix(&ctx, &anchor, home, &mut diagnostics)?;

        if !prefix.outcome.is_found() || !exec_prefix.outcome.is_found() {
            diagnostics.emit_discovery(DiscoveryEvent::HomeHint);
        }

        if !PathConfig::is_set(config.program_full_path.as_ref()) {
            config.program_full_path = Some(executable.path.as_str().to_string());
        }
        if !PathConfig::is_set(config.module_search_path.as_ref()) {
            config.module_search_path = Some(assemble_module_search_path(
                inputs.pythonpath_env.as_deref(),
                archive.as_str(),
                &self.defaults.default_search_path,
                prefix.as_str(),
                exec_prefix.as_str(),
            ));
        }
        if !PathConfig::is_set(config.prefix.as_ref()) {
            config.prefix = Some(prefix::reported_prefix(&ctx, &prefix));
        }
        if !PathConfig::is_set(config.exec_prefix.as_ref()) {
            config.exec_prefix = Some(exec_prefix::reported_exec_prefix(&ctx, &exec_prefix));
        }

        Ok(Discovery {
            config,
            executable_source: executable.source,
            anchor,
            prefix,
            exec_prefix,
            archive_path: archive,
            diagnostics,
        })
    }
}

/// Compute the path configuration with the default length limit.
///
/// # Errors
///
/// See [`PathCalculator::calculate`].
pub fn calculate(
    config: PathConfig,
    inputs: &RuntimeInputs,
    defaults: &BuildDefaults,
    platform: &Platform,
) -> Result<Discovery, Error> {
    PathCalculator::new(defaults, platform).calculate(config, inputs)
}
