//! Output rendering and formatting

use console::Style;
use getpath_discovery::Discovery;
use getpath_events::Diagnostics;
use std::io::{self, Write};

/// Output renderer for computation results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    warning_style: Style,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool) -> Self {
        Self {
            json_output,
            warning_style: Style::new().yellow().for_stderr(),
        }
    }

    /// Print recorded warnings to stderr, one per line
    pub fn render_warnings(&self, diagnostics: &Diagnostics) {
        for warning in diagnostics.warnings() {
            eprintln!("{}", self.warning_style.apply_to(warning.message()));
        }
    }

    /// Render the result to stdout
    pub fn render_result(&self, discovery: &Discovery) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.json_output {
            Self::write_json(&mut out, discovery)
        } else {
            Self::write_plain(&mut out, discovery)
        }
    }

    fn write_json(out: &mut impl Write, discovery: &Discovery) -> io::Result<()> {
        let json = serde_json::to_string_pretty(discovery).map_err(io::Error::other)?;
        writeln!(out, "{json}")
    }

    /// `key = value` lines for the output record and the search outcomes
    fn write_plain(out: &mut impl Write, discovery: &Discovery) -> io::Result<()> {
        let config = &discovery.config;
        writeln!(out, "program_full_path = {}", config.program_full_path())?;
        writeln!(out, "executable_source = {}", discovery.executable_source)?;
        writeln!(out, "prefix = {}", config.prefix())?;
        writeln!(out, "prefix_found = {}", discovery.prefix.outcome)?;
        writeln!(out, "exec_prefix = {}", config.exec_prefix())?;
        writeln!(out, "exec_prefix_found = {}", discovery.exec_prefix.outcome)?;
        writeln!(
            out,
            "module_search_path = {}",
            config.module_search_path.as_deref().unwrap_or_default()
        )?;
        for (index, entry) in config.module_search_paths().iter().enumerate() {
            writeln!(out, "  [{index}] {}", entry.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use getpath_types::{BoundedPath, ExecutableSource, Located, PathConfig, SearchOutcome};

    fn discovery() -> Discovery {
        let located = |text: &str| {
            Located::new(
                BoundedPath::from_text(text, 4096).unwrap(),
                SearchOutcome::FoundInstalled,
            )
        };
        Discovery {
            config: PathConfig::new()
                .with_program_full_path("/opt/rt/bin/python")
                .with_prefix("/opt/rt")
                .with_exec_prefix("/opt/rt")
                .with_module_search_path("/opt/rt/lib/python3.9"),
            executable_source: ExecutableSource::Argument,
            anchor: BoundedPath::from_text("/opt/rt/bin", 4096).unwrap(),
            prefix: located("/opt/rt/lib/python3.9"),
            exec_prefix: located("/opt/rt/lib/python3.9/lib-dynload"),
            archive_path: BoundedPath::from_text("/opt/rt/lib/python39.zip", 4096).unwrap(),
            diagnostics: Diagnostics::new(true),
        }
    }

    #[test]
    fn test_plain_listing() {
        let mut out = Vec::new();
        OutputRenderer::write_plain(&mut out, &discovery()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("program_full_path = /opt/rt/bin/python\n"));
        assert!(text.contains("prefix = /opt/rt\n"));
        assert!(text.contains("prefix_found = installed\n"));
        assert!(text.contains("  [0] /opt/rt/lib/python3.9\n"));
    }

    #[test]
    fn test_json_listing() {
        let mut out = Vec::new();
        OutputRenderer::write_json(&mut out, &discovery()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["config"]["prefix"], "/opt/rt");
        assert_eq!(value["prefix"]["outcome"], "found_installed");
        assert_eq!(value["archive_path"], "/opt/rt/lib/python39.zip");
    }
}
