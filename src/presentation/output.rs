//! Output Rendering
//!
//! Renders command results as human-readable text or JSON. Renderers
//! return strings; the binary decides where they go.

use std::fmt::Write;
use std::path::Path;

use serde::Serialize;

use crate::application::{DependencyReport, PackageResult};
use crate::domain::ports::Packager;
use crate::domain::value_objects::PackagingMode;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

struct Icons {
    check: &'static str,
    archive: &'static str,
    arrow: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            archive: "▪",
            arrow: "→",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            archive: "*",
            arrow: "->",
        }
    }
}

/// Listing entry for one registered packager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackagerInfo {
    pub id: String,
    pub lockfile: String,
    pub copied_sections: Vec<String>,
    pub must_copy_modules: bool,
}

impl PackagerInfo {
    pub fn describe(packager: &dyn Packager) -> Self {
        Self {
            id: packager.id().to_string(),
            lockfile: packager.lockfile_name().to_string(),
            copied_sections: packager
                .copy_package_section_names()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            must_copy_modules: packager.must_copy_modules(),
        }
    }
}

/// Renders the results of each command
pub trait Renderer {
    fn package(&self, result: &PackageResult, project_root: &Path) -> String;

    fn dependencies(&self, report: &DependencyReport) -> String;

    fn packagers(&self, packagers: &[PackagerInfo]) -> String;
}

/// Text renderer
pub struct TextRenderer {
    /// Whether to use unicode icons
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }
}

impl Renderer for TextRenderer {
    fn package(&self, result: &PackageResult, project_root: &Path) -> String {
        let icons = self.icons();
        let mut out = String::new();
        let mode = match result.mode {
            PackagingMode::Individual => "individual",
            PackagingMode::Unified => "unified",
        };

        let _ = writeln!(out, "{} Package Complete ({})", icons.check, mode);
        let _ = writeln!(out);
        if result.reused_artifacts() {
            let _ = writeln!(out, "  Reused existing artifacts");
        } else {
            let _ = writeln!(out, "  Archives ({}):", result.archive_count());
            for archive in &result.archives {
                let shown = archive
                    .path
                    .strip_prefix(project_root)
                    .unwrap_or(&archive.path);
                let _ = writeln!(
                    out,
                    "    {} {} ({} files, {} bytes)",
                    icons.archive,
                    shown.display(),
                    archive.entries,
                    archive.bytes
                );
                if self.verbose > 0 {
                    let _ = writeln!(out, "        sha256 {}", archive.sha256);
                }
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "  Functions ({}):", result.binding.len());
        for (function, path) in result.binding.iter() {
            let _ = writeln!(out, "    {} {} {}", function, icons.arrow, path);
        }
        if let Some(service) = result.binding.service() {
            let _ = writeln!(out, "  Service artifact: {}", service);
        }
        out
    }

    fn dependencies(&self, report: &DependencyReport) -> String {
        let icons = self.icons();
        let mut out = String::new();
        if report.modules.is_empty() {
            let _ = writeln!(out, "No external modules to package");
            return out;
        }

        let _ = writeln!(
            out,
            "{} Dependencies Installed ({} {})",
            icons.check, report.packager, report.packager_version
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "  Modules ({}):", report.modules.len());
        for (name, version) in &report.modules {
            let _ = writeln!(out, "    {}@{}", name, version);
        }
        let _ = writeln!(out, "  Units ({}):", report.units.len());
        for unit in &report.units {
            let _ = writeln!(out, "    {} {}", icons.arrow, unit.display());
        }
        out
    }

    fn packagers(&self, packagers: &[PackagerInfo]) -> String {
        packagers.iter().fold(String::new(), |mut out, info| {
            let _ = writeln!(
                out,
                "{:<6}lockfile={}  sections=[{}]  copy_modules={}",
                info.id,
                info.lockfile,
                info.copied_sections.join(","),
                info.must_copy_modules
            );
            out
        })
    }
}

/// JSON renderer
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn package(&self, result: &PackageResult, project_root: &Path) -> String {
        let json = serde_json::json!({
            "success": true,
            "project_root": project_root.display().to_string(),
            "mode": result.mode,
            "reused_artifacts": result.reused_artifacts(),
            "archives": result.archives,
            "binding": result.binding,
        });
        serde_json::to_string_pretty(&json).unwrap_or_default()
    }

    fn dependencies(&self, report: &DependencyReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }

    fn packagers(&self, packagers: &[PackagerInfo]) -> String {
        serde_json::to_string_pretty(&serde_json::json!({ "packagers": packagers }))
            .unwrap_or_default()
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, unicode: bool, verbose: u8) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode, verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
