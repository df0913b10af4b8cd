//! Output formatting for mutation summaries
//!
//! The summary of a run (what was added, what was already present) is the
//! only thing printed to stdout; diagnostics go through `tracing` to
//! stderr. JSON output carries the same data as a serde structure for
//! scripting around the tool.

use crate::cli::commands::OutputFormatArg;
use crate::config::FileEntry;
use crate::project::{AddedFile, Mutation};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// Human-readable formatted text
    Human,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Formatter for run summaries
pub struct OutputFormatter {
    format: OutputFormat,
}

#[derive(Serialize)]
struct Summary<'a> {
    project: String,
    dry_run: bool,
    added: &'a [AddedFile],
    skipped: &'a [FileEntry],
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the outcome of one run.
    pub fn format(&self, mutation: &Mutation, project: &Path, dry_run: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_json(mutation, project, dry_run),
            OutputFormat::Human => Ok(self.format_human(mutation, dry_run)),
        }
    }

    fn format_json(&self, mutation: &Mutation, project: &Path, dry_run: bool) -> Result<String> {
        let summary = Summary {
            project: project.display().to_string(),
            dry_run,
            added: &mutation.added,
            skipped: &mutation.skipped,
        };
        serde_json::to_string_pretty(&summary).context("failed to serialize summary")
    }

    fn format_human(&self, mutation: &Mutation, dry_run: bool) -> String {
        let mut out = String::new();

        if mutation.added.is_empty() {
            out.push_str("Project is already up to date");
        } else {
            out.push_str(&format!(
                "{} {} file{}",
                if dry_run { "Would add" } else { "Added" },
                mutation.added.len(),
                if mutation.added.len() == 1 { "" } else { "s" }
            ));
        }
        if !mutation.skipped.is_empty() {
            out.push_str(&format!(" ({} already present)", mutation.skipped.len()));
        }
        out.push('\n');

        let mut current_target = None;
        for added in &mutation.added {
            if current_target != Some(&added.target) {
                out.push_str(&format!("  {}\n", added.target));
                current_target = Some(&added.target);
            }
            out.push_str(&format!("    + {}\n", added.relative_path));
        }
        for skipped in &mutation.skipped {
            out.push_str(&format!("    = {} ({})\n", skipped.relative_path, skipped.target));
        }

        out.trim_end().to_string()
    }
}
