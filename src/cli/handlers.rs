//! Command handlers for the pbxadd CLI
//!
//! Handlers own all I/O around the pure mutation engine: loading the plan,
//! reading the manifest, and writing the result back atomically. Each
//! handler returns a process exit code.

use super::commands::AddArgs;
use super::output::OutputFormatter;
use crate::config::FilePlan;
use crate::project::register_files;
use anyhow::{ensure, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

pub fn handle_add(args: &AddArgs, quiet: bool) -> i32 {
    match run_add(args, quiet) {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}

fn run_add(args: &AddArgs, quiet: bool) -> Result<()> {
    let manifest_path = resolve_manifest_path(&args.project)?;
    debug!("Manifest path: {}", manifest_path.display());

    let plan = FilePlan::from_path(&args.plan).context("failed to load file plan")?;
    info!(
        targets = plan.targets.len(),
        files = plan.len(),
        "plan loaded"
    );

    let text = fs::read_to_string(&manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;

    let mutation = register_files(&text, &plan).context("manifest mutation failed")?;

    if !mutation.added.is_empty() && !args.dry_run {
        write_atomic(&manifest_path, &mutation.text)?;
        info!(
            added = mutation.added.len(),
            "manifest written: {}",
            manifest_path.display()
        );
    }

    if !quiet {
        let formatter = OutputFormatter::new(args.format.into());
        println!(
            "{}",
            formatter.format(&mutation, &manifest_path, args.dry_run)?
        );
    }
    Ok(())
}

/// Accepts either the manifest itself or the `.xcodeproj` bundle around it.
fn resolve_manifest_path(project: &Path) -> Result<PathBuf> {
    if project.is_dir() {
        let inner = project.join("project.pbxproj");
        ensure!(
            inner.is_file(),
            "no project.pbxproj inside {}",
            project.display()
        );
        Ok(inner)
    } else {
        ensure!(
            project.is_file(),
            "project manifest not found: {}",
            project.display()
        );
        Ok(project.to_path_buf())
    }
}

/// Writes via a temporary sibling then renames over the original, so an
/// interrupted write can never truncate the manifest.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp = path.with_extension("pbxproj.tmp");
    fs::write(&tmp, contents).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
