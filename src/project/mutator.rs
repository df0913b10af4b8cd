//! Orchestration of one manifest mutation
//!
//! [`register_files`] takes the manifest text and a [`FilePlan`] and returns
//! the rewritten text plus a report of what was added and what was already
//! there. The sequence mirrors the manifest's own layout: build-membership
//! records into the `PBXBuildFile` section, reference records into the
//! `PBXFileReference` section, then one entry per file into each target's
//! Sources-phase file list. All anchors are resolved before any edit is
//! applied, so a structural error returns the input untouched.

use super::edit::EditList;
use super::error::ProjectError;
use super::ident::IdGenerator;
use super::section::{locate_section, locate_sources_list};
use crate::config::{FileEntry, FilePlan};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// One (file, target) assignment newly registered by a run.
///
/// A file assigned to several targets yields one of these per target, all
/// sharing the same `reference_id` but each with its own `membership_id`.
#[derive(Debug, Clone, Serialize)]
pub struct AddedFile {
    pub target: String,
    pub relative_path: String,
    pub file_name: String,
    pub reference_id: String,
    pub membership_id: String,
}

/// Outcome of a mutation: the rewritten manifest plus what changed.
#[derive(Debug)]
pub struct Mutation {
    /// The full manifest text after insertion. Identical to the input when
    /// nothing was added.
    pub text: String,
    /// Newly registered (file, target) assignments, in processing order.
    pub added: Vec<AddedFile>,
    /// Requested entries the manifest already referenced.
    pub skipped: Vec<FileEntry>,
}

/// Registers every file in `plan` that the manifest does not already
/// reference. Pure text transformation: no I/O, no partial application.
///
/// Re-running the same plan against the resulting text is a no-op: every
/// file inserted by the first run is seen by the presence check of the
/// second.
pub fn register_files(text: &str, plan: &FilePlan) -> Result<Mutation, ProjectError> {
    let mut pending = Vec::new();
    let mut skipped = Vec::new();
    for entry in plan.entries() {
        if is_registered(text, &entry.file_name) {
            debug!(file = %entry.relative_path, "already referenced, skipping");
            skipped.push(entry);
        } else {
            pending.push(entry);
        }
    }

    if pending.is_empty() {
        info!("manifest already up to date");
        return Ok(Mutation {
            text: text.to_string(),
            added: Vec::new(),
            skipped,
        });
    }

    let mut ids = IdGenerator::scan(text);
    let mut reference_ids: HashMap<&str, String> = HashMap::new();
    let mut reference_lines = Vec::new();
    let mut membership_lines = Vec::new();
    let mut added = Vec::new();

    for entry in &pending {
        // One reference per distinct path, however many targets want it.
        let reference_id = match reference_ids.get(entry.relative_path.as_str()) {
            Some(id) => id.clone(),
            None => {
                let id = ids.next();
                reference_lines.push(reference_line(&id, &entry.file_name));
                reference_ids.insert(entry.relative_path.as_str(), id.clone());
                id
            }
        };
        let membership_id = ids.next();
        membership_lines.push(membership_line(&membership_id, &reference_id, &entry.file_name));
        added.push(AddedFile {
            target: entry.target.clone(),
            relative_path: entry.relative_path.clone(),
            file_name: entry.file_name.clone(),
            reference_id,
            membership_id,
        });
    }

    let mut edits = EditList::new();

    let build_section = locate_section(text, "PBXBuildFile")?;
    for line in &membership_lines {
        edits.insert_before(build_section.insert_at, line.clone());
    }

    let reference_section = locate_section(text, "PBXFileReference")?;
    for line in &reference_lines {
        edits.insert_before(reference_section.insert_at, line.clone());
    }

    for target in plan.target_names() {
        let mut lines = added
            .iter()
            .filter(|a| &a.target == target)
            .map(|a| sources_entry_line(&a.membership_id, &a.file_name))
            .peekable();
        if lines.peek().is_none() {
            continue;
        }
        let anchor = locate_sources_list(text, target)?;
        for line in lines {
            edits.insert_before(anchor, line);
        }
    }

    info!(
        added = added.len(),
        skipped = skipped.len(),
        "manifest mutation computed"
    );

    Ok(Mutation {
        text: edits.apply(text),
        added,
        skipped,
    })
}

/// A file counts as registered when the `PBXFileReference` section carries
/// a reference whose `path` value ends in its basename. Matching a field
/// value instead of a raw substring keeps a stray mention elsewhere in the
/// manifest from suppressing a legitimate addition. A same-named file under
/// a different directory still suppresses; see DESIGN.md for why that
/// limitation is kept.
fn is_registered(text: &str, file_name: &str) -> bool {
    let section = match locate_section(text, "PBXFileReference") {
        Ok(span) => span,
        // Missing section is reported when insertion is attempted.
        Err(_) => return false,
    };
    let field = format!(
        r#"path = "?(?:[^";]*/)?{}"?;"#,
        regex::escape(file_name)
    );
    Regex::new(&field).unwrap().is_match(section.slice(text))
}

fn reference_line(id: &str, name: &str) -> String {
    format!(
        "\t\t{} /* {} */ = {{isa = PBXFileReference; lastKnownFileType = {}; path = {}; sourceTree = \"<group>\"; }};\n",
        id,
        name,
        file_type_tag(name),
        name
    )
}

fn membership_line(id: &str, reference_id: &str, name: &str) -> String {
    format!(
        "\t\t{} /* {} in Sources */ = {{isa = PBXBuildFile; fileRef = {} /* {} */; }};\n",
        id, name, reference_id, name
    )
}

fn sources_entry_line(membership_id: &str, name: &str) -> String {
    format!("\t\t\t\t{} /* {} in Sources */,\n", membership_id, name)
}

/// Xcode `lastKnownFileType` tag for a source file, by extension.
fn file_type_tag(name: &str) -> &'static str {
    match Path::new(name).extension().and_then(|e| e.to_str()) {
        Some("swift") => "sourcecode.swift",
        Some("m") => "sourcecode.c.objc",
        Some("mm") => "sourcecode.cpp.objcpp",
        Some("h") => "sourcecode.c.h",
        Some("c") => "sourcecode.c.c",
        Some("cpp") | Some("cc") => "sourcecode.cpp.cpp",
        Some("metal") => "sourcecode.metal",
        _ => "text",
    }
}
