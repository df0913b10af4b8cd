//! Section location within a project manifest
//!
//! A pbxproj groups its records into named sections bracketed by literal
//! comment markers:
//!
//! ```text
//! /* Begin PBXBuildFile section */
//!         ...one record per line...
//! /* End PBXBuildFile section */
//! ```
//!
//! Lookups are exact marker matches, never loose substring heuristics, and
//! every insertion anchors immediately before a section's end marker so
//! existing lines are never disturbed.

use super::error::ProjectError;
use regex::Regex;

/// The contiguous byte range `[start, end)` of one named section, plus the
/// anchor at which new lines are spliced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    /// Offset of the begin marker.
    pub start: usize,
    /// Offset one past the end marker.
    pub end: usize,
    /// Offset of the end marker itself; insertions land immediately before
    /// it. End markers sit at column zero, so this is also a line start.
    pub insert_at: usize,
}

impl SectionSpan {
    /// The section's text within `text`, both markers included.
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

/// Finds the span of the section named `name`.
///
/// Scans for the first begin marker and the first end marker after it.
/// Either marker missing means the manifest is not in the expected format;
/// that aborts the whole mutation rather than silently skipping a section.
pub fn locate_section(text: &str, name: &str) -> Result<SectionSpan, ProjectError> {
    let begin = format!("/* Begin {} section */", name);
    let end = format!("/* End {} section */", name);

    let not_found = || ProjectError::SectionNotFound {
        section: name.to_string(),
    };

    let start = text.find(&begin).ok_or_else(not_found)?;
    let after_begin = start + begin.len();
    let insert_at = text[after_begin..]
        .find(&end)
        .map(|i| after_begin + i)
        .ok_or_else(not_found)?;

    Ok(SectionSpan {
        start,
        end: insert_at + end.len(),
        insert_at,
    })
}

/// Resolves the insertion anchor inside `target`'s Sources build-phase
/// `files = ( ... );` list: the offset of the line that closes the list.
///
/// A `PBXSourcesBuildPhase` object does not carry the target's name, so
/// resolution is two-hop: the target's block in the `PBXNativeTarget`
/// section names its build phases, the entry commented `/* Sources */`
/// yields the phase identifier, and that identifier locates the phase block
/// in the `PBXSourcesBuildPhase` section. Matching the exact
/// `/* <name> */ = {` comment keeps targets whose names share a prefix
/// (`Demo`, `DemoTests`) from being confused for one another.
pub fn locate_sources_list(text: &str, target: &str) -> Result<usize, ProjectError> {
    let targets = locate_section(text, "PBXNativeTarget")?;
    let header = format!("/* {} */ = {{", target);
    let block_start = targets
        .slice(text)
        .find(&header)
        .ok_or_else(|| ProjectError::TargetNotFound {
            target: target.to_string(),
        })?;
    let target_block = &text[targets.start + block_start..targets.end];

    let phase_id =
        sources_phase_id(target_block).ok_or_else(|| ProjectError::SourcesPhaseNotFound {
            target: target.to_string(),
        })?;

    let phases = locate_section(text, "PBXSourcesBuildPhase")?;
    let section = phases.slice(text);
    let missing_phase = || ProjectError::SourcesPhaseNotFound {
        target: target.to_string(),
    };

    let phase_start = section.find(&phase_id).ok_or_else(missing_phase)?;
    let files_open = section[phase_start..]
        .find("files = (")
        .map(|i| phase_start + i)
        .ok_or_else(missing_phase)?;
    let list_close = section[files_open..]
        .find(");")
        .map(|i| files_open + i)
        .ok_or_else(missing_phase)?;

    // Anchor at the start of the `);` line so new entries join the list.
    let line_start = section[..list_close]
        .rfind('\n')
        .map(|i| i + 1)
        .unwrap_or(list_close);
    Ok(phases.start + line_start)
}

/// Extracts the Sources phase identifier from a native target's
/// `buildPhases = ( ... );` list.
fn sources_phase_id(target_block: &str) -> Option<String> {
    let open = target_block.find("buildPhases = (")?;
    let rest = &target_block[open..];
    let close = rest.find(");")?;
    let entry = Regex::new(r"([0-9A-F]{24}) /\* Sources \*/").unwrap();
    entry
        .captures(&rest[..close])
        .map(|caps| caps[1].to_string())
}
