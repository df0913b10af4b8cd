//! Error taxonomy for manifest mutation

use thiserror::Error;

/// Structural errors raised while mutating a project manifest.
///
/// Every variant means the manifest did not match the shape the editor
/// expects, and is fatal to the whole mutation: because edits are only
/// applied after every anchor has been resolved, a caller that receives one
/// of these still holds the manifest exactly as it was.
///
/// A file that is already registered is not an error; it is reported in
/// [`Mutation::skipped`](super::Mutation).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectError {
    /// A required `/* Begin ... */` / `/* End ... */` marker pair is absent.
    #[error("section `{section}` not found in project manifest")]
    SectionNotFound { section: String },

    /// No native target with this name exists in the manifest.
    #[error("target `{target}` not found in project manifest")]
    TargetNotFound { target: String },

    /// The target exists but lists no Sources build phase to insert into.
    #[error("target `{target}` has no Sources build phase")]
    SourcesPhaseNotFound { target: String },
}
