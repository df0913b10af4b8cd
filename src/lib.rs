//! pbxadd - surgical registration of source files into Xcode project manifests
//!
//! This library splices new file references and per-target build memberships
//! into an existing `project.pbxproj` without rewriting any byte the project
//! already has. It is deliberately not a pbxproj parser: the format's full
//! grammar is large, only a few section types are ever mutated, and targeted
//! pattern-anchored insertion keeps the edit surface (and the diff) minimal.
//!
//! # Core Concepts
//!
//! - **File plan**: static configuration mapping each build target to the
//!   source paths it should gain. Nothing is discovered on disk.
//! - **Sections**: a pbxproj groups records into regions bracketed by
//!   `/* Begin <SectionType> section */` and `/* End <SectionType> section */`
//!   markers. New lines always land immediately before an end marker.
//! - **Edit list**: insertions are computed against the unmodified input and
//!   applied in one pass, so a structural error never leaves a half-mutated
//!   manifest behind.
//!
//! # Example Usage
//!
//! ```ignore
//! use pbxadd::{register_files, FilePlan};
//!
//! let plan: FilePlan = std::fs::read_to_string("newfiles.toml")?.parse()?;
//! let text = std::fs::read_to_string("App.xcodeproj/project.pbxproj")?;
//!
//! let mutation = register_files(&text, &plan)?;
//! println!("added {}, skipped {}", mutation.added.len(), mutation.skipped.len());
//!
//! // The caller owns persistence; the core is pure text in, text out.
//! std::fs::write("App.xcodeproj/project.pbxproj", mutation.text)?;
//! ```
//!
//! # Project Structure
//!
//! - [`project`]: the mutation engine (identifiers, section location, edits)
//! - [`config`]: the TOML file plan
//! - [`cli`]: the command-line driver around the engine

// Public modules
pub mod cli;
pub mod config;
pub mod project;

// Re-export key types for convenient access
pub use config::{ConfigError, FileEntry, FilePlan};
pub use project::{register_files, AddedFile, IdGenerator, Mutation, ProjectError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_pbxadd() {
        assert_eq!(NAME, "pbxadd");
    }
}
