//! File plan configuration
//!
//! The set of files to register and their target assignments is static
//! configuration, not discovery: a TOML file mapping each build target to
//! the source paths (relative to the project root) it should compile.
//!
//! # Plan format
//!
//! ```toml
//! [targets]
//! Demo = ["Models/Foo.swift", "Services/Bar.swift"]
//! DemoTests = ["Models/FooTests.swift"]
//! ```
//!
//! Every plan is validated on parse: an empty plan, an absolute path, a
//! path without a file name, or a path listed twice under one target is
//! rejected before any manifest is read.

use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while loading or validating a file plan
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Plan file could not be read
    #[error("failed to read plan file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Plan file is not valid TOML of the expected shape
    #[error("failed to parse plan file: {0}")]
    ParseFailed(#[from] toml::de::Error),

    /// Plan lists no files at all
    #[error("plan contains no files to add")]
    EmptyPlan,

    /// Paths must be relative to the project root
    #[error("target `{target}` lists an absolute path: {path}")]
    AbsolutePath { target: String, path: String },

    /// Path has no usable final component
    #[error("target `{target}` lists a path without a file name: {path}")]
    MissingFileName { target: String, path: String },

    /// Same path listed twice under one target
    #[error("target `{target}` lists `{path}` more than once")]
    DuplicateEntry { target: String, path: String },
}

/// Parsed plan: which files belong to which build target.
///
/// Targets are kept in a sorted map so a run always processes them in a
/// stable order regardless of how the plan file orders its keys.
#[derive(Debug, Clone, Deserialize)]
pub struct FilePlan {
    pub targets: BTreeMap<String, Vec<String>>,
}

/// One requested file, flattened from the plan.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FileEntry {
    /// Build target the file is assigned to.
    pub target: String,
    /// Path as the plan lists it, relative to the project root.
    pub relative_path: String,
    /// Final path component; what the manifest's records are named after.
    pub file_name: String,
}

impl FromStr for FilePlan {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let plan: FilePlan = toml::from_str(s)?;
        plan.validate()?;
        Ok(plan)
    }
}

impl FilePlan {
    /// Loads and validates a plan from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        raw.parse()
    }

    /// Checks the structural rules every plan must satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.targets.values().all(|files| files.is_empty()) {
            return Err(ConfigError::EmptyPlan);
        }
        for (target, files) in &self.targets {
            let mut seen = HashSet::new();
            for path in files {
                if Path::new(path).is_absolute() {
                    return Err(ConfigError::AbsolutePath {
                        target: target.clone(),
                        path: path.clone(),
                    });
                }
                if file_name_of(path).is_none() {
                    return Err(ConfigError::MissingFileName {
                        target: target.clone(),
                        path: path.clone(),
                    });
                }
                if !seen.insert(path.as_str()) {
                    return Err(ConfigError::DuplicateEntry {
                        target: target.clone(),
                        path: path.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Flattens the plan into one entry per (target, file): targets in
    /// sorted order, files in the order the plan lists them.
    pub fn entries(&self) -> Vec<FileEntry> {
        self.targets
            .iter()
            .flat_map(|(target, files)| {
                files.iter().map(move |path| FileEntry {
                    target: target.clone(),
                    relative_path: path.clone(),
                    // Guaranteed present by validate().
                    file_name: file_name_of(path).unwrap_or(path).to_string(),
                })
            })
            .collect()
    }

    /// Target names in processing order.
    pub fn target_names(&self) -> impl Iterator<Item = &String> {
        self.targets.keys()
    }

    /// Total number of (target, file) assignments in the plan.
    pub fn len(&self) -> usize {
        self.targets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn file_name_of(path: &str) -> Option<&str> {
    Path::new(path).file_name().and_then(|n| n.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_flatten() {
        let plan: FilePlan = r#"
            [targets]
            DemoTests = ["Models/FooTests.swift"]
            Demo = ["Models/Foo.swift", "Services/Bar.swift"]
        "#
        .parse()
        .unwrap();

        assert_eq!(plan.len(), 3);
        let entries = plan.entries();
        // Targets come back sorted, files in plan order.
        assert_eq!(entries[0].target, "Demo");
        assert_eq!(entries[0].relative_path, "Models/Foo.swift");
        assert_eq!(entries[0].file_name, "Foo.swift");
        assert_eq!(entries[1].relative_path, "Services/Bar.swift");
        assert_eq!(entries[2].target, "DemoTests");
        assert_eq!(entries[2].file_name, "FooTests.swift");
    }

    #[test]
    fn test_empty_plan_rejected() {
        let err = r#"
            [targets]
            Demo = []
        "#
        .parse::<FilePlan>()
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPlan));
    }

    #[test]
    fn test_absolute_path_rejected() {
        let err = r#"
            [targets]
            Demo = ["/tmp/Foo.swift"]
        "#
        .parse::<FilePlan>()
        .unwrap_err();
        assert!(matches!(err, ConfigError::AbsolutePath { .. }));
    }

    #[test]
    fn test_parent_dir_path_rejected() {
        let err = r#"
            [targets]
            Demo = ["Models/.."]
        "#
        .parse::<FilePlan>()
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingFileName { .. }));
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let err = r#"
            [targets]
            Demo = ["Foo.swift", "Foo.swift"]
        "#
        .parse::<FilePlan>()
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateEntry { .. }));
    }

    #[test]
    fn test_same_path_in_two_targets_is_fine() {
        let plan: FilePlan = r#"
            [targets]
            Demo = ["Shared/Util.swift"]
            DemoTests = ["Shared/Util.swift"]
        "#
        .parse()
        .unwrap();
        assert_eq!(plan.len(), 2);
    }
}
