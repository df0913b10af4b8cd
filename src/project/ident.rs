//! Identifier generation for new manifest entries
//!
//! Xcode names every object in a `project.pbxproj` with a 24-character
//! uppercase hexadecimal token. New tokens are drawn from v4 UUIDs and
//! checked against a registry seeded with every token already present in
//! the manifest, so a collision is impossible rather than merely
//! improbable.

use regex::Regex;
use std::collections::HashSet;
use uuid::Uuid;

/// Mints unique 24-hex identifiers for new manifest entries.
///
/// The registry covers both pre-existing identifiers (collected once by
/// [`IdGenerator::scan`]) and identifiers minted earlier in the same run.
pub struct IdGenerator {
    seen: HashSet<String>,
}

impl IdGenerator {
    /// Builds a generator seeded with every 24-hex token found in `text`.
    ///
    /// The scan over-collects (any 24-hex run counts, not just object
    /// identifiers), which only makes the uniqueness guarantee stronger.
    pub fn scan(text: &str) -> Self {
        let token = Regex::new(r"\b[0-9A-F]{24}\b").unwrap();
        let seen = token
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        Self { seen }
    }

    /// Returns a fresh identifier and records it in the registry.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> String {
        loop {
            let hex = Uuid::new_v4().simple().to_string();
            let id = hex[..24].to_uppercase();
            if self.seen.insert(id.clone()) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let mut ids = IdGenerator::scan("");
        let id = ids.next();
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id, id.to_uppercase());
    }

    #[test]
    fn test_ids_are_unique_within_a_run() {
        let mut ids = IdGenerator::scan("");
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next()));
        }
    }

    #[test]
    fn test_scanned_ids_are_never_reissued() {
        let text = "AA1000000000000000000001 /* DemoApp.swift */\n\
                    AA1000000000000000000002 /* ContentView.swift */";
        let mut ids = IdGenerator::scan(text);
        for _ in 0..100 {
            let id = ids.next();
            assert_ne!(id, "AA1000000000000000000001");
            assert_ne!(id, "AA1000000000000000000002");
        }
    }
}
