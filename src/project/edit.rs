//! Deferred, all-or-nothing text edits
//!
//! Insertions are recorded against byte offsets of the original text and
//! spliced in a single pass. Nothing is applied until every anchor has been
//! resolved, so a structural error discovered late can never leave the
//! caller with a half-mutated manifest. Recording against the original also
//! removes the offset bookkeeping that sequential in-place splicing would
//! need: two insertions at the same anchor simply keep their recording
//! order.

/// One pending insertion.
#[derive(Debug)]
struct Edit {
    at: usize,
    text: String,
}

/// An ordered collection of pending insertions into one text buffer.
#[derive(Debug, Default)]
pub struct EditList {
    edits: Vec<Edit>,
}

impl EditList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `line` for insertion immediately before byte offset `at` of
    /// the original text. `at` must lie on a char boundary of that text.
    pub fn insert_before(&mut self, at: usize, line: impl Into<String>) {
        self.edits.push(Edit {
            at,
            text: line.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Splices every recorded insertion into `text` and returns the result.
    pub fn apply(mut self, text: &str) -> String {
        // Stable sort: insertions at equal offsets keep recording order.
        self.edits.sort_by_key(|e| e.at);

        let inserted: usize = self.edits.iter().map(|e| e.text.len()).sum();
        let mut out = String::with_capacity(text.len() + inserted);
        let mut cursor = 0;
        for edit in &self.edits {
            out.push_str(&text[cursor..edit.at]);
            out.push_str(&edit.text);
            cursor = edit.at;
        }
        out.push_str(&text[cursor..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_returns_input_unchanged() {
        let edits = EditList::new();
        assert_eq!(edits.apply("abc\ndef\n"), "abc\ndef\n");
    }

    #[test]
    fn test_insertions_land_before_their_anchor() {
        let text = "one\nthree\n";
        let mut edits = EditList::new();
        edits.insert_before(4, "two\n");
        assert_eq!(edits.apply(text), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_same_anchor_keeps_recording_order() {
        let text = "head\ntail\n";
        let mut edits = EditList::new();
        edits.insert_before(5, "a\n");
        edits.insert_before(5, "b\n");
        edits.insert_before(5, "c\n");
        assert_eq!(edits.apply(text), "head\na\nb\nc\ntail\n");
    }

    #[test]
    fn test_anchors_recorded_out_of_order() {
        let text = "aa bb cc";
        let mut edits = EditList::new();
        edits.insert_before(6, "Y");
        edits.insert_before(3, "X");
        assert_eq!(edits.apply(text), "aa Xbb Ycc");
    }
}
