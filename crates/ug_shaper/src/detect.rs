//! Content detection
//!
//! Lets a caller decide whether a document needs a shaping pass at all.

use crate::form_table::lookup;

/// Check whether text contains at least one letter the shaper maps
pub fn needs_shaping(text: &str) -> bool {
    text.chars().any(|c| lookup(c).is_some())
}

/// Count the characters the shaper would map to presentation forms
pub fn count_shapeable(text: &str) -> usize {
    text.chars().filter(|&c| lookup(c).is_some()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_shaping() {
        assert!(!needs_shaping(""));
        assert!(!needs_shaping("Hello World"));
        assert!(needs_shaping("Hello \u{0628}"));
        // Already shaped text has nothing left to map
        assert!(!needs_shaping("\u{FE91}\u{FEF2}"));
        // Arabic punctuation alone is not shapeable
        assert!(!needs_shaping("\u{060C}\u{061F}"));
    }

    #[test]
    fn test_count_shapeable() {
        // Arabic comma is in the block but has no forms
        assert_eq!(count_shapeable("ab \u{0628}\u{0644}\u{060C}"), 2);
        assert_eq!(count_shapeable("\u{FE91}\u{FEF2}"), 0);
    }
}
