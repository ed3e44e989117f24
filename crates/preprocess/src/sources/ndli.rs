//! National Digital Library of India (ndl.iitkgp.ac.in).
//!
//! Records arrive with catalogue fields mixed into the abstract. Metadata
//! values run to the next full stop or newline only, so a field never eats
//! the paragraph after it.

use crate::primitives::URL_TOKEN_EXTENDED;
use crate::rule::{Category, Rule, RuleSetSpec};

pub const SOURCES: &[&str] = &["ndl.iitkgp.ac.in"];

pub fn spec() -> RuleSetSpec {
    RuleSetSpec::new("ndli")
        .replacement(" ")
        .tidy_punctuation(true)
        .strip_leading_bullet(true)
        .rule(Rule::inline(
            Category::LibraryMetadata,
            r"\b(?:Source|Publisher|Collection|Handle|Identifier|ISSN|DOI)\s*:\s*[^.\n]*",
        ))
        .rule(Rule::inline(
            Category::CallToAction,
            r"(?:Read\s+full\s+story|Visit\s+original|For\s+more\s+details)\s*[:-]?\s*[^.\n]*",
        ))
        .rule(Rule::inline(Category::EditorialNote, r"\[[^\]]*NDLI[^\]]*\]"))
        .rule(Rule::inline(Category::EditorialNote, r"\(NDLI.*?\)"))
        .rule(Rule::inline(Category::Url, URL_TOKEN_EXTENDED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{RuleSet, TextCleaner};

    fn cleaner() -> RuleSet {
        RuleSet::compile(spec()).expect("ndli rules compile")
    }

    #[test]
    fn metadata_fields_stop_at_newline() {
        let raw = "Publisher: Springer\nThe study surveys monsoon variability.\nISSN: 1234-5678";
        assert_eq!(cleaner().clean(raw), "The study surveys monsoon variability.");
    }

    #[test]
    fn ndli_brackets_and_parentheticals_removed() {
        let raw = "Rainfall has declined [NDLI record 42] over decades (NDLI mirror copy).";
        assert_eq!(cleaner().clean(raw), "Rainfall has declined over decades .");
    }

    #[test]
    fn read_full_story_prompt_and_link_removed() {
        let raw = "Groundwater tables fell sharply. Read full story on the portal\n\
                   Mirror copy at https://example.org/x and offline.";
        assert_eq!(
            cleaner().clean(raw),
            "Groundwater tables fell sharply. Mirror copy at and offline."
        );
    }

    #[test]
    fn stacked_list_markers_removed() {
        assert_eq!(
            cleaner().clean("\u{2013} \u{2022} Rainfall has declined."),
            "Rainfall has declined."
        );
    }
}
