//! Moneycontrol.
//!
//! Credit lines, ad slots and read-more stubs come as standalone lines and
//! are dropped first; the same phrases are also cut when they appear inline.

use crate::rule::{Category, Rule, RuleSetSpec};

pub const SOURCES: &[&str] = &["Moneycontrol"];

pub fn spec() -> RuleSetSpec {
    RuleSetSpec::new("moneycontrol")
        .ascii_after(true)
        .rule(Rule::line(
            Category::EditorialNote,
            r"\(.*?(?:Image credit|Image:|Illustration|Photo credit|File image|With PTI inputs|With Reuters inputs|Image source).*?\)",
        ))
        .rule(Rule::line(
            Category::Disclaimer,
            r"For all commodities report, click here Disclaimer:.*",
        ))
        .rule(Rule::line(Category::Disclaimer, r"Disclaimer:.*Moneycontrol\.com advises.*"))
        .rule(Rule::line(
            Category::Advertisement,
            r"Story continues below Advertisement Remove Ad",
        ))
        .rule(Rule::line(Category::CallToAction, r"Also Read\s*\||ALSO READ:"))
        .rule(Rule::line(Category::CallToAction, r"Read More"))
        .rule(Rule::line(
            Category::CallToAction,
            r"Catch the latest news, views and analysis.*",
        ))
        .rule(Rule::line(Category::EditorialNote, r"Photo credit:.*|File image:.*"))
        .rule(Rule::inline(Category::EditorialNote, r"\(Image (?:credit|source).*?\)"))
        .rule(Rule::inline(Category::EditorialNote, r"\(Illustration.*?\)"))
        .rule(Rule::inline(Category::EditorialNote, r"\(File image.*?\)"))
        .rule(Rule::inline(Category::EditorialNote, r"\(Photo credit.*?\)"))
        .rule(Rule::inline(
            Category::Advertisement,
            r"Story continues below Advertisement Remove Ad",
        ))
        .rule(Rule::inline(Category::CallToAction, r"Also Read\s*\|"))
        .rule(Rule::inline(Category::CallToAction, r"ALSO READ:"))
        .rule(Rule::inline(Category::CallToAction, r"Read More\s*$"))
        .rule(Rule::inline(
            Category::AgencyCredit,
            r"\b(?:PTI|ANI|RSN|ANU|Reuters)\b",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{RuleSet, TextCleaner};

    fn cleaner() -> RuleSet {
        RuleSet::compile(spec()).expect("moneycontrol rules compile")
    }

    #[test]
    fn standalone_noise_lines_dropped() {
        let raw = "(Image credit: Shutterstock)\n\
                   Gold prices rose on Monday.\n\
                   Story continues below Advertisement Remove Ad\n\
                   Silver followed.\n\
                   Read More\n\
                   Disclaimer: The views are the analyst's. Moneycontrol.com advises users to check.";
        assert_eq!(cleaner().clean(raw), "Gold prices rose on Monday. Silver followed.");
    }

    #[test]
    fn inline_credits_and_agency_names_removed() {
        let raw = "The index fell 2% (Image source: Reuters) as banks slid, ANI reported.";
        assert_eq!(cleaner().clean(raw), "The index fell 2% as banks slid, reported.");
    }

    #[test]
    fn agency_names_inside_words_survive() {
        assert_eq!(
            cleaner().clean("The company had an optimistic outlook."),
            "The company had an optimistic outlook."
        );
    }

    #[test]
    fn trailing_read_more_removed() {
        assert_eq!(cleaner().clean("Rates were cut. Read More  "), "Rates were cut.");
    }
}
