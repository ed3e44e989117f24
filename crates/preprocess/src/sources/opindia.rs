//! OpIndia.
//!
//! Shares most of its table with Hindustan Times, but folds character
//! restriction in front and replaces matches with a space.

use crate::primitives::{
    editorial_parenthetical, watch_promo, INPUTS_PARENTHETICAL, NON_ASCII, URL_TOKEN,
};
use crate::rule::{Category, Rule, RuleSetSpec};

pub const SOURCES: &[&str] = &["OpIndia"];

pub fn spec() -> RuleSetSpec {
    RuleSetSpec::new("opindia")
        .replacement(" ")
        .rule(Rule::inline(Category::NonAscii, NON_ASCII))
        .rule(Rule::inline(
            Category::CallToAction,
            r"Subscribe Now! Get features like|click here.*?\.|To access comprehensive details about weather.*",
        ))
        .rule(Rule::inline(
            Category::Disclaimer,
            r"This news report is published from ",
        ))
        .rule(Rule::inline(
            Category::Placeholder,
            r"The complete press statement can be read below",
        ))
        .rule(Rule::inline(
            Category::EditorialNote,
            editorial_parenthetical(&[
                "source",
                "picture",
                "file",
                "click here",
                "illustration",
                "photo",
                "pti",
            ]),
        ))
        .rule(Rule::inline(Category::WatchPromo, watch_promo()))
        .rule(Rule::inline(
            Category::Disclaimer,
            r"\(This story has been published from.*?\)",
        ))
        .rule(Rule::inline(Category::Url, URL_TOKEN))
        .rule(Rule::inline(Category::CallToAction, r"Follow us on Facebook"))
        .rule(Rule::inline(Category::Disclaimer, r"The views expressed are personal.*"))
        .rule(Rule::inline(Category::AgencyCredit, r"With inputs from \w+"))
        .rule(Rule::inline(Category::AgencyCredit, INPUTS_PARENTHETICAL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{RuleSet, TextCleaner};

    fn cleaner() -> RuleSet {
        RuleSet::compile(spec()).expect("opindia rules compile")
    }

    #[test]
    fn press_statement_pointer_and_emoji_removed() {
        let raw = "The party issued a response \u{1F64F}. The complete press statement can be read below";
        assert_eq!(cleaner().clean(raw), "The party issued a response .");
    }

    #[test]
    fn watch_promo_and_photo_credit_removed() {
        let raw = "Crowds gathered (Photo: PTI) outside. #WATCH | Visuals of the rally \
                   March 12, 2024 The rally ended peacefully.";
        assert_eq!(
            cleaner().clean(raw),
            "Crowds gathered outside. The rally ended peacefully."
        );
    }

    #[test]
    fn curly_quotes_survive() {
        assert_eq!(
            cleaner().clean("He called it \u{201C}historic\u{201D}."),
            "He called it \u{201C}historic\u{201D}."
        );
    }
}
