//! Hindustan Times.

use crate::primitives::{editorial_parenthetical, INPUTS_PARENTHETICAL, URL_TOKEN};
use crate::rule::{Category, Rule, RuleSetSpec};

pub const SOURCES: &[&str] = &["Hindustan Times"];

pub fn spec() -> RuleSetSpec {
    RuleSetSpec::new("hindustan_times")
        .ascii_after(true)
        .rule(Rule::inline(Category::CallToAction, r"Subscribe Now!.*"))
        .rule(Rule::inline(Category::CallToAction, r"click here.*?\."))
        .rule(Rule::inline(
            Category::CallToAction,
            r"To access comprehensive details about weather.*",
        ))
        .rule(Rule::inline(
            Category::EditorialNote,
            editorial_parenthetical(&["source", "picture", "file", "illustration", "photo", "pti"]),
        ))
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
