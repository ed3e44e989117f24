//! The Quint.

use crate::primitives::{agency_credit, READER_PROMPT, WIRE_AGENCIES};
use crate::rule::{Category, Rule, RuleSetSpec};

pub const SOURCES: &[&str] = &["TheQuint"];

pub fn spec() -> RuleSetSpec {
    RuleSetSpec::new("quint")
        .replacement(" ")
        .tidy_punctuation(true)
        .strip_leading_bullet(true)
        .rule(Rule::inline(
            Category::CallToAction,
            r"(?:Subscribe\s+to|Follow\s+The\s+Quint|Download\s+The\s+Quint\s+app)[^.?!]*",
        ))
        .rule(Rule::inline(
            Category::Hashtags,
            r"#[A-Za-z0-9_]+(?:\s#[A-Za-z0-9_]+)*",
        ))
        .rule(Rule::inline(Category::CallToAction, READER_PROMPT))
        .rule(Rule::inline(Category::AgencyCredit, agency_credit(WIRE_AGENCIES)))
}
