//! Scroll.in.
//!
//! No character restriction: the output keeps non-ASCII text, and the
//! dash runs and empty brackets left by deletion are tidied instead.

use crate::primitives::{agency_credit, READER_PROMPT, WIRE_AGENCIES};
use crate::rule::{Category, Rule, RuleSetSpec};

pub const SOURCES: &[&str] = &["Scroll.in"];

pub fn spec() -> RuleSetSpec {
    RuleSetSpec::new("scroll")
        .replacement(" ")
        .tidy_punctuation(true)
        .strip_leading_bullet(true)
        .rule(Rule::inline(Category::EditorialNote, r"\(.*?Scroll\.in.*?\)"))
        .rule(Rule::inline(
            Category::CallToAction,
            r"(?:Support\s+Scroll|Contribute\s+now)[^.?!]*",
        ))
        .rule(Rule::inline(Category::CallToAction, READER_PROMPT))
        .rule(Rule::inline(Category::AgencyCredit, agency_credit(WIRE_AGENCIES)))
}
