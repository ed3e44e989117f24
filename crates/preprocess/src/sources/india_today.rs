//! India Today and its North-East edition (Inside Northeast).
//!
//! Both feeds share one rule set. Several promos run to the end of the
//! article, so `.` crosses newlines and those rules swallow the tail.

use crate::primitives::URL_TOKEN;
use crate::rule::{Category, Rule, RuleSetSpec};

pub const SOURCES: &[&str] = &["India Today", "India Today NE"];

pub fn spec() -> RuleSetSpec {
    RuleSetSpec::new("india_today")
        .ascii_after(true)
        .rule(Rule::inline(Category::CallToAction, r"To support our brand.*"))
        .rule(Rule::inline(Category::CallToAction, r"Keep following Inside Northeast.*"))
        .rule(Rule::inline(Category::Url, URL_TOKEN))
        .rule(Rule::inline(Category::CallToAction, r"Support Inside Northeast.*"))
        .rule(Rule::inline(
            Category::CallToAction,
            r"Readers like you make Inside Northeast['’]s work possible\.",
        ))
        .rule(Rule::inline(
            Category::CallToAction,
            r"\s*Download: The Inside Northeast app HERE.*",
        ))
        .rule(Rule::inline(
            Category::CallToAction,
            r"\s*Do keep following us for news on-the-go.*",
        ))
        .rule(Rule::inline(Category::CallToAction, r"Follow us on Facebook"))
        .rule(Rule::inline(Category::AgencyCredit, r"\(With inputs from \w+\)"))
        .rule(Rule::inline(Category::Placeholder, r"\[caption .*?\]|\[/caption\]"))
}
