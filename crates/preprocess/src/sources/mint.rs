//! LiveMint.
//!
//! Structured noise arrives on lines of its own (image placeholders, chart
//! notes, author e-mails, datelines), so whole lines are filtered first and
//! the surviving lines joined before promos and credits are cut inline.

use crate::rule::{Category, Rule, RuleSetSpec};

pub const SOURCES: &[&str] = &["mint"];

pub fn spec() -> RuleSetSpec {
    RuleSetSpec::new("mint")
        .dot_matches_new_line(false)
        .ascii_after(true)
        .rule(Rule::line(Category::Placeholder, r"\(.*?(?:per IST|Chart \d+).*\)"))
        .rule(Rule::line(Category::Byline, r"Write to .*?@.*"))
        .rule(Rule::line(Category::Placeholder, r"View Full Image"))
        .rule(Rule::line(Category::EditorialNote, r"Photo:.*"))
        .rule(Rule::line(Category::Byline, r"[A-Z][a-z]+ \([A-Za-z]+\):"))
        // A line opening with one of these markers is dropped whole.
        .rule(Rule::line(
            Category::CallToAction,
            r"(?:Also Read\s*\||Follow updates here\s*:).*",
        ))
        .rule(Rule::line(Category::Placeholder, r"\(Chart \d+\).*"))
        .rule(Rule::line(Category::Placeholder, r"\(.*?per IST.*?\).*"))
        .rule(Rule::line(Category::AgencyCredit, r"\(PTI\).*"))
        .rule(Rule::inline(Category::CallToAction, r"Also Read\s*\|"))
        .rule(Rule::inline(Category::CallToAction, r"Follow updates here\s*:"))
        .rule(Rule::inline(Category::Placeholder, r"\(Chart \d+\)"))
        .rule(Rule::inline(Category::Placeholder, r"\(.*?per IST.*?\)"))
        .rule(Rule::inline(Category::AgencyCredit, r"\(PTI\)"))
}
