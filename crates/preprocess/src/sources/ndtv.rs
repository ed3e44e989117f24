//! NDTV.
//!
//! Syndication notices, agency sign-offs and stray Hindi captions come on
//! their own lines and are dropped whole. The inline pass replaces with a
//! space and folds in character restriction.

use crate::primitives::NON_ASCII;
use crate::rule::{Category, Rule, RuleSetSpec};

pub const SOURCES: &[&str] = &["ndtv.com"];

pub fn spec() -> RuleSetSpec {
    RuleSetSpec::new("ndtv")
        .replacement(" ")
        .rule(Rule::line(Category::Url, r"pic\.twitter\.com/\S+"))
        .rule(Rule::line(
            Category::Disclaimer,
            r"\(This story has not been edited by NDTV staff.*\)",
        ))
        .rule(Rule::line(
            Category::Disclaimer,
            r"\(Except for the headline.*syndicated feed.*\)",
        ))
        .rule(Rule::line(
            Category::AgencyCredit,
            r"\(With inputs? from (?:ANI|PTI|Reuters).*\)",
        ))
        .rule(Rule::line(Category::AgencyCredit, r"With input from agencies.*"))
        .rule(Rule::line(Category::Disclaimer, r"Disclaimer: NDTV has been sued.*"))
        .rule(Rule::line(
            Category::CallToAction,
            r"NDTV is now available on WhatsApp channels.*",
        ))
        .rule(Rule::line(Category::AgencyCredit, r"(?:PTI|COR|HDA|ANI)\b.*"))
        .rule(Rule::line(Category::DevanagariLine, r"[\x{0900}-\x{097F}\s]+"))
        .rule(Rule::line(
            Category::Advertisement,
            r"Story continues below Advertisement Remove Ad",
        ))
        .rule(Rule::inline(
            Category::CallToAction,
            r"Click on the link to get all the latest updates.*$",
        ))
        .rule(Rule::inline(Category::Url, r"pic\.twitter\.com/\S+"))
        .rule(Rule::inline(
            Category::Advertisement,
            r"Story continues below Advertisement Remove Ad",
        ))
        .rule(Rule::inline(
            Category::AgencyCredit,
            r"\(With inputs? from (?:ANI|PTI|Reuters).*?\)",
        ))
        .rule(Rule::inline(Category::NonAscii, NON_ASCII))
        .rule(Rule::inline(Category::StrayPunctuation, r"\s—\s"))
}
