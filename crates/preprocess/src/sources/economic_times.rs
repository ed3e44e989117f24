//! The Economic Times.
//!
//! Character restriction is folded into the alternation ahead of every
//! other rule, and matches are replaced by a space rather than deleted.

use crate::primitives::{editorial_parenthetical, NON_ASCII, URL_TOKEN};
use crate::rule::{Category, Rule, RuleSetSpec};

pub const SOURCES: &[&str] = &["The Economic Times"];

pub fn spec() -> RuleSetSpec {
    RuleSetSpec::new("economic_times")
        .replacement(" ")
        .rule(Rule::inline(Category::NonAscii, NON_ASCII))
        .rule(Rule::inline(
            Category::EditorialNote,
            editorial_parenthetical(&[
                "source",
                "picture",
                "file",
                "illustration",
                "photo",
                "data",
                "disclaimer",
                "pti",
            ]),
        ))
        .rule(Rule::inline(Category::Url, URL_TOKEN))
        .rule(Rule::inline(
            Category::Advertisement,
            r"Live Events|You Might Also Like",
        ))
        .rule(Rule::inline(
            Category::CallToAction,
            r"You can now subscribe to our|Economic Times WhatsApp channel|ETMarkets WhatsApp channel",
        ))
}
