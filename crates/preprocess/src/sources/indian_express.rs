//! The Indian Express.
//!
//! One alternation, deleted in place. The character class sits last, so a
//! promo containing a mangled apostrophe is still recognised before its
//! characters are stripped.

use crate::primitives::{editorial_parenthetical, watch_promo, NON_ASCII};
use crate::rule::{Category, Rule, RuleSetSpec};

pub const SOURCES: &[&str] = &["The Indian Express"];

pub fn spec() -> RuleSetSpec {
    RuleSetSpec::new("indian_express")
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
        .rule(Rule::inline(
            Category::Url,
            r"\s\S*(?:http|\.com|\.in|\.org|\.gov|twitter)\S*",
        ))
        .rule(Rule::inline(Category::Advertisement, r"Story continues below this ad"))
        .rule(Rule::inline(
            Category::CallToAction,
            concat!(
                r"Click here to read this article in \w+|Get Express Premium.*|Subscribe Now|",
                r"CLICK HERE FOR MORE \w+ NEWS|Limited Time Offer|Click here to join our channel|",
                r"Click here to subscribe|Express Premium with ad|lite for just Rs 2|Follow Express Pune.*|",
                r"Stay updated with the latest Pune news|",
                r"You can also join our Express Pune Telegram channel here|Also Read|Newsletter|",
                r"Click to get the day[\x19'’]s best explainers in your inbox",
            ),
        ))
        .rule(Rule::inline(
            Category::AgencyCredit,
            r"\(?(?:With\s+(?:inputs\s+from\s+)?PTI\s+inputs|\bPTI\b)\)?",
        ))
        .rule(Rule::inline(Category::WatchPromo, watch_promo()))
        .rule(Rule::inline(
            Category::CallToAction,
            r"= Limited Time Offer \| Express Premium with ad-lite for just Rs 2/ day =I< Click here to subscribe =",
        ))
        .rule(Rule::inline(Category::NonAscii, NON_ASCII))
}
