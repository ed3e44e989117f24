//! Newsprep normalization engine.
//!
//! Scraped news bodies come with publication-specific junk glued into the
//! text: image placeholders, wire credits, subscribe prompts, ad slots,
//! syndication notices. This crate strips that per source and hands back a
//! single line of clean prose that downstream analysis can trust.
//!
//! ## What we do
//!
//! - **Dispatch by source** - an exact, case-sensitive lookup in a
//!   [`Registry`] picks the cleaner. Twelve identifiers ship built in.
//! - **Delete boilerplate** - each cleaner is a [`RuleSet`] compiled from a
//!   declarative [`RuleSetSpec`]: optional whole-line filtering, then a single
//!   case-insensitive pass over one combined alternation.
//! - **Normalize** - character restriction (for most sources), whitespace
//!   collapse, and sentence-boundary repair.
//! - **Report, never fail** - [`normalize`] always returns an [`Outcome`];
//!   problems show up as status codes with the original content echoed back.
//!
//! ## Example
//!
//! ```
//! use preprocess::{normalize, ArticleIn, StatusKind};
//!
//! let article = ArticleIn::new(
//!     "Sensex ends higher",
//!     "Markets closed higher.(PTI)\nView Full Image\nBanks led.",
//!     "https://www.livemint.com/markets/1",
//!     "mint",
//! );
//! let outcome = normalize(article);
//!
//! assert_eq!(outcome.kind(), Some(StatusKind::Success));
//! assert_eq!(outcome.content, "Markets closed higher. Banks led.");
//! ```
//!
//! ## Invariants worth knowing
//!
//! - Cleaners are pure: same text in, same text out, on any thread.
//! - Successful output has no leading/trailing whitespace and no runs of it.
//! - Status codes (200, 1001, 1002, 1003, 1004) are an external contract.
//! - Source identifiers are never trimmed or case-folded.

mod error;
mod pipeline;
mod postpass;
pub mod primitives;
mod registry;
mod rule;
pub mod sources;
mod types;

pub use crate::error::RuleError;
pub use crate::pipeline::{normalize, normalize_with};
pub use crate::postpass::{
    collapse_whitespace, is_permitted_char, repair_sentence_boundaries, restrict_charset,
    strip_leading_bullet, tidy_punctuation, PERMITTED_QUOTES,
};
pub use crate::registry::{registry, Registry, RegistryBuilder};
pub use crate::rule::{Category, Rule, RuleSet, RuleSetSpec, Scope, TextCleaner};
pub use crate::types::{ArticleIn, DownstreamPayload, Outcome, StatusKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_output_is_trimmed_and_collapsed() {
        let registry = registry().expect("builtin registry compiles");
        let raw = "  \u{2022} Opening line.\n\n  Second   line.Third line here.  \n";
        for source in registry.sources() {
            let cleaner = registry.lookup(source).expect("listed source resolves");
            let cleaned = cleaner.clean(raw);
            assert_eq!(cleaned, cleaned.trim(), "{source} left edge whitespace");
            assert!(!cleaned.contains("  "), "{source} left a double space");
            assert!(!cleaned.contains('\n'), "{source} left a newline");
        }
    }

    #[test]
    fn charset_restricting_sources_emit_only_permitted_chars() {
        let registry = registry().expect("builtin registry compiles");
        let raw = "Prices rose \u{20B9}5 \u{2014} a \u{201C}big\u{201D} jump \u{1F4C8}. \u{0928}\u{092F}\u{093E}";
        for (identifiers, spec) in sources::builtin() {
            if !spec.restricts_charset() {
                continue;
            }
            for &source in identifiers {
                let cleaned = registry.lookup(source).expect("registered").clean(raw);
                assert!(
                    cleaned.chars().all(is_permitted_char),
                    "{source} produced {cleaned:?}"
                );
            }
        }
    }

    #[test]
    fn cleaning_is_idempotent_on_clean_prose() {
        let registry = registry().expect("builtin registry compiles");
        let prose = "The council approved the budget on Tuesday. Work starts next month.";
        for source in registry.sources() {
            let cleaner = registry.lookup(source).expect("listed source resolves");
            let once = cleaner.clean(prose);
            assert_eq!(once, prose, "{source} altered clean prose");
            assert_eq!(cleaner.clean(&once), once);
        }
    }
}
