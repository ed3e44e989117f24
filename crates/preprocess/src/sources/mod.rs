//! Built-in rule tables, one module per publication.
//!
//! Each module exports the source identifiers it serves and a `spec()`
//! describing its cleaner. Identifiers are matched exactly, case included.

pub mod economic_times;
pub mod hindustan_times;
pub mod india_today;
pub mod indian_express;
pub mod mint;
pub mod moneycontrol;
pub mod ndli;
pub mod ndtv;
pub mod opindia;
pub mod quint;
pub mod scroll;

use crate::rule::RuleSetSpec;

/// Every built-in rule set with the identifiers it is registered under.
pub fn builtin() -> Vec<(&'static [&'static str], RuleSetSpec)> {
    vec![
        (mint::SOURCES, mint::spec()),
        (india_today::SOURCES, india_today::spec()),
        (hindustan_times::SOURCES, hindustan_times::spec()),
        (economic_times::SOURCES, economic_times::spec()),
        (moneycontrol::SOURCES, moneycontrol::spec()),
        (indian_express::SOURCES, indian_express::spec()),
        (ndtv::SOURCES, ndtv::spec()),
        (opindia::SOURCES, opindia::spec()),
        (scroll::SOURCES, scroll::spec()),
        (quint::SOURCES, quint::spec()),
        (ndli::SOURCES, ndli::spec()),
    ]
}
