//! Rule tables and their compiled form.
//!
//! A source's cleaning behavior is data: an ordered list of [`Rule`]s plus a
//! handful of pipeline switches, collected in a [`RuleSetSpec`].
//! [`RuleSet::compile`] turns a table into at most two regexes:
//!
//! - every [`Scope::Line`] rule joined into one alternation anchored to the
//!   whole line, used to discard noise lines before anything else runs;
//! - every [`Scope::Inline`] rule joined, in table order, into one
//!   alternation applied in a single pass.
//!
//! Order inside each alternation matters: at a given position the first
//! listed rule that matches wins, and a single pass guarantees nothing
//! re-matches text exposed by an earlier deletion.
//!
//! ```rust
//! use preprocess::{Category, Rule, RuleSet, RuleSetSpec, TextCleaner};
//!
//! let spec = RuleSetSpec::new("demo")
//!     .rule(Rule::line(Category::Placeholder, r"View Full Image"))
//!     .rule(Rule::inline(Category::AgencyCredit, r"\(PTI\)"));
//! let rules = RuleSet::compile(spec).unwrap();
//!
//! assert_eq!(rules.clean("Markets rose.(PTI)\nView Full Image\nBonds fell."),
//!            "Markets rose. Bonds fell.");
//! ```

use std::borrow::Cow;
use std::fmt;

use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::postpass::{
    collapse_whitespace, repair_sentence_boundaries, restrict_charset, strip_leading_bullet,
    tidy_punctuation,
};

/// Compiled pattern budget per rule set. Unicode-aware `\w` repeated across
/// a dozen alternatives needs more than the regex crate's default.
const REGEX_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Anything that turns a raw article body into clean text.
///
/// Implementations must be total: every `&str`, including empty and
/// malformed input, yields a `String`.
pub trait TextCleaner: Send + Sync {
    /// Short name of the rule set, used in logs.
    fn name(&self) -> &str;

    fn clean(&self, text: &str) -> String;
}

/// Class of boilerplate a rule removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Links and social-media handles.
    Url,
    /// Wire-service credits: PTI, ANI, Reuters and friends.
    AgencyCredit,
    /// Parenthetical notes about photos, sources, files.
    EditorialNote,
    /// Subscribe / follow / download / read-more prompts.
    CallToAction,
    /// Legal and syndication notices.
    Disclaimer,
    /// Ad slots and "you might also like" blocks.
    Advertisement,
    /// Image, chart and caption placeholders.
    Placeholder,
    /// Author e-mail lines and dateline prefixes.
    Byline,
    Hashtags,
    /// `Key: value` catalogue fields.
    LibraryMetadata,
    /// Lines written entirely in Devanagari.
    DevanagariLine,
    /// Dated `#watch` video promos.
    WatchPromo,
    /// Characters outside the permitted set, when folded into the
    /// alternation.
    NonAscii,
    /// Punctuation stranded by deletions.
    StrayPunctuation,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Whether a rule discards whole lines or deletes spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// The trimmed line is dropped when it matches the pattern in full.
    Line,
    /// Each match is replaced by the rule set's replacement string.
    Inline,
}

/// One entry of a rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub category: Category,
    pub scope: Scope,
    pub pattern: Cow<'static, str>,
}

impl Rule {
    pub fn line(category: Category, pattern: impl Into<Cow<'static, str>>) -> Self {
        Self {
            category,
            scope: Scope::Line,
            pattern: pattern.into(),
        }
    }

    pub fn inline(category: Category, pattern: impl Into<Cow<'static, str>>) -> Self {
        Self {
            category,
            scope: Scope::Inline,
            pattern: pattern.into(),
        }
    }
}

/// Uncompiled description of one source's cleaner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSetSpec {
    pub name: &'static str,
    pub rules: Vec<Rule>,
    /// What inline matches are replaced with, `""` or `" "`.
    pub replacement: &'static str,
    /// Whether `.` in inline patterns crosses newlines.
    pub dot_matches_new_line: bool,
    /// Run [`restrict_charset`] after the deletion pass.
    pub ascii_after: bool,
    /// Run [`tidy_punctuation`] after the deletion pass.
    pub tidy_punctuation: bool,
    /// Run [`strip_leading_bullet`] after whitespace collapse.
    pub strip_leading_bullet: bool,
}

impl RuleSetSpec {
    /// Empty table: no rules, empty replacement, dot-all on, every optional
    /// step off.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
            replacement: "",
            dot_matches_new_line: true,
            ascii_after: false,
            tidy_punctuation: false,
            strip_leading_bullet: false,
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn replacement(mut self, replacement: &'static str) -> Self {
        self.replacement = replacement;
        self
    }

    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    pub fn ascii_after(mut self, yes: bool) -> Self {
        self.ascii_after = yes;
        self
    }

    pub fn tidy_punctuation(mut self, yes: bool) -> Self {
        self.tidy_punctuation = yes;
        self
    }

    pub fn strip_leading_bullet(mut self, yes: bool) -> Self {
        self.strip_leading_bullet = yes;
        self
    }

    /// Same table restricted to the rules of one category. Pipeline switches
    /// are kept, so the result shows exactly what that category contributes.
    pub fn only(&self, category: Category) -> Self {
        Self {
            rules: self
                .rules
                .iter()
                .filter(|rule| rule.category == category)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Categories in first-appearance order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for rule in &self.rules {
            if !seen.contains(&rule.category) {
                seen.push(rule.category);
            }
        }
        seen
    }

    /// Whether output of this table is guaranteed to be free of characters
    /// outside the permitted set.
    pub fn restricts_charset(&self) -> bool {
        self.ascii_after
            || self
                .rules
                .iter()
                .any(|rule| rule.category == Category::NonAscii && rule.scope == Scope::Inline)
    }
}

/// A compiled [`RuleSetSpec`]; the concrete [`TextCleaner`] behind every
/// registered source.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: &'static str,
    categories: Vec<Category>,
    line_filter: Option<Regex>,
    inline: Option<Regex>,
    replacement: &'static str,
    ascii_after: bool,
    restricts_charset: bool,
    tidy_punctuation: bool,
    strip_leading_bullet: bool,
}

impl RuleSet {
    pub fn compile(spec: RuleSetSpec) -> Result<Self, RuleError> {
        let line_patterns = patterns_for(&spec.rules, Scope::Line);
        let inline_patterns = patterns_for(&spec.rules, Scope::Inline);

        let line_filter = if line_patterns.is_empty() {
            None
        } else {
            let anchored = format!("^(?:{})$", alternation(&line_patterns));
            Some(build(spec.name, &anchored, false)?)
        };

        let inline = if inline_patterns.is_empty() {
            None
        } else {
            Some(build(
                spec.name,
                &alternation(&inline_patterns),
                spec.dot_matches_new_line,
            )?)
        };

        Ok(Self {
            name: spec.name,
            categories: spec.categories(),
            restricts_charset: spec.restricts_charset(),
            line_filter,
            inline,
            replacement: spec.replacement,
            ascii_after: spec.ascii_after,
            tidy_punctuation: spec.tidy_punctuation,
            strip_leading_bullet: spec.strip_leading_bullet,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn restricts_charset(&self) -> bool {
        self.restricts_charset
    }

    /// Drops every line that one of the line rules matches in full, then
    /// joins the survivors with single spaces.
    fn filter_lines<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let Some(filter) = &self.line_filter else {
            return Cow::Borrowed(text);
        };
        let kept: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !self.drops_line(filter, line))
            .collect();
        Cow::Owned(kept.join(" "))
    }

    /// A line also drops when it matches after the characters this table
    /// strips are removed.
    fn drops_line(&self, filter: &Regex, line: &str) -> bool {
        if filter.is_match(line) {
            return true;
        }
        if !self.restricts_charset {
            return false;
        }
        let visible = restrict_charset(line);
        let visible = visible.trim();
        visible.len() != line.len() && filter.is_match(visible)
    }

    fn apply(&self, text: &str) -> String {
        let mut text = self.filter_lines(text);

        if let Some(inline) = &self.inline {
            text = Cow::Owned(
                inline
                    .replace_all(&text, NoExpand(self.replacement))
                    .into_owned(),
            );
        }
        if self.tidy_punctuation {
            text = Cow::Owned(tidy_punctuation(&text));
        }
        if self.ascii_after {
            text = Cow::Owned(restrict_charset(&text));
        }

        let mut collapsed = collapse_whitespace(&text);
        if self.strip_leading_bullet {
            collapsed = strip_leading_bullet(&collapsed);
        }
        repair_sentence_boundaries(&collapsed)
    }
}

impl TextCleaner for RuleSet {
    fn name(&self) -> &str {
        self.name
    }

    fn clean(&self, text: &str) -> String {
        self.apply(text)
    }
}

fn patterns_for(rules: &[Rule], scope: Scope) -> Vec<&str> {
    rules
        .iter()
        .filter(|rule| rule.scope == scope)
        .map(|rule| rule.pattern.as_ref())
        .collect()
}

fn alternation(patterns: &[&str]) -> String {
    patterns
        .iter()
        .map(|pattern| format!("(?:{pattern})"))
        .collect::<Vec<_>>()
        .join("|")
}

fn build(name: &str, pattern: &str, dot_all: bool) -> Result<Regex, RuleError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .dot_matches_new_line(dot_all)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|err| RuleError::Compile {
            name: name.to_string(),
            reason: err.to_string(),
        })
}
