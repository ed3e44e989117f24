//! Steps every cleaner runs after its source-specific deletions.
//!
//! In order:
//!
//! 1. [`restrict_charset`]: drop everything outside printable ASCII except
//!    the typographic quotes (only for cleaners that ask for it after
//!    deletion; others fold the same class into their alternation).
//! 2. [`collapse_whitespace`]: one space between words, none at the edges.
//! 3. [`repair_sentence_boundaries`]: `"ended.Next"` becomes `"ended. Next"`.
//!
//! [`tidy_punctuation`] and [`strip_leading_bullet`] are extra steps used by
//! the cleaners that have no character restriction.
//!
//! # Examples
//!
//! ```rust
//! use preprocess::{collapse_whitespace, repair_sentence_boundaries};
//!
//! let text = collapse_whitespace("  It rained.\n\nThe match   ended.Fans left. ");
//! assert_eq!(repair_sentence_boundaries(&text), "It rained. The match ended. Fans left.");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Typographic quotes that survive character restriction.
pub const PERMITTED_QUOTES: [char; 4] = ['\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Returns true if `ch` survives [`restrict_charset`].
///
/// ASCII whitespace is kept so that [`collapse_whitespace`] can turn it
/// into single spaces afterwards.
pub fn is_permitted_char(ch: char) -> bool {
    matches!(ch, ' '..='~') || matches!(ch, '\t'..='\r') || PERMITTED_QUOTES.contains(&ch)
}

/// Deletes every character outside printable ASCII, keeping ASCII whitespace
/// and the four curly quotes.
///
/// ```rust
/// use preprocess::restrict_charset;
///
/// assert_eq!(restrict_charset("caf\u{e9} \u{201C}ok\u{201D}"), "caf \u{201C}ok\u{201D}");
/// ```
pub fn restrict_charset(text: &str) -> String {
    text.chars().filter(|&ch| is_permitted_char(ch)).collect()
}

/// Collapses repeated whitespace, trims edges, and normalizes newlines to
/// single spaces.
///
/// Whitespace is Unicode whitespace, so tabs, carriage returns and
/// non-breaking spaces all count as delimiters.
///
/// ```rust
/// use preprocess::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  hello \t\n  world  "), "hello world");
/// assert_eq!(collapse_whitespace("   \n\t   "), "");
/// assert_eq!(collapse_whitespace("hello\u{00A0}world"), "hello world");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Inserts a space between a sentence terminator and the next sentence when
/// boilerplate removal glued them together.
///
/// Only fires for an ASCII lowercase letter, then `.`, `!` or `?`, then an
/// ASCII uppercase letter. Abbreviations such as `U.S.A` and decimals are
/// left alone.
///
/// ```rust
/// use preprocess::repair_sentence_boundaries;
///
/// assert_eq!(
///     repair_sentence_boundaries("He said it ended.The next day began."),
///     "He said it ended. The next day began."
/// );
/// assert_eq!(repair_sentence_boundaries("U.S.A and 3.5"), "U.S.A and 3.5");
/// ```
pub fn repair_sentence_boundaries(text: &str) -> String {
    let mut repaired = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        repaired.push(ch);
        let terminal = matches!(ch, '.' | '!' | '?');
        if terminal
            && prev.is_some_and(|p| p.is_ascii_lowercase())
            && chars.peek().is_some_and(|next| next.is_ascii_uppercase())
        {
            repaired.push(' ');
        }
        prev = Some(ch);
    }
    repaired
}

static DASH_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\s*[–—-]\s*){2,}").expect("DASH_RUN regex"));

static EMPTY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)|\[\s*\]").expect("EMPTY_BRACKETS regex"));

static LEADING_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[•\-–—]\s*)+").expect("LEADING_BULLET regex"));

/// Folds runs of dashes left behind by deletions into a single ` — ` and
/// removes brackets that deletion emptied.
///
/// ```rust
/// use preprocess::tidy_punctuation;
///
/// assert_eq!(tidy_punctuation("Delhi - - report ( ) ends"), "Delhi — report  ends");
/// ```
pub fn tidy_punctuation(text: &str) -> String {
    let folded = DASH_RUN.replace_all(text, " — ");
    EMPTY_BRACKETS.replace_all(&folded, "").into_owned()
}

/// Removes the run of bullets and dashes opening the text, with the
/// whitespace between them.
pub fn strip_leading_bullet(text: &str) -> String {
    LEADING_BULLET.replace(text, "").into_owned()
}
