//! Pattern fragments shared by several rule sets.
//!
//! Everything here is a regex *source string*; rule sets place the fragments
//! in their own alternations so each cleaner still compiles to a single
//! pattern. All rule sets compile case-insensitively.

/// Any character outside printable ASCII, ASCII whitespace and the four
/// curly quotes. Mirrors [`crate::is_permitted_char`] for cleaners that fold
/// character restriction into their alternation. Case folding is switched off
/// inside the class so that look-alikes such as the Kelvin sign still match.
pub const NON_ASCII: &str = r"(?-i:[^\t-\r -~‘’“”])";

/// Whitespace followed by a token carrying a scheme marker, a common TLD or
/// a social platform name. The leading whitespace is part of the match so
/// that removal does not leave a double space behind.
pub const URL_TOKEN: &str = r"\s\S*(?:https?|\.com|\.in|\.org|\.gov|twitter)\S*";

/// [`URL_TOKEN`] extended with more hosts and shorteners.
pub const URL_TOKEN_EXTENDED: &str = r"\s\S*(?:https?://|www\.|\.com|\.in|\.org|\.net|\.gov|twitter|facebook|instagram|youtube|t\.co|bit\.ly)\S*";

/// Month names for dated promos.
pub const MONTHS: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";

/// Wire services credited by most sources.
pub const WIRE_AGENCIES: &[&str] = &["PTI", "ANI", "Reuters", "AFP", "AP"];

/// `#watch` followed, lazily and across lines, by a `Month D, YYYY` date.
pub fn watch_promo() -> String {
    format!(r"#watch.*?\b(?:{MONTHS})\s+\d{{1,2}},\s*\d{{4}}")
}

/// A parenthetical whose content mentions one of `keywords`. The whole
/// parenthetical, brackets included, is matched.
pub fn editorial_parenthetical(keywords: &[&str]) -> String {
    format!(r"\([^)]*(?:{})[^)]*\)", keywords.join("|"))
}

/// A parenthetical that mentions "inputs", e.g. `(With inputs from agencies)`.
pub const INPUTS_PARENTHETICAL: &str = r"\((?:\w+\s)*inputs(?:\s\w+)*.*?\)";

/// A bare or parenthesised agency credit, optionally prefixed by
/// "with inputs from", or an em-dash sign-off such as `— PTI`.
pub fn agency_credit(agencies: &[&str]) -> String {
    let names = agencies.join("|");
    format!(r"\(?(?:with\s+inputs\s+from\s+)?\b(?:{names})\b\)?|—\s*(?:{names})\b")
}

/// Generic reader prompts: "Also Read:", "Watch ...", "Follow us on ...",
/// matched from the verb up to the next sentence terminator.
pub const READER_PROMPT: &str = r"\b(?:Also\s+Read|Read\s+more|Read|Watch|Subscribe|Sign\s+up|Join\s+our\s+Telegram|Follow\s+us\s+on|Download\s+the\s+app)[:\s][^.?!]*";

#[cfg(test)]
mod tests {
    use regex::RegexBuilder;

    use super::*;

    fn compile(pattern: &str) -> regex::Regex {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .expect("fragment compiles")
    }

    #[test]
    fn url_token_takes_preceding_space() {
        let re = compile(URL_TOKEN);
        assert_eq!(
            re.replace_all("see https://x.co/a now", ""),
            "see now"
        );
        assert_eq!(re.replace_all("visit www.site.com today", ""), "visit today");
        assert_eq!(re.replace_all("plain words only", ""), "plain words only");
    }

    #[test]
    fn editorial_parenthetical_matches_keyword_substring() {
        let re = compile(&editorial_parenthetical(&["photo", "pti"]));
        assert_eq!(re.replace_all("Crowds (Photo: Reuters) gathered", ""), "Crowds  gathered");
        assert_eq!(re.replace_all("Talks (PTI File) ended", ""), "Talks  ended");
        assert_eq!(re.replace_all("The (new) rule", ""), "The (new) rule");
    }

    #[test]
    fn agency_credit_respects_word_boundaries() {
        let re = compile(&agency_credit(WIRE_AGENCIES));
        assert_eq!(re.replace_all("It will happen soon (AP)", ""), "It will happen soon ");
        assert_eq!(re.replace_all("said the minister — PTI", ""), "said the minister ");
        assert_eq!(re.replace_all("with inputs from Reuters", ""), "");
        assert_eq!(re.replace_all("a capital idea", ""), "a capital idea");
    }

    #[test]
    fn watch_promo_spans_lines_to_date() {
        let re = compile(&watch_promo());
        assert_eq!(
            re.replace_all("Intro. #WATCH | Visuals from\nthe site. March 3, 2024 Then more.", ""),
            "Intro.  Then more."
        );
    }

    #[test]
    fn non_ascii_class_spares_quotes() {
        let re = compile(NON_ASCII);
        assert_eq!(re.replace_all("“Rs ₹5” naïve", ""), "“Rs 5” nave");
    }

    #[test]
    fn reader_prompt_requires_word_start() {
        let re = compile(READER_PROMPT);
        assert_eq!(re.replace_all("Spread the word. Read: more here. End", ""), "Spread the word. . End");
        assert_eq!(re.replace_all("Already done.", ""), "Already done.");
    }
}
