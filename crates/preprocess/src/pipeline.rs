use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::Instant;

use tracing::{error, info, warn, Level};

use crate::registry::{registry, Registry};
use crate::rule::TextCleaner;
use crate::types::{ArticleIn, Outcome, StatusKind};

thread_local! {
    static IN_CLEANER: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Normalizes one article against the built-in registry.
///
/// Never fails: every problem is reported through the returned
/// [`Outcome`]'s status code, with the original content echoed back.
pub fn normalize(article: ArticleIn) -> Outcome {
    match registry() {
        Ok(registry) => normalize_with(registry, article),
        Err(err) => {
            warn!(source = %article.source, error = %err, "preprocess_failure");
            let message = format!("Preprocessor registry unavailable: {err}");
            Outcome::from_article(article, StatusKind::InternalError, message)
        }
    }
}

/// Normalizes one article against a caller-supplied registry.
///
/// Checks run in a fixed order: empty content first, then the source
/// lookup, then the cleaner itself.
pub fn normalize_with(registry: &Registry, article: ArticleIn) -> Outcome {
    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "preprocess.normalize",
        source = %article.source,
        content_len = article.content.len()
    );
    let _guard = span.enter();

    let outcome = normalize_inner(registry, article);

    let elapsed_micros = start.elapsed().as_micros();
    if outcome.is_success() {
        info!(
            status_code = outcome.status_code,
            cleaned_len = outcome.content.len(),
            elapsed_micros,
            "preprocess_success"
        );
    } else {
        warn!(
            status_code = outcome.status_code,
            status_message = %outcome.status_message,
            elapsed_micros,
            "preprocess_failure"
        );
    }
    outcome
}

fn normalize_inner(registry: &Registry, article: ArticleIn) -> Outcome {
    if article.content.trim().is_empty() {
        return Outcome::from_article(
            article,
            StatusKind::EmptyContent,
            "Content is empty or invalid",
        );
    }

    let Some(cleaner) = registry.lookup(&article.source) else {
        let message = format!("No preprocessor registered for source '{}'", article.source);
        return Outcome::from_article(article, StatusKind::UnknownSource, message);
    };

    match clean_guarded(cleaner, &article.content) {
        Ok(cleaned) => {
            let message = format!(
                "preprocessed successfully using {} preprocessor",
                article.source
            );
            Outcome::from_article(
                ArticleIn {
                    content: cleaned,
                    ..article
                },
                StatusKind::Success,
                message,
            )
        }
        Err(payload) => {
            let message = format!("Preprocessing failed: {}", panic_detail(payload.as_ref()));
            Outcome::from_article(article, StatusKind::PreprocessingFailed, message)
        }
    }
}

/// Runs a cleaner, turning a panic into `Err` with its payload.
///
/// Panics raised inside a cleaner are logged through `tracing` instead of
/// the default hook's stderr report. Panics anywhere else still reach the
/// hook that was installed before.
fn clean_guarded(cleaner: &dyn TextCleaner, text: &str) -> std::thread::Result<String> {
    install_quiet_hook();
    let outer = IN_CLEANER.with(|flag| flag.replace(true));
    let result = panic::catch_unwind(AssertUnwindSafe(|| cleaner.clean(text)));
    IN_CLEANER.with(|flag| flag.set(outer));
    result
}

fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if IN_CLEANER.with(Cell::get) {
                let location = info
                    .location()
                    .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                    .unwrap_or_default();
                error!(
                    detail = panic_detail(info.payload()),
                    location = %location,
                    "cleaner_panic"
                );
            } else {
                previous(info);
            }
        }));
    });
}

fn panic_detail(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "cleaner panicked"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Exploding;

    impl TextCleaner for Exploding {
        fn name(&self) -> &str {
            "exploding"
        }

        fn clean(&self, _text: &str) -> String {
            panic!("pattern engine gave up");
        }
    }

    fn article(content: &str, source: &str) -> ArticleIn {
        ArticleIn::new("Headline", content, "https://example.com/a", source)
    }

    #[test]
    fn success_message_names_the_source() {
        let outcome = normalize(article("Markets rose.(PTI)", "mint"));
        assert_eq!(outcome.status_code, 200);
        assert_eq!(outcome.content, "Markets rose.");
        assert_eq!(
            outcome.status_message,
            "preprocessed successfully using mint preprocessor"
        );
        assert_eq!(outcome.title, "Headline");
        assert_eq!(outcome.url, "https://example.com/a");
    }

    #[test]
    fn empty_check_precedes_source_lookup() {
        let outcome = normalize(article(" \n\t ", "Unknown Daily"));
        assert_eq!(outcome.kind(), Some(StatusKind::EmptyContent));
        assert_eq!(outcome.status_message, "Content is empty or invalid");
        assert_eq!(outcome.content, " \n\t ");
    }

    #[test]
    fn unknown_source_echoes_content() {
        let outcome = normalize(article("Some text.", "Unknown Daily"));
        assert_eq!(outcome.status_code, 1001);
        assert_eq!(
            outcome.status_message,
            "No preprocessor registered for source 'Unknown Daily'"
        );
        assert_eq!(outcome.content, "Some text.");
    }

    #[test]
    fn panicking_cleaner_reports_failure() {
        let registry = Registry::builder()
            .register("boom", Exploding)
            .expect("registers")
            .build();
        let outcome = normalize_with(&registry, article("Original body.", "boom"));
        assert_eq!(outcome.kind(), Some(StatusKind::PreprocessingFailed));
        assert_eq!(
            outcome.status_message,
            "Preprocessing failed: pattern engine gave up"
        );
        assert_eq!(outcome.content, "Original body.");
    }

    #[test]
    fn guarded_clean_resets_the_cleaner_flag() {
        assert!(clean_guarded(&Exploding, "text").is_err());
        assert!(!IN_CLEANER.with(Cell::get));

        let builtin = registry().expect("builtin registry compiles");
        let mint = builtin.lookup("mint").expect("mint registered");
        assert_eq!(
            clean_guarded(mint, "Rates held.(PTI)").expect("mint does not panic"),
            "Rates held."
        );
        assert!(!IN_CLEANER.with(Cell::get));
    }

    #[test]
    fn panics_outside_a_cleaner_still_unwind() {
        install_quiet_hook();
        let caught = panic::catch_unwind(|| panic!("outside"));
        assert_eq!(panic_detail(caught.unwrap_err().as_ref()), "outside");
        assert!(!IN_CLEANER.with(Cell::get));
    }

    #[test]
    fn content_emptied_by_cleaning_is_still_success() {
        let outcome = normalize(article("View Full Image", "mint"));
        assert_eq!(outcome.status_code, 200);
        assert_eq!(outcome.content, "");
    }
}
