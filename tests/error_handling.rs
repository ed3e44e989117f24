use newsprep::{
    ArticleIn, Registry, RuleError, StatusKind, TextCleaner, normalize, normalize_with,
    process_article,
};

fn article(content: &str, source: &str) -> ArticleIn {
    ArticleIn::new("Headline", content, "https://example.com/a", source)
}

#[test]
fn empty_content_is_reported_with_content_echoed() {
    let outcome = process_article(article("", "mint"));
    assert_eq!(outcome.kind(), Some(StatusKind::EmptyContent));
    assert_eq!(outcome.status_code, 1003);
    assert_eq!(outcome.content, "");
    assert!(outcome.downstream_payload().is_none());
}

#[test]
fn whitespace_only_content_counts_as_empty() {
    let outcome = process_article(article("\n\t  \r\n", "ndtv.com"));
    assert_eq!(outcome.status_code, 1003);
    assert_eq!(outcome.content, "\n\t  \r\n");
}

#[test]
fn unknown_source_leaves_content_untouched() {
    let outcome = process_article(article("Some text", "UnknownPaper"));
    assert_eq!(outcome.kind(), Some(StatusKind::UnknownSource));
    assert_eq!(outcome.content, "Some text");
    assert_eq!(
        outcome.status_message,
        "No preprocessor registered for source 'UnknownPaper'"
    );
}

#[test]
fn source_identifiers_are_not_normalized() {
    for source in ["Mint", "MINT", " mint", "mint ", "india today", "NDTV.com", ""] {
        let outcome = normalize(article("Text (PTI).", source));
        assert_eq!(outcome.status_code, 1001, "{source:?} should be unknown");
        assert_eq!(outcome.content, "Text (PTI).");
    }
}

#[test]
fn empty_and_unknown_are_distinct_kinds() {
    let empty = normalize(article(" ", "UnknownPaper"));
    let unknown = normalize(article("x", "UnknownPaper"));
    assert_ne!(empty.kind(), unknown.kind());
    assert_eq!(empty.kind(), Some(StatusKind::EmptyContent));
}

struct Failing;

impl TextCleaner for Failing {
    fn name(&self) -> &str {
        "failing"
    }

    fn clean(&self, text: &str) -> String {
        let half = &text[..text.len() / 2];
        panic!("cannot clean {half:?}");
    }
}

#[test]
fn cleaner_panic_becomes_preprocessing_failed() {
    let registry = Registry::builder()
        .register("flaky", Failing)
        .expect("registers")
        .build();

    let outcome = normalize_with(&registry, article("Original body", "flaky"));
    assert_eq!(outcome.kind(), Some(StatusKind::PreprocessingFailed));
    assert_eq!(outcome.status_code, 1002);
    assert_eq!(outcome.content, "Original body");
    assert_eq!(outcome.title, "Headline");
    assert!(outcome.status_message.starts_with("Preprocessing failed: "));
    assert!(outcome.status_message.contains("Origin"));
}

#[test]
fn custom_registry_does_not_see_builtin_sources() {
    let registry = Registry::builder()
        .register("flaky", Failing)
        .expect("registers")
        .build();
    let outcome = normalize_with(&registry, article("Body.", "mint"));
    assert_eq!(outcome.status_code, 1001);
}

#[test]
fn duplicate_registration_is_rejected() {
    let result = Registry::builder()
        .register("flaky", Failing)
        .and_then(|builder| builder.register("flaky", Failing));
    assert!(matches!(result, Err(RuleError::DuplicateSource(ref s)) if s == "flaky"));
}
