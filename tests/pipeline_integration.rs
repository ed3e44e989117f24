use newsprep::{ArticleIn, StatusKind, process_article, registry};

fn article(content: &str, source: &str) -> ArticleIn {
    ArticleIn::new(
        "Test headline",
        content,
        "https://example.com/news/1",
        source,
    )
}

#[test]
fn mint_trailing_agency_credit_removed() {
    let outcome = process_article(article("Breaking news today.(PTI)", "mint"));
    assert_eq!(outcome.status_code, 200);
    assert_eq!(outcome.content, "Breaking news today.");
}

#[test]
fn sentence_boundary_repaired_for_every_source() {
    let registry = registry().expect("builtin registry compiles");
    for source in registry.sources() {
        let outcome = process_article(article("He said it ended.The next day began.", source));
        assert_eq!(outcome.kind(), Some(StatusKind::Success), "{source}");
        assert_eq!(
            outcome.content, "He said it ended. The next day began.",
            "{source}"
        );
    }
}

#[test]
fn ndtv_devanagari_lines_dropped_and_paragraphs_joined() {
    let raw = "The Assembly session opened on Monday.\n\
               \u{0935}\u{093F}\u{0927}\u{093E}\u{0928}\u{0938}\u{092D}\u{093E} \u{0938}\u{0924}\u{094D}\u{0930}\n\
               Opposition members staged a walkout.\n\
               \u{0938}\u{0926}\u{0928} \u{0938}\u{094D}\u{0925}\u{0917}\u{093F}\u{0924}\n\
               The Speaker adjourned the House.";
    let outcome = process_article(article(raw, "ndtv.com"));

    assert_eq!(outcome.status_code, 200);
    assert_eq!(
        outcome.content,
        "The Assembly session opened on Monday. Opposition members staged a walkout. \
         The Speaker adjourned the House."
    );
    assert!(
        !outcome
            .content
            .chars()
            .any(|ch| ('\u{0900}'..='\u{097F}').contains(&ch))
    );
}

#[test]
fn india_today_editions_share_behavior() {
    let raw = "Floods hit Assam again.\n\nTo support our brand, donate.\nThank you.";
    let main = process_article(article(raw, "India Today"));
    let ne = process_article(article(raw, "India Today NE"));
    assert_eq!(main.content, "Floods hit Assam again.");
    assert_eq!(main.content, ne.content);
    assert_eq!(
        ne.status_message,
        "preprocessed successfully using India Today NE preprocessor"
    );
}

#[test]
fn mint_structured_article() {
    let raw = "Mumbai (Maharashtra):\n\
               The Sensex closed higher on Friday.\n\
               View Full Image\n\
               Photo: Bloomberg\n\
               (Prices as per IST 3 pm)\n\
               Banks led the gains.\n\
               Write to Asha Rao at asha.rao@livemint.com";
    let outcome = process_article(article(raw, "mint"));
    assert_eq!(
        outcome.content,
        "The Sensex closed higher on Friday. Banks led the gains."
    );
}

#[test]
fn indian_express_ad_marker_and_credit() {
    let raw = "The court adjourned the case.Story continues below this adThe hearing resumes \
               next week. (With PTI inputs)";
    let outcome = process_article(article(raw, "The Indian Express"));
    assert_eq!(
        outcome.content,
        "The court adjourned the case. The hearing resumes next week."
    );
}

#[test]
fn economic_times_widget_label() {
    let outcome = process_article(article(
        "Nifty gained 1%.Live EventsAnalysts expect more.",
        "The Economic Times",
    ));
    assert_eq!(outcome.content, "Nifty gained 1%. Analysts expect more.");
}

#[test]
fn quint_hashtags_and_scroll_credit() {
    let quint = process_article(article(
        "The verdict was welcomed by activists. #Justice #SupremeCourt",
        "TheQuint",
    ));
    assert_eq!(quint.content, "The verdict was welcomed by activists.");

    let scroll = process_article(article(
        "\u{2014} The bill was passed on Friday \u{2014} PTI",
        "Scroll.in",
    ));
    assert_eq!(scroll.content, "The bill was passed on Friday");
}

#[test]
fn ndli_metadata_fields_removed() {
    let outcome = process_article(article(
        "Publisher: Springer\nThe study surveys monsoon variability.\nISSN: 1234-5678",
        "ndl.iitkgp.ac.in",
    ));
    assert_eq!(outcome.content, "The study surveys monsoon variability.");
}

#[test]
fn identifying_fields_pass_through_on_success() {
    let outcome = process_article(article("Rates were cut. Read More", "Moneycontrol"));
    assert_eq!(outcome.content, "Rates were cut.");
    assert_eq!(outcome.title, "Test headline");
    assert_eq!(outcome.url, "https://example.com/news/1");
    assert_eq!(outcome.source, "Moneycontrol");

    let payload = outcome.downstream_payload().expect("success has payload");
    assert_eq!(payload.content, "Rates were cut.");
    assert_eq!(payload.url, "https://example.com/news/1");
}
