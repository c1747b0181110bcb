mod common;

use carddex_engine::{card_id, record_filename, resolve_image, ExtractError};
use common::{page_from, PAGE_URL};
use url::Url;

const TRAP: &str = include_str!("fixtures/trap.html");

fn page_url() -> Url {
    Url::parse(PAGE_URL).unwrap()
}

#[test]
fn image_url_resolves_against_the_page_url() {
    let page = page_from(TRAP);
    let (url, reference) = resolve_image(&page).unwrap();
    assert_eq!(
        url.as_str(),
        "https://www.ka-nabell.com/images/card/100000301_1.jpg"
    );
    assert_eq!(reference.filename(), "100000301_1.jpg");
}

#[test]
fn image_filename_is_bare_and_keeps_the_extension() {
    let markup = r#"<img id="detail_def_img" src="https://cdn.example.com/cards/deep/path/42.png" alt="x">"#;
    let page = page_from(markup);
    let (url, reference) = resolve_image(&page).unwrap();
    assert_eq!(url.as_str(), "https://cdn.example.com/cards/deep/path/42.png");
    assert_eq!(reference.filename(), "42.png");
    assert!(!reference.filename().contains('/'));
}

#[test]
fn page_without_a_detail_image_is_an_extraction_error() {
    let page = page_from("<html><body><p>nothing</p></body></html>");
    let err = resolve_image(&page).unwrap_err();
    assert!(
        matches!(err, ExtractError::MissingField { field: "card image", .. }),
        "got {err:?}"
    );
}

#[test]
fn record_filename_comes_from_the_sanitized_name() {
    let name = record_filename("聖なるバリア －ミラーフォース－", &page_url());
    assert_eq!(name, "聖なるバリア_－ミラーフォース－.ts");
    // Deterministic across calls.
    assert_eq!(
        name,
        record_filename("聖なるバリア －ミラーフォース－", &page_url())
    );
}

#[test]
fn forbidden_characters_become_underscores() {
    assert_eq!(record_filename("A:B/C?", &page_url()), "A_B_C.ts");
    assert_eq!(record_filename("a  b", &page_url()), "a_b.ts");
}

#[test]
fn unusable_names_fall_back_to_the_page_id() {
    assert_eq!(record_filename("", &page_url()), "card_100043950.ts");
    assert_eq!(record_filename("???", &page_url()), "card_100043950.ts");
}

#[test]
fn long_names_are_truncated_without_splitting_characters() {
    let name: String = "ド".repeat(200);
    let file = record_filename(&name, &page_url());
    assert_eq!(file, format!("{}.ts", "ド".repeat(60)));
}

#[test]
fn card_id_reads_the_numeric_query_parameter() {
    assert_eq!(card_id(&page_url()), Some("100043950".to_string()));
    let no_id = Url::parse("https://www.ka-nabell.com/?act=sell_detail").unwrap();
    assert_eq!(card_id(&no_id), None);
    let bad_id = Url::parse("https://www.ka-nabell.com/?act=sell_detail&id=abc").unwrap();
    assert_eq!(card_id(&bad_id), None);
}
