use std::time::Duration;

use carddex_engine::{ContentKind, FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new(FetchSettings {
        courtesy_delay: Duration::ZERO,
        ..FetchSettings::default()
    })
}

#[tokio::test]
async fn fetches_markup_and_reports_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>ok</html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/page", server.uri());
    let output = fetcher().fetch(&url, ContentKind::Markup).await.unwrap();
    assert_eq!(output.bytes, b"<html>ok</html>");
    assert_eq!(output.metadata.final_url, url);
    assert_eq!(output.metadata.redirect_count, 0);
    assert_eq!(
        output.metadata.content_type.as_deref(),
        Some("text/html; charset=utf-8")
    );
    assert_eq!(output.metadata.byte_len, 15);
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let server = MockServer::start().await;
    let url = format!("{}/missing", server.uri());
    let err = fetcher()
        .fetch(&url, ContentKind::Markup)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn invalid_url_is_rejected_before_any_request() {
    let err = fetcher()
        .fetch("not a url", ContentKind::Markup)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn slow_responses_time_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html>ok</html>", "text/html")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        courtesy_delay: Duration::ZERO,
        ..FetchSettings::default()
    };
    let url = format!("{}/slow", server.uri());
    let err = ReqwestFetcher::new(settings)
        .fetch(&url, ContentKind::Markup)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_bodies_are_refused() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/big"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(vec![b'x'; 64 * 1024], "text/html"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 1024,
        courtesy_delay: Duration::ZERO,
        ..FetchSettings::default()
    };
    let url = format!("{}/big", server.uri());
    let err = ReqwestFetcher::new(settings)
        .fetch(&url, ContentKind::Markup)
        .await
        .unwrap_err();
    assert!(
        matches!(err.kind, FailureKind::TooLarge { max_bytes: 1024, .. }),
        "got {:?}",
        err.kind
    );
}

#[tokio::test]
async fn markup_fetch_refuses_an_image_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(&b"\xff\xd8"[..], "image/jpeg"))
        .mount(&server)
        .await;

    let url = format!("{}/card.jpg", server.uri());
    let err = fetcher()
        .fetch(&url, ContentKind::Markup)
        .await
        .unwrap_err();
    assert!(
        matches!(err.kind, FailureKind::UnsupportedContentType { ref content_type } if content_type == "image/jpeg"),
        "got {:?}",
        err.kind
    );
}

#[tokio::test]
async fn image_fetch_accepts_any_image_subtype() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(&b"\x89PNG"[..], "image/png"))
        .mount(&server)
        .await;

    let url = format!("{}/card.png", server.uri());
    let output = fetcher().fetch(&url, ContentKind::Image).await.unwrap();
    assert_eq!(output.bytes, b"\x89PNG");
}

#[tokio::test]
async fn image_fetch_refuses_a_markup_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/card.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let url = format!("{}/card.jpg", server.uri());
    let err = fetcher().fetch(&url, ContentKind::Image).await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::UnsupportedContentType { .. }
    ));
}
