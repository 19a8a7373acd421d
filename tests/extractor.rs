mod common;

use adrenaline_digest::errors::FetchError;
use adrenaline_digest::scrapers::{self, adrenaline};
use httpmock::{Method::GET, MockServer};

#[tokio::test]
async fn extracts_articles_from_listing_fixture() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/games/");
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(common::read_fixture("games_listing.html"));
    });

    let client = scrapers::http_client().unwrap();
    let articles = adrenaline::fetch_articles(&client, &server.url("/games/"))
        .await
        .unwrap();

    mock.assert();

    // 6 feed items in the fixture, one without a link and one without a
    // title; the rest come back in page order.
    assert_eq!(articles.len(), 4);
    assert_eq!(
        articles[0].title,
        "PlayStation 6 rumors point to 2028 launch window"
    );
    assert_eq!(
        articles[0].link,
        "https://www.adrenaline.com.br/games/playstation-6-rumors/"
    );
    assert_eq!(articles[0].date, "05/08/2026");
    assert_eq!(articles[1].link, "/games/gta-online-summer-update/");
    assert_eq!(articles[3].title, "CBLOL finals break streaming records");
    assert!(articles.iter().all(|a| !a.title.is_empty() && !a.link.is_empty()));
}

#[tokio::test]
async fn sends_browser_headers() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/games/")
            .header("user-agent", scrapers::BROWSER_USER_AGENT)
            .header("accept", scrapers::BROWSER_ACCEPT)
            .header("accept-language", scrapers::BROWSER_ACCEPT_LANGUAGE);
        then.status(200)
            .header("content-type", "text/html")
            .body("<html><body></body></html>");
    });

    let client = scrapers::http_client().unwrap();
    let articles = adrenaline::fetch_articles(&client, &server.url("/games/"))
        .await
        .unwrap();

    mock.assert();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn caps_extraction_at_ten_articles() {
    let mut items = String::new();
    for i in 0..15 {
        items.push_str(&format!(
            "<article class=\"feed\"><h2>Story {i}</h2>\
             <a href=\"/games/story-{i}/\">Story {i}</a></article>"
        ));
    }
    let page = format!("<html><body>{items}</body></html>");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/games/");
        then.status(200).header("content-type", "text/html").body(page);
    });

    let client = scrapers::http_client().unwrap();
    let articles = adrenaline::fetch_articles(&client, &server.url("/games/"))
        .await
        .unwrap();

    assert_eq!(articles.len(), adrenaline::MAX_ARTICLES);
    assert_eq!(articles[0].title, "Story 0");
    assert_eq!(articles[9].title, "Story 9");
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/games/");
        then.status(503).body("upstream unavailable");
    });

    let client = scrapers::http_client().unwrap();
    let err = adrenaline::fetch_articles(&client, &server.url("/games/"))
        .await
        .unwrap_err();

    match err {
        FetchError::Status { status, url } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/games/"));
        }
        other => panic!("expected status error, got: {other}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Nothing listens on this port.
    let client = scrapers::http_client().unwrap();
    let err = adrenaline::fetch_articles(&client, "http://127.0.0.1:1/games/")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Http(_)));
}

#[tokio::test]
async fn page_without_feed_items_is_a_successful_empty_result() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/games/");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html><body><div class=\"redesigned-layout\"></div></body></html>");
    });

    let client = scrapers::http_client().unwrap();
    let articles = adrenaline::fetch_articles(&client, &server.url("/games/"))
        .await
        .unwrap();

    assert!(articles.is_empty());
}
