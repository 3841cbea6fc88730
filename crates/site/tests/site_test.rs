//! End-to-end tests driving the real router against the repository's
//! templates, locales, and static assets.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use dnt_site::config::Config;
use dnt_site::state::AppState;

fn workspace_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(relative)
}

fn test_config() -> Config {
    Config {
        port: 0,
        templates_dir: workspace_path("templates"),
        static_dir: workspace_path("static"),
        locales_dir: workspace_path("locales"),
        site_url: "https://digitalnomadstaiwan.org".to_string(),
        default_language: "en".to_string(),
        cors_allowed_origins: vec!["*".to_string()],
        ga_measurement_id: None,
        gtm_container_id: None,
    }
}

fn test_app() -> Router {
    let state = AppState::new(&test_config()).expect("state should initialize from repo assets");
    dnt_site::build_router(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    get_with_headers(app, uri, &[]).await
}

async fn get_with_headers(
    app: Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, String) {
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn front_page_renders_in_english() {
    let (status, body) = get(test_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<html lang="en">"#));
    assert!(body.contains("Digital Nomads Taiwan"));
    assert!(body.contains("Work Remotely. Live in Taiwan."));
    // Stats from the home page.
    assert!(body.contains("900+"));
    assert!(body.contains("60+"));
}

#[tokio::test]
async fn front_page_carries_seo_metadata() {
    let (status, body) = get(test_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"rel="canonical" href="https://digitalnomadstaiwan.org/""#));
    assert!(body.contains(r#"hreflang="zh-Hant""#));
    assert!(body.contains(r#"hreflang="x-default""#));
    assert!(body.contains(r#""@type":"Organization""#));
    // No analytics ids configured, so no GA/GTM snippets.
    assert!(!body.contains("googletagmanager.com"));
}

#[tokio::test]
async fn zh_prefix_serves_traditional_chinese() {
    let (status, body) = get(test_app(), "/zh/positions").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<html lang="zh-Hant">"#));
    assert!(body.contains("社群活動總召"));
    assert!(body.contains("加入我們的團隊"));
}

#[tokio::test]
async fn accept_language_negotiates_chinese_without_prefix() {
    let (status, body) = get_with_headers(
        test_app(),
        "/",
        &[("accept-language", "zh-TW,zh;q=0.9,en;q=0.8")],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<html lang="zh-Hant">"#));
    assert!(body.contains("遠端工作，樂居台灣"));
}

#[tokio::test]
async fn positions_page_lists_all_eight_roles() {
    let (status, body) = get(test_app(), "/positions").await;
    assert_eq!(status, StatusCode::OK);
    for title in [
        "Community Event Organizer",
        "Marketing &amp; Sales",
        "Bilingual Host",
        "Reception Lead",
        "Photographer",
        "Short Video Producer",
        "F&amp;B Manager",
        "Event Assistant",
    ] {
        assert!(body.contains(title), "missing card title: {title}");
    }
}

#[tokio::test]
async fn priority_filter_follows_the_flag() {
    let (status, body) = get(test_app(), "/positions?filter=priority").await;
    assert_eq!(status, StatusCode::OK);
    // Three records carry the priority flag.
    assert!(body.contains("Community Event Organizer"));
    assert!(body.contains("Marketing &amp; Sales"));
    assert!(body.contains("Bilingual Host"));
    assert!(!body.contains("Photographer"));
    assert!(!body.contains("Event Assistant"));
}

#[tokio::test]
async fn search_with_no_match_shows_empty_state() {
    let (status, body) = get(test_app(), "/positions?q=zeppelin").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No positions found"));
    assert!(!body.contains("position-card"));
}

#[tokio::test]
async fn positions_json_priority_filter() {
    let (status, body) = get(test_app(), "/api/positions?filter=priority").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["filter"], "priority");
    assert_eq!(json["total"], 3);
    let ids: Vec<&str> = json["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["community-organizer", "marketing-sales", "bilingual-host"]);
}

#[tokio::test]
async fn positions_json_search_matches_chinese_title() {
    let (status, body) = get(test_app(), "/api/positions?q=%E6%94%9D%E5%BD%B1").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["results"][0]["id"], "photographer");
}

#[tokio::test]
async fn apply_page_preselects_known_position() {
    let (status, body) = get(test_app(), "/apply?position=photographer").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<option value="photographer" selected>"#));
}

#[tokio::test]
async fn apply_page_rejects_unknown_position() {
    let (status, _body) = get(test_app(), "/apply?position=astronaut").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn about_page_renders_in_both_languages() {
    let (status, body) = get(test_app(), "/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("About Us"));
    assert!(body.contains("Our Mission"));

    let (status, body) = get(test_app(), "/zh/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("關於我們"));
}

#[tokio::test]
async fn contact_page_renders_with_email_link() {
    let (status, body) = get(test_app(), "/contact").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Contact Us"));
    assert!(body.contains("mailto:hello@digitalnomadstaiwan.org"));
}

#[tokio::test]
async fn every_nav_link_resolves() {
    // Header and footer share this link set; none of them may dead-end.
    for link in dnt_site::menu::NavRegistry::builtin().links() {
        let (status, _body) = get(test_app(), link.path).await;
        assert_eq!(status, StatusCode::OK, "nav path {} should render", link.path);
    }
}

#[tokio::test]
async fn health_endpoint_reports_catalog_size() {
    let (status, body) = get(test_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["listings"], 8);
}

#[tokio::test]
async fn static_assets_are_served_with_mime_type() {
    let request = Request::builder()
        .uri("/static/site.css")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/css"
    );
}

#[tokio::test]
async fn static_route_rejects_path_traversal() {
    let (status, _body) = get(test_app(), "/static/..%2FCargo.toml").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _body) = get(test_app(), "/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
