use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use msgscan_core::{server, Config, ContactService, ProviderKind};

fn test_server(kind: ProviderKind) -> TestServer {
    let config = Config {
        qr_provider: kind,
        ..Config::default()
    };
    let service = Arc::new(ContactService::new(config));
    TestServer::new(server::router(service)).unwrap()
}

fn decode_qr(png: &[u8]) -> String {
    let image = image::load_from_memory(png).unwrap().to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        image.width() as usize,
        image.height() as usize,
        |x, y| image.get_pixel(x as u32, y as u32)[0],
    );
    let grids = prepared.detect_grids();
    let (_, content) = grids[0].decode().unwrap();
    content
}

#[tokio::test]
async fn test_page_local_provider() {
    let server = test_server(ProviderKind::LocalGeneration);

    let response = server.get("/").await;
    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let html = response.text();
    assert!(html.contains("Message Scanning Project"));
    assert!(html.contains("href=\"https://wa.me/15551540430\""));
    assert!(html.contains("data:image/png;base64,"));
}

#[tokio::test]
async fn test_page_remote_provider() {
    let server = test_server(ProviderKind::RemoteDelegation);

    let html = server.get("/").await.text();
    assert!(html.contains(
        "https://api.qrserver.com/v1/create-qr-code/?size=200x200&amp;data=https%3A%2F%2Fwa.me%2F15551540430"
    ));
    assert!(html.contains("this.src='/qr.png'"));
}

#[tokio::test]
async fn test_qr_png_decodes_to_deep_link() {
    let server = test_server(ProviderKind::RemoteDelegation);

    let response = server.get("/qr.png").await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(decode_qr(response.as_bytes()), "https://wa.me/15551540430");
}

#[tokio::test]
async fn test_qr_follows_configured_provider() {
    let local = test_server(ProviderKind::LocalGeneration).get("/qr").await;
    local.assert_status_ok();
    assert_eq!(local.header("content-type"), "image/png");
    assert!(!local.as_bytes().is_empty());

    let remote = test_server(ProviderKind::RemoteDelegation).get("/qr").await;
    remote.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        remote.header("location"),
        "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=https%3A%2F%2Fwa.me%2F15551540430"
    );
}

#[tokio::test]
async fn test_qr_svg() {
    let response = test_server(ProviderKind::LocalGeneration).get("/qr.svg").await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/svg+xml");
    assert!(response.text().contains("<svg"));
}

#[tokio::test]
async fn test_link_json() {
    let response = test_server(ProviderKind::RemoteDelegation).get("/link").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["phone_number"], "+15551540430");
    assert_eq!(body["deep_link"], "https://wa.me/15551540430");
    assert_eq!(body["provider"], "remote");
}

#[tokio::test]
async fn test_health() {
    let response = test_server(ProviderKind::LocalGeneration).get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.header("cache-control"), "no-store, no-cache, must-revalidate");

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "up");
}

#[tokio::test]
async fn test_health_uptime_counts_from_startup() {
    let server = test_server(ProviderKind::LocalGeneration);
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let body: serde_json::Value = server.get("/health").await.json();
    assert!(body["uptime"].as_u64().unwrap() >= 1);
}

#[tokio::test]
async fn test_unknown_route() {
    let response = test_server(ProviderKind::LocalGeneration).get("/dashboard").await;
    response.assert_status(StatusCode::NOT_FOUND);
}
