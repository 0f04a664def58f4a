use shark_core::extractors::StubExtractor;
use shark_core::models::{DownloadRequest, Status};
use shark_core::platform::Platform;
use shark_core::quality::Quality;
use shark_core::relay::Relay;
use shark_transport_telegram::bot::media::plan_media_replies;
use shark_transport_telegram::relay_client::{RelayClient, RelayClientError};
use std::sync::Arc;
use std::time::Duration;

/// Serves the real relay router (stub adapters only) on an ephemeral port.
async fn spawn_relay() -> String {
    let relay = Relay::new(
        Arc::new(StubExtractor::twitter()),
        Arc::new(StubExtractor::tiktok()),
    );
    let app = shark_relay::routes::build_router(Arc::new(relay));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/")
}

fn client(base_url: &str) -> RelayClient {
    RelayClient::new(base_url, Duration::from_secs(5)).expect("client")
}

#[tokio::test]
async fn test_stats_round_trip() {
    let base_url = spawn_relay().await;
    let stats = client(&base_url).stats().await.expect("stats");
    assert_eq!((stats.total, stats.success, stats.failed), (0, 0, 0));
}

#[tokio::test]
async fn test_download_sends_platform_and_quality() {
    let base_url = spawn_relay().await;
    let request = DownloadRequest::new(
        "https://www.tiktok.com/@a/video/1",
        Quality::Video,
        Some(Platform::Tiktok),
    );
    let result = client(&base_url).download(&request).await.expect("download");
    assert_eq!(result.status, Status::Success);
    assert_eq!(result.platform, Some(Platform::Tiktok));
    assert_eq!(result.note.as_deref(), Some("tiktok_api_required"));
    assert!(plan_media_replies(&result).is_empty());
}

#[tokio::test]
async fn test_error_status_is_decoded_not_raised() {
    let base_url = spawn_relay().await;
    let request = DownloadRequest::new("https://vimeo.com/1", Quality::Hd, None);
    let result = client(&base_url).download(&request).await.expect("download");
    assert_eq!(result.status, Status::Error);
    assert_eq!(result.reason.as_deref(), Some("platform_unknown"));
}

#[tokio::test]
async fn test_unreachable_relay_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let result = client(&format!("http://{addr}")).stats().await;
    assert!(matches!(result, Err(RelayClientError::Network(_))));
}
