use crate::config::RelaySettings;
use crate::routes::build_router;
use shark_core::extractors::{GraphqlPostFetcher, InstagramExtractor, YoutubeExtractor, YtDlpFetcher};
use shark_core::relay::Relay;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Relay startup errors
#[derive(Debug, thiserror::Error)]
pub enum RelayServerError {
    /// `relay_bind` is not a socket address
    #[error("Invalid bind address: {0}")]
    InvalidBind(#[from] std::net::AddrParseError),
    /// HTTP client for Instagram could not be built
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    /// Listener or server failure
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Wires the production adapters from settings.
///
/// # Errors
///
/// Returns an error if the Instagram HTTP client cannot be built.
pub fn build_relay(settings: &RelaySettings) -> Result<Relay, RelayServerError> {
    let instagram = InstagramExtractor::new(GraphqlPostFetcher::new(settings.instagram_timeout())?);
    let youtube = YoutubeExtractor::new(YtDlpFetcher::new(
        settings.ytdlp_path.clone(),
        settings.ytdlp_timeout(),
    ));
    Ok(Relay::new(Arc::new(instagram), Arc::new(youtube)))
}

/// Binds `relay_bind` and serves until the process is stopped.
///
/// # Errors
///
/// Returns an error if wiring, binding or serving fails.
pub async fn serve(settings: &RelaySettings) -> Result<(), RelayServerError> {
    let addr: SocketAddr = settings.relay_bind.parse()?;
    let app = build_router(Arc::new(build_relay(settings)?));

    info!(address = %addr, "Starting relay server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
