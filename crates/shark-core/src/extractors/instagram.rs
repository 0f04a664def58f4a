use super::Extractor;
use crate::error::ExtractionError;
use crate::models::{Extraction, MediaItem};
use crate::quality::Quality;
use async_trait::async_trait;
use lazy_regex::regex_captures;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum caption length kept in results (characters, not bytes)
pub const CAPTION_LIMIT: usize = 200;

const GRAPHQL_URL: &str = "https://www.instagram.com/graphql/query/";
/// Query hash of the public "post by shortcode" GraphQL query
const POST_QUERY_HASH: &str = "2b0673e0dc4580674a88d426fe00ea90";
const IG_APP_ID: &str = "936619743392459";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// One media node of a post (the post itself, or a sidecar child).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstagramNode {
    /// Whether the node is a video
    pub is_video: bool,
    /// Direct video URL, set for videos
    pub video_url: Option<String>,
    /// Display image URL (thumbnail for videos)
    pub display_url: String,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
}

/// Post metadata returned by a [`PostFetcher`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstagramPost {
    /// Full caption text
    pub caption: Option<String>,
    /// Like count
    pub likes: u64,
    /// Media nodes in display order
    pub nodes: Vec<InstagramNode>,
}

/// Source of Instagram post metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostFetcher: Send + Sync {
    /// Fetch the post identified by `shortcode`.
    async fn fetch_post(&self, shortcode: &str) -> Result<InstagramPost, ExtractionError>;
}

/// Pulls the shortcode out of `/p/<code>`, `/reel/<code>` or `/tv/<code>`.
///
/// # Examples
///
/// ```
/// use shark_core::extractors::instagram::extract_shortcode;
/// assert_eq!(extract_shortcode("https://www.instagram.com/reel/Cx_1-a/"), Some("Cx_1-a"));
/// assert_eq!(extract_shortcode("https://www.instagram.com/nasa/"), None);
/// ```
#[must_use]
pub fn extract_shortcode(url: &str) -> Option<&str> {
    regex_captures!(r"(?:/p/|/reel/|/tv/)([a-zA-Z0-9_-]+)", url).map(|(_, code)| code)
}

fn truncate_caption(caption: &str) -> String {
    caption.chars().take(CAPTION_LIMIT).collect()
}

/// Maps post metadata to the common result shape.
#[must_use]
pub fn normalize_post(post: InstagramPost) -> Extraction {
    let media = post
        .nodes
        .into_iter()
        .map(|node| match node.video_url {
            Some(video_url) if node.is_video => MediaItem::video(
                video_url,
                Some(format!("{}x{}", node.width, node.height)),
            ),
            _ => MediaItem::image(node.display_url),
        })
        .collect();

    Extraction {
        media,
        caption: Some(post.caption.as_deref().map(truncate_caption).unwrap_or_default()),
        likes: Some(post.likes),
        ..Extraction::default()
    }
}

/// Instagram adapter.
pub struct InstagramExtractor<F> {
    fetcher: F,
}

impl<F: PostFetcher> InstagramExtractor<F> {
    /// Wraps a post fetcher.
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl<F: PostFetcher> Extractor for InstagramExtractor<F> {
    async fn extract(&self, url: &str, _quality: Quality) -> Result<Extraction, ExtractionError> {
        let Some(shortcode) = extract_shortcode(url) else {
            debug!(url = %url, "No Instagram shortcode in URL");
            return Err(ExtractionError::InvalidUrl);
        };

        debug!(shortcode = %shortcode, "Fetching Instagram post");
        let post = self.fetcher.fetch_post(shortcode).await?;
        Ok(normalize_post(post))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GraphQL collaborator
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<GraphqlData>,
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    #[serde(alias = "xdt_shortcode_media")]
    shortcode_media: Option<ShortcodeMedia>,
}

#[derive(Debug, Default, Deserialize)]
struct Dimensions {
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
}

#[derive(Debug, Deserialize)]
struct MediaNode {
    #[serde(default)]
    is_video: bool,
    video_url: Option<String>,
    display_url: String,
    #[serde(default)]
    dimensions: Dimensions,
}

impl From<MediaNode> for InstagramNode {
    fn from(node: MediaNode) -> Self {
        Self {
            is_video: node.is_video,
            video_url: node.video_url,
            display_url: node.display_url,
            width: node.dimensions.width,
            height: node.dimensions.height,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Edges<T> {
    edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Debug, Deserialize)]
struct CaptionNode {
    text: String,
}

#[derive(Debug, Deserialize)]
struct Count {
    count: u64,
}

#[derive(Debug, Deserialize)]
struct ShortcodeMedia {
    #[serde(flatten)]
    node: MediaNode,
    edge_sidecar_to_children: Option<Edges<MediaNode>>,
    edge_media_to_caption: Option<Edges<CaptionNode>>,
    edge_media_preview_like: Option<Count>,
    edge_liked_by: Option<Count>,
}

impl ShortcodeMedia {
    fn into_post(self) -> InstagramPost {
        let caption = self
            .edge_media_to_caption
            .and_then(|c| c.edges.into_iter().next())
            .map(|edge| edge.node.text);
        let likes = self
            .edge_media_preview_like
            .or(self.edge_liked_by)
            .map_or(0, |c| c.count);

        let nodes = match self.edge_sidecar_to_children {
            Some(children) if !children.edges.is_empty() => children
                .edges
                .into_iter()
                .map(|edge| edge.node.into())
                .collect(),
            _ => vec![self.node.into()],
        };

        InstagramPost {
            caption,
            likes,
            nodes,
        }
    }
}

fn parse_graphql_body(body: &str) -> Result<InstagramPost, ExtractionError> {
    let response: GraphqlResponse = serde_json::from_str(body)
        .map_err(|e| ExtractionError::Failure(format!("Invalid Instagram response: {e}")))?;
    response
        .data
        .and_then(|d| d.shortcode_media)
        .map(ShortcodeMedia::into_post)
        .ok_or_else(|| ExtractionError::Failure("Post not found".to_string()))
}

/// Fetches post metadata from Instagram's public GraphQL endpoint.
pub struct GraphqlPostFetcher {
    client: reqwest::Client,
}

impl GraphqlPostFetcher {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PostFetcher for GraphqlPostFetcher {
    async fn fetch_post(&self, shortcode: &str) -> Result<InstagramPost, ExtractionError> {
        let variables = serde_json::json!({ "shortcode": shortcode }).to_string();

        let response = self
            .client
            .get(GRAPHQL_URL)
            .query(&[
                ("query_hash", POST_QUERY_HASH),
                ("variables", variables.as_str()),
            ])
            .header("X-IG-App-ID", IG_APP_ID)
            .send()
            .await
            .map_err(ExtractionError::failure)?;

        let status = response.status();
        if !status.is_success() {
            warn!(shortcode = %shortcode, status = %status, "Instagram GraphQL request failed");
            return Err(ExtractionError::Failure(format!(
                "Instagram returned HTTP {status}"
            )));
        }

        let body = response.text().await.map_err(ExtractionError::failure)?;
        parse_graphql_body(&body)
    }
}
