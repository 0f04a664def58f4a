//! Test fixtures and mock constructors.

use crate::extractors::instagram::{InstagramNode, InstagramPost};
use crate::extractors::youtube::{RawFormat, VideoInfo};

/// Image node with a predictable display URL.
#[must_use]
pub fn image_node(index: usize) -> InstagramNode {
    InstagramNode {
        is_video: false,
        video_url: None,
        display_url: format!("https://cdn.example/{index}.jpg"),
        width: 1080,
        height: 1080,
    }
}

/// Video node.
#[must_use]
pub fn video_node(url: &str, width: u32, height: u32) -> InstagramNode {
    InstagramNode {
        is_video: true,
        video_url: Some(url.to_string()),
        display_url: format!("{url}.jpg"),
        width,
        height,
    }
}

/// Image-only post with `count` nodes.
#[must_use]
pub fn sample_post(count: usize) -> InstagramPost {
    InstagramPost {
        caption: Some("caption".to_string()),
        likes: 100,
        nodes: (0..count).map(image_node).collect(),
    }
}

/// Format entry as yt-dlp reports it.
#[must_use]
pub fn raw_format(id: &str, ext: &str, resolution: Option<&str>) -> RawFormat {
    RawFormat {
        format_id: id.to_string(),
        ext: ext.to_string(),
        resolution: resolution.map(ToString::to_string),
    }
}

/// Video info with a resolved URL and a mixed format list.
#[must_use]
pub fn sample_video_info() -> VideoInfo {
    VideoInfo {
        title: "Never Gonna Give You Up".to_string(),
        duration: Some(212.0),
        url: Some("https://rr.googlevideo.example/videoplayback".to_string()),
        resolution: Some("1920x1080".to_string()),
        formats: vec![
            raw_format("sb0", "mhtml", Some("storyboard")),
            raw_format("139", "m4a", Some("audio only")),
            raw_format("251", "webm", Some("audio only")),
            raw_format("3gp1", "3gp", Some("176x144")),
            raw_format("18", "mp4", Some("640x360")),
            raw_format("137", "mp4", None),
        ],
    }
}
