use anyhow::Result;
use shark_core::models::{DownloadResult, MediaKind};
use teloxide::prelude::*;
use teloxide::types::{InputFile, MessageId, ReplyParameters};

/// Maximum number of media items rendered per download
pub const MAX_MEDIA_REPLIES: usize = 3;

/// One attachment to send after a successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaReply {
    /// Video by URL
    Video(String),
    /// Photo by URL
    Photo(String),
    /// Single downloadable file by URL
    Document(String),
}

impl MediaReply {
    /// URL the attachment points to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Video(url) | Self::Photo(url) | Self::Document(url) => url,
        }
    }
}

/// Decides which attachments a successful result turns into.
///
/// The first [`MAX_MEDIA_REPLIES`] media items win; with no media the
/// `download_url`, if any, goes out as a document.
#[must_use]
pub fn plan_media_replies(result: &DownloadResult) -> Vec<MediaReply> {
    if !result.media.is_empty() {
        return result
            .media
            .iter()
            .take(MAX_MEDIA_REPLIES)
            .map(|item| match item.kind {
                MediaKind::Video => MediaReply::Video(item.url.clone()),
                MediaKind::Image => MediaReply::Photo(item.url.clone()),
            })
            .collect();
    }

    result
        .download_url
        .iter()
        .map(|url| MediaReply::Document(url.clone()))
        .collect()
}

/// Sends one attachment as a reply to `reply_to`.
///
/// # Errors
///
/// Returns an error if the URL is malformed or Telegram rejects the file.
pub async fn send_media_reply(
    bot: &Bot,
    chat_id: ChatId,
    reply_to: MessageId,
    reply: &MediaReply,
) -> Result<()> {
    let file = InputFile::url(reqwest::Url::parse(reply.url())?);
    let reply_parameters = ReplyParameters::new(reply_to);

    match reply {
        MediaReply::Video(_) => {
            bot.send_video(chat_id, file)
                .reply_parameters(reply_parameters)
                .await?;
        }
        MediaReply::Photo(_) => {
            bot.send_photo(chat_id, file)
                .reply_parameters(reply_parameters)
                .await?;
        }
        MediaReply::Document(_) => {
            bot.send_document(chat_id, file)
                .reply_parameters(reply_parameters)
                .await?;
        }
    }
    Ok(())
}
