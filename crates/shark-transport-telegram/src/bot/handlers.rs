use crate::bot::callback::CallbackAction;
use crate::bot::media::{plan_media_replies, send_media_reply};
use crate::bot::views::{quality_keyboard, DefaultDownloadView, DownloadView};
use crate::relay_client::RelayClient;
use anyhow::Result;
use shark_core::models::DownloadRequest;
use shark_core::platform::classify;
use std::sync::Arc;
use teloxide::{
    prelude::*,
    types::{CallbackQuery, ReplyParameters},
    utils::command::BotCommands,
};
use tracing::{error, info, warn};

/// Safe extraction of user ID from a message.
/// Returns 0 if the user information is missing.
pub fn get_user_id_safe(msg: &Message) -> i64 {
    msg.from.as_ref().map_or(0, |u| u.id.0.cast_signed())
}

/// Supported commands for the bot
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    /// Greeting and supported platforms
    #[command(description = "Start the bot.")]
    Start,
    /// Supported content list
    #[command(description = "Show supported content.")]
    Help,
    /// Relay counters
    #[command(description = "Show download statistics.")]
    Stats,
}

/// Accepts only absolute http(s) links.
#[must_use]
pub fn is_http_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}

/// Slash commands, known or not, never enter the link flow.
#[must_use]
pub fn is_command_text(text: &str) -> bool {
    text.trim_start().starts_with('/')
}

/// Start handler
///
/// # Errors
///
/// Returns an error if the welcome message cannot be sent.
pub async fn start(bot: Bot, msg: Message) -> Result<()> {
    let user_id = get_user_id_safe(&msg);
    let first_name = msg
        .from
        .as_ref()
        .map_or("there", |u| u.first_name.as_str());

    info!("User {user_id} initiated /start command.");
    bot.send_message(msg.chat.id, DefaultDownloadView::welcome_message(first_name))
        .await?;
    Ok(())
}

/// Help handler
///
/// # Errors
///
/// Returns an error if the help message cannot be sent.
pub async fn help(bot: Bot, msg: Message) -> Result<()> {
    bot.send_message(msg.chat.id, DefaultDownloadView::help_message())
        .await?;
    Ok(())
}

/// Stats handler - relays the service counters
///
/// # Errors
///
/// Returns an error if the reply cannot be sent. Relay failures are
/// rendered, not returned.
pub async fn stats(bot: Bot, msg: Message, client: Arc<RelayClient>) -> Result<()> {
    let user_id = get_user_id_safe(&msg);
    info!("Stats command received from user {user_id}.");

    let text = match client.stats().await {
        Ok(stats) => DefaultDownloadView::stats_message(&stats),
        Err(e) => {
            warn!("Failed to fetch relay stats: {e}");
            DefaultDownloadView::stats_unavailable().to_string()
        }
    };

    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

/// Link handler - classifies the URL and offers the quality menu
///
/// # Errors
///
/// Returns an error if a Telegram call fails.
pub async fn handle_link(bot: Bot, msg: Message) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let url = text.trim();

    if !is_http_url(url) {
        bot.send_message(msg.chat.id, DefaultDownloadView::invalid_url())
            .await?;
        return Ok(());
    }

    // The keyboard message must reply to the link; the callback reads it back from there.
    let status = bot
        .send_message(msg.chat.id, DefaultDownloadView::processing())
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    let Some(platform) = classify(url) else {
        info!("Unsupported link from user {}.", get_user_id_safe(&msg));
        bot.edit_message_text(
            msg.chat.id,
            status.id,
            DefaultDownloadView::platform_not_supported(),
        )
        .await?;
        return Ok(());
    };

    bot.edit_message_text(
        msg.chat.id,
        status.id,
        DefaultDownloadView::platform_detected(platform),
    )
    .reply_markup(quality_keyboard(platform))
    .await?;

    Ok(())
}

/// Quality-menu callback handler
///
/// # Errors
///
/// Returns an error if editing the menu message fails. Relay and media
/// failures are rendered, not returned.
pub async fn handle_download_callback(
    bot: Bot,
    q: CallbackQuery,
    client: Arc<RelayClient>,
) -> Result<()> {
    let _ = bot.answer_callback_query(q.id.clone()).await;

    let Some(message) = q.message.as_ref().and_then(|m| m.regular_message()) else {
        warn!("Callback from user {} has no accessible message.", q.from.id.0);
        return Ok(());
    };
    let chat_id = message.chat.id;

    let Some(url) = message
        .reply_to_message()
        .and_then(Message::text)
        .map(str::trim)
        .filter(|url| !url.is_empty())
    else {
        bot.edit_message_text(chat_id, message.id, DefaultDownloadView::message_not_found())
            .await?;
        return Ok(());
    };

    let Some(action) = q.data.as_deref().and_then(CallbackAction::parse) else {
        bot.edit_message_text(chat_id, message.id, DefaultDownloadView::invalid_request())
            .await?;
        return Ok(());
    };

    bot.edit_message_text(
        chat_id,
        message.id,
        DefaultDownloadView::downloading(action.quality),
    )
    .await?;

    let request = DownloadRequest::new(url, action.quality, Some(action.platform));
    let result = match client.download(&request).await {
        Ok(result) => result,
        Err(e) => {
            error!("Download error: {e}");
            bot.edit_message_text(chat_id, message.id, DefaultDownloadView::download_failed())
                .await?;
            return Ok(());
        }
    };

    if !result.is_success() {
        bot.edit_message_text(
            chat_id,
            message.id,
            DefaultDownloadView::download_error(result.reason.as_deref()),
        )
        .await?;
        return Ok(());
    }

    bot.edit_message_text(chat_id, message.id, DefaultDownloadView::download_complete())
        .await?;

    for reply in plan_media_replies(&result) {
        if let Err(e) = send_media_reply(&bot, chat_id, message.id, &reply).await {
            error!("Failed to send {}: {e}", reply.url());
            bot.edit_message_text(chat_id, message.id, DefaultDownloadView::download_failed())
                .await?;
            break;
        }
    }

    Ok(())
}
