//! View layer for bot UI components
//!
//! Contains the quality keyboard and every text the bot sends.

use crate::bot::callback::CallbackAction;
use shark_core::models::RelayStats;
use shark_core::platform::Platform;
use shark_core::quality::Quality;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

// ─────────────────────────────────────────────────────────────────────────────
// Trait definition
// ─────────────────────────────────────────────────────────────────────────────

/// Trait for download-flow view rendering
pub trait DownloadView {
    /// Greeting for `/start`
    fn welcome_message(first_name: &str) -> String;

    /// Supported content list for `/help`
    fn help_message() -> &'static str;

    /// Relay counters for `/stats`
    fn stats_message(stats: &RelayStats) -> String;

    /// `/stats` when the relay cannot be reached
    fn stats_unavailable() -> &'static str;

    /// Text is not an http(s) link
    fn invalid_url() -> &'static str;

    /// Placeholder while the link is classified
    fn processing() -> &'static str;

    /// Link matches no known platform
    fn platform_not_supported() -> &'static str;

    /// Prompt above the quality keyboard
    fn platform_detected(platform: Platform) -> String;

    /// Keyboard message no longer replies to the link
    fn message_not_found() -> &'static str;

    /// Callback data did not parse
    fn invalid_request() -> &'static str;

    /// Shown while the relay works
    fn downloading(quality: Quality) -> String;

    /// Relay reported success
    fn download_complete() -> &'static str;

    /// Relay reported an error
    fn download_error(reason: Option<&str>) -> String;

    /// Relay could not be reached
    fn download_failed() -> &'static str;
}

// ─────────────────────────────────────────────────────────────────────────────
// Default implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Default English view
pub struct DefaultDownloadView;

impl DownloadView for DefaultDownloadView {
    fn welcome_message(first_name: &str) -> String {
        format!(
            "🦈 SHARK v10\n\
             Hi {first_name}!\n\n\
             Send me links from:\n\
             • Instagram\n\
             • YouTube\n\
             • Twitter/X\n\
             • TikTok\n\n\
             I'll download them instantly."
        )
    }

    fn help_message() -> &'static str {
        "📋 Supported:\n\
         - Instagram: Posts, Reels, Stories\n\
         - YouTube: Videos, Shorts\n\
         - Twitter: Videos, Images\n\
         - TikTok: Videos\n\n\
         Just send the link!"
    }

    fn stats_message(stats: &RelayStats) -> String {
        format!(
            "📊 Stats:\nTotal: {}\nSuccess: {}\nFailed: {}",
            stats.total, stats.success, stats.failed
        )
    }

    fn stats_unavailable() -> &'static str {
        "📊 Stats unavailable"
    }

    fn invalid_url() -> &'static str {
        "❌ Invalid URL"
    }

    fn processing() -> &'static str {
        "🔄 Processing..."
    }

    fn platform_not_supported() -> &'static str {
        "❌ Platform not supported"
    }

    fn platform_detected(platform: Platform) -> String {
        format!(
            "✅ {} detected!\nChoose quality:",
            platform.as_str().to_uppercase()
        )
    }

    fn message_not_found() -> &'static str {
        "❌ Message not found"
    }

    fn invalid_request() -> &'static str {
        "❌ Invalid request"
    }

    fn downloading(quality: Quality) -> String {
        format!("📥 Downloading {quality}...")
    }

    fn download_complete() -> &'static str {
        "✅ Download complete!"
    }

    fn download_error(reason: Option<&str>) -> String {
        format!("❌ Error: {}", reason.unwrap_or("Unknown"))
    }

    fn download_failed() -> &'static str {
        "❌ Download failed"
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyboards
// ─────────────────────────────────────────────────────────────────────────────

const fn button_label(quality: Quality) -> &'static str {
    match quality {
        Quality::Hd => "📥 Download HD",
        Quality::Video => "📹 Video Only",
        Quality::Audio => "🎵 Audio Only",
        Quality::Image => "🖼️ Images Only",
    }
}

/// Quality menu for `platform`, one button per row.
#[must_use]
pub fn quality_keyboard(platform: Platform) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(Quality::ALL.into_iter().map(|quality| {
        vec![InlineKeyboardButton::callback(
            button_label(quality),
            CallbackAction::new(platform, quality).to_string(),
        )]
    }))
}
