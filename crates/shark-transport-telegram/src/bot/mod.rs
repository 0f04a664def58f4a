/// Callback payload encoding for the quality menu
pub mod callback;
/// Command and callback handlers
pub mod handlers;
/// Attachment planning and sending
pub mod media;
/// View layer (texts, keyboards)
pub mod views;
