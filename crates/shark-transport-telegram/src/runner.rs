use crate::bot;
use crate::bot::handlers::Command;
use crate::config::TelegramSettings;
use crate::relay_client::RelayClient;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tracing::{error, info};

/// Run the Telegram transport runtime.
pub async fn run_bot(settings: TelegramSettings) {
    let client = init_relay_client(&settings);
    let bot = Bot::new(settings.bot_token.clone());
    let handler = setup_handler();

    info!(relay = %settings.relay_url, "Bot is running...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![client])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

fn init_relay_client(settings: &TelegramSettings) -> Arc<RelayClient> {
    match RelayClient::new(settings.relay_url.clone(), settings.relay_timeout()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to initialize relay client: {}", e);
            std::process::exit(1);
        }
    }
}

fn setup_handler() -> UpdateHandler<teloxide::RequestError> {
    dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handle_callback))
        .branch(
            Update::filter_message()
                .branch(
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_command),
                )
                .branch(
                    dptree::filter(|msg: Message| {
                        msg.text()
                            .is_some_and(|text| !bot::handlers::is_command_text(text))
                    })
                    .endpoint(handle_text),
                ),
        )
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    client: Arc<RelayClient>,
) -> Result<(), teloxide::RequestError> {
    let res = match cmd {
        Command::Start => bot::handlers::start(bot, msg).await,
        Command::Help => bot::handlers::help(bot, msg).await,
        Command::Stats => bot::handlers::stats(bot, msg, client).await,
    };
    if let Err(e) = res {
        error!("Command error: {}", e);
    }
    respond(())
}

async fn handle_text(bot: Bot, msg: Message) -> Result<(), teloxide::RequestError> {
    if let Err(e) = bot::handlers::handle_link(bot, msg).await {
        error!("Link handler error: {}", e);
    }
    respond(())
}

async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    client: Arc<RelayClient>,
) -> Result<(), teloxide::RequestError> {
    if let Err(e) = bot::handlers::handle_download_callback(bot, q, client).await {
        error!("Callback handler error: {}", e);
    }
    respond(())
}
