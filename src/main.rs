//! SchoolRegistrar Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::utils::command::BotCommands;
use tracing::{info, warn, error};

use SchoolRegistrar::{
    config::Settings,
    utils::logging,
    database::DatabaseService,
    services::ServiceFactory,
    i18n::I18n,
    handlers::{handle_command, handle_message, BotCommand},
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", SchoolRegistrar::info());

    // Initialize database connection
    info!("Connecting to database...");
    let database_service = DatabaseService::connect(&settings.database).await?;

    // Initialize i18n system
    info!("Loading translations...");
    let mut i18n = I18n::new(&settings.i18n);
    i18n.load_translations().await?;

    // Initialize services
    info!("Initializing services...");
    let services = ServiceFactory::new(&settings, database_service.clone());
    let mut sweeper = services.session_sweeper(&settings);
    sweeper.start();

    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    if let Err(e) = bot.set_my_commands(BotCommand::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    // Wrap services in Arc for dependency injection
    let services_arc = Arc::new(services);
    let i18n_arc = Arc::new(i18n);

    let handler = create_handler();

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![services_arc, i18n_arc])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    sweeper.stop();
    database_service.close().await;
    info!("SchoolRegistrar bot has been shut down.");

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message()
        .branch(
            // Handle commands
            dptree::entry()
                .filter_command::<BotCommand>()
                .endpoint(handle_commands)
        )
        .branch(
            // Handle registration answers
            dptree::endpoint(handle_messages)
        )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: BotCommand,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    let services = (*services).clone();
    let i18n = (*i18n).clone();

    if let Err(e) = handle_command(bot, msg, cmd, services, i18n).await {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(
    bot: Bot,
    msg: Message,
    services: Arc<ServiceFactory>,
    i18n: Arc<I18n>,
) -> HandlerResult {
    let services = (*services).clone();
    let i18n = (*i18n).clone();

    if let Err(e) = handle_message(bot, msg, services, i18n).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}
