//! Start command handler
//!
//! Handles the /start command, which opens a new registration

use teloxide::{Bot, types::Message};
use tracing::info;
use crate::utils::errors::Result;
use crate::services::{Command, Inbound, ServiceFactory};
use crate::i18n::I18n;
use crate::handlers::{process, Sender};

/// Handle /start command
///
/// Any registration already in progress for this user is discarded.
pub async fn handle_start(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let sender = Sender::from_message(&msg, &i18n)?;
    info!(user_id = sender.user_id, language = %sender.language, "Starting registration");

    let inbound = Inbound::command(sender.user_id, Command::Start);
    process(&bot, &sender, inbound, &services.intake_service, &i18n).await
}
