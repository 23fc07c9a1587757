//! Help command handler

use teloxide::{Bot, types::Message};
use crate::utils::errors::Result;
use crate::services::{Command, Inbound, ServiceFactory};
use crate::i18n::I18n;
use crate::handlers::{process, Sender};

/// Handle /help command
pub async fn handle_help(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let sender = Sender::from_message(&msg, &i18n)?;
    let inbound = Inbound::command(sender.user_id, Command::Help);
    process(&bot, &sender, inbound, &services.intake_service, &i18n).await
}
