//! List command handler
//!
//! Handles /list and its /view alias. Long listings are split over several
//! Telegram messages by the shared reply sender.

use teloxide::{Bot, types::Message};
use crate::utils::errors::Result;
use crate::services::{Command, Inbound, ServiceFactory};
use crate::i18n::I18n;
use crate::handlers::{process, Sender};

/// Handle /list and /view commands
pub async fn handle_list(
    bot: Bot,
    msg: Message,
    command: Command,
    services: ServiceFactory,
    i18n: I18n,
) -> Result<()> {
    let sender = Sender::from_message(&msg, &i18n)?;
    let inbound = Inbound::command(sender.user_id, command);
    process(&bot, &sender, inbound, &services.intake_service, &i18n).await
}
