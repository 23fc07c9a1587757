//! Message handlers module
//!
//! Handles plain text messages, which are answers to registration questions

use teloxide::{Bot, types::Message};
use tracing::debug;
use crate::utils::errors::Result;
use crate::services::{Inbound, ServiceFactory};
use crate::i18n::I18n;
use crate::handlers::{process, Sender};

/// Handle incoming text messages
///
/// Messages without text (stickers, photos) are passed on as empty text and
/// rejected by the current question's validation.
pub async fn handle_message(bot: Bot, msg: Message, services: ServiceFactory, i18n: I18n) -> Result<()> {
    let sender = Sender::from_message(&msg, &i18n)?;

    let text = msg.text().unwrap_or_default();
    if msg.text().is_none() {
        debug!(user_id = sender.user_id, "Non-text message received");
    }

    let inbound = Inbound::text(sender.user_id, text);
    process(&bot, &sender, inbound, &services.intake_service, &i18n).await
}
