//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Message handlers for plain text answers

pub mod commands;
pub mod messages;

// Re-export commonly used handler functions
pub use commands::{handle_command, BotCommand};
pub use messages::handle_message;

use teloxide::{Bot, types::{ChatId, Message}, prelude::*};
use tracing::debug;
use crate::i18n::I18n;
use crate::services::{Inbound, IntakeService};
use crate::state::Reply;
use crate::utils::errors::{RegistrarError, Result};
use crate::utils::helpers::{split_message, TELEGRAM_MESSAGE_LIMIT};

/// Who sent a message and where to answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub user_id: i64,
    pub chat_id: ChatId,
    pub language: String,
}

impl Sender {
    /// Extract the sender of a message
    pub fn from_message(msg: &Message, i18n: &I18n) -> Result<Self> {
        let user = msg.from.as_ref().ok_or_else(|| {
            RegistrarError::InvalidInput("No user in message".to_string())
        })?;

        Ok(Self {
            user_id: user.id.0 as i64,
            chat_id: msg.chat.id,
            language: i18n.detect_user_language(user.language_code.as_deref()),
        })
    }
}

/// Pass one inbound message to the intake service and send back its replies
pub async fn process(
    bot: &Bot,
    sender: &Sender,
    inbound: Inbound,
    intake: &IntakeService,
    i18n: &I18n,
) -> Result<()> {
    debug!(user_id = sender.user_id, chat_id = ?sender.chat_id, input = ?inbound.input, "Processing inbound message");

    let replies = intake.handle(inbound).await;
    send_replies(bot, sender, &replies, i18n).await
}

/// Render replies in the sender's language and send them
///
/// Texts longer than Telegram's limit go out as several messages.
pub async fn send_replies(bot: &Bot, sender: &Sender, replies: &[Reply], i18n: &I18n) -> Result<()> {
    for reply in replies {
        let text = i18n.render(reply, &sender.language);
        for chunk in split_message(&text, TELEGRAM_MESSAGE_LIMIT) {
            bot.send_message(sender.chat_id, chunk).await?;
        }
    }

    Ok(())
}
