//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod start;
pub mod help;
pub mod list;
pub mod cancel;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::services::{Command, ServiceFactory};
use crate::i18n::I18n;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "School registrar commands:")]
pub enum BotCommand {
    #[command(description = "Register a new student")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Show all registered students")]
    List,
    #[command(description = "Same as /list")]
    View,
    #[command(description = "Abort the current registration")]
    Cancel,
}

impl From<BotCommand> for Command {
    fn from(cmd: BotCommand) -> Self {
        match cmd {
            BotCommand::Start => Command::Start,
            BotCommand::Help => Command::Help,
            BotCommand::List => Command::List,
            BotCommand::View => Command::View,
            BotCommand::Cancel => Command::Cancel,
        }
    }
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: BotCommand,
    services: ServiceFactory,
    i18n: I18n,
) -> Result<()> {
    match cmd {
        BotCommand::Start => start::handle_start(bot, msg, services, i18n).await,
        BotCommand::Help => help::handle_help(bot, msg, services, i18n).await,
        BotCommand::List | BotCommand::View => list::handle_list(bot, msg, cmd.into(), services, i18n).await,
        BotCommand::Cancel => cancel::handle_cancel(bot, msg, services, i18n).await,
    }
}
