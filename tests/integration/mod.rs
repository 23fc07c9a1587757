//! Integration tests module
//!
//! This module contains all integration tests for the SchoolRegistrar Telegram bot,
//! organized by functionality and test scenarios.

pub mod scenarios;

use SchoolRegistrar::handlers::{handle_command, handle_message, BotCommand};
use SchoolRegistrar::Result;

use crate::helpers::{create_test_message, TestContext};

/// Send a command through the command dispatcher as `user_id`
pub async fn send_command(
    ctx: &TestContext,
    user_id: i64,
    command: BotCommand,
    language: &str,
) -> Result<()> {
    let text = format!("/{}", format!("{:?}", command).to_lowercase());
    let message = create_test_message(user_id, &text, Some(language));
    let bot = ctx.create_bot().expect("Failed to create bot");

    handle_command(bot, message, command, ctx.services.clone(), ctx.i18n.clone()).await
}

/// Send a plain text answer as `user_id`
pub async fn send_text(ctx: &TestContext, user_id: i64, text: &str, language: &str) -> Result<()> {
    let message = create_test_message(user_id, text, Some(language));
    let bot = ctx.create_bot().expect("Failed to create bot");

    handle_message(bot, message, ctx.services.clone(), ctx.i18n.clone()).await
}

/// Run a whole registration for one student
pub async fn register_student(
    ctx: &TestContext,
    user_id: i64,
    name: &str,
    age: &str,
    grade: &str,
    language: &str,
) -> Result<()> {
    send_command(ctx, user_id, BotCommand::Start, language).await?;
    send_text(ctx, user_id, name, language).await?;
    send_text(ctx, user_id, age, language).await?;
    send_text(ctx, user_id, grade, language).await
}
