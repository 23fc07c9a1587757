//! Integration tests for /help command handler

use assert_matches::assert_matches;
use serial_test::serial;
use SchoolRegistrar::handlers::commands::help;
use SchoolRegistrar::RegistrarError;

use crate::helpers::{create_anonymous_test_message, create_test_message, test_user_id, TestContext};

#[tokio::test]
#[serial]
async fn test_help_command_english() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let bot = ctx.create_bot().expect("Failed to create bot");

    let message = create_test_message(test_user_id(), "/help", Some("en-US"));
    let result = help::handle_help(bot, message, ctx.services.clone(), ctx.i18n.clone()).await;
    assert!(result.is_ok(), "Help command should succeed: {:?}", result);

    ctx.verify_telegram_calls("sendMessage", 1).await;
    let texts = ctx.sent_texts().await;
    for command in ["/start", "/list", "/cancel", "/help"] {
        assert!(texts[0].contains(command), "help text should mention {}", command);
    }
}

#[tokio::test]
#[serial]
async fn test_help_command_russian() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let bot = ctx.create_bot().expect("Failed to create bot");

    let message = create_test_message(test_user_id(), "/help", Some("ru"));
    help::handle_help(bot, message, ctx.services.clone(), ctx.i18n.clone())
        .await
        .expect("Help command should succeed");

    let texts = ctx.sent_texts().await;
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("Помощь"));
}

#[tokio::test]
#[serial]
async fn test_help_unsupported_language_falls_back_to_english() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let bot = ctx.create_bot().expect("Failed to create bot");

    let message = create_test_message(test_user_id(), "/help", Some("de"));
    help::handle_help(bot, message, ctx.services.clone(), ctx.i18n.clone())
        .await
        .expect("Help command should succeed");

    let texts = ctx.sent_texts().await;
    assert!(texts[0].contains("Help"));
}

#[tokio::test]
#[serial]
async fn test_help_telegram_error_is_reported() {
    let ctx = TestContext::new_with_config(crate::helpers::TestConfig {
        setup_default_mocks: false,
        bot_token: None,
    })
    .await
    .expect("Failed to create test context");
    ctx.telegram_mock.setup_error_mocks().await;
    let bot = ctx.create_bot().expect("Failed to create bot");

    let message = create_test_message(test_user_id(), "/help", Some("en"));
    let result = help::handle_help(bot, message, ctx.services.clone(), ctx.i18n.clone()).await;

    assert_matches!(result, Err(RegistrarError::Telegram(_)));
}

#[tokio::test]
#[serial]
async fn test_help_without_sender_is_rejected() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let bot = ctx.create_bot().expect("Failed to create bot");

    let message = create_anonymous_test_message(-100123, "/help");
    let result = help::handle_help(bot, message, ctx.services.clone(), ctx.i18n.clone()).await;

    assert_matches!(result, Err(RegistrarError::InvalidInput(_)));
    ctx.verify_telegram_calls("sendMessage", 0).await;
}
