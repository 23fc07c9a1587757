//! Integration tests for /start command handler

use serial_test::serial;
use SchoolRegistrar::handlers::commands::start;
use SchoolRegistrar::handlers::BotCommand;
use SchoolRegistrar::state::ConversationState;

use crate::helpers::{create_test_message, test_user_id, TestContext};
use crate::integration::{send_command, send_text};

#[tokio::test]
#[serial]
async fn test_start_asks_for_name() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let bot = ctx.create_bot().expect("Failed to create bot");
    let user_id = test_user_id();

    let message = create_test_message(user_id, "/start", Some("en"));
    start::handle_start(bot, message, ctx.services.clone(), ctx.i18n.clone())
        .await
        .expect("Start command should succeed");

    let texts = ctx.sent_texts().await;
    assert_eq!(texts, vec![ctx.i18n.t("commands.start.ask_name", "en", None)]);

    let session = ctx.services.intake_service.sessions().get(user_id).await.expect("Session should exist");
    assert_eq!(session.state, ConversationState::AwaitingName);
}

#[tokio::test]
#[serial]
async fn test_start_again_discards_collected_name() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let user_id = test_user_id();

    send_command(&ctx, user_id, BotCommand::Start, "en").await.unwrap();
    send_text(&ctx, user_id, "Old Name", "en").await.unwrap();
    send_command(&ctx, user_id, BotCommand::Start, "en").await.unwrap();

    let session = ctx.services.intake_service.sessions().get(user_id).await.unwrap();
    assert_eq!(session.state, ConversationState::AwaitingName);
    assert!(session.collected.name.is_none());
    ctx.verify_telegram_calls("sendMessage", 3).await;
}

#[tokio::test]
#[serial]
async fn test_start_in_russian() {
    let ctx = TestContext::new().await.expect("Failed to create test context");

    send_command(&ctx, test_user_id(), BotCommand::Start, "ru").await.unwrap();

    let texts = ctx.sent_texts().await;
    assert!(texts[0].contains("Как зовут студента?"));
}
