//! Integration tests for the plain text message handler

use serial_test::serial;
use SchoolRegistrar::handlers::BotCommand;
use SchoolRegistrar::state::ConversationState;

use crate::helpers::{test_user_id, TestContext};
use crate::integration::{send_command, send_text};

#[tokio::test]
#[serial]
async fn test_text_without_registration_gets_usage_hint() {
    let ctx = TestContext::new().await.expect("Failed to create test context");

    send_text(&ctx, test_user_id(), "hello", "en").await.unwrap();

    assert_eq!(ctx.sent_texts().await, vec![ctx.i18n.t("messages.use_commands", "en", None)]);
    assert!(ctx.services.intake_service.sessions().get(test_user_id()).await.is_none());
}

#[tokio::test]
#[serial]
async fn test_blank_name_is_rejected() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let user_id = test_user_id();

    send_command(&ctx, user_id, BotCommand::Start, "en").await.unwrap();
    send_text(&ctx, user_id, "   ", "en").await.unwrap();

    let texts = ctx.sent_texts().await;
    assert_eq!(texts[1], ctx.i18n.t("validation.invalid_name", "en", None));

    let session = ctx.services.intake_service.sessions().get(user_id).await.unwrap();
    assert_eq!(session.state, ConversationState::AwaitingName);
}

#[tokio::test]
#[serial]
async fn test_invalid_age_can_be_retried() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    let user_id = test_user_id();

    send_command(&ctx, user_id, BotCommand::Start, "en").await.unwrap();
    send_text(&ctx, user_id, "Bob", "en").await.unwrap();
    for attempt in ["twelve", "-3", "12.5", ""] {
        send_text(&ctx, user_id, attempt, "en").await.unwrap();
    }

    let texts = ctx.sent_texts().await;
    let invalid_age = ctx.i18n.t("validation.invalid_age", "en", None);
    assert_eq!(texts.iter().filter(|text| **text == invalid_age).count(), 4);

    let session = ctx.services.intake_service.sessions().get(user_id).await.unwrap();
    assert_eq!(session.state, ConversationState::AwaitingAge);
    assert_eq!(session.collected.name.as_deref(), Some("Bob"));
}
