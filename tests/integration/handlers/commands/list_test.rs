//! Integration tests for /list and /view command handlers

use serial_test::serial;
use SchoolRegistrar::handlers::BotCommand;
use SchoolRegistrar::models::NewStudent;
use SchoolRegistrar::utils::helpers::TELEGRAM_MESSAGE_LIMIT;

use crate::helpers::{test_user_id, TestContext};
use crate::integration::send_command;

async fn seed(ctx: &TestContext, name: &str, age: u32, grade: &str) {
    ctx.services
        .database
        .students
        .append(NewStudent { name: name.to_string(), age, grade: grade.to_string() })
        .await
        .expect("Failed to seed student");
}

#[tokio::test]
#[serial]
async fn test_list_empty_store() {
    let ctx = TestContext::new().await.expect("Failed to create test context");

    send_command(&ctx, test_user_id(), BotCommand::List, "en").await.unwrap();

    assert_eq!(ctx.sent_texts().await, vec![ctx.i18n.t("commands.list.empty", "en", None)]);
}

#[tokio::test]
#[serial]
async fn test_list_shows_students_in_id_order() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    seed(&ctx, "Alice", 12, "7B").await;
    seed(&ctx, "Bob", 15, "9C").await;

    send_command(&ctx, test_user_id(), BotCommand::List, "en").await.unwrap();

    let texts = ctx.sent_texts().await;
    assert_eq!(texts.len(), 1);
    let alice = texts[0].find("Alice").expect("Alice should be listed");
    let bob = texts[0].find("Bob").expect("Bob should be listed");
    assert!(alice < bob);
    assert!(texts[0].contains("9C"));
}

#[tokio::test]
#[serial]
async fn test_view_is_an_alias_of_list() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    seed(&ctx, "Alice", 12, "7B").await;

    send_command(&ctx, test_user_id(), BotCommand::List, "ru").await.unwrap();
    send_command(&ctx, test_user_id(), BotCommand::View, "ru").await.unwrap();

    let texts = ctx.sent_texts().await;
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0], texts[1]);
    assert!(texts[0].contains("зарегистрированный студент"));
}

#[tokio::test]
#[serial]
async fn test_long_list_is_split() {
    let ctx = TestContext::new().await.expect("Failed to create test context");
    for i in 0..100u32 {
        seed(&ctx, &format!("Student with a fairly long name number {:03}", i), 10 + i % 8, "5A").await;
    }

    send_command(&ctx, test_user_id(), BotCommand::List, "en").await.unwrap();

    let texts = ctx.sent_texts().await;
    assert!(texts.len() > 1, "listing should be split, got {} message(s)", texts.len());
    for text in &texts {
        assert!(text.chars().count() <= TELEGRAM_MESSAGE_LIMIT);
    }

    let joined = texts.join("\n");
    assert!(joined.contains("number 000"));
    assert!(joined.contains("number 099"));
}
