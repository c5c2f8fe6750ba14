//! ChatSession behavior against the in-memory store fakes.

use std::sync::Arc;

use test_fixtures::InMemoryRecordStore;
use vitalis_chat::{ChatSession, SimulatedResponder};
use vitalis_core::errors::{ChatError, VitalisError};
use vitalis_core::models::Sender;
use vitalis_core::traits::IRecordStore;

fn session_with_store() -> (ChatSession, Arc<InMemoryRecordStore>) {
    let store = Arc::new(InMemoryRecordStore::new());
    let session = ChatSession::new(store.clone(), Box::new(SimulatedResponder::new(0)));
    (session, store)
}

#[test]
fn send_persists_message_and_backfills_reply() {
    let (session, store) = session_with_store();

    let bot = session.send(Some("p1"), "I have a persistent cough").unwrap();
    assert_eq!(bot.sender, Sender::Bot);
    assert!(!bot.text.is_empty());

    let logs = store.chat_logs("p1").unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].message, "I have a persistent cough");
    assert_eq!(logs[0].response, bot.text);
}

#[test]
fn history_interleaves_user_and_bot_messages() {
    let (session, _store) = session_with_store();

    session.send(Some("p1"), "first question").unwrap();
    session.send(Some("p1"), "second question").unwrap();

    let history = session.history("p1").unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].sender, Sender::User);
    assert_eq!(history[1].sender, Sender::Bot);
    assert_eq!(history[2].text, "second question");
}

#[test]
fn history_is_per_patient() {
    let (session, _store) = session_with_store();

    session.send(Some("p1"), "about my knee").unwrap();
    session.send(Some("p2"), "about my wrist").unwrap();

    let history = session.history("p2").unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].text, "about my wrist");
}

#[test]
fn missing_patient_selection_is_rejected() {
    let (session, store) = session_with_store();

    let err = session.send(None, "hello").unwrap_err();
    assert!(matches!(
        err,
        VitalisError::Chat(ChatError::NoPatientSelected)
    ));
    assert!(store.chat_logs("p1").unwrap().is_empty());
}

#[test]
fn empty_message_is_rejected_before_storage() {
    let (session, store) = session_with_store();

    let err = session.send(Some("p1"), "   ").unwrap_err();
    assert!(matches!(err, VitalisError::Chat(ChatError::EmptyMessage)));
    assert!(store.chat_logs("p1").unwrap().is_empty());
}

#[test]
fn store_failure_surfaces_as_store_error() {
    let (session, store) = session_with_store();
    store.fail_with("connection lost");

    let err = session.send(Some("p1"), "hello").unwrap_err();
    assert!(matches!(err, VitalisError::Store(_)));
}
