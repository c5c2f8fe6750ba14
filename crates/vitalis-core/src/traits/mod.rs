//! Collaborator traits.
//!
//! The external data store, file storage, and the toast surface are
//! capabilities injected at construction time, never ambient globals,
//! so every consumer can be tested against a fake.

mod chat_responder;
mod file_store;
mod notifier;
mod record_store;

pub use chat_responder::IChatResponder;
pub use file_store::{IFileStore, StoredFile};
pub use notifier::{INotifier, Notice, Severity};
pub use record_store::IRecordStore;
