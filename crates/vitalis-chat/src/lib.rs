//! # vitalis-chat
//!
//! Chat session orchestration: persist the user's message, obtain a bot
//! reply from the configured responder backend, fill the reply into the
//! stored log.
//!
//! Two responder backends exist because both are live in production:
//! a local simulated reply and a remote chat function. Selection is a
//! configuration choice, never a guess.

pub mod responders;
mod session;

pub use responders::{create_responder, RemoteResponder, SimulatedResponder};
pub use session::ChatSession;
