use crate::errors::VitalisResult;

/// Produces the bot side of a chat exchange.
///
/// Implemented by both the local simulated responder and the remote
/// chat-function client in `vitalis-chat`.
pub trait IChatResponder: Send + Sync {
    /// Answer one user message for the given patient.
    fn respond(&self, patient_id: &str, message: &str) -> VitalisResult<String>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}
