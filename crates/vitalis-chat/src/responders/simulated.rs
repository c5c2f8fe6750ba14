use std::time::Duration;

use vitalis_core::errors::VitalisResult;
use vitalis_core::traits::IChatResponder;

/// The guidance text every simulated reply carries.
const SIMULATED_REPLY: &str = "I understand your concern. Based on the symptoms you've \
described, I recommend consulting with a healthcare professional. Would you like me to \
help you find a specialist or schedule a teleconsultation?";

/// Local responder that answers with fixed guidance after a configured
/// delay, standing in for a real assistant during development and demos.
pub struct SimulatedResponder {
    reply_delay: Duration,
}

impl SimulatedResponder {
    pub fn new(reply_delay_ms: u64) -> Self {
        Self {
            reply_delay: Duration::from_millis(reply_delay_ms),
        }
    }
}

impl IChatResponder for SimulatedResponder {
    fn respond(&self, _patient_id: &str, _message: &str) -> VitalisResult<String> {
        if !self.reply_delay.is_zero() {
            std::thread::sleep(self.reply_delay);
        }
        Ok(SIMULATED_REPLY.to_string())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
