//! Responder backends and selection.

mod remote;
mod simulated;

pub use remote::RemoteResponder;
pub use simulated::SimulatedResponder;

use tracing::warn;
use vitalis_core::config::ChatConfig;
use vitalis_core::traits::IChatResponder;

/// Build the responder named in the configuration.
///
/// "remote" requires an endpoint URL; anything else, including an
/// unknown backend name, falls back to the simulated responder.
pub fn create_responder(config: &ChatConfig) -> Box<dyn IChatResponder> {
    match config.responder.as_str() {
        "remote" => match &config.endpoint_url {
            Some(url) => match RemoteResponder::new(url.clone()) {
                Ok(responder) => return Box::new(responder),
                Err(e) => {
                    warn!(error = %e, "remote responder setup failed, using simulated");
                }
            },
            None => {
                warn!("remote responder configured without endpoint_url, using simulated");
            }
        },
        "simulated" => {}
        other => {
            warn!(responder = other, "unknown chat responder, using simulated");
        }
    }
    Box::new(SimulatedResponder::new(config.reply_delay_ms))
}
