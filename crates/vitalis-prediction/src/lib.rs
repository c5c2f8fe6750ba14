//! # vitalis-prediction
//!
//! Client for the remote disease-risk prediction service.
//!
//! One request/response cycle per call: POST the feature vector, map
//! the answer into a typed `PredictionResult` or a typed
//! `PredictionError`. No retries, no caching, no shared state across
//! calls.

mod client;
mod response;

pub use client::PredictionClient;
pub use response::parse_prediction;
