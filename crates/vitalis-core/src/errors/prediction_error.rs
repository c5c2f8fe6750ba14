/// Prediction request/response errors.
///
/// `TransportFailure` is the expected failure mode in local development,
/// where the inference service is often simply not running.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("prediction service unreachable: {reason}")]
    TransportFailure { reason: String },

    #[error("prediction service returned HTTP {status}")]
    ServerError { status: u16 },

    #[error("malformed prediction response: {reason}")]
    InvalidResponseShape { reason: String },

    #[error("invalid feature vector: {reason}")]
    InvalidInput { reason: String },
}
