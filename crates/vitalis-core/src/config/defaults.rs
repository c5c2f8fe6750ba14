//! Default configuration values.

/// Base URL of the local prediction service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Transport timeout in seconds. No per-call deadline is layered on top.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Chat responder backend: "simulated" or "remote".
pub const DEFAULT_RESPONDER: &str = "simulated";

/// Delay before the simulated responder answers, in milliseconds.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// Storage bucket for uploaded medical reports.
pub const DEFAULT_BUCKET: &str = "medical-reports";

/// Path prefix inside the bucket.
pub const DEFAULT_UPLOAD_PREFIX: &str = "reports";

/// Maximum accepted upload size in bytes (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
