use thiserror::Error;

/// Unified error type for the entire commitments-viewer-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    /// `true` for failures caused by the transport or the backend status,
    /// as opposed to a response body that could not be decoded.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, CoreError::Network(_) | CoreError::NotFound(_))
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Decode(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query parameters from URLs: filter labels end up in
        // recorded failures and log lines.
        let msg = redact_query(&e.to_string());

        if e.is_decode() {
            CoreError::Decode(msg)
        } else {
            CoreError::Network(msg)
        }
    }
}

/// Cut everything after the first `?` of a message.
fn redact_query(msg: &str) -> String {
    match msg.find('?') {
        Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
        None => msg.to_string(),
    }
}
