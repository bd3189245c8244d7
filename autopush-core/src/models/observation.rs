use serde::{Deserialize, Serialize};

/// One request as reported by the serving layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestObservation {
    /// Connection identity.
    pub session_id: String,
    /// Request path, e.g. `/index.html`.
    pub path: String,
    /// Whether the path resolved to a static asset.
    pub is_asset: bool,
}

impl RequestObservation {
    pub fn primary(session_id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            path: path.into(),
            is_asset: false,
        }
    }

    pub fn asset(session_id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            path: path.into(),
            is_asset: true,
        }
    }
}
