use serde::{Deserialize, Serialize};

/// How the session root tracker classified one observed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RootAttribution {
    /// A primary request. The path is its own root.
    Primary { path: String },
    /// An asset request following `root` on the same session.
    Attributed { root: String },
    /// An asset request on a session with no current root.
    Unattributed,
}

impl RootAttribution {
    /// The root this request is attributed to, if any.
    pub fn root(&self) -> Option<&str> {
        match self {
            Self::Primary { path } => Some(path),
            Self::Attributed { root } => Some(root),
            Self::Unattributed => None,
        }
    }
}
