//! Owner identity passed through every lifecycle operation.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Identity of the user owning documents and chats.
///
/// The application currently runs without authentication, so there is a
/// single fixed owner ([`OwnerId::local`]) resolved at the API boundary.
/// The identity is still threaded explicitly through every operation so
/// that real authentication can be added without touching the lifecycle
/// contracts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub String);

impl OwnerId {
    /// The fixed single-user identity used while no authentication exists.
    pub fn local() -> Self {
        Self("local".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
