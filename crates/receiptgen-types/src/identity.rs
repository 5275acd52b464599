use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the chat user the receipt is delivered to.
///
/// The host platform hands out numeric ids while the launch query carries
/// text; both are forwarded to the generation service as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Numeric(i64),
    Text(String),
}

impl UserId {
    /// Builds an id from query-string text; blank text yields `None`
    pub fn from_query(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(UserId::Text(trimmed.to_string()))
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            UserId::Numeric(_) => false,
            UserId::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Numeric(id) => write!(f, "{}", id),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId::Numeric(id)
    }
}

/// Identity and theme resolved once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostIdentity {
    pub user_id: Option<UserId>,
    /// `#rrggbb` background requested by the host theme
    pub theme_background: Option<String>,
}

impl HostIdentity {
    /// The usable user id, treating blank text as absent
    pub fn effective_user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref().filter(|id| !id.is_blank())
    }
}
