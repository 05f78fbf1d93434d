use serde::{Deserialize, Serialize};

/// Identity and credential context attached to every request.
///
/// A client configured with a default session injects it into any request
/// that does not carry one of its own. All fields are optional; empty
/// strings are omitted from the wire representation.
///
/// # Examples
///
/// ```rust
/// use frames_link::Session;
///
/// let session = Session {
///     user: "iguazio".to_string(),
///     token: "t0ps3cret".to_string(),
///     container: "bigdata".to_string(),
///     ..Default::default()
/// };
/// assert!(!session.user.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Backend endpoint URL override
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,

    /// Data container name
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub container: String,

    /// Path prefix inside the container
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,

    /// Username for password authentication
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,

    /// Password for password authentication
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,

    /// Access token (takes precedence over user/password on the server)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub token: String,
}

impl Session {
    /// Create a session authenticated with an access token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    /// Create a session authenticated with username and password.
    pub fn with_password(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            ..Default::default()
        }
    }
}
