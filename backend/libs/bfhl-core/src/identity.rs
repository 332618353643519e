use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_ID: &str = "john_doe_17091999";
pub const DEFAULT_EMAIL: &str = "john@xyz.com";
pub const DEFAULT_ROLL_NUMBER: &str = "ABCD123";

/// Identity fields merged into every success envelope.
///
/// Loaded once at startup by each service and shared read-only across
/// requests. None of these values depend on request input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_roll_number")]
    pub roll_number: String,
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

fn default_email() -> String {
    DEFAULT_EMAIL.to_string()
}

fn default_roll_number() -> String {
    DEFAULT_ROLL_NUMBER.to_string()
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            email: default_email(),
            roll_number: default_roll_number(),
        }
    }
}

impl IdentityConfig {
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        roll_number: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            roll_number: roll_number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity() {
        let identity = IdentityConfig::default();
        assert_eq!(identity.user_id, "john_doe_17091999");
        assert_eq!(identity.email, "john@xyz.com");
        assert_eq!(identity.roll_number, "ABCD123");
    }

    #[test]
    fn test_partial_deserialize_falls_back_to_defaults() {
        let identity: IdentityConfig =
            serde_json::from_str(r#"{"email": "ops@example.com"}"#).unwrap();
        assert_eq!(identity.email, "ops@example.com");
        assert_eq!(identity.user_id, DEFAULT_USER_ID);
        assert_eq!(identity.roll_number, DEFAULT_ROLL_NUMBER);
    }
}
