//! Session domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The signed-in shopper for this store profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    #[serde(alias = "at")]
    pub login_timestamp: DateTime<Utc>,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            login_timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_roundtrips_camel_case() {
        let session = Session::new("a@b.com");
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["email"], "a@b.com");
        assert!(json.get("loginTimestamp").is_some());
    }

    #[test]
    fn test_decodes_web_session() {
        let json = r#"{"email":"a@b.com","at":"2025-06-01T10:00:00.000Z"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.email, "a@b.com");
    }
}
