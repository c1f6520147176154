use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Response message for a successful update, written or skipped.
pub(super) const UPDATE_OK: &str = "Cool beans";

#[derive(Deserialize, Debug, Clone, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(super) struct UpdateRequest {
    pub hostname: String,
    pub signature: String,
}

impl UpdateRequest {
    /// Both fields must be present and non-empty. Serde catches absent
    /// fields; empty strings arrive here.
    pub fn validate(&self) -> Result<(), Error> {
        if self.hostname.is_empty() || self.signature.is_empty() {
            return Err(Error::InvalidPayload);
        }
        Ok(())
    }
}

#[derive(Serialize, Debug, Clone, Default, Ord, PartialOrd, Eq, PartialEq)]
pub(super) struct UpdateResult {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_fields() {
        let request = UpdateRequest {
            hostname: String::new(),
            signature: "abc123".to_string(),
        };
        assert!(request.validate().is_err());

        let request = UpdateRequest {
            hostname: "home.example.com".to_string(),
            signature: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn accepts_populated_fields() {
        let request = UpdateRequest {
            hostname: "home.example.com".to_string(),
            signature: "abc123".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
