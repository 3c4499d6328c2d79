//! Client profile - the persisted record of an applicant.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, ValidationError};
use crate::domain::risk::ApplicantProfile;

/// Persisted client record: contact data plus the scoring inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub user_id: UserId,
    /// Recipient for lifecycle mails.
    pub email: String,
    #[serde(flatten)]
    pub applicant: ApplicantProfile,
}

impl ClientProfile {
    pub fn new(
        user_id: UserId,
        email: impl Into<String>,
        applicant: ApplicantProfile,
    ) -> Result<Self, ValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing '@'"));
        }
        applicant.validate()?;
        Ok(Self {
            user_id,
            email,
            applicant,
        })
    }

    /// Snapshot handed to the risk calculator.
    pub fn applicant_profile(&self) -> &ApplicantProfile {
        &self.applicant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk::fixtures::strong_profile;

    #[test]
    fn builds_with_valid_contact_and_profile() {
        let profile = ClientProfile::new(UserId::new(), "farmer@example.com", strong_profile());
        assert!(profile.is_ok());
    }

    #[test]
    fn rejects_address_without_at_sign() {
        let err = ClientProfile::new(UserId::new(), "farmer.example.com", strong_profile())
            .unwrap_err();
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn rejects_invalid_scoring_fields() {
        let mut applicant = strong_profile();
        applicant.farm_size_hectares = 0.0;
        assert!(ClientProfile::new(UserId::new(), "a@b.co", applicant).is_err());
    }

    #[test]
    fn serializes_scoring_fields_flat() {
        let profile = ClientProfile::new(UserId::new(), "a@b.co", strong_profile()).unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["internal_credit_history_score"], 800);
        assert_eq!(json["email"], "a@b.co");
    }
}
