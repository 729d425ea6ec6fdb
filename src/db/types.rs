use serde::{Deserialize, Serialize};
use sqlx::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "userrole", rename_all = "UPPERCASE")]
pub(crate) enum UserRole {
    Admin,
    Student,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "verificationstatus", rename_all = "UPPERCASE")]
pub(crate) enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Verified => "VERIFIED",
            Self::Rejected => "REJECTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_uppercase_wire_names() {
        assert_eq!(serde_json::to_value(UserRole::Admin).unwrap(), "ADMIN");
        assert_eq!(serde_json::to_value(VerificationStatus::Verified).unwrap(), "VERIFIED");
        let parsed: VerificationStatus = serde_json::from_value("REJECTED".into()).unwrap();
        assert_eq!(parsed, VerificationStatus::Rejected);
        assert_eq!(parsed.as_str(), "REJECTED");
    }
}
