use serde::{Deserialize, Serialize};
use time::Date;
use validator::{Validate, ValidationError};

use super::deserialize_date;
use crate::core::time::{format_date, format_primitive};
use crate::db::models::Student;
use crate::db::types::VerificationStatus;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct RegistrationCreate {
    #[validate(custom(function = "validate_nisn"))]
    pub(crate) nisn: String,
    #[serde(alias = "fullName")]
    #[validate(length(min = 3, max = 150, message = "full_name must be 3-150 characters"))]
    pub(crate) full_name: String,
    #[serde(alias = "birthDate", deserialize_with = "deserialize_date")]
    pub(crate) birth_date: Date,
    #[serde(alias = "originSchool")]
    #[validate(length(min = 1, max = 150, message = "origin_school must be 1-150 characters"))]
    pub(crate) origin_school: String,
    #[validate(length(min = 1, message = "regency must not be empty"))]
    pub(crate) regency: String,
    #[validate(length(min = 1, message = "district must not be empty"))]
    pub(crate) district: String,
    #[validate(length(min = 1, max = 500, message = "address must be 1-500 characters"))]
    pub(crate) address: String,
    #[validate(custom(function = "validate_phone"))]
    pub(crate) phone: String,
    #[serde(alias = "waveId")]
    pub(crate) wave_id: String,
}

fn validate_nisn(nisn: &str) -> Result<(), ValidationError> {
    if nisn.len() == 10 && nisn.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("nisn").with_message("NISN must be exactly 10 digits".into()))
    }
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if (8..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message("phone must be 8-15 digits".into()))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct VerificationUpdate {
    pub(crate) status: VerificationStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StudentListQuery {
    #[serde(default)]
    pub(crate) status: Option<VerificationStatus>,
    #[serde(default, alias = "q")]
    pub(crate) search: Option<String>,
    #[serde(default)]
    pub(crate) skip: i64,
    #[serde(default = "crate::api::pagination::default_limit")]
    pub(crate) limit: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StudentResponse {
    pub(crate) id: String,
    pub(crate) nisn: String,
    pub(crate) full_name: String,
    pub(crate) birth_date: String,
    pub(crate) origin_school: String,
    pub(crate) regency: String,
    pub(crate) district: String,
    pub(crate) address: String,
    pub(crate) phone: String,
    pub(crate) wave_id: Option<String>,
    pub(crate) verification_status: VerificationStatus,
    pub(crate) exam_number: Option<String>,
    pub(crate) cbt_password: Option<String>,
    pub(crate) verified_at: Option<String>,
    pub(crate) created_at: String,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            nisn: student.nisn,
            full_name: student.full_name,
            birth_date: format_date(student.birth_date),
            origin_school: student.origin_school,
            regency: student.regency,
            district: student.district,
            address: student.address,
            phone: student.phone,
            wave_id: student.wave_id,
            verification_status: student.verification_status,
            exam_number: student.exam_number,
            cbt_password: student.cbt_password,
            verified_at: student.verified_at.map(format_primitive),
            created_at: format_primitive(student.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(nisn: &str, phone: &str) -> RegistrationCreate {
        serde_json::from_value(serde_json::json!({
            "nisn": nisn,
            "fullName": "Budi Santoso",
            "birthDate": "2010-04-12",
            "originSchool": "SMP Negeri 2 Pacitan",
            "regency": "Pacitan",
            "district": "Arjosari",
            "address": "Dusun Krajan RT 01",
            "phone": phone,
            "waveId": "wave-1"
        }))
        .unwrap()
    }

    #[test]
    fn registration_accepts_ten_digit_nisn() {
        assert!(registration("0098765432", "081234567890").validate().is_ok());
        assert!(registration("0098765432", "+6281234567890").validate().is_ok());
    }

    #[test]
    fn registration_rejects_malformed_nisn_and_phone() {
        assert!(registration("98765432", "081234567890").validate().is_err());
        assert!(registration("00987654AB", "081234567890").validate().is_err());
        assert!(registration("0098765432", "0812-3456").validate().is_err());
    }
}
