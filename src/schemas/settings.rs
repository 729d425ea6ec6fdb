use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::time::format_primitive;
use crate::db::models::SchoolSettings;
use crate::schemas::catalog::CatalogItemResponse;
use crate::schemas::wave::WaveResponse;
use crate::services::public_settings::PublicSettings;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct SchoolSettingsUpdate {
    #[serde(alias = "schoolName")]
    #[validate(length(min = 1, max = 200, message = "school_name must be 1-200 characters"))]
    pub(crate) school_name: String,
    #[serde(default, alias = "logoUrl")]
    pub(crate) logo_url: Option<String>,
    #[serde(default)]
    pub(crate) address: Option<String>,
    #[serde(default)]
    pub(crate) phone: Option<String>,
    #[serde(default)]
    #[validate(email(message = "email must be a valid address"))]
    pub(crate) email: Option<String>,
    #[serde(default, alias = "academicYear")]
    pub(crate) academic_year: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SchoolSettingsResponse {
    pub(crate) school_name: String,
    pub(crate) logo_url: Option<String>,
    pub(crate) address: Option<String>,
    pub(crate) phone: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) academic_year: Option<String>,
    pub(crate) updated_at: String,
}

impl From<SchoolSettings> for SchoolSettingsResponse {
    fn from(settings: SchoolSettings) -> Self {
        Self {
            school_name: settings.school_name,
            logo_url: settings.logo_url,
            address: settings.address,
            phone: settings.phone,
            email: settings.email,
            academic_year: settings.academic_year,
            updated_at: format_primitive(settings.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PublicSettingsResponse {
    pub(crate) settings: Option<SchoolSettingsResponse>,
    pub(crate) waves: Vec<WaveResponse>,
    pub(crate) subjects: Vec<CatalogItemResponse>,
    pub(crate) semesters: Vec<CatalogItemResponse>,
}

impl From<PublicSettings> for PublicSettingsResponse {
    fn from(value: PublicSettings) -> Self {
        Self {
            settings: value.settings.map(Into::into),
            waves: value.waves.into_iter().map(Into::into).collect(),
            subjects: value.subjects.into_iter().map(Into::into).collect(),
            semesters: value.semesters.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{CatalogItem, Wave};
    use time::macros::datetime;

    #[test]
    fn public_payload_uses_camel_case_and_order_key() {
        let payload = PublicSettings {
            settings: Some(SchoolSettings {
                school_name: "SMA Negeri 1 Pacitan".to_string(),
                logo_url: Some("/logo-sman1.png".to_string()),
                address: None,
                phone: None,
                email: None,
                academic_year: Some("2025/2026".to_string()),
                updated_at: datetime!(2025-05-01 00:00),
            }),
            waves: vec![Wave {
                id: "w1".to_string(),
                name: "Gelombang 1".to_string(),
                description: None,
                start_date: datetime!(2025-06-01 00:00),
                end_date: datetime!(2025-06-30 00:00),
                quota: None,
                is_active: true,
                created_at: datetime!(2025-05-01 00:00),
                updated_at: datetime!(2025-05-01 00:00),
            }],
            subjects: vec![CatalogItem {
                id: "s1".to_string(),
                name: "Matematika".to_string(),
                order_index: 1,
                is_active: true,
                created_at: datetime!(2025-05-01 00:00),
                updated_at: datetime!(2025-05-01 00:00),
            }],
            semesters: Vec::new(),
        };

        let json = serde_json::to_value(PublicSettingsResponse::from(payload)).unwrap();

        assert_eq!(json["settings"]["schoolName"], "SMA Negeri 1 Pacitan");
        assert_eq!(json["settings"]["academicYear"], "2025/2026");
        assert_eq!(json["waves"][0]["startDate"], "2025-06-01T00:00:00Z");
        assert_eq!(json["waves"][0]["isActive"], true);
        assert_eq!(json["subjects"][0]["order"], 1);
        assert_eq!(json["semesters"], serde_json::json!([]));
    }

    #[test]
    fn missing_settings_serialize_as_null() {
        let payload = PublicSettings {
            settings: None,
            waves: Vec::new(),
            subjects: Vec::new(),
            semesters: Vec::new(),
        };
        let json = serde_json::to_value(PublicSettingsResponse::from(payload)).unwrap();
        assert!(json["settings"].is_null());
    }
}
