use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use validator::Validate;

use super::{default_true, deserialize_option_timestamp, deserialize_timestamp};
use crate::core::time::format_primitive;
use crate::db::models::Wave;

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct WaveCreate {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(alias = "startDate", deserialize_with = "deserialize_timestamp")]
    pub(crate) start_date: PrimitiveDateTime,
    #[serde(alias = "endDate", deserialize_with = "deserialize_timestamp")]
    pub(crate) end_date: PrimitiveDateTime,
    #[serde(default)]
    #[validate(range(min = 1, message = "quota must be positive"))]
    pub(crate) quota: Option<i32>,
    #[serde(default = "default_true", alias = "isActive")]
    pub(crate) is_active: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct WaveUpdate {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default, alias = "startDate", deserialize_with = "deserialize_option_timestamp")]
    pub(crate) start_date: Option<PrimitiveDateTime>,
    #[serde(default, alias = "endDate", deserialize_with = "deserialize_option_timestamp")]
    pub(crate) end_date: Option<PrimitiveDateTime>,
    #[serde(default)]
    #[validate(range(min = 1, message = "quota must be positive"))]
    pub(crate) quota: Option<i32>,
    #[serde(default, alias = "isActive")]
    pub(crate) is_active: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WaveResponse {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
    pub(crate) quota: Option<i32>,
    pub(crate) is_active: bool,
}

impl From<Wave> for WaveResponse {
    fn from(wave: Wave) -> Self {
        Self {
            id: wave.id,
            name: wave.name,
            description: wave.description,
            start_date: format_primitive(wave.start_date),
            end_date: format_primitive(wave.end_date),
            quota: wave.quota,
            is_active: wave.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_accepts_camel_case_and_normalizes_offsets() {
        let payload: WaveCreate = serde_json::from_value(serde_json::json!({
            "name": "Gelombang 1",
            "startDate": "2025-06-01T08:00:00+07:00",
            "endDate": "2025-06-30T23:59:00Z",
            "quota": 120
        }))
        .unwrap();

        assert!(payload.is_active);
        assert_eq!(format_primitive(payload.start_date), "2025-06-01T01:00:00Z");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn create_rejects_malformed_dates() {
        let result = serde_json::from_value::<WaveCreate>(serde_json::json!({
            "name": "Gelombang 1",
            "start_date": "1 Juni 2025",
            "end_date": "2025-06-30T23:59:00Z"
        }));
        assert!(result.is_err());
    }
}
