//! Patient profile bodies

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use hl_core::domain::entities::account::ProfileDetails;
use hl_core::OwnProfile;

use super::validators::image_data_uri;

/// `POST /patient/complete-profile`
///
/// Every field is replaced; omitted fields are cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompleteProfileRequest {
    #[validate(length(max = 32))]
    pub nic: Option<String>,
    #[validate(length(max = 32))]
    pub mobile_number: Option<String>,
    /// `YYYY-MM-DD`
    pub dob: Option<NaiveDate>,
    #[validate(length(max = 32))]
    pub gender: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[validate(length(max = 32))]
    pub marital_status: Option<String>,
    #[validate(length(max = 255))]
    pub guardian_name: Option<String>,
    #[validate(length(max = 64))]
    pub guardian_contact: Option<String>,
    /// Base64 `data:image/...` URI
    #[validate(custom(function = "image_data_uri"))]
    pub profile_image: Option<String>,
    #[validate(length(max = 8))]
    pub blood_group: Option<String>,
    #[validate(range(min = 0.0, max = 300.0))]
    pub height: Option<f64>,
    #[validate(range(min = 0.0, max = 700.0))]
    pub weight: Option<f64>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<CompleteProfileRequest> for ProfileDetails {
    fn from(request: CompleteProfileRequest) -> Self {
        Self {
            nic: non_empty(request.nic),
            mobile_number: non_empty(request.mobile_number),
            dob: request.dob,
            gender: non_empty(request.gender),
            address: non_empty(request.address),
            allergies: request
                .allergies
                .into_iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
            marital_status: non_empty(request.marital_status),
            guardian_name: non_empty(request.guardian_name),
            guardian_contact: non_empty(request.guardian_contact),
            profile_image: non_empty(request.profile_image),
            blood_group: non_empty(request.blood_group),
            height: request.height,
            weight: request.weight,
        }
    }
}

/// The caller's profile plus the link encoded in their QR card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnProfileResponse {
    #[serde(flatten)]
    pub profile: OwnProfile,
    pub public_profile_url: String,
}

impl OwnProfileResponse {
    pub fn new(profile: OwnProfile, public_base_url: &str) -> Self {
        let public_profile_url = format!(
            "{}/api/v1/public/patient/{}",
            public_base_url.trim_end_matches('/'),
            profile.health_id
        );
        Self {
            profile,
            public_profile_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_maps_to_profile_details() {
        let request: CompleteProfileRequest = serde_json::from_str(
            r#"{
                "nic": "199012345678",
                "dob": "1990-04-12",
                "allergies": ["penicillin", "  "],
                "guardianName": "  ",
                "height": 172.5
            }"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let details = ProfileDetails::from(request);
        assert_eq!(details.nic.as_deref(), Some("199012345678"));
        assert_eq!(details.dob, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert_eq!(details.allergies, vec!["penicillin".to_string()]);
        assert_eq!(details.guardian_name, None);
        assert_eq!(details.height, Some(172.5));
    }

    #[test]
    fn test_rejects_non_data_uri_image() {
        let request = CompleteProfileRequest {
            profile_image: Some("https://example.com/me.png".into()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
