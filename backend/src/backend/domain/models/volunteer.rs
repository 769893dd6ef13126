//! backend/src/backend/domain/models/volunteer.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain model for a registered volunteer.
///
/// Geography fields hold display names ("Punjab", "Lahore"), not hierarchy
/// ids; the registration service resolves them at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    /// Volunteer ID in format: "volunteer::epoch_millis"
    pub id: String,
    pub full_name: String,
    /// Formatted CNIC (XXXXX-XXXXXXX-X)
    pub cnic: String,
    pub phone: String,
    /// WhatsApp number, if the volunteer gave one
    pub whatsapp: Option<String>,
    pub email: String,
    pub province: String,
    pub division: String,
    pub district: String,
    pub education: String,
    pub availability: String,
    pub status: VolunteerStatus,
    pub registration_date: NaiveDate,
}

impl Volunteer {
    /// Generate a unique volunteer ID from a timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("volunteer::{}", epoch_millis)
    }
}

/// Registration status of a volunteer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    Active,
    Pending,
    Inactive,
}

impl VolunteerStatus {
    /// Parse a status from its lowercase wire form.
    pub fn parse(value: &str) -> Option<VolunteerStatus> {
        match value.trim().to_lowercase().as_str() {
            "active" => Some(VolunteerStatus::Active),
            "pending" => Some(VolunteerStatus::Pending),
            "inactive" => Some(VolunteerStatus::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for VolunteerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolunteerStatus::Active => write!(f, "active"),
            VolunteerStatus::Pending => write!(f, "pending"),
            VolunteerStatus::Inactive => write!(f, "inactive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_volunteer_id() {
        assert_eq!(Volunteer::generate_id(1726387200000), "volunteer::1726387200000");
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!(VolunteerStatus::parse("active"), Some(VolunteerStatus::Active));
        assert_eq!(VolunteerStatus::parse("Inactive"), Some(VolunteerStatus::Inactive));
        assert_eq!(VolunteerStatus::parse("unknown"), None);
        assert_eq!(VolunteerStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn test_volunteer_serde_round_trip() {
        let volunteer = Volunteer {
            id: Volunteer::generate_id(1726387200000),
            full_name: "Muhammad Ali Khan".to_string(),
            cnic: "35202-1234567-1".to_string(),
            phone: "+92-321-1234567".to_string(),
            whatsapp: None,
            email: "ali.khan@example.com".to_string(),
            province: "Punjab".to_string(),
            division: "Lahore Division".to_string(),
            district: "Lahore".to_string(),
            education: "Bachelors".to_string(),
            availability: "Anytime".to_string(),
            status: VolunteerStatus::Active,
            registration_date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
        };

        let json = serde_json::to_string(&volunteer).unwrap();
        assert!(json.contains("\"status\":\"active\""));
        assert!(json.contains("\"registration_date\":\"2025-09-15\""));
        let back: Volunteer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, volunteer);
    }
}
