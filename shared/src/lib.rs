use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Registration status of a volunteer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolunteerStatus {
    /// Approved and on the active roster
    Active,
    /// Registered but awaiting admin approval
    Pending,
    /// Deactivated by an admin
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

/// A registered volunteer as shown in the admin views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    /// Volunteer ID in format: "volunteer::epoch_millis"
    pub id: String,
    pub full_name: String,
    /// Formatted CNIC (XXXXX-XXXXXXX-X)
    pub cnic: String,
    /// Formatted Pakistani phone number
    pub phone: String,
    /// WhatsApp number, if different from the phone number
    pub whatsapp: Option<String>,
    pub email: String,
    pub province: String,
    pub division: String,
    pub district: String,
    pub education: String,
    pub availability: String,
    pub status: VolunteerStatus,
    /// ISO 8601 date (YYYY-MM-DD)
    pub registration_date: String,
}

/// The in-progress registration record collected by the 4-step wizard.
///
/// All fields are plain strings exactly as typed/selected; geography fields
/// hold ids from the geography option lists, not display names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationDraft {
    // Step 1: Personal Information
    pub full_name: String,
    pub father_name: String,
    pub cnic: String,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date_of_birth: String,
    pub gender: String,

    // Step 2: Contact Information
    pub phone: String,
    pub whatsapp: String,
    pub email: String,

    // Step 3: Location Information
    pub province: String,
    pub division: String,
    pub district: String,
    pub tehsil: String,
    pub union_council: String,
    pub house_number: String,
    pub street: String,
    pub block_mohalla: String,
    pub village: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,

    // Step 4: Volunteer Information
    pub education: String,
    pub occupation: String,
    pub availability: String,
    pub experience: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
}

/// Request to validate a single wizard step without submitting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateStepRequest {
    /// Step number, 1 through 4
    pub step: u8,
    pub draft: RegistrationDraft,
}

/// Per-field validation outcome for one wizard step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateStepResponse {
    pub step: u8,
    pub valid: bool,
    /// Field name -> human-readable error message
    pub errors: BTreeMap<String, String>,
}

/// Request to submit a completed registration draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRegistrationRequest {
    pub draft: RegistrationDraft,
}

/// Response after a successful registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRegistrationResponse {
    pub volunteer: Volunteer,
    pub success_message: String,
}

/// Body returned when a submitted draft fails validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationErrorResponse {
    /// The first step that failed validation
    pub step: u8,
    pub errors: BTreeMap<String, String>,
}

/// A selectable option in a cascading geography dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographyOption {
    pub id: String,
    pub name: String,
    /// Urdu display name, carried for provinces/territories
    pub urdu_name: Option<String>,
}

/// Response containing one level of the geography hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographyOptionsResponse {
    pub options: Vec<GeographyOption>,
}

/// A fixed form option (gender, education level, availability).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
}

/// The fixed option lists the registration form is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationOptionsResponse {
    pub genders: Vec<SelectOption>,
    pub education_levels: Vec<SelectOption>,
    pub availabilities: Vec<SelectOption>,
}

/// Request for admin login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// An issued admin session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSessionDto {
    pub token: String,
    pub username: String,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub expires_at: String,
}

impl AdminSessionDto {
    /// Whether the session's expiry timestamp has passed. Clients use
    /// this to decide when to prompt for a fresh login; an unparseable
    /// timestamp counts as expired.
    pub fn is_expired(&self) -> bool {
        match chrono::DateTime::parse_from_rfc3339(&self.expires_at) {
            Ok(expires_at) => chrono::Utc::now() > expires_at.with_timezone(&chrono::Utc),
            Err(_) => true,
        }
    }
}

/// Response after a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub session: AdminSessionDto,
    pub success_message: String,
}

/// Request to end an admin session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub token: String,
}

/// Response after logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success_message: String,
}

/// Filter facets for the volunteer management table.
///
/// Every field is optional; an absent or empty value applies no constraint.
/// `search` is a substring match across name/CNIC/email/phone, the rest are
/// exact matches against the record's stored values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolunteerFilters {
    pub search: Option<String>,
    pub province: Option<String>,
    pub division: Option<String>,
    pub district: Option<String>,
    pub status: Option<String>,
    pub education: Option<String>,
    pub availability: Option<String>,
}

/// Response containing the filtered volunteer list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerListResponse {
    pub volunteers: Vec<Volunteer>,
    pub total_count: usize,
}

/// Request to set the status of several volunteers at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkStatusRequest {
    pub volunteer_ids: Vec<String>,
    pub status: VolunteerStatus,
}

/// Response after a bulk status update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkStatusResponse {
    pub updated_count: usize,
    pub not_found_ids: Vec<String>,
    pub success_message: String,
}

/// Request to export volunteers as CSV.
///
/// `selected_ids` restricts the export to a selection; when empty, every
/// record matching `filters` is exported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportVolunteersRequest {
    pub filters: VolunteerFilters,
    pub selected_ids: Vec<String>,
}

/// Response carrying generated CSV content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportVolunteersResponse {
    pub csv_content: String,
    /// Suggested download filename (volunteers-YYYY-MM-DD.csv)
    pub filename: String,
    pub record_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(VolunteerStatus::Active.to_string(), "active");
        assert_eq!(VolunteerStatus::Pending.to_string(), "pending");
        assert_eq!(VolunteerStatus::Inactive.to_string(), "inactive");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(VolunteerStatus::parse("active"), Some(VolunteerStatus::Active));
        assert_eq!(VolunteerStatus::parse(" Pending "), Some(VolunteerStatus::Pending));
        assert_eq!(VolunteerStatus::parse("INACTIVE"), Some(VolunteerStatus::Inactive));
        assert_eq!(VolunteerStatus::parse("approved"), None);
        assert_eq!(VolunteerStatus::parse(""), None);
    }

    #[test]
    fn test_status_serde_round_trip() {
        let json = serde_json::to_string(&VolunteerStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let back: VolunteerStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VolunteerStatus::Pending);
    }

    #[test]
    fn test_draft_deserializes_with_missing_fields() {
        let draft: RegistrationDraft = serde_json::from_str("{\"full_name\":\"Ali\"}").unwrap();
        assert_eq!(draft.full_name, "Ali");
        assert_eq!(draft.cnic, "");
        assert_eq!(draft.union_council, "");
    }

    #[test]
    fn test_filters_default_to_unconstrained() {
        let filters: VolunteerFilters = serde_json::from_str("{}").unwrap();
        assert_eq!(filters, VolunteerFilters::default());
        assert!(filters.search.is_none());
    }

    #[test]
    fn test_session_expiry_check() {
        let mut session = AdminSessionDto {
            token: "t".to_string(),
            username: "admin".to_string(),
            created_at: "2025-01-01T00:00:00+00:00".to_string(),
            expires_at: "2099-01-01T00:00:00+00:00".to_string(),
        };
        assert!(!session.is_expired());

        session.expires_at = "2000-01-01T00:00:00+00:00".to_string();
        assert!(session.is_expired());

        session.expires_at = "garbage".to_string();
        assert!(session.is_expired());
    }
}
