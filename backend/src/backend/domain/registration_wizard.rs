//! Four-step registration wizard state machine.
//!
//! Holds the in-progress draft, formats CNIC/phone fields as they are
//! typed, gates forward navigation on per-step validation, and fires the
//! cascading geography resets when a governing location field changes.
//! After a successful submit the wizard is terminal and rejects mutation.

use log::warn;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::domain::geography_service::GeographyService;
use crate::backend::domain::models::geography::GeographyNode;
use crate::backend::domain::validation::{
    format_cnic, format_phone, validate_cnic, validate_email, validate_minimum_age, validate_name,
    validate_phone, validate_required, validation_message,
};

/// Number of form steps (excluding the terminal state).
pub const STEP_COUNT: u8 = 4;

/// Wizard states. `Next` moves strictly forward one gate at a time,
/// `Previous` moves back freely, `Submitted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Personal,
    Contact,
    Location,
    VolunteerInfo,
    Submitted,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Personal => 1,
            WizardStep::Contact => 2,
            WizardStep::Location => 3,
            WizardStep::VolunteerInfo => 4,
            WizardStep::Submitted => 5,
        }
    }

    pub fn from_number(number: u8) -> Option<WizardStep> {
        match number {
            1 => Some(WizardStep::Personal),
            2 => Some(WizardStep::Contact),
            3 => Some(WizardStep::Location),
            4 => Some(WizardStep::VolunteerInfo),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Personal => "Personal",
            WizardStep::Contact => "Contact",
            WizardStep::Location => "Location",
            WizardStep::VolunteerInfo => "Volunteer Info",
            WizardStep::Submitted => "Submitted",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Usage-contract violations. These indicate caller bugs, not bad user
/// input; user-input failures land in the wizard's error set instead.
#[derive(Debug, Error, PartialEq)]
pub enum WizardError {
    #[error("registration has already been submitted; the draft can no longer change")]
    AlreadySubmitted,
    #[error("submit is only valid on the final step (currently on {0})")]
    NotOnFinalStep(WizardStep),
    #[error("the final step has validation errors")]
    ValidationFailed,
}

/// Step 1 fields: personal information.
pub const PERSONAL_FIELDS: &[&str] = &["full_name", "father_name", "cnic", "date_of_birth", "gender"];

/// Step 2 fields: contact information.
pub const CONTACT_FIELDS: &[&str] = &["phone", "whatsapp", "email"];

/// Step 3 fields: location. Geography fields come before the street
/// address block; parents precede children so drafts can be replayed
/// front-to-back without the cascades wiping later values.
pub const LOCATION_FIELDS: &[&str] = &[
    "province",
    "division",
    "district",
    "tehsil",
    "union_council",
    "house_number",
    "street",
    "block_mohalla",
    "village",
    "city",
    "address",
    "postal_code",
];

/// Step 4 fields: volunteer information.
pub const VOLUNTEER_INFO_FIELDS: &[&str] = &[
    "education",
    "occupation",
    "availability",
    "experience",
    "emergency_contact",
    "emergency_phone",
];

/// Every draft field in replay-safe order (step order, parents first).
pub fn all_fields() -> impl Iterator<Item = &'static str> {
    PERSONAL_FIELDS
        .iter()
        .chain(CONTACT_FIELDS)
        .chain(LOCATION_FIELDS)
        .chain(VOLUNTEER_INFO_FIELDS)
        .copied()
}

fn is_known_field(field: &str) -> bool {
    all_fields().any(|f| f == field)
}

pub struct RegistrationWizard {
    geography: Arc<GeographyService>,
    step: WizardStep,
    draft: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
    divisions: Vec<GeographyNode>,
    districts: Vec<GeographyNode>,
    tehsils: Vec<GeographyNode>,
    union_councils: Vec<GeographyNode>,
}

impl RegistrationWizard {
    pub fn new(geography: Arc<GeographyService>) -> Self {
        Self {
            geography,
            step: WizardStep::Personal,
            draft: BTreeMap::new(),
            errors: BTreeMap::new(),
            divisions: Vec::new(),
            districts: Vec::new(),
            tehsils: Vec::new(),
            union_councils: Vec::new(),
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    /// Current value of a draft field ("" when unset).
    pub fn field(&self, name: &str) -> &str {
        self.draft.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn draft(&self) -> &BTreeMap<String, String> {
        &self.draft
    }

    /// Validation errors from the most recent validation pass.
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn province_options(&self) -> Vec<GeographyNode> {
        self.geography.provinces()
    }

    pub fn division_options(&self) -> &[GeographyNode] {
        &self.divisions
    }

    pub fn district_options(&self) -> &[GeographyNode] {
        &self.districts
    }

    pub fn tehsil_options(&self) -> &[GeographyNode] {
        &self.tehsils
    }

    pub fn union_council_options(&self) -> &[GeographyNode] {
        &self.union_councils
    }

    /// Set a draft field.
    ///
    /// CNIC and phone fields are formatted as typed; the field's pending
    /// error is cleared; geography fields synchronously cascade, clearing
    /// descendant selections and re-deriving their option lists (the
    /// cascade fires on every change, even to the same value).
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), WizardError> {
        if self.step == WizardStep::Submitted {
            return Err(WizardError::AlreadySubmitted);
        }
        if !is_known_field(field) {
            warn!("Ignoring unknown registration field: {}", field);
            return Ok(());
        }

        let value = match field {
            "cnic" => format_cnic(value),
            "phone" | "whatsapp" | "emergency_phone" => format_phone(value),
            _ => value.to_string(),
        };

        self.errors.remove(field);
        self.draft.insert(field.to_string(), value.clone());

        match field {
            "province" => {
                self.divisions = self.geography.divisions_of(&value);
                self.districts.clear();
                self.tehsils.clear();
                self.union_councils.clear();
                self.clear_fields(&["division", "district", "tehsil", "union_council", "city"]);
            }
            "division" => {
                self.districts = self.geography.districts_of(&value);
                self.tehsils.clear();
                self.union_councils.clear();
                self.clear_fields(&["district", "tehsil", "union_council"]);
            }
            "district" => {
                self.tehsils = self.geography.tehsils_of(&value);
                self.union_councils.clear();
                self.clear_fields(&["tehsil", "union_council"]);
            }
            "tehsil" => {
                self.union_councils = self.geography.union_councils_of(&value);
                self.clear_fields(&["union_council"]);
            }
            _ => {}
        }

        Ok(())
    }

    fn clear_fields(&mut self, fields: &[&str]) {
        for field in fields {
            self.draft.insert(field.to_string(), String::new());
        }
    }

    /// Validate one step, replacing the error set wholesale.
    /// Returns true when the step has no errors.
    pub fn validate_step(&mut self, step: WizardStep) -> bool {
        let mut errors = BTreeMap::new();

        match step {
            WizardStep::Personal => {
                self.check_name(&mut errors, "full_name", "Full Name");
                self.check_name(&mut errors, "father_name", "Father Name");

                if !validate_cnic(self.field("cnic")) {
                    errors.insert("cnic".to_string(), validation_message("CNIC", "cnic"));
                }

                let date_of_birth = self.field("date_of_birth");
                if !validate_required(date_of_birth) {
                    errors.insert(
                        "date_of_birth".to_string(),
                        validation_message("Date of Birth", "required"),
                    );
                } else if !validate_minimum_age(date_of_birth) {
                    errors.insert("date_of_birth".to_string(), validation_message("Age", "age"));
                }

                if !validate_required(self.field("gender")) {
                    errors.insert("gender".to_string(), validation_message("Gender", "required"));
                }
            }
            WizardStep::Contact => {
                if !validate_phone(self.field("phone")) {
                    errors.insert("phone".to_string(), validation_message("Phone", "phone"));
                }

                let whatsapp = self.field("whatsapp");
                if !whatsapp.is_empty() && !validate_phone(whatsapp) {
                    errors.insert("whatsapp".to_string(), validation_message("WhatsApp", "phone"));
                }

                if !validate_email(self.field("email")) {
                    errors.insert("email".to_string(), validation_message("Email", "email"));
                }
            }
            WizardStep::Location => {
                for (field, label) in [
                    ("province", "Province"),
                    ("division", "Division"),
                    ("district", "District"),
                    ("tehsil", "Tehsil"),
                    ("street", "Street"),
                    ("block_mohalla", "Block/Mohalla/Society"),
                    ("city", "City"),
                    ("postal_code", "Postal Code"),
                ] {
                    if !validate_required(self.field(field)) {
                        errors.insert(field.to_string(), validation_message(label, "required"));
                    }
                }
            }
            WizardStep::VolunteerInfo => {
                for (field, label) in [
                    ("education", "Education"),
                    ("availability", "Availability"),
                    ("emergency_contact", "Emergency Contact Name"),
                ] {
                    if !validate_required(self.field(field)) {
                        errors.insert(field.to_string(), validation_message(label, "required"));
                    }
                }

                if !validate_phone(self.field("emergency_phone")) {
                    errors.insert(
                        "emergency_phone".to_string(),
                        validation_message("Emergency Contact Phone", "phone"),
                    );
                }
            }
            WizardStep::Submitted => {}
        }

        let valid = errors.is_empty();
        self.errors = errors;
        valid
    }

    fn check_name(&self, errors: &mut BTreeMap<String, String>, field: &str, label: &str) {
        let value = self.field(field);
        if !validate_required(value) {
            errors.insert(field.to_string(), validation_message(label, "required"));
        } else if !validate_name(value) {
            errors.insert(field.to_string(), validation_message(label, "name"));
        }
    }

    /// Try to advance one step. The current step is validated first; on
    /// failure the wizard stays put with the errors recorded. Returns
    /// whether the gate passed (the step clamps at the final form step).
    pub fn next(&mut self) -> Result<bool, WizardError> {
        let passed = match self.step {
            WizardStep::Submitted => return Err(WizardError::AlreadySubmitted),
            step => self.validate_step(step),
        };
        if passed {
            self.step = match self.step {
                WizardStep::Personal => WizardStep::Contact,
                WizardStep::Contact => WizardStep::Location,
                WizardStep::Location => WizardStep::VolunteerInfo,
                step => step,
            };
        }
        Ok(passed)
    }

    /// Step back without re-validating; clamps at the first step.
    pub fn previous(&mut self) -> Result<(), WizardError> {
        self.step = match self.step {
            WizardStep::Submitted => return Err(WizardError::AlreadySubmitted),
            WizardStep::Personal | WizardStep::Contact => WizardStep::Personal,
            WizardStep::Location => WizardStep::Contact,
            WizardStep::VolunteerInfo => WizardStep::Location,
        };
        Ok(())
    }

    /// Submit the registration from the final step.
    ///
    /// Returns the frozen draft as the submission payload and moves the
    /// wizard to `Submitted`. Calling from any earlier step is a caller
    /// bug ([`WizardError::NotOnFinalStep`]); a failing final validation is
    /// recoverable ([`WizardError::ValidationFailed`], details in
    /// [`errors`](Self::errors)).
    pub fn submit(&mut self) -> Result<BTreeMap<String, String>, WizardError> {
        match self.step {
            WizardStep::Submitted => Err(WizardError::AlreadySubmitted),
            WizardStep::VolunteerInfo => {
                if !self.validate_step(WizardStep::VolunteerInfo) {
                    return Err(WizardError::ValidationFailed);
                }
                self.step = WizardStep::Submitted;
                Ok(self.draft.clone())
            }
            step => Err(WizardError::NotOnFinalStep(step)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::StaticGeographyRepository;

    fn wizard() -> RegistrationWizard {
        let geography = Arc::new(GeographyService::new(&StaticGeographyRepository::new()).unwrap());
        RegistrationWizard::new(geography)
    }

    fn fill_step1(wizard: &mut RegistrationWizard) {
        wizard.set_field("full_name", "Muhammad Ali Khan").unwrap();
        wizard.set_field("father_name", "Akbar Khan").unwrap();
        wizard.set_field("cnic", "3520212345671").unwrap();
        wizard.set_field("date_of_birth", "1995-05-01").unwrap();
        wizard.set_field("gender", "male").unwrap();
    }

    fn fill_step2(wizard: &mut RegistrationWizard) {
        wizard.set_field("phone", "+92-321-1234567").unwrap();
        wizard.set_field("email", "ali.khan@example.com").unwrap();
    }

    fn fill_step3(wizard: &mut RegistrationWizard) {
        wizard.set_field("province", "punjab").unwrap();
        wizard.set_field("division", "lahore").unwrap();
        wizard.set_field("district", "lahore").unwrap();
        wizard.set_field("tehsil", "lahore-city").unwrap();
        wizard.set_field("street", "Main Boulevard").unwrap();
        wizard.set_field("block_mohalla", "Block C").unwrap();
        wizard.set_field("city", "Lahore").unwrap();
        wizard.set_field("postal_code", "54000").unwrap();
    }

    fn fill_step4(wizard: &mut RegistrationWizard) {
        wizard.set_field("education", "bachelors").unwrap();
        wizard.set_field("availability", "anytime").unwrap();
        wizard.set_field("emergency_contact", "Akbar Khan").unwrap();
        wizard.set_field("emergency_phone", "03211234568").unwrap();
    }

    #[test]
    fn test_starts_on_personal_step() {
        let wizard = wizard();
        assert_eq!(wizard.current_step(), WizardStep::Personal);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_any_missing_required_field_blocks_step1() {
        for missing in PERSONAL_FIELDS {
            let mut wizard = wizard();
            fill_step1(&mut wizard);
            wizard.set_field(missing, "").unwrap();

            assert!(!wizard.next().unwrap(), "advanced with {} empty", missing);
            assert_eq!(wizard.current_step(), WizardStep::Personal);
            let error = wizard.errors().get(*missing);
            assert!(
                error.is_some_and(|message| !message.is_empty()),
                "no error recorded for {}",
                missing
            );
        }
    }

    #[test]
    fn test_cnic_and_phone_are_formatted_as_typed() {
        let mut wizard = wizard();
        wizard.set_field("cnic", "3520212345671").unwrap();
        assert_eq!(wizard.field("cnic"), "35202-1234567-1");

        wizard.set_field("phone", "923211234567").unwrap();
        assert_eq!(wizard.field("phone"), "+92-321-1234567");

        wizard.set_field("whatsapp", "03001234567").unwrap();
        assert_eq!(wizard.field("whatsapp"), "0300-1234567");
    }

    #[test]
    fn test_editing_a_field_clears_its_error() {
        let mut wizard = wizard();
        assert!(!wizard.next().unwrap());
        assert!(wizard.errors().contains_key("full_name"));

        wizard.set_field("full_name", "Ali Khan").unwrap();
        assert!(!wizard.errors().contains_key("full_name"));
        // Other errors from the pass stay until the next validation
        assert!(wizard.errors().contains_key("cnic"));
    }

    #[test]
    fn test_province_cascade_resets_descendants() {
        let mut wizard = wizard();
        fill_step3(&mut wizard);
        wizard.set_field("union_council", "uc-1").unwrap();
        assert_eq!(wizard.union_council_options().len(), 3);

        wizard.set_field("province", "sindh").unwrap();
        for field in ["division", "district", "tehsil", "union_council", "city"] {
            assert_eq!(wizard.field(field), "", "{} not cleared", field);
        }
        assert_eq!(wizard.division_options().len(), 6);
        assert!(wizard.district_options().is_empty());
        assert!(wizard.tehsil_options().is_empty());
        assert!(wizard.union_council_options().is_empty());
    }

    #[test]
    fn test_district_cascade_synthesizes_tehsils() {
        let mut wizard = wizard();
        wizard.set_field("province", "punjab").unwrap();
        wizard.set_field("division", "lahore").unwrap();
        wizard.set_field("district", "kasur").unwrap();

        let names: Vec<&str> = wizard.tehsil_options().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["City Tehsil", "Sadar Tehsil"]);
        assert_eq!(wizard.field("tehsil"), "");
    }

    #[test]
    fn test_cascade_refires_on_same_value() {
        let mut wizard = wizard();
        fill_step3(&mut wizard);
        assert_eq!(wizard.field("tehsil"), "lahore-city");

        // Re-selecting the same district still clears the tehsil
        wizard.set_field("district", "lahore").unwrap();
        assert_eq!(wizard.field("tehsil"), "");
        assert_eq!(wizard.tehsil_options().len(), 5);
    }

    #[test]
    fn test_previous_never_validates() {
        let mut wizard = wizard();
        fill_step1(&mut wizard);
        assert!(wizard.next().unwrap());
        assert_eq!(wizard.current_step(), WizardStep::Contact);

        // Step 2 is empty and would fail validation, but previous is free
        wizard.previous().unwrap();
        assert_eq!(wizard.current_step(), WizardStep::Personal);
        // Clamps at the first step
        wizard.previous().unwrap();
        assert_eq!(wizard.current_step(), WizardStep::Personal);
    }

    #[test]
    fn test_optional_whatsapp_only_validated_when_present() {
        let mut wizard = wizard();
        fill_step1(&mut wizard);
        wizard.next().unwrap();
        fill_step2(&mut wizard);

        assert!(wizard.next().unwrap());

        let mut wizard = self::wizard();
        fill_step1(&mut wizard);
        wizard.next().unwrap();
        fill_step2(&mut wizard);
        wizard.set_field("whatsapp", "12").unwrap();
        assert!(!wizard.next().unwrap());
        assert!(wizard.errors().contains_key("whatsapp"));
    }

    #[test]
    fn test_submit_from_wrong_step_is_a_contract_violation() {
        let mut wizard = wizard();
        assert_eq!(
            wizard.submit(),
            Err(WizardError::NotOnFinalStep(WizardStep::Personal))
        );
    }

    #[test]
    fn test_full_walk_to_submission() {
        let mut wizard = wizard();
        fill_step1(&mut wizard);
        assert!(wizard.next().unwrap());
        fill_step2(&mut wizard);
        assert!(wizard.next().unwrap());
        fill_step3(&mut wizard);
        assert!(wizard.next().unwrap());
        fill_step4(&mut wizard);

        let payload = wizard.submit().unwrap();
        assert_eq!(wizard.current_step(), WizardStep::Submitted);
        assert_eq!(payload.get("cnic").map(String::as_str), Some("35202-1234567-1"));
        assert_eq!(payload.get("province").map(String::as_str), Some("punjab"));

        // Terminal: no further mutation or navigation
        assert_eq!(
            wizard.set_field("full_name", "Someone Else"),
            Err(WizardError::AlreadySubmitted)
        );
        assert_eq!(wizard.next(), Err(WizardError::AlreadySubmitted));
        assert_eq!(wizard.previous(), Err(WizardError::AlreadySubmitted));
    }

    #[test]
    fn test_submit_with_invalid_final_step_is_recoverable() {
        let mut wizard = wizard();
        fill_step1(&mut wizard);
        wizard.next().unwrap();
        fill_step2(&mut wizard);
        wizard.next().unwrap();
        fill_step3(&mut wizard);
        wizard.next().unwrap();

        assert_eq!(wizard.submit(), Err(WizardError::ValidationFailed));
        assert_eq!(wizard.current_step(), WizardStep::VolunteerInfo);
        assert!(wizard.errors().contains_key("education"));

        // Fixing the fields makes the same wizard submittable
        fill_step4(&mut wizard);
        assert!(wizard.submit().is_ok());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut wizard = wizard();
        wizard.set_field("favourite_colour", "green").unwrap();
        assert_eq!(wizard.field("favourite_colour"), "");
        assert!(wizard.draft().is_empty());
    }

    #[test]
    fn test_step_numbers_round_trip() {
        for number in 1..=STEP_COUNT {
            let step = WizardStep::from_number(number).unwrap();
            assert_eq!(step.number(), number);
        }
        assert!(WizardStep::from_number(0).is_none());
        assert!(WizardStep::from_number(5).is_none());
    }
}
