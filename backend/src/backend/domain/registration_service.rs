//! Registration orchestration: replays a submitted draft through the
//! wizard's validation gates, packages the volunteer record, and stores it.

use anyhow::{anyhow, Result};
use chrono::Utc;
use log::{info, warn};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::domain::commands::registration::{
    SubmitRegistrationCommand, SubmitRegistrationResult, ValidateStepCommand, ValidateStepResult,
};
use crate::backend::domain::geography_service::GeographyService;
use crate::backend::domain::models::volunteer::{Volunteer, VolunteerStatus};
use crate::backend::domain::registration_wizard::{
    all_fields, RegistrationWizard, WizardError, WizardStep, STEP_COUNT,
};
use crate::backend::storage::traits::VolunteerStorage;

/// A fixed form option: stable id plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub const GENDER_OPTIONS: &[FormOption] = &[
    FormOption { id: "male", label: "Male" },
    FormOption { id: "female", label: "Female" },
    FormOption { id: "other", label: "Other" },
];

pub const EDUCATION_OPTIONS: &[FormOption] = &[
    FormOption { id: "primary", label: "Primary School" },
    FormOption { id: "middle", label: "Middle School" },
    FormOption { id: "matric", label: "Matric" },
    FormOption { id: "intermediate", label: "Intermediate" },
    FormOption { id: "bachelors", label: "Bachelors" },
    FormOption { id: "masters", label: "Masters" },
    FormOption { id: "phd", label: "PhD or Higher" },
];

pub const AVAILABILITY_OPTIONS: &[FormOption] = &[
    FormOption { id: "weekdays", label: "Weekdays Only" },
    FormOption { id: "weekends", label: "Weekends Only" },
    FormOption { id: "anytime", label: "Anytime" },
    FormOption { id: "emergencies", label: "Emergencies Only" },
];

fn option_label(options: &[FormOption], id: &str) -> String {
    options
        .iter()
        .find(|option| option.id == id)
        .map(|option| option.label.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// A rejected submission. Recoverable: the caller shows the per-field
/// errors and the user fixes the draft.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("step {step} of the registration has validation errors")]
pub struct InvalidRegistration {
    pub step: u8,
    pub errors: BTreeMap<String, String>,
}

/// Service handling public volunteer registration.
#[derive(Clone)]
pub struct RegistrationService {
    geography: Arc<GeographyService>,
    volunteer_repository: Arc<dyn VolunteerStorage>,
}

impl RegistrationService {
    pub fn new(geography: Arc<GeographyService>, volunteer_repository: Arc<dyn VolunteerStorage>) -> Self {
        Self {
            geography,
            volunteer_repository,
        }
    }

    /// Validate a single wizard step of a draft without submitting.
    pub fn validate_step(&self, command: ValidateStepCommand) -> Result<ValidateStepResult> {
        info!("Validating registration draft, step {}", command.step);

        let step = WizardStep::from_number(command.step)
            .ok_or_else(|| anyhow!("unknown registration step: {}", command.step))?;

        let mut wizard = self.replay_draft(&command.draft)?;
        let valid = wizard.validate_step(step);

        Ok(ValidateStepResult {
            step: command.step,
            valid,
            errors: wizard.errors().clone(),
        })
    }

    /// Submit a completed draft.
    ///
    /// The draft is replayed into a fresh wizard and driven through all
    /// four validation gates; the first failing step is reported as
    /// [`InvalidRegistration`]. On success the packaged volunteer record
    /// is stored with status `pending`.
    pub fn submit_registration(&self, command: SubmitRegistrationCommand) -> Result<SubmitRegistrationResult> {
        info!("Submitting volunteer registration");

        let mut wizard = self.replay_draft(&command.draft)?;
        for _ in 1..STEP_COUNT {
            let step = wizard.current_step();
            if !wizard.next()? {
                warn!("Registration rejected at step {}", step.number());
                return Err(InvalidRegistration {
                    step: step.number(),
                    errors: wizard.errors().clone(),
                }
                .into());
            }
        }

        let payload = match wizard.submit() {
            Ok(payload) => payload,
            Err(WizardError::ValidationFailed) => {
                warn!("Registration rejected at step {}", STEP_COUNT);
                return Err(InvalidRegistration {
                    step: STEP_COUNT,
                    errors: wizard.errors().clone(),
                }
                .into());
            }
            Err(e) => return Err(e.into()),
        };

        let volunteer = self.package_volunteer(&payload);
        self.volunteer_repository.store_volunteer(&volunteer)?;

        info!("Registered volunteer {} ({})", volunteer.full_name, volunteer.id);

        Ok(SubmitRegistrationResult {
            volunteer,
            success_message: "Registration successful! Thank you for joining Civil Defence Pakistan. \
                              You will receive a confirmation email shortly."
                .to_string(),
        })
    }

    /// Feed a draft into a fresh wizard, field by field in replay-safe
    /// order so the geography cascades cannot wipe later values.
    fn replay_draft(&self, draft: &BTreeMap<String, String>) -> Result<RegistrationWizard> {
        let mut wizard = RegistrationWizard::new(self.geography.clone());
        for field in all_fields() {
            if let Some(value) = draft.get(field) {
                if !value.is_empty() {
                    wizard.set_field(field, value)?;
                }
            }
        }
        Ok(wizard)
    }

    /// Turn a validated submission payload into a volunteer record,
    /// resolving geography ids and option ids to display names.
    fn package_volunteer(&self, payload: &BTreeMap<String, String>) -> Volunteer {
        let get = |field: &str| payload.get(field).cloned().unwrap_or_default();

        let province_id = get("province");
        let division_id = get("division");
        let district_id = get("district");
        let province = self
            .geography
            .find_province(&province_id)
            .map(|node| node.name.clone())
            .unwrap_or(province_id);
        let division = self
            .geography
            .find_division(&division_id)
            .map(|node| node.name.clone())
            .unwrap_or(division_id);
        let district = self
            .geography
            .find_district(&district_id)
            .map(|node| node.name.clone())
            .unwrap_or(district_id);

        let whatsapp = get("whatsapp");
        let whatsapp = if whatsapp.trim().is_empty() { None } else { Some(whatsapp) };

        let now = Utc::now();
        Volunteer {
            id: Volunteer::generate_id(now.timestamp_millis() as u64),
            full_name: get("full_name").trim().to_string(),
            cnic: get("cnic"),
            phone: get("phone"),
            whatsapp,
            email: get("email").trim().to_string(),
            province,
            division,
            district,
            education: option_label(EDUCATION_OPTIONS, &get("education")),
            availability: option_label(AVAILABILITY_OPTIONS, &get("availability")),
            status: VolunteerStatus::Pending,
            registration_date: now.date_naive(),
        }
    }
}
