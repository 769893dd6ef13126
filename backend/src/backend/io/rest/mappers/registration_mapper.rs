use std::collections::BTreeMap;

use crate::backend::domain::commands::registration::{SubmitRegistrationResult, ValidateStepResult};
use crate::backend::domain::registration_service::{
    FormOption, AVAILABILITY_OPTIONS, EDUCATION_OPTIONS, GENDER_OPTIONS,
};
use crate::backend::io::rest::mappers::volunteer_mapper::VolunteerMapper;
use shared::{
    RegistrationDraft, RegistrationOptionsResponse, SelectOption, SubmitRegistrationResponse,
    ValidateStepResponse,
};

/// Mapper between the registration DTOs and the domain's draft map and
/// result types.
pub struct RegistrationMapper;

impl RegistrationMapper {
    /// Flatten a draft DTO into the field-name -> value map the wizard
    /// consumes.
    pub fn draft_to_map(draft: RegistrationDraft) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        let fields = [
            ("full_name", draft.full_name),
            ("father_name", draft.father_name),
            ("cnic", draft.cnic),
            ("date_of_birth", draft.date_of_birth),
            ("gender", draft.gender),
            ("phone", draft.phone),
            ("whatsapp", draft.whatsapp),
            ("email", draft.email),
            ("province", draft.province),
            ("division", draft.division),
            ("district", draft.district),
            ("tehsil", draft.tehsil),
            ("union_council", draft.union_council),
            ("house_number", draft.house_number),
            ("street", draft.street),
            ("block_mohalla", draft.block_mohalla),
            ("village", draft.village),
            ("city", draft.city),
            ("address", draft.address),
            ("postal_code", draft.postal_code),
            ("education", draft.education),
            ("occupation", draft.occupation),
            ("availability", draft.availability),
            ("experience", draft.experience),
            ("emergency_contact", draft.emergency_contact),
            ("emergency_phone", draft.emergency_phone),
        ];
        for (name, value) in fields {
            map.insert(name.to_string(), value);
        }
        map
    }

    pub fn to_validate_response(result: ValidateStepResult) -> ValidateStepResponse {
        ValidateStepResponse {
            step: result.step,
            valid: result.valid,
            errors: result.errors,
        }
    }

    pub fn to_submit_response(result: SubmitRegistrationResult) -> SubmitRegistrationResponse {
        SubmitRegistrationResponse {
            volunteer: VolunteerMapper::to_dto(result.volunteer),
            success_message: result.success_message,
        }
    }

    pub fn to_options_response() -> RegistrationOptionsResponse {
        fn to_select_options(options: &[FormOption]) -> Vec<SelectOption> {
            options
                .iter()
                .map(|option| SelectOption {
                    id: option.id.to_string(),
                    name: option.label.to_string(),
                })
                .collect()
        }

        RegistrationOptionsResponse {
            genders: to_select_options(GENDER_OPTIONS),
            education_levels: to_select_options(EDUCATION_OPTIONS),
            availabilities: to_select_options(AVAILABILITY_OPTIONS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::registration_wizard::all_fields;

    #[test]
    fn test_draft_map_covers_every_wizard_field() {
        let map = RegistrationMapper::draft_to_map(RegistrationDraft::default());
        for field in all_fields() {
            assert!(map.contains_key(field), "draft map missing {}", field);
        }
    }

    #[test]
    fn test_options_response_mirrors_the_form() {
        let options = RegistrationMapper::to_options_response();
        assert_eq!(options.genders.len(), 3);
        assert_eq!(options.education_levels.len(), 7);
        assert_eq!(options.availabilities.len(), 4);
        assert_eq!(options.education_levels[4].name, "Bachelors");
    }
}
