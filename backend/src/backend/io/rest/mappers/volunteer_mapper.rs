//! backend/src/backend/io/rest/mappers/volunteer_mapper.rs

use crate::backend::domain::commands::volunteers::FilterCriteria;
use crate::backend::domain::models::volunteer::{
    Volunteer as DomainVolunteer, VolunteerStatus as DomainStatus,
};
use shared::{Volunteer as SharedVolunteer, VolunteerFilters, VolunteerListResponse, VolunteerStatus as SharedStatus};

/// Mapper between shared volunteer DTOs and domain volunteer models.
pub struct VolunteerMapper;

impl VolunteerMapper {
    pub fn status_to_dto(status: DomainStatus) -> SharedStatus {
        match status {
            DomainStatus::Active => SharedStatus::Active,
            DomainStatus::Pending => SharedStatus::Pending,
            DomainStatus::Inactive => SharedStatus::Inactive,
        }
    }

    pub fn status_to_domain(status: SharedStatus) -> DomainStatus {
        match status {
            SharedStatus::Active => DomainStatus::Active,
            SharedStatus::Pending => DomainStatus::Pending,
            SharedStatus::Inactive => DomainStatus::Inactive,
        }
    }

    /// Converts a domain volunteer to its shared DTO.
    pub fn to_dto(domain: DomainVolunteer) -> SharedVolunteer {
        SharedVolunteer {
            id: domain.id,
            full_name: domain.full_name,
            cnic: domain.cnic,
            phone: domain.phone,
            whatsapp: domain.whatsapp,
            email: domain.email,
            province: domain.province,
            division: domain.division,
            district: domain.district,
            education: domain.education,
            availability: domain.availability,
            status: Self::status_to_dto(domain.status),
            registration_date: domain.registration_date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn to_list_response(domain_volunteers: Vec<DomainVolunteer>) -> VolunteerListResponse {
        let total_count = domain_volunteers.len();
        VolunteerListResponse {
            volunteers: domain_volunteers.into_iter().map(Self::to_dto).collect(),
            total_count,
        }
    }

    /// Converts query-string filters to domain filter criteria
    /// (absent values become unconstrained facets).
    pub fn criteria_from_filters(filters: VolunteerFilters) -> FilterCriteria {
        FilterCriteria {
            search: filters.search.unwrap_or_default(),
            province: filters.province.unwrap_or_default(),
            division: filters.division.unwrap_or_default(),
            district: filters.district.unwrap_or_default(),
            status: filters.status.unwrap_or_default(),
            education: filters.education.unwrap_or_default(),
            availability: filters.availability.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_to_dto_formats_the_registration_date() {
        let domain = DomainVolunteer {
            id: "volunteer::1".to_string(),
            full_name: "Test".to_string(),
            cnic: "35202-1234567-1".to_string(),
            phone: "+92-321-1234567".to_string(),
            whatsapp: None,
            email: "t@example.com".to_string(),
            province: "Punjab".to_string(),
            division: "Lahore Division".to_string(),
            district: "Lahore".to_string(),
            education: "Bachelors".to_string(),
            availability: "Anytime".to_string(),
            status: DomainStatus::Pending,
            registration_date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
        };

        let dto = VolunteerMapper::to_dto(domain);
        assert_eq!(dto.registration_date, "2025-09-15");
        assert_eq!(dto.status, SharedStatus::Pending);
    }

    #[test]
    fn test_criteria_from_filters_defaults_to_unconstrained() {
        let criteria = VolunteerMapper::criteria_from_filters(VolunteerFilters {
            search: Some("ali".to_string()),
            status: Some("active".to_string()),
            ..VolunteerFilters::default()
        });
        assert_eq!(criteria.search, "ali");
        assert_eq!(criteria.status, "active");
        assert_eq!(criteria.province, "");
    }
}
