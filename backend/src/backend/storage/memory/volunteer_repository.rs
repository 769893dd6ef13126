use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use log::{debug, info};
use std::sync::{Arc, Mutex};

use crate::backend::domain::models::volunteer::{Volunteer, VolunteerStatus};
use crate::backend::storage::traits::VolunteerStorage;

/// In-memory volunteer repository.
///
/// Records are kept in registration order; `list_volunteers` returns them
/// in that order, which is the stable source order the filter engine
/// preserves.
#[derive(Clone)]
pub struct MemoryVolunteerRepository {
    volunteers: Arc<Mutex<Vec<Volunteer>>>,
}

impl MemoryVolunteerRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            volunteers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a repository pre-loaded with the sample roster
    pub fn with_seed_data() -> Self {
        info!("Seeding volunteer repository with sample roster");
        Self {
            volunteers: Arc::new(Mutex::new(seed_volunteers())),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Volunteer>>> {
        self.volunteers
            .lock()
            .map_err(|_| anyhow!("volunteer store lock poisoned"))
    }
}

impl Default for MemoryVolunteerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl VolunteerStorage for MemoryVolunteerRepository {
    fn store_volunteer(&self, volunteer: &Volunteer) -> Result<()> {
        let mut volunteers = self.lock()?;
        if volunteers.iter().any(|v| v.id == volunteer.id) {
            return Err(anyhow!("volunteer already exists: {}", volunteer.id));
        }
        volunteers.push(volunteer.clone());
        debug!("Stored volunteer {}", volunteer.id);
        Ok(())
    }

    fn get_volunteer(&self, volunteer_id: &str) -> Result<Option<Volunteer>> {
        let volunteers = self.lock()?;
        Ok(volunteers.iter().find(|v| v.id == volunteer_id).cloned())
    }

    fn list_volunteers(&self) -> Result<Vec<Volunteer>> {
        Ok(self.lock()?.clone())
    }

    fn update_status(&self, volunteer_ids: &[String], status: VolunteerStatus) -> Result<Vec<String>> {
        let mut volunteers = self.lock()?;
        let mut not_found = Vec::new();
        for id in volunteer_ids {
            match volunteers.iter_mut().find(|v| &v.id == id) {
                Some(volunteer) => volunteer.status = status,
                None => not_found.push(id.clone()),
            }
        }
        Ok(not_found)
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date out of range")
}

/// The sample roster used until a real data source is wired in.
fn seed_volunteers() -> Vec<Volunteer> {
    vec![
        Volunteer {
            id: Volunteer::generate_id(1757916000000),
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
            registration_date: date(2025, 9, 15),
        },
        Volunteer {
            id: Volunteer::generate_id(1758175200000),
            full_name: "Fatima Ahmed".to_string(),
            cnic: "42201-9876543-2".to_string(),
            phone: "+92-300-9876543".to_string(),
            whatsapp: Some("+92-300-9876543".to_string()),
            email: "fatima.ahmed@example.com".to_string(),
            province: "Sindh".to_string(),
            division: "Karachi Division".to_string(),
            district: "Karachi South".to_string(),
            education: "Masters".to_string(),
            availability: "Weekends Only".to_string(),
            status: VolunteerStatus::Active,
            registration_date: date(2025, 9, 18),
        },
        Volunteer {
            id: Volunteer::generate_id(1760680800000),
            full_name: "Ahmed Hassan".to_string(),
            cnic: "61101-5555555-5".to_string(),
            phone: "+92-333-5555555".to_string(),
            whatsapp: None,
            email: "ahmed.hassan@example.com".to_string(),
            province: "Islamabad Capital Territory".to_string(),
            division: "Islamabad".to_string(),
            district: "Islamabad".to_string(),
            education: "Intermediate".to_string(),
            availability: "Emergencies Only".to_string(),
            status: VolunteerStatus::Pending,
            registration_date: date(2025, 10, 17),
        },
        Volunteer {
            id: Volunteer::generate_id(1759298400000),
            full_name: "Aisha Malik".to_string(),
            cnic: "37405-2222222-2".to_string(),
            phone: "+92-345-2222222".to_string(),
            whatsapp: Some("+92-345-2222222".to_string()),
            email: "aisha.malik@example.com".to_string(),
            province: "Punjab".to_string(),
            division: "Rawalpindi Division".to_string(),
            district: "Rawalpindi".to_string(),
            education: "Bachelors".to_string(),
            availability: "Weekdays Only".to_string(),
            status: VolunteerStatus::Active,
            registration_date: date(2025, 10, 1),
        },
        Volunteer {
            id: Volunteer::generate_id(1755842400000),
            full_name: "Bilal Ahmed".to_string(),
            cnic: "33100-7777777-7".to_string(),
            phone: "+92-312-7777777".to_string(),
            whatsapp: None,
            email: "bilal.ahmed@example.com".to_string(),
            province: "Punjab".to_string(),
            division: "Faisalabad Division".to_string(),
            district: "Faisalabad".to_string(),
            education: "Matric".to_string(),
            availability: "Anytime".to_string(),
            status: VolunteerStatus::Inactive,
            registration_date: date(2025, 8, 22),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_volunteer(id: &str) -> Volunteer {
        Volunteer {
            id: id.to_string(),
            full_name: "Test Volunteer".to_string(),
            cnic: "35202-0000000-1".to_string(),
            phone: "+92-300-0000000".to_string(),
            whatsapp: None,
            email: "test@example.com".to_string(),
            province: "Punjab".to_string(),
            division: "Lahore Division".to_string(),
            district: "Lahore".to_string(),
            education: "Bachelors".to_string(),
            availability: "Anytime".to_string(),
            status: VolunteerStatus::Pending,
            registration_date: date(2025, 1, 1),
        }
    }

    #[test]
    fn test_store_and_get() {
        let repository = MemoryVolunteerRepository::new();
        repository.store_volunteer(&sample_volunteer("volunteer::1")).unwrap();

        let found = repository.get_volunteer("volunteer::1").unwrap();
        assert_eq!(found.unwrap().full_name, "Test Volunteer");
        assert!(repository.get_volunteer("volunteer::missing").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let repository = MemoryVolunteerRepository::new();
        repository.store_volunteer(&sample_volunteer("volunteer::1")).unwrap();
        assert!(repository.store_volunteer(&sample_volunteer("volunteer::1")).is_err());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let repository = MemoryVolunteerRepository::new();
        repository.store_volunteer(&sample_volunteer("volunteer::b")).unwrap();
        repository.store_volunteer(&sample_volunteer("volunteer::a")).unwrap();

        let listed = repository.list_volunteers().unwrap();
        let ids: Vec<&str> = listed.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["volunteer::b", "volunteer::a"]);
    }

    #[test]
    fn test_update_status_reports_missing_ids() {
        let repository = MemoryVolunteerRepository::new();
        repository.store_volunteer(&sample_volunteer("volunteer::1")).unwrap();

        let not_found = repository
            .update_status(
                &["volunteer::1".to_string(), "volunteer::nope".to_string()],
                VolunteerStatus::Active,
            )
            .unwrap();
        assert_eq!(not_found, vec!["volunteer::nope".to_string()]);
        assert_eq!(
            repository.get_volunteer("volunteer::1").unwrap().unwrap().status,
            VolunteerStatus::Active
        );
    }

    #[test]
    fn test_seed_data_matches_sample_roster() {
        let repository = MemoryVolunteerRepository::with_seed_data();
        let listed = repository.list_volunteers().unwrap();
        assert_eq!(listed.len(), 5);
        assert_eq!(listed[0].full_name, "Muhammad Ali Khan");
        assert_eq!(listed[2].status, VolunteerStatus::Pending);
        assert_eq!(listed[4].education, "Matric");
    }
}
