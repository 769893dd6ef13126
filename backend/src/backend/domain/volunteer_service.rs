//! Volunteer management: filtering, selection, and bulk status updates.
//!
//! The filter is a pure recomputation over the repository's source order;
//! the selection set is independent of the criteria and select-all only
//! toggles over the currently filtered view.

use anyhow::{anyhow, Result};
use log::info;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::backend::domain::commands::volunteers::{BulkStatusCommand, BulkStatusResult, FilterCriteria};
use crate::backend::domain::geography_service::GeographyService;
use crate::backend::domain::models::geography::GeographyNode;
use crate::backend::domain::models::volunteer::Volunteer;
use crate::backend::storage::traits::VolunteerStorage;

/// Apply the filter criteria over a record collection.
///
/// Deterministic and stable: results keep the source order. `search` is a
/// case-insensitive substring test OR'd across name, CNIC, email, and
/// phone; the facets are exact matches AND'd together; an empty facet
/// applies no constraint.
pub fn apply_filters(records: &[Volunteer], criteria: &FilterCriteria) -> Vec<Volunteer> {
    records
        .iter()
        .filter(|record| matches_criteria(record, criteria))
        .cloned()
        .collect()
}

fn matches_criteria(record: &Volunteer, criteria: &FilterCriteria) -> bool {
    if !criteria.search.trim().is_empty() {
        let query = criteria.search.to_lowercase();
        let hit = record.full_name.to_lowercase().contains(&query)
            || record.cnic.contains(&query)
            || record.email.to_lowercase().contains(&query)
            || record.phone.contains(&query);
        if !hit {
            return false;
        }
    }

    fn facet(criterion: &str, value: &str) -> bool {
        criterion.is_empty() || criterion == value
    }

    facet(&criteria.province, &record.province)
        && facet(&criteria.division, &record.division)
        && facet(&criteria.district, &record.district)
        && facet(&criteria.status, &record.status.to_string())
        && facet(&criteria.education, &record.education)
        && facet(&criteria.availability, &record.availability)
}

/// Admin-side filter state: the criteria plus the cascading division and
/// district option lists, re-derived synchronously on every setter call.
///
/// Geography setters take hierarchy ids and store the resolved display
/// names in the criteria, since records carry display names.
pub struct VolunteerFilterState {
    geography: Arc<GeographyService>,
    criteria: FilterCriteria,
    divisions: Vec<GeographyNode>,
    districts: Vec<GeographyNode>,
}

impl VolunteerFilterState {
    pub fn new(geography: Arc<GeographyService>) -> Self {
        Self {
            geography,
            criteria: FilterCriteria::default(),
            divisions: Vec::new(),
            districts: Vec::new(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn division_options(&self) -> &[GeographyNode] {
        &self.divisions
    }

    pub fn district_options(&self) -> &[GeographyNode] {
        &self.districts
    }

    pub fn set_search(&mut self, search: &str) {
        self.criteria.search = search.to_string();
    }

    pub fn set_status(&mut self, status: &str) {
        self.criteria.status = status.to_string();
    }

    pub fn set_education(&mut self, education: &str) {
        self.criteria.education = education.to_string();
    }

    pub fn set_availability(&mut self, availability: &str) {
        self.criteria.availability = availability.to_string();
    }

    /// Select a province facet; clears the division and district facets
    /// and returns the fresh division options.
    pub fn set_province(&mut self, province_id: &str) -> &[GeographyNode] {
        self.criteria.province = self
            .geography
            .find_province(province_id)
            .map(|node| node.name.clone())
            .unwrap_or_default();
        self.criteria.division.clear();
        self.criteria.district.clear();
        self.divisions = self.geography.divisions_of(province_id);
        self.districts.clear();
        &self.divisions
    }

    /// Select a division facet; clears the district facet and returns the
    /// fresh district options.
    pub fn set_division(&mut self, division_id: &str) -> &[GeographyNode] {
        self.criteria.division = self
            .geography
            .find_division(division_id)
            .map(|node| node.name.clone())
            .unwrap_or_default();
        self.criteria.district.clear();
        self.districts = self.geography.districts_of(division_id);
        &self.districts
    }

    pub fn set_district(&mut self, district_id: &str) {
        self.criteria.district = self
            .geography
            .find_district(district_id)
            .map(|node| node.name.clone())
            .unwrap_or_default();
    }

    /// Reset every facet and the derived option lists.
    pub fn clear(&mut self) {
        self.criteria = FilterCriteria::default();
        self.divisions.clear();
        self.districts.clear();
    }
}

/// Multi-select over volunteer ids, independent of the filter criteria.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VolunteerSelection {
    ids: BTreeSet<String>,
}

impl VolunteerSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I: IntoIterator<Item = String>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Toggle a single id in or out of the selection.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Select-all as a toggle over the *visible* (filtered) records: if
    /// the selection already equals their id set it is cleared, otherwise
    /// it becomes exactly that id set.
    pub fn select_all(&mut self, visible: &[Volunteer]) {
        let visible_ids: BTreeSet<String> = visible.iter().map(|v| v.id.clone()).collect();
        if self.ids == visible_ids {
            self.ids.clear();
        } else {
            self.ids = visible_ids;
        }
    }

    pub fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Service for the admin volunteer-management view.
#[derive(Clone)]
pub struct VolunteerService {
    volunteer_repository: Arc<dyn VolunteerStorage>,
}

impl VolunteerService {
    pub fn new(volunteer_repository: Arc<dyn VolunteerStorage>) -> Self {
        Self { volunteer_repository }
    }

    /// List volunteers matching the criteria, in source order.
    pub fn list_volunteers(&self, criteria: &FilterCriteria) -> Result<Vec<Volunteer>> {
        let records = self.volunteer_repository.list_volunteers()?;
        let filtered = apply_filters(&records, criteria);
        info!("Filtered volunteers: {} of {}", filtered.len(), records.len());
        Ok(filtered)
    }

    pub fn get_volunteer(&self, volunteer_id: &str) -> Result<Option<Volunteer>> {
        self.volunteer_repository.get_volunteer(volunteer_id)
    }

    /// Apply a status to every selected volunteer (approve/reject/
    /// deactivate bulk actions).
    pub fn bulk_update_status(&self, command: BulkStatusCommand) -> Result<BulkStatusResult> {
        if command.volunteer_ids.is_empty() {
            return Err(anyhow!("at least one volunteer must be selected"));
        }

        info!(
            "Bulk status update: {} volunteers -> {}",
            command.volunteer_ids.len(),
            command.status
        );

        let not_found_ids = self
            .volunteer_repository
            .update_status(&command.volunteer_ids, command.status)?;
        let updated_count = command.volunteer_ids.len() - not_found_ids.len();

        Ok(BulkStatusResult {
            updated_count,
            success_message: format!("{} volunteer(s) marked {}", updated_count, command.status),
            not_found_ids,
        })
    }
}
