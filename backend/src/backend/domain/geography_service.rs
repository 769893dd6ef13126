//! Cascading administrative-geography resolver.
//!
//! Four parent-keyed lookup tables (Province -> Division -> District ->
//! Tehsil -> Union Council), built once from a [`GeographyStorage`] dataset
//! and immutable afterwards. Lookups never fail: an unknown id resolves to
//! an empty list, and districts without curated tehsil data get two
//! synthesized defaults so the registration wizard is always completable.

use anyhow::Result;
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

use crate::backend::domain::models::geography::{GeoLevel, GeographyNode};
use crate::backend::storage::traits::GeographyStorage;

#[derive(Clone)]
pub struct GeographyService {
    provinces: Vec<GeographyNode>,
    divisions: HashMap<String, Vec<GeographyNode>>,
    districts: HashMap<String, Vec<GeographyNode>>,
    tehsils: HashMap<String, Vec<GeographyNode>>,
    union_councils: HashMap<String, Vec<GeographyNode>>,
}

impl GeographyService {
    /// Build the lookup tables from a geography dataset.
    ///
    /// Nodes whose parent does not exist one level up are logged and
    /// skipped; they would be unreachable through the cascade anyway.
    pub fn new(repository: &dyn GeographyStorage) -> Result<Self> {
        let nodes = repository.load_nodes()?;

        let mut provinces: Vec<GeographyNode> = Vec::new();
        let mut divisions: HashMap<String, Vec<GeographyNode>> = HashMap::new();
        let mut districts: HashMap<String, Vec<GeographyNode>> = HashMap::new();
        let mut tehsils: HashMap<String, Vec<GeographyNode>> = HashMap::new();
        let mut union_councils: HashMap<String, Vec<GeographyNode>> = HashMap::new();

        let mut known: HashMap<GeoLevel, HashSet<String>> = HashMap::new();
        for node in nodes {
            let parent_level = match node.level {
                GeoLevel::Province => None,
                GeoLevel::Division => Some(GeoLevel::Province),
                GeoLevel::District => Some(GeoLevel::Division),
                GeoLevel::Tehsil => Some(GeoLevel::District),
                GeoLevel::UnionCouncil => Some(GeoLevel::Tehsil),
            };
            let parent_id = match (parent_level, node.parent_id.as_deref()) {
                (None, _) => None,
                (Some(level), Some(parent)) if known.get(&level).is_some_and(|ids| ids.contains(parent)) => {
                    Some(parent.to_string())
                }
                (Some(_), parent) => {
                    warn!(
                        "Skipping geography node {} with unknown parent {:?}",
                        node.id, parent
                    );
                    continue;
                }
            };

            known.entry(node.level).or_default().insert(node.id.clone());
            match (node.level, parent_id) {
                (GeoLevel::Province, _) => provinces.push(node),
                (GeoLevel::Division, Some(parent)) => divisions.entry(parent).or_default().push(node),
                (GeoLevel::District, Some(parent)) => districts.entry(parent).or_default().push(node),
                (GeoLevel::Tehsil, Some(parent)) => tehsils.entry(parent).or_default().push(node),
                (GeoLevel::UnionCouncil, Some(parent)) => {
                    union_councils.entry(parent).or_default().push(node)
                }
                _ => unreachable!("non-province node without parent was skipped above"),
            }
        }

        debug!(
            "Loaded geography: {} provinces, {} division groups, {} district groups",
            provinces.len(),
            divisions.len(),
            districts.len()
        );

        Ok(Self {
            provinces,
            divisions,
            districts,
            tehsils,
            union_councils,
        })
    }

    /// All provinces and territories, in curated order.
    pub fn provinces(&self) -> Vec<GeographyNode> {
        self.provinces.clone()
    }

    /// Divisions of a province; empty for unknown ids.
    pub fn divisions_of(&self, province_id: &str) -> Vec<GeographyNode> {
        self.divisions.get(province_id).cloned().unwrap_or_default()
    }

    /// Districts of a division; empty for unknown ids.
    pub fn districts_of(&self, division_id: &str) -> Vec<GeographyNode> {
        self.districts.get(division_id).cloned().unwrap_or_default()
    }

    /// Tehsils of a district.
    ///
    /// Districts without curated tehsil data get exactly two synthesized
    /// defaults ("City Tehsil" and "Sadar Tehsil") with ids derived from the
    /// district id, so every district offers a selectable tehsil.
    pub fn tehsils_of(&self, district_id: &str) -> Vec<GeographyNode> {
        if let Some(curated) = self.tehsils.get(district_id) {
            if !curated.is_empty() {
                return curated.clone();
            }
        }
        if district_id.trim().is_empty() {
            return Vec::new();
        }
        vec![
            GeographyNode::tehsil(&format!("{}-city", district_id), "City Tehsil", district_id),
            GeographyNode::tehsil(&format!("{}-sadar", district_id), "Sadar Tehsil", district_id),
        ]
    }

    /// Union councils of a tehsil; empty for unknown ids (synthesized
    /// tehsils have no curated union councils).
    pub fn union_councils_of(&self, tehsil_id: &str) -> Vec<GeographyNode> {
        self.union_councils.get(tehsil_id).cloned().unwrap_or_default()
    }

    pub fn find_province(&self, province_id: &str) -> Option<&GeographyNode> {
        self.provinces.iter().find(|n| n.id == province_id)
    }

    pub fn find_division(&self, division_id: &str) -> Option<&GeographyNode> {
        self.divisions.values().flatten().find(|n| n.id == division_id)
    }

    pub fn find_district(&self, district_id: &str) -> Option<&GeographyNode> {
        self.districts.values().flatten().find(|n| n.id == district_id)
    }

    /// Resolve a tehsil within a district, including synthesized defaults.
    pub fn find_tehsil(&self, district_id: &str, tehsil_id: &str) -> Option<GeographyNode> {
        self.tehsils_of(district_id).into_iter().find(|n| n.id == tehsil_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::memory::StaticGeographyRepository;

    fn service() -> GeographyService {
        GeographyService::new(&StaticGeographyRepository::new()).unwrap()
    }

    #[test]
    fn test_provinces_in_curated_order() {
        let provinces = service().provinces();
        assert_eq!(provinces.len(), 7);
        assert_eq!(provinces[0].id, "punjab");
        assert_eq!(provinces[6].id, "ict");
        assert_eq!(provinces[0].urdu_name.as_deref(), Some("پنجاب"));
    }

    #[test]
    fn test_cascading_lookups() {
        let service = service();
        let divisions = service.divisions_of("punjab");
        assert_eq!(divisions.len(), 9);
        assert_eq!(divisions[0].name, "Lahore Division");

        let districts = service.districts_of("lahore");
        assert_eq!(districts.len(), 5);
        assert_eq!(districts[0].name, "Lahore");

        let tehsils = service.tehsils_of("lahore");
        assert_eq!(tehsils.len(), 5);
        assert_eq!(tehsils[0].name, "Lahore City");

        let union_councils = service.union_councils_of("lahore-city");
        assert_eq!(union_councils.len(), 3);
        assert_eq!(union_councils[0].name, "UC-1 Mochi Gate");
    }

    #[test]
    fn test_unknown_ids_resolve_empty() {
        let service = service();
        assert!(service.divisions_of("mars").is_empty());
        assert!(service.districts_of("mars").is_empty());
        assert!(service.union_councils_of("mars").is_empty());
        assert!(service.divisions_of("").is_empty());
    }

    #[test]
    fn test_uncurated_district_synthesizes_default_tehsils() {
        let tehsils = service().tehsils_of("kasur");
        assert_eq!(tehsils.len(), 2);
        assert_eq!(tehsils[0].id, "kasur-city");
        assert_eq!(tehsils[0].name, "City Tehsil");
        assert_eq!(tehsils[1].id, "kasur-sadar");
        assert_eq!(tehsils[1].name, "Sadar Tehsil");
        assert_eq!(tehsils[0].parent_id.as_deref(), Some("kasur"));
    }

    #[test]
    fn test_every_reachable_district_offers_tehsils() {
        let service = service();
        for province in service.provinces() {
            for division in service.divisions_of(&province.id) {
                for district in service.districts_of(&division.id) {
                    let tehsils = service.tehsils_of(&district.id);
                    assert!(
                        !tehsils.is_empty(),
                        "district {} has no tehsils",
                        district.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_orphan_nodes_are_skipped() {
        struct BrokenDataset;
        impl GeographyStorage for BrokenDataset {
            fn load_nodes(&self) -> Result<Vec<GeographyNode>> {
                Ok(vec![
                    GeographyNode::province("punjab", "Punjab", "پنجاب"),
                    GeographyNode::division("lahore", "Lahore Division", "punjab"),
                    GeographyNode::division("ghost", "Ghost Division", "atlantis"),
                ])
            }
        }

        let service = GeographyService::new(&BrokenDataset).unwrap();
        assert_eq!(service.divisions_of("punjab").len(), 1);
        assert!(service.divisions_of("atlantis").is_empty());
    }

    #[test]
    fn test_find_helpers_resolve_display_names() {
        let service = service();
        assert_eq!(service.find_province("punjab").unwrap().name, "Punjab");
        assert_eq!(service.find_division("lahore").unwrap().name, "Lahore Division");
        assert_eq!(service.find_district("lahore").unwrap().name, "Lahore");
        assert_eq!(service.find_tehsil("lahore", "lahore-city").unwrap().name, "Lahore City");
        // Synthesized tehsils resolve too
        assert_eq!(service.find_tehsil("kasur", "kasur-city").unwrap().name, "City Tehsil");
        assert!(service.find_province("mars").is_none());
    }
}
