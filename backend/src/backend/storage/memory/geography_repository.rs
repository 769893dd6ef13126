//! Built-in Pakistan geography dataset.
//!
//! Province -> Division -> District -> Tehsil -> Union Council. The
//! hierarchy is deliberately sparse: only partially curated regions carry
//! real tehsil/union-council data, and the geography service synthesizes
//! default tehsils for districts without entries.

use anyhow::Result;
use once_cell::sync::Lazy;

use crate::backend::domain::models::geography::GeographyNode;
use crate::backend::storage::traits::GeographyStorage;

/// Geography repository backed by the compiled-in dataset.
#[derive(Clone, Default)]
pub struct StaticGeographyRepository;

impl StaticGeographyRepository {
    pub fn new() -> Self {
        Self
    }
}

impl GeographyStorage for StaticGeographyRepository {
    fn load_nodes(&self) -> Result<Vec<GeographyNode>> {
        Ok(PAKISTAN_HIERARCHY.clone())
    }
}

static PAKISTAN_HIERARCHY: Lazy<Vec<GeographyNode>> = Lazy::new(build_pakistan_hierarchy);

fn build_pakistan_hierarchy() -> Vec<GeographyNode> {
    let mut nodes = Vec::new();

    // Provinces and territories
    nodes.push(GeographyNode::province("punjab", "Punjab", "پنجاب"));
    nodes.push(GeographyNode::province("sindh", "Sindh", "سندھ"));
    nodes.push(GeographyNode::province("kpk", "Khyber Pakhtunkhwa", "خیبر پختونخوا"));
    nodes.push(GeographyNode::province("balochistan", "Balochistan", "بلوچستان"));
    nodes.push(GeographyNode::province("gilgit", "Gilgit-Baltistan", "گلگت بلتستان"));
    nodes.push(GeographyNode::province("ajk", "Azad Jammu & Kashmir", "آزاد جموں و کشمیر"));
    nodes.push(GeographyNode::province("ict", "Islamabad Capital Territory", "وفاقی دارالحکومت"));

    // Punjab divisions
    for (id, name) in [
        ("lahore", "Lahore Division"),
        ("gujranwala", "Gujranwala Division"),
        ("rawalpindi", "Rawalpindi Division"),
        ("faisalabad", "Faisalabad Division"),
        ("multan", "Multan Division"),
        ("bahawalpur", "Bahawalpur Division"),
        ("dera-ghazi-khan", "Dera Ghazi Khan Division"),
        ("sahiwal", "Sahiwal Division"),
        ("sargodha", "Sargodha Division"),
    ] {
        nodes.push(GeographyNode::division(id, name, "punjab"));
    }

    // Sindh divisions
    for (id, name) in [
        ("karachi", "Karachi Division"),
        ("hyderabad", "Hyderabad Division"),
        ("sukkur", "Sukkur Division"),
        ("larkana", "Larkana Division"),
        ("mirpurkhas", "Mirpur Khas Division"),
        ("shaheed-benazirabad", "Shaheed Benazirabad Division"),
    ] {
        nodes.push(GeographyNode::division(id, name, "sindh"));
    }

    // Punjab districts, by division
    for (id, name) in [
        ("lahore", "Lahore"),
        ("kasur", "Kasur"),
        ("okara", "Okara"),
        ("sheikhupura", "Sheikhupura"),
        ("nankana-sahib", "Nankana Sahib"),
    ] {
        nodes.push(GeographyNode::district(id, name, "lahore"));
    }
    for (id, name) in [
        ("gujranwala", "Gujranwala"),
        ("gujrat", "Gujrat"),
        ("hafizabad", "Hafizabad"),
        ("mandi-bahauddin", "Mandi Bahauddin"),
        ("narowal", "Narowal"),
        ("sialkot", "Sialkot"),
    ] {
        nodes.push(GeographyNode::district(id, name, "gujranwala"));
    }
    for (id, name) in [
        ("rawalpindi", "Rawalpindi"),
        ("attock", "Attock"),
        ("chakwal", "Chakwal"),
        ("jhelum", "Jhelum"),
    ] {
        nodes.push(GeographyNode::district(id, name, "rawalpindi"));
    }
    for (id, name) in [
        ("faisalabad", "Faisalabad"),
        ("chiniot", "Chiniot"),
        ("jhang", "Jhang"),
        ("toba-tek-singh", "Toba Tek Singh"),
    ] {
        nodes.push(GeographyNode::district(id, name, "faisalabad"));
    }
    for (id, name) in [
        ("multan", "Multan"),
        ("khanewal", "Khanewal"),
        ("lodhran", "Lodhran"),
        ("vehari", "Vehari"),
    ] {
        nodes.push(GeographyNode::district(id, name, "multan"));
    }
    for (id, name) in [
        ("bahawalpur", "Bahawalpur"),
        ("bahawalnagar", "Bahawalnagar"),
        ("rahim-yar-khan", "Rahim Yar Khan"),
    ] {
        nodes.push(GeographyNode::district(id, name, "bahawalpur"));
    }
    for (id, name) in [
        ("dera-ghazi-khan", "Dera Ghazi Khan"),
        ("layyah", "Layyah"),
        ("muzaffargarh", "Muzaffargarh"),
        ("rajanpur", "Rajanpur"),
    ] {
        nodes.push(GeographyNode::district(id, name, "dera-ghazi-khan"));
    }
    for (id, name) in [("sahiwal", "Sahiwal"), ("pakpattan", "Pakpattan")] {
        nodes.push(GeographyNode::district(id, name, "sahiwal"));
    }
    for (id, name) in [
        ("sargodha", "Sargodha"),
        ("bhakkar", "Bhakkar"),
        ("khushab", "Khushab"),
        ("mianwali", "Mianwali"),
    ] {
        nodes.push(GeographyNode::district(id, name, "sargodha"));
    }

    // Sindh districts (Karachi division)
    for (id, name) in [
        ("karachi-central", "Karachi Central"),
        ("karachi-east", "Karachi East"),
        ("karachi-south", "Karachi South"),
        ("karachi-west", "Karachi West"),
        ("korangi", "Korangi"),
        ("malir", "Malir"),
    ] {
        nodes.push(GeographyNode::district(id, name, "karachi"));
    }

    // Curated tehsils
    for (id, name) in [
        ("lahore-city", "Lahore City"),
        ("lahore-cantt", "Lahore Cantt"),
        ("model-town", "Model Town"),
        ("raiwind", "Raiwind"),
        ("shalimar", "Shalimar"),
    ] {
        nodes.push(GeographyNode::tehsil(id, name, "lahore"));
    }
    for (id, name) in [
        ("rawalpindi", "Rawalpindi"),
        ("gujar-khan", "Gujar Khan"),
        ("kahuta", "Kahuta"),
        ("kallar-syedan", "Kallar Syedan"),
        ("taxila", "Taxila"),
    ] {
        nodes.push(GeographyNode::tehsil(id, name, "rawalpindi"));
    }
    for (id, name) in [
        ("faisalabad-city", "Faisalabad City"),
        ("faisalabad-sadar", "Faisalabad Sadar"),
        ("jaranwala", "Jaranwala"),
        ("tandlianwala", "Tandlianwala"),
    ] {
        nodes.push(GeographyNode::tehsil(id, name, "faisalabad"));
    }

    // Curated union councils
    for (id, name) in [
        ("uc-1", "UC-1 Mochi Gate"),
        ("uc-2", "UC-2 Bhati Gate"),
        ("uc-3", "UC-3 Taxali Gate"),
    ] {
        nodes.push(GeographyNode::union_council(id, name, "lahore-city"));
    }
    for (id, name) in [("uc-20", "UC-20 Model Town"), ("uc-21", "UC-21 Garden Town")] {
        nodes.push(GeographyNode::union_council(id, name, "model-town"));
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::geography::GeoLevel;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_loads() {
        let repository = StaticGeographyRepository::new();
        let nodes = repository.load_nodes().unwrap();
        assert_eq!(nodes.iter().filter(|n| n.level == GeoLevel::Province).count(), 7);
        assert!(nodes.iter().any(|n| n.id == "lahore-city" && n.level == GeoLevel::Tehsil));
    }

    #[test]
    fn test_every_child_has_a_known_parent_one_level_up() {
        let nodes = StaticGeographyRepository::new().load_nodes().unwrap();
        let ids_at = |level: GeoLevel| -> HashSet<&str> {
            nodes
                .iter()
                .filter(|n| n.level == level)
                .map(|n| n.id.as_str())
                .collect()
        };
        let parents_of = |level: GeoLevel| match level {
            GeoLevel::Division => ids_at(GeoLevel::Province),
            GeoLevel::District => ids_at(GeoLevel::Division),
            GeoLevel::Tehsil => ids_at(GeoLevel::District),
            GeoLevel::UnionCouncil => ids_at(GeoLevel::Tehsil),
            GeoLevel::Province => HashSet::new(),
        };
        for node in &nodes {
            match node.level {
                GeoLevel::Province => assert!(node.parent_id.is_none()),
                level => {
                    let parent = node.parent_id.as_deref().expect("child node missing parent");
                    assert!(
                        parents_of(level).contains(parent),
                        "{} has unknown parent {}",
                        node.id,
                        parent
                    );
                }
            }
        }
    }

    #[test]
    fn test_sibling_ids_are_unique_per_parent() {
        let nodes = StaticGeographyRepository::new().load_nodes().unwrap();
        let mut seen: HashSet<(GeoLevel, Option<&str>, &str)> = HashSet::new();
        for node in &nodes {
            assert!(
                seen.insert((node.level, node.parent_id.as_deref(), node.id.as_str())),
                "duplicate sibling id {} under {:?}",
                node.id,
                node.parent_id
            );
        }
    }
}
