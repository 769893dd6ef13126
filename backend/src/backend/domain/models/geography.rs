use serde::{Deserialize, Serialize};

/// Level of a node in the Pakistani administrative hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoLevel {
    Province,
    Division,
    District,
    Tehsil,
    UnionCouncil,
}

/// A single node in the Province -> Division -> District -> Tehsil ->
/// Union Council hierarchy.
///
/// Every non-Province node carries the id of its parent one level up.
/// Urdu display names are only curated for provinces/territories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographyNode {
    pub id: String,
    pub name: String,
    pub urdu_name: Option<String>,
    pub parent_id: Option<String>,
    pub level: GeoLevel,
}

impl GeographyNode {
    pub fn province(id: &str, name: &str, urdu_name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            urdu_name: Some(urdu_name.to_string()),
            parent_id: None,
            level: GeoLevel::Province,
        }
    }

    pub fn division(id: &str, name: &str, province_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            urdu_name: None,
            parent_id: Some(province_id.to_string()),
            level: GeoLevel::Division,
        }
    }

    pub fn district(id: &str, name: &str, division_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            urdu_name: None,
            parent_id: Some(division_id.to_string()),
            level: GeoLevel::District,
        }
    }

    pub fn tehsil(id: &str, name: &str, district_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            urdu_name: None,
            parent_id: Some(district_id.to_string()),
            level: GeoLevel::Tehsil,
        }
    }

    pub fn union_council(id: &str, name: &str, tehsil_id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            urdu_name: None,
            parent_id: Some(tehsil_id.to_string()),
            level: GeoLevel::UnionCouncil,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_province_has_no_parent() {
        let node = GeographyNode::province("punjab", "Punjab", "پنجاب");
        assert_eq!(node.level, GeoLevel::Province);
        assert!(node.parent_id.is_none());
        assert_eq!(node.urdu_name.as_deref(), Some("پنجاب"));
    }

    #[test]
    fn test_child_nodes_carry_parent_id() {
        let division = GeographyNode::division("lahore", "Lahore Division", "punjab");
        assert_eq!(division.level, GeoLevel::Division);
        assert_eq!(division.parent_id.as_deref(), Some("punjab"));

        let uc = GeographyNode::union_council("uc-1", "UC-1 Mochi Gate", "lahore-city");
        assert_eq!(uc.level, GeoLevel::UnionCouncil);
        assert_eq!(uc.parent_id.as_deref(), Some("lahore-city"));
    }
}
