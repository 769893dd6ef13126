use crate::backend::domain::models::geography::GeographyNode;
use shared::{GeographyOption, GeographyOptionsResponse};

/// Mapper from geography nodes to the option DTOs the cascading selects
/// are populated from.
pub struct GeographyMapper;

impl GeographyMapper {
    pub fn to_option(node: GeographyNode) -> GeographyOption {
        GeographyOption {
            id: node.id,
            name: node.name,
            urdu_name: node.urdu_name,
        }
    }

    pub fn to_options_response(nodes: Vec<GeographyNode>) -> GeographyOptionsResponse {
        GeographyOptionsResponse {
            options: nodes.into_iter().map(Self::to_option).collect(),
        }
    }
}
