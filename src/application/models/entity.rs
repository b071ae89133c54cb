use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Type and ID pair identifying an entity
///
/// Relationships reference entities this way; the pair resolves against
/// the envelope's `included` member. IDs are unique within one response's
/// `data` sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseEntity {
    /// Entity type tag (e.g. `license`, `profile`)
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Entity ID, unique per type
    pub id: String,
}

/// A generic JSON:API entity with open attributes and relationships
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Entity type tag
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Entity ID
    pub id: String,
    /// Attribute map, left open since each type carries its own fields
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
    /// Named links to other entities
    #[serde(default)]
    pub relationships: HashMap<String, Relationship>,
    /// Per-entity metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<HashMap<String, Value>>,
}

/// One named relationship of an entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    /// Referenced entity or entities, null when the relationship is empty
    pub data: Option<RelationshipData>,
}

/// Relationship target: a single reference or a list of them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationshipData {
    /// To-one relationship
    One(BaseEntity),
    /// To-many relationship
    Many(Vec<BaseEntity>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_with_relationships_deserializes() {
        let json = r#"{
            "type": "license",
            "id": "9",
            "attributes": {"type": "player", "expiration": null},
            "relationships": {
                "profile": {"data": {"type": "profile", "id": "77"}},
                "teams": {"data": [{"type": "team", "id": "1"}, {"type": "team", "id": "2"}]},
                "refereecategory": {"data": null}
            }
        }"#;
        let entity: Entity = serde_json::from_str(json).unwrap();
        assert_eq!(entity.entity_type, "license");
        match entity.relationships.get("profile").unwrap().data.as_ref() {
            Some(RelationshipData::One(profile)) => assert_eq!(profile.id, "77"),
            other => panic!("Unexpected profile relationship: {other:?}"),
        }
        match entity.relationships.get("teams").unwrap().data.as_ref() {
            Some(RelationshipData::Many(teams)) => assert_eq!(teams.len(), 2),
            other => panic!("Unexpected teams relationship: {other:?}"),
        }
        assert!(entity.relationships.get("refereecategory").unwrap().data.is_none());
    }
}
