use chrono::{DateTime, Utc};
use objex_core_types::Identifier;
use serde::{Deserialize, Serialize};

use super::metadata::Metadata;

/// Domain object - the unit of routing and persistence
///
/// A fetched instance is owned by the caller: the access layer keeps no
/// cache or identity map, so two fetches of the same identifier yield two
/// independent values. In-memory identity across mutation and observation
/// is the mutation engine's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainObject {
    /// Unique name of this object (namespace + key)
    pub identifier: Identifier,

    /// Object type discriminator (e.g. "folder", "root")
    #[serde(rename = "type")]
    pub object_type: String,

    /// Human-readable display name
    pub name: String,

    /// Principal that created this object, when the backend records one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Timestamp of the last modification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    /// Child identifiers, for container-like objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<Vec<Identifier>>,

    /// Type-specific fields, flattened into the object body
    #[serde(flatten)]
    pub extra: Metadata,
}

impl DomainObject {
    /// Create a new domain object with the given identity, type, and name
    pub fn new(
        identifier: Identifier,
        object_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            identifier,
            object_type: object_type.into(),
            name: name.into(),
            creator: None,
            modified: None,
            composition: None,
            extra: Metadata::new(),
        }
    }

    /// Set the creator principal
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the modification timestamp
    pub fn with_modified(mut self, modified: DateTime<Utc>) -> Self {
        self.modified = Some(modified);
        self
    }

    /// Set the child composition
    pub fn with_composition(mut self, composition: Vec<Identifier>) -> Self {
        self.composition = Some(composition);
        self
    }

    /// Attach a type-specific field
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.set(key, value);
        self
    }

    /// Stamp `modified` with the current time
    pub fn touch(&mut self) {
        self.modified = Some(Utc::now());
    }

    /// Whether this is the synthetic root object
    pub fn is_root(&self) -> bool {
        self.identifier.is_root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_object_defaults() {
        let object = DomainObject::new(Identifier::new("folders", "mission"), "folder", "Mission");

        assert_eq!(object.object_type, "folder");
        assert_eq!(object.name, "Mission");
        assert!(object.creator.is_none());
        assert!(object.modified.is_none());
        assert!(object.composition.is_none());
        assert!(object.extra.is_empty());
        assert!(!object.is_root());
    }

    #[test]
    fn test_builder_chain() {
        let child = Identifier::new("folders", "child");
        let object = DomainObject::new(Identifier::new("folders", "mission"), "folder", "Mission")
            .with_creator("ops")
            .with_composition(vec![child.clone()])
            .with_extra("color", json!("green"));

        assert_eq!(object.creator.as_deref(), Some("ops"));
        assert_eq!(object.composition, Some(vec![child]));
        assert_eq!(object.extra.get("color"), Some(&json!("green")));
    }

    #[test]
    fn test_touch_stamps_modified() {
        let mut object = DomainObject::new(Identifier::new("folders", "mission"), "folder", "M");
        assert!(object.modified.is_none());

        object.touch();
        assert!(object.modified.is_some());
    }

    #[test]
    fn test_root_object_detection() {
        let root = DomainObject::new(Identifier::root(), "root", "The root object");
        assert!(root.is_root());
    }

    #[test]
    fn test_serialization_renames_type_and_flattens_extra() {
        let object = DomainObject::new(Identifier::new("folders", "mission"), "folder", "Mission")
            .with_extra("color", json!("green"));

        let value = serde_json::to_value(&object).unwrap();
        assert_eq!(value["type"], json!("folder"));
        assert_eq!(value["color"], json!("green"));
        // Omitted optional fields do not serialize
        assert!(value.get("creator").is_none());

        let back: DomainObject = serde_json::from_value(value).unwrap();
        assert_eq!(back, object);
    }
}
