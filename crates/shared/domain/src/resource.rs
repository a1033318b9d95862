use strum_macros::{AsRefStr, Display};

/// How a resource id is represented once parsed from a URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum IdKind {
    /// Signed 64-bit integer.
    Integer,
    /// Unsigned 64-bit integer.
    Unsigned,
    /// Opaque string.
    #[default]
    Text,
}

/// Cardinality of a relationship field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Cardinality {
    ToOne,
    ToMany,
}

/// A field of a resource that links to other resources by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationshipField {
    /// Field name as it appears in the serialized resource.
    pub name: String,
    /// JSON:API type of the target resource.
    pub target_type: String,
    pub cardinality: Cardinality,
}

impl RelationshipField {
    #[must_use]
    pub fn to_one(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self { name: name.into(), target_type: target_type.into(), cardinality: Cardinality::ToOne }
    }

    #[must_use]
    pub fn to_many(name: impl Into<String>, target_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_type: target_type.into(),
            cardinality: Cardinality::ToMany,
        }
    }
}

/// Metadata describing one resource type.
///
/// Every serialized field that is neither the id nor a relationship is an
/// attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInformation {
    pub resource_type: String,
    pub id_field: String,
    pub id_kind: IdKind,
    pub relationships: Vec<RelationshipField>,
}

impl ResourceInformation {
    #[must_use]
    pub fn relationship(&self, name: &str) -> Option<&RelationshipField> {
        self.relationships.iter().find(|r| r.name == name)
    }

    #[must_use]
    pub fn is_relationship(&self, name: &str) -> bool {
        self.relationship(name).is_some()
    }
}
