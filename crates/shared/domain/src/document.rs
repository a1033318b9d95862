//! JSON:API top-level document and its members.
//!
//! Deserializing `"data": null` yields `Document::data == None`; the
//! [`PrimaryData::Null`] variant exists so that responses can emit an explicit
//! `null` for an empty to-one field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PrimaryData>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<ResourceObject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Document {
    #[must_use]
    pub fn resource(object: ResourceObject) -> Self {
        Self { data: Some(PrimaryData::Resource(Box::new(object))), ..Self::default() }
    }

    #[must_use]
    pub fn collection(objects: Vec<ResourceObject>) -> Self {
        Self { data: Some(PrimaryData::Collection(objects)), ..Self::default() }
    }

    #[must_use]
    pub fn identifier(identifier: ResourceIdentifier) -> Self {
        Self { data: Some(PrimaryData::Identifier(identifier)), ..Self::default() }
    }

    #[must_use]
    pub fn identifiers(identifiers: Vec<ResourceIdentifier>) -> Self {
        Self { data: Some(PrimaryData::Identifiers(identifiers)), ..Self::default() }
    }

    /// A document whose primary data is an explicit `null`.
    #[must_use]
    pub fn null() -> Self {
        Self { data: Some(PrimaryData::Null), ..Self::default() }
    }

    #[must_use]
    pub fn errors(errors: Vec<ErrorObject>) -> Self {
        Self { errors, ..Self::default() }
    }

    /// The single resource object carried as primary data, if any.
    #[must_use]
    pub fn single_resource(&self) -> Option<&ResourceObject> {
        match &self.data {
            Some(PrimaryData::Resource(object)) => Some(object),
            _ => None,
        }
    }
}

/// Primary data. Variant order matters for untagged deserialization:
/// request bodies only ever carry resource objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
    Collection(Vec<ResourceObject>),
    Resource(Box<ResourceObject>),
    Identifiers(Vec<ResourceIdentifier>),
    Identifier(ResourceIdentifier),
    Null,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl ResourceObject {
    #[must_use]
    pub fn new(resource_type: impl Into<String>, id: Option<String>) -> Self {
        Self { resource_type: resource_type.into(), id, ..Self::default() }
    }

    #[must_use]
    pub fn identifier(&self) -> Option<ResourceIdentifier> {
        self.id.as_ref().map(|id| ResourceIdentifier::new(&self.resource_type, id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
}

impl ResourceIdentifier {
    #[must_use]
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self { resource_type: resource_type.into(), id: id.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Linkage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Resource linkage of a relationship; `Empty` serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    Many(Vec<ResourceIdentifier>),
    One(ResourceIdentifier),
    Empty,
}

impl Linkage {
    #[must_use]
    pub fn identifiers(&self) -> Vec<&ResourceIdentifier> {
        match self {
            Self::Many(many) => many.iter().collect(),
            Self::One(one) => vec![one],
            Self::Empty => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<String>,
}

/// A JSON:API error object. All members are optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

impl ErrorObject {
    #[must_use]
    pub fn with_status(status: u16) -> Self {
        Self { status: Some(status.to_string()), ..Self::default() }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    #[must_use]
    pub fn pointer(mut self, pointer: impl Into<String>) -> Self {
        self.source.get_or_insert_with(ErrorSource::default).pointer = Some(pointer.into());
        self
    }

    #[must_use]
    pub fn parameter(mut self, parameter: impl Into<String>) -> Self {
        self.source.get_or_insert_with(ErrorSource::default).parameter = Some(parameter.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}
