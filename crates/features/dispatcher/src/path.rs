use crate::error::DispatchError;
use japi_domain::constants::{ID_SEPARATOR, RELATIONSHIPS_SEGMENT};
use japi_resources::ResourceRegistry;
use std::fmt;

/// A request path resolved against the resource registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonPath {
    /// `/{type}`
    Collection { resource_type: String },
    /// `/{type}/{id}[,{id}...]`
    Resource { resource_type: String, ids: Vec<String> },
    /// `/{type}/{id}/{field}`: the resources a relationship points at.
    Field { resource_type: String, id: String, field: String },
    /// `/{type}/{id}/relationships/{field}`: the linkage itself.
    Relationship { resource_type: String, id: String, field: String },
}

impl JsonPath {
    /// # Errors
    /// [`DispatchError::ResourceNotFound`] for unknown types or relationship
    /// fields, [`DispatchError::BadRequest`] for any other malformed path.
    pub fn parse(path: &str, registry: &ResourceRegistry) -> Result<Self, DispatchError> {
        let trimmed = path.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Err(DispatchError::bad_request("path names no resource"));
        }

        let segments = trimmed.split('/').collect::<Vec<_>>();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(DispatchError::bad_request(format!("'{path}' has an empty segment")));
        }

        let resource_type = segments[0].to_owned();
        let Some(entry) = registry.entry(&resource_type) else {
            return Err(DispatchError::not_found(format!(
                "unknown resource type '{resource_type}'"
            )));
        };

        let field = |name: &str| {
            if entry.information().is_relationship(name) {
                Ok(name.to_owned())
            } else {
                Err(DispatchError::not_found(format!(
                    "'{resource_type}' has no relationship '{name}'"
                )))
            }
        };

        match segments.as_slice() {
            [_] => Ok(Self::Collection { resource_type }),
            [_, ids] => {
                let ids = ids.split(ID_SEPARATOR).map(str::trim).collect::<Vec<_>>();
                if ids.iter().any(|id| id.is_empty()) {
                    return Err(DispatchError::bad_request(format!("'{path}' has an empty id")));
                }
                let ids = ids.into_iter().map(str::to_owned).collect();
                Ok(Self::Resource { resource_type, ids })
            }
            [_, id, name] if *name != RELATIONSHIPS_SEGMENT => {
                let field = field(*name)?;
                Ok(Self::Field { resource_type, id: (*id).to_owned(), field })
            }
            [_, id, RELATIONSHIPS_SEGMENT, name] => {
                let field = field(*name)?;
                Ok(Self::Relationship { resource_type, id: (*id).to_owned(), field })
            }
            _ => Err(DispatchError::bad_request(format!("'{path}' is not a JSON:API path"))),
        }
    }

    #[must_use]
    pub fn resource_type(&self) -> &str {
        match self {
            Self::Collection { resource_type }
            | Self::Resource { resource_type, .. }
            | Self::Field { resource_type, .. }
            | Self::Relationship { resource_type, .. } => resource_type,
        }
    }

    /// Ids named by the path; empty for collections.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::Collection { .. } => Vec::new(),
            Self::Resource { ids, .. } => ids.iter().map(String::as_str).collect(),
            Self::Field { id, .. } | Self::Relationship { id, .. } => vec![id.as_str()],
        }
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Collection { .. })
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection { resource_type } => write!(f, "/{resource_type}"),
            Self::Resource { resource_type, ids } => {
                write!(f, "/{resource_type}/{}", ids.join(&ID_SEPARATOR.to_string()))
            }
            Self::Field { resource_type, id, field } => write!(f, "/{resource_type}/{id}/{field}"),
            Self::Relationship { resource_type, id, field } => {
                write!(f, "/{resource_type}/{id}/{RELATIONSHIPS_SEGMENT}/{field}")
            }
        }
    }
}
