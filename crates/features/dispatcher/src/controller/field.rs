use super::{Controller, ControllerContext};
use crate::error::DispatchError;
use crate::path::JsonPath;
use japi_domain::document::{Document, Linkage};
use japi_domain::request::{Method, Request, Response};
use serde_json::Value;

/// `GET /{type}/{id}/{field}`: the resource(s) a relationship points at.
#[derive(Debug, Clone)]
pub struct FieldResourceGet {
    context: ControllerContext,
}

impl FieldResourceGet {
    #[must_use]
    pub const fn new(context: ControllerContext) -> Self {
        Self { context }
    }
}

impl Controller for FieldResourceGet {
    fn is_acceptable(&self, path: &JsonPath, method: Method) -> bool {
        method == Method::Get && matches!(path, JsonPath::Field { .. })
    }

    fn handle(&self, path: &JsonPath, request: &Request) -> Result<Response, DispatchError> {
        let JsonPath::Field { resource_type, id, field } = path else {
            return Err(DispatchError::bad_request(format!("'{path}' is not a field path")));
        };

        let parent = self.context.find_existing(resource_type, id, request)?;
        let relationship = self
            .context
            .entry(resource_type)?
            .information()
            .relationship(field)
            .cloned()
            .ok_or_else(|| DispatchError::not_found(format!("no relationship '{field}'")))?;
        let target = self.context.entry(&relationship.target_type)?;
        let repository = target.repository();

        let document = match parent.get(field).unwrap_or(&Value::Null) {
            Value::Null => Document::null(),
            Value::Array(ids) => {
                let values = repository.find_all_with_ids(ids, &request.query)?;
                Document::collection(self.context.encode_all(&relationship.target_type, &values)?)
            }
            related_id => match repository.find_one(related_id, &request.query)? {
                Some(value) => {
                    Document::resource(self.context.encode(&relationship.target_type, &value)?)
                }
                None => Document::null(),
            },
        };
        Ok(Response::ok(document))
    }
}

/// `GET /{type}/{id}/relationships/{field}`: the linkage only.
#[derive(Debug, Clone)]
pub struct RelationshipsGet {
    context: ControllerContext,
}

impl RelationshipsGet {
    #[must_use]
    pub const fn new(context: ControllerContext) -> Self {
        Self { context }
    }
}

impl Controller for RelationshipsGet {
    fn is_acceptable(&self, path: &JsonPath, method: Method) -> bool {
        method == Method::Get && matches!(path, JsonPath::Relationship { .. })
    }

    fn handle(&self, path: &JsonPath, request: &Request) -> Result<Response, DispatchError> {
        let JsonPath::Relationship { resource_type, id, field } = path else {
            return Err(DispatchError::bad_request(format!("'{path}' is not a relationship path")));
        };

        let parent = self.context.find_existing(resource_type, id, request)?;
        let mut object = self.context.encode(resource_type, &parent)?;
        let linkage = object.relationships.remove(field).and_then(|relationship| relationship.data);

        let document = match linkage {
            Some(Linkage::One(identifier)) => Document::identifier(identifier),
            Some(Linkage::Many(identifiers)) => Document::identifiers(identifiers),
            Some(Linkage::Empty) | None => Document::null(),
        };
        Ok(Response::ok(document))
    }
}
