use crate::error::MapperError;
use crate::module::DataBindingModule;
use japi_domain::constants::RELATIONSHIPS_SEGMENT;
use japi_domain::document::{Linkage, Links, Relationship, ResourceIdentifier, ResourceObject};
use japi_domain::resource::{Cardinality, IdKind, RelationshipField, ResourceInformation};
use japi_kernel::parser::TypeParser;
use japi_resources::ResourceRegistry;
use serde_json::{Map, Value};
use std::any::Any;

const MODULE_NAME: &str = "jsonapi";

/// Builds the [`JsonApiModule`] for a registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonApiModuleBuilder;

impl JsonApiModuleBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn build(&self, registry: &ResourceRegistry) -> JsonApiModule {
        JsonApiModule { registry: registry.clone(), parser: TypeParser::new() }
    }
}

/// Maps the flat serialized form of registered resources to resource objects.
///
/// Relationship fields hold target ids and become resource linkage; the id
/// field becomes the string `id`; everything else is an attribute.
#[derive(Debug, Clone)]
pub struct JsonApiModule {
    registry: ResourceRegistry,
    parser: TypeParser,
}

impl JsonApiModule {
    /// The registry this module was built from.
    #[must_use]
    pub const fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    fn to_object(
        &self,
        information: &ResourceInformation,
        value: &Value,
    ) -> Result<ResourceObject, MapperError> {
        let Value::Object(fields) = value else {
            return Err(MapperError::invalid(format!(
                "'{}' must serialize to an object",
                information.resource_type
            )));
        };

        let mut object = ResourceObject::new(&information.resource_type, None);
        if let Some(id) = fields.get(&information.id_field).filter(|id| !id.is_null()) {
            object.id = Some(self.render(id)?);
        }

        let base = self.registry.resource_url(&information.resource_type);
        let own_url = object.id.as_ref().map(|id| format!("{base}/{id}"));

        for (name, field) in fields {
            if *name == information.id_field {
                continue;
            }
            match information.relationship(name) {
                Some(relationship) => {
                    let mut entry = Relationship {
                        data: Some(self.linkage(relationship, field)?),
                        links: None,
                    };
                    if let Some(url) = &own_url {
                        entry.links = Some(Links {
                            self_link: Some(format!("{url}/{RELATIONSHIPS_SEGMENT}/{name}")),
                            related: Some(format!("{url}/{name}")),
                        });
                    }
                    object.relationships.insert(name.clone(), entry);
                }
                None => {
                    object.attributes.insert(name.clone(), field.clone());
                }
            }
        }

        object.links = own_url.map(|url| Links { self_link: Some(url), related: None });
        Ok(object)
    }

    fn linkage(
        &self,
        relationship: &RelationshipField,
        field: &Value,
    ) -> Result<Linkage, MapperError> {
        let identifier = |id: &Value| {
            self.render(id).map(|id| ResourceIdentifier::new(&relationship.target_type, id))
        };

        match (relationship.cardinality, field) {
            (_, Value::Null) => Ok(match relationship.cardinality {
                Cardinality::ToOne => Linkage::Empty,
                Cardinality::ToMany => Linkage::Many(Vec::new()),
            }),
            (Cardinality::ToOne, id) => identifier(id).map(Linkage::One),
            (Cardinality::ToMany, Value::Array(ids)) => {
                ids.iter().map(identifier).collect::<Result<_, _>>().map(Linkage::Many)
            }
            (Cardinality::ToMany, _) => Err(MapperError::invalid(format!(
                "to-many relationship '{}' must hold an array of ids",
                relationship.name
            ))),
        }
    }

    fn to_value(
        &self,
        information: &ResourceInformation,
        object: &ResourceObject,
    ) -> Result<Value, MapperError> {
        if let Some(name) = object.attributes.keys().find(|name| {
            **name == information.id_field || information.relationship(name).is_some()
        }) {
            return Err(MapperError::invalid(format!(
                "'{name}' of '{}' cannot be sent as an attribute",
                information.resource_type
            )));
        }
        let mut fields: Map<String, Value> = object.attributes.clone();

        if let Some(id) = &object.id {
            fields.insert(information.id_field.clone(), self.parse(id, information.id_kind)?);
        }

        for (name, relationship) in &object.relationships {
            let field = information.relationship(name).ok_or_else(|| {
                MapperError::invalid(format!(
                    "'{}' has no relationship '{name}'",
                    information.resource_type
                ))
            })?;
            let Some(linkage) = &relationship.data else {
                continue;
            };
            let kind = self.id_kind(&field.target_type);

            let value = match (field.cardinality, linkage) {
                (Cardinality::ToOne, Linkage::Empty) => Value::Null,
                (Cardinality::ToOne, Linkage::One(target)) => self.parse(&target.id, kind)?,
                (Cardinality::ToMany, Linkage::Empty) => Value::Array(Vec::new()),
                (Cardinality::ToMany, Linkage::Many(targets)) => Value::Array(
                    targets
                        .iter()
                        .map(|target| self.parse(&target.id, kind))
                        .collect::<Result<_, _>>()?,
                ),
                _ => {
                    return Err(MapperError::invalid(format!(
                        "linkage of '{name}' does not match its cardinality"
                    )));
                }
            };
            fields.insert(name.clone(), value);
        }

        Ok(Value::Object(fields))
    }

    fn render(&self, id: &Value) -> Result<String, MapperError> {
        self.parser
            .render(id)
            .ok_or_else(|| MapperError::invalid(format!("{id} is not a valid resource id")))
    }

    fn parse(&self, id: &str, kind: IdKind) -> Result<Value, MapperError> {
        self.parser.parse(id, kind).map_err(|e| MapperError::invalid(e.to_string()))
    }

    /// Id kind of a relationship target; unknown targets keep string ids.
    fn id_kind(&self, resource_type: &str) -> IdKind {
        self.registry.entry(resource_type).map_or(IdKind::Text, |e| e.information().id_kind)
    }
}

impl DataBindingModule for JsonApiModule {
    fn name(&self) -> &str {
        MODULE_NAME
    }

    fn encode(
        &self,
        resource_type: &str,
        value: &Value,
    ) -> Option<Result<ResourceObject, MapperError>> {
        let entry = self.registry.entry(resource_type)?;
        Some(self.to_object(entry.information(), value))
    }

    fn decode(&self, object: &ResourceObject) -> Option<Result<Value, MapperError>> {
        let entry = self.registry.entry(&object.resource_type)?;
        Some(self.to_value(entry.information(), object))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
