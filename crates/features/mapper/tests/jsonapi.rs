use japi_domain::document::{Linkage, ResourceIdentifier, ResourceObject};
use japi_mapper::{DataMapper, JsonApiModule, JsonApiModuleBuilder, MapperError};
use japi_resources::prelude::*;
use japi_resources::RegistryEntry;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Task {
    id: i64,
    name: String,
    project: Option<u64>,
    tags: Vec<String>,
}

impl Resource for Task {
    type Id = i64;
    const TYPE: &'static str = "tasks";
    const ID_KIND: IdKind = IdKind::Integer;

    fn relationships() -> Vec<RelationshipField> {
        vec![
            RelationshipField::to_one("project", "projects"),
            RelationshipField::to_many("tags", "tags"),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Project {
    id: u64,
}

impl Resource for Project {
    type Id = u64;
    const TYPE: &'static str = "projects";
    const ID_KIND: IdKind = IdKind::Unsigned;
}

#[derive(Debug, Default)]
struct Nothing;

impl ResourceRepository<Task> for Nothing {
    fn find_one(&self, _: &i64, _: &QueryParams) -> Result<Option<Task>, RepositoryError> {
        Ok(None)
    }
    fn find_all(&self, _: &QueryParams) -> Result<Vec<Task>, RepositoryError> {
        Ok(Vec::new())
    }
    fn save(&self, task: Task) -> Result<Task, RepositoryError> {
        Ok(task)
    }
    fn delete(&self, _: &i64) -> Result<(), RepositoryError> {
        Ok(())
    }
}

impl ResourceRepository<Project> for Nothing {
    fn find_one(&self, _: &u64, _: &QueryParams) -> Result<Option<Project>, RepositoryError> {
        Ok(None)
    }
    fn find_all(&self, _: &QueryParams) -> Result<Vec<Project>, RepositoryError> {
        Ok(Vec::new())
    }
    fn save(&self, project: Project) -> Result<Project, RepositoryError> {
        Ok(project)
    }
    fn delete(&self, _: &u64) -> Result<(), RepositoryError> {
        Ok(())
    }
}

fn mapper() -> DataMapper {
    let repository = Arc::new(Nothing);
    let registry = ResourceRegistry::from_entries(
        "http://example.com",
        [
            RegistryEntry::new::<Task, _>(Arc::clone(&repository)).unwrap(),
            RegistryEntry::new::<Project, _>(repository).unwrap(),
        ],
    )
    .unwrap();
    DataMapper::new().with_module(JsonApiModuleBuilder::new().build(&registry))
}

#[test]
fn encodes_attributes_relationships_and_links() {
    let value = json!({ "id": 7, "name": "ship it", "project": 3, "tags": ["a", "b"] });
    let object = mapper().encode_resource("tasks", &value).unwrap();

    assert_eq!(object.id.as_deref(), Some("7"));
    assert_eq!(object.attributes.get("name"), Some(&json!("ship it")));
    assert!(!object.attributes.contains_key("project"));
    assert_eq!(
        object.relationships["project"].data,
        Some(Linkage::One(ResourceIdentifier::new("projects", "3")))
    );
    assert_eq!(object.relationships["tags"].data.as_ref().map(|l| l.identifiers().len()), Some(2));

    let links = object.relationships["project"].links.clone().unwrap();
    assert_eq!(links.related.as_deref(), Some("http://example.com/tasks/7/project"));
    assert_eq!(
        links.self_link.as_deref(),
        Some("http://example.com/tasks/7/relationships/project")
    );
    assert_eq!(
        object.links.and_then(|l| l.self_link).as_deref(),
        Some("http://example.com/tasks/7")
    );
}

#[test]
fn empty_to_one_becomes_null_linkage() {
    let value = json!({ "id": 1, "name": "n", "project": null, "tags": [] });
    let object = mapper().encode_resource("tasks", &value).unwrap();

    assert_eq!(object.relationships["project"].data, Some(Linkage::Empty));
    let wire = serde_json::to_value(&object).unwrap();
    assert_eq!(wire["relationships"]["project"]["data"], Value::Null);
}

#[test]
fn decodes_back_into_typed_ids() {
    let mut object = ResourceObject::new("tasks", Some("9".to_owned()));
    object.attributes.insert("name".to_owned(), json!("decoded"));
    object.relationships.insert(
        "project".to_owned(),
        japi_domain::document::Relationship {
            data: Some(Linkage::One(ResourceIdentifier::new("projects", "4"))),
            links: None,
        },
    );
    object.relationships.insert(
        "tags".to_owned(),
        japi_domain::document::Relationship {
            data: Some(Linkage::Many(vec![ResourceIdentifier::new("tags", "x")])),
            links: None,
        },
    );

    let value = mapper().decode_resource(&object).unwrap();
    assert_eq!(value, json!({ "id": 9, "name": "decoded", "project": 4, "tags": ["x"] }));
    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.project, Some(4));
}

#[test]
fn rejects_unknown_relationships_and_bad_ids() {
    let mapper = mapper();

    let mut object = ResourceObject::new("tasks", Some("1".to_owned()));
    object.relationships.insert("owner".to_owned(), Default::default());
    assert!(matches!(mapper.decode_resource(&object), Err(MapperError::Invalid { .. })));

    let object = ResourceObject::new("tasks", Some("one".to_owned()));
    assert!(mapper.decode_resource(&object).is_err());

    let err = mapper.encode_resource("tasks", &json!({ "id": 1, "tags": "a" })).unwrap_err();
    assert!(err.to_string().contains("tags"));
}

#[test]
fn ids_and_relationships_are_not_accepted_as_attributes() {
    let mapper = mapper();

    let mut object = ResourceObject::new("tasks", None);
    object.attributes.insert("id".to_owned(), json!(2));
    let err = mapper.decode_resource(&object).unwrap_err();
    assert!(matches!(err, MapperError::Invalid { .. }));
    assert!(err.to_string().contains("'id'"));

    let mut object = ResourceObject::new("tasks", Some("1".to_owned()));
    object.attributes.insert("project".to_owned(), json!(9));
    assert!(matches!(mapper.decode_resource(&object), Err(MapperError::Invalid { .. })));
}

#[test]
fn unregistered_types_are_not_handled() {
    let err = mapper().encode_resource("people", &json!({ "id": "p" })).unwrap_err();
    assert!(matches!(err, MapperError::UnsupportedType { .. }));
}

#[test]
fn module_is_discoverable_on_the_mapper() {
    let mapper = mapper();
    let module = mapper.find_module::<JsonApiModule>().expect("registered");
    assert_eq!(module.registry().len(), 2);
}
