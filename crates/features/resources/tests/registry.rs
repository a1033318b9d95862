use japi_kernel::locator::SimpleServiceLocator;
use japi_resources::prelude::*;
use japi_resources::{RegistryEntry, RepositoryError};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Task {
    id: i64,
    name: String,
    project: Option<i64>,
}

impl Resource for Task {
    type Id = i64;
    const TYPE: &'static str = "tasks";
    const ID_KIND: IdKind = IdKind::Integer;

    fn relationships() -> Vec<RelationshipField> {
        vec![RelationshipField::to_one("project", "projects")]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Project {
    id: i64,
    title: String,
}

impl Resource for Project {
    type Id = i64;
    const TYPE: &'static str = "projects";
    const ID_KIND: IdKind = IdKind::Integer;
}

#[derive(Debug)]
struct Store<T>(RwLock<BTreeMap<i64, T>>);

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self(RwLock::new(BTreeMap::new()))
    }
}

impl ResourceRepository<Task> for Store<Task> {
    fn find_one(&self, id: &i64, _: &QueryParams) -> Result<Option<Task>, RepositoryError> {
        Ok(self.0.read().get(id).cloned())
    }

    fn find_all(&self, _: &QueryParams) -> Result<Vec<Task>, RepositoryError> {
        Ok(self.0.read().values().cloned().collect())
    }

    fn save(&self, task: Task) -> Result<Task, RepositoryError> {
        self.0.write().insert(task.id, task.clone());
        Ok(task)
    }

    fn delete(&self, id: &i64) -> Result<(), RepositoryError> {
        self.0.write().remove(id);
        Ok(())
    }
}

impl ResourceRepository<Project> for Store<Project> {
    fn find_one(&self, id: &i64, _: &QueryParams) -> Result<Option<Project>, RepositoryError> {
        Ok(self.0.read().get(id).cloned())
    }

    fn find_all(&self, _: &QueryParams) -> Result<Vec<Project>, RepositoryError> {
        Ok(self.0.read().values().cloned().collect())
    }

    fn save(&self, project: Project) -> Result<Project, RepositoryError> {
        self.0.write().insert(project.id, project.clone());
        Ok(project)
    }

    fn delete(&self, id: &i64) -> Result<(), RepositoryError> {
        self.0.write().remove(id);
        Ok(())
    }
}

fn catalog() -> ResourceCatalog {
    ResourceCatalog::new()
        .register::<Task, Store<Task>>("app.resources.tasks")
        .register::<Project, Store<Project>>("app.resources.projects")
}

fn locator() -> Arc<SimpleServiceLocator> {
    Arc::new(
        SimpleServiceLocator::new()
            .with(Store::<Task>::default())
            .with(Store::<Project>::default()),
    )
}

fn builder() -> ResourceRegistryBuilder {
    ResourceRegistryBuilder::new(locator(), ResourceInformationBuilder::new(), catalog())
}

#[test]
fn collects_resources_under_the_search_location() {
    let registry = builder().build("app.resources", "http://example.com/").unwrap();

    assert_eq!(registry.len(), 2);
    assert!(registry.contains("tasks"));
    assert!(registry.contains("projects"));
    assert_eq!(registry.default_domain(), "http://example.com");
    assert_eq!(registry.resource_url("projects"), "http://example.com/projects");
    assert_eq!(registry.entry_for::<Task>().map(RegistryEntry::resource_type), Some("tasks"));
}

#[test]
fn narrower_locations_select_fewer_resources() {
    let registry = builder().build("app.resources.tasks", "http://example.com").unwrap();
    assert_eq!(registry.entries().map(RegistryEntry::resource_type).collect::<Vec<_>>(), ["tasks"]);

    let empty = builder().build("other", "http://example.com").unwrap();
    assert!(empty.is_empty());
}

#[test]
fn missing_repository_is_reported() {
    let locator = Arc::new(SimpleServiceLocator::new().with(Store::<Task>::default()));
    let err = ResourceRegistryBuilder::new(locator, ResourceInformationBuilder::new(), catalog())
        .build("app", "http://example.com")
        .unwrap_err();

    assert!(matches!(err, RegistryError::RepositoryNotFound { .. }));
    assert!(err.to_string().contains("projects"));
}

#[test]
fn duplicate_types_are_rejected() {
    let catalog = catalog().register::<Task, Store<Task>>("app.more");
    let err = ResourceRegistryBuilder::new(locator(), ResourceInformationBuilder::new(), catalog)
        .build("app", "http://example.com")
        .unwrap_err();

    assert!(matches!(err, RegistryError::DuplicateResource { .. }));
}

#[test]
fn repositories_are_shared_with_the_locator() {
    let store = Arc::new(Store::<Task>::default());
    let locator = Arc::new(
        SimpleServiceLocator::new()
            .with_shared(Arc::clone(&store))
            .with(Store::<Project>::default()),
    );
    let registry =
        ResourceRegistryBuilder::new(locator, ResourceInformationBuilder::new(), catalog())
            .build("app", "http://example.com")
            .unwrap();

    let repository = registry.entry("tasks").unwrap().repository();
    repository.save(json!({ "id": 3, "name": "write docs", "project": null })).unwrap();

    assert_eq!(store.0.read().get(&3).map(|t| t.name.as_str()), Some("write docs"));
    let all: Vec<Value> = repository.find_all(&QueryParams::new()).unwrap();
    assert_eq!(all.len(), 1);
}

#[test]
fn registries_can_be_assembled_by_hand() {
    let registry = ResourceRegistry::from_entries(
        "http://localhost:8080",
        [RegistryEntry::new::<Project, _>(Arc::new(Store::<Project>::default())).unwrap()],
    )
    .unwrap();

    let clone = registry.clone();
    assert!(registry.ptr_eq(&clone));
    assert_eq!(registry.entry("projects").unwrap().information().id_kind, IdKind::Integer);
}
