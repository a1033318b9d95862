#![allow(dead_code, unreachable_pub)]

use japi_dispatcher::{ControllerRegistryBuilder, RequestDispatcher};
use japi_domain::request::ErrorResponse;
use japi_errors::{
    ExceptionMapper, ExceptionMapperRegistry, ExceptionMapperRegistryBuilder, MapperCatalog,
};
use japi_kernel::locator::SimpleServiceLocator;
use japi_kernel::parser::TypeParser;
use japi_mapper::{DataMapper, JsonApiModuleBuilder};
use japi_resources::prelude::*;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

pub const DOMAIN: &str = "http://example.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub project: Option<i64>,
}

impl Resource for Task {
    type Id = i64;
    const TYPE: &'static str = "tasks";
    const ID_KIND: IdKind = IdKind::Integer;

    fn relationships() -> Vec<RelationshipField> {
        vec![RelationshipField::to_one("project", "projects")]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<i64>,
}

impl Resource for Project {
    type Id = i64;
    const TYPE: &'static str = "projects";
    const ID_KIND: IdKind = IdKind::Integer;

    fn relationships() -> Vec<RelationshipField> {
        vec![RelationshipField::to_many("tasks", "tasks")]
    }
}

#[derive(Debug, thiserror::Error)]
#[error("'{0}' is a reserved name")]
pub struct ReservedName(pub String);

pub struct ReservedNameMapper;

impl ExceptionMapper<ReservedName> for ReservedNameMapper {
    fn to_error_response(&self, error: &ReservedName) -> ErrorResponse {
        ErrorResponse::single(403, "Forbidden", error.to_string())
    }
}

pub trait Row: Resource<Id = i64> + Clone {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

impl Row for Task {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
    fn check(&self) -> Result<(), RepositoryError> {
        if self.name == "admin" {
            return Err(RepositoryError::custom(ReservedName(self.name.clone())));
        }
        Ok(())
    }
}

impl Row for Project {
    fn id(&self) -> i64 {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

#[derive(Debug)]
pub struct Store<T>(pub RwLock<BTreeMap<i64, T>>);

impl<T: Row> Store<T> {
    pub fn with(rows: impl IntoIterator<Item = T>) -> Self {
        Self(RwLock::new(rows.into_iter().map(|row| (row.id(), row)).collect()))
    }
}

impl<T: Row> ResourceRepository<T> for Store<T> {
    fn find_one(&self, id: &i64, _: &QueryParams) -> Result<Option<T>, RepositoryError> {
        Ok(self.0.read().get(id).cloned())
    }

    fn find_all(&self, _: &QueryParams) -> Result<Vec<T>, RepositoryError> {
        Ok(self.0.read().values().cloned().collect())
    }

    fn save(&self, mut row: T) -> Result<T, RepositoryError> {
        row.check()?;
        let mut rows = self.0.write();
        if row.id() == 0 {
            row.set_id(rows.keys().next_back().map_or(1, |last| last + 1));
        }
        rows.insert(row.id(), row.clone());
        Ok(row)
    }

    fn delete(&self, id: &i64) -> Result<(), RepositoryError> {
        self.0
            .write()
            .remove(id)
            .map(drop)
            .ok_or_else(|| RepositoryError::not_found(format!("{} {id}", T::TYPE)))
    }
}

pub struct Fixture {
    pub registry: ResourceRegistry,
    pub tasks: Arc<Store<Task>>,
    pub dispatcher: RequestDispatcher,
}

pub fn task(id: i64, name: &str, project: Option<i64>) -> Task {
    Task { id, name: name.to_owned(), done: false, project }
}

pub fn registry(tasks: Arc<Store<Task>>) -> ResourceRegistry {
    let projects = Store::with([Project { id: 1, title: "launch".to_owned(), tasks: vec![1, 2] }]);
    let locator = Arc::new(SimpleServiceLocator::new().with_shared(tasks).with(projects));
    let catalog = ResourceCatalog::new()
        .register::<Task, Store<Task>>("app.resources")
        .register::<Project, Store<Project>>("app.resources");

    ResourceRegistryBuilder::new(locator, ResourceInformationBuilder::new(), catalog)
        .build("app", DOMAIN)
        .expect("registry builds")
}

pub fn fixture_with(exceptions: ExceptionMapperRegistry) -> Fixture {
    let tasks = Arc::new(Store::with([task(1, "design", Some(1)), task(2, "build", Some(1))]));
    let registry = registry(Arc::clone(&tasks));
    let module = JsonApiModuleBuilder::new().build(&registry);
    let mapper = Arc::new(DataMapper::new().with_module(module));
    let controllers =
        ControllerRegistryBuilder::new(registry.clone(), TypeParser::new(), mapper).build();

    Fixture { registry, tasks, dispatcher: RequestDispatcher::new(controllers, exceptions) }
}

pub fn fixture() -> Fixture {
    let catalog =
        MapperCatalog::new().register::<ReservedName, _>("app.errors", ReservedNameMapper);
    fixture_with(ExceptionMapperRegistryBuilder::new(catalog).build("app").expect("mappers build"))
}
