//! Resource slice: how user types become JSON:API resources.
//!
//! A type opts in by implementing [`Resource`]; its storage implements
//! [`ResourceRepository`]. Instead of scanning for annotated types at
//! runtime, resources are listed in a [`ResourceCatalog`] together with a
//! dotted location. [`ResourceRegistryBuilder`] selects the catalog entries
//! under a search location, asks the service locator for each repository,
//! and produces an immutable [`ResourceRegistry`].
//!
//! ```rust
//! use japi_kernel::locator::SimpleServiceLocator;
//! use japi_resources::prelude::*;
//! use serde::{Deserialize, Serialize};
//! use serde_json::Value;
//! use std::sync::Arc;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Task { id: String, name: String }
//!
//! impl Resource for Task {
//!     type Id = String;
//!     const TYPE: &'static str = "tasks";
//! }
//!
//! #[derive(Debug, Default)]
//! struct TaskRepository;
//!
//! impl ResourceRepository<Task> for TaskRepository {
//!     fn find_one(&self, id: &String, _: &QueryParams) -> Result<Option<Task>, RepositoryError> {
//!         Ok(Some(Task { id: id.clone(), name: "demo".to_owned() }))
//!     }
//!     fn find_all(&self, _: &QueryParams) -> Result<Vec<Task>, RepositoryError> { Ok(Vec::new()) }
//!     fn save(&self, task: Task) -> Result<Task, RepositoryError> { Ok(task) }
//!     fn delete(&self, _: &String) -> Result<(), RepositoryError> { Ok(()) }
//! }
//!
//! let catalog = ResourceCatalog::new().register::<Task, TaskRepository>("app.resources");
//! let locator = Arc::new(SimpleServiceLocator::new().with(TaskRepository));
//!
//! let registry = ResourceRegistryBuilder::new(locator, ResourceInformationBuilder::new(), catalog)
//!     .build("app", "http://example.com")
//!     .unwrap();
//!
//! assert_eq!(registry.resource_url("tasks"), "http://example.com/tasks");
//! let repository = registry.entry("tasks").unwrap().repository();
//! let found = repository.find_one(&Value::from("1"), &QueryParams::new());
//! assert!(found.unwrap().is_some());
//! ```

mod builder;
mod catalog;
mod error;
mod information;
mod registry;
mod repository;
mod resource;

pub use builder::ResourceRegistryBuilder;
pub use catalog::{CatalogEntry, ResourceCatalog};
pub use error::{RegistryError, RegistryErrorExt};
pub use information::ResourceInformationBuilder;
pub use registry::{RegistryEntry, ResourceRegistry};
pub use repository::{
    DynRepository, RepositoryAdapter, RepositoryError, RepositoryErrorExt, ResourceRepository,
};
pub use resource::Resource;

pub mod prelude {
    pub use crate::{
        DynRepository, RegistryError, RepositoryError, Resource, ResourceCatalog,
        ResourceInformationBuilder, ResourceRegistry, ResourceRegistryBuilder, ResourceRepository,
    };
    pub use japi_domain::request::QueryParams;
    pub use japi_domain::resource::{IdKind, RelationshipField};
}
