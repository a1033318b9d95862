#![allow(dead_code, unreachable_pub)]

use japi::dispatcher::{ControllerRegistryBuilder, RequestDispatcher};
use japi::errors::{ExceptionMapperError, ExceptionMapperRegistry};
use japi::kernel::locator::{ServiceLocator, SimpleServiceLocator};
use japi::kernel::parser::TypeParser;
use japi::mapper::DataMapper;
use japi::prelude::*;
use japi::resources::RegistryEntry;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const SEARCH_LOCATION: &str = "com.example.resources";
pub const DOMAIN: &str = "http://example.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
}

impl Resource for Book {
    type Id = u64;
    const TYPE: &'static str = "books";
    const ID_KIND: IdKind = IdKind::Unsigned;
}

#[derive(Debug, Default)]
pub struct Books(pub RwLock<BTreeMap<u64, Book>>);

impl Books {
    pub fn seeded() -> Self {
        let books = Self::default();
        books.0.write().insert(1, Book { id: 1, title: "Dune".to_owned() });
        books
    }
}

impl ResourceRepository<Book> for Books {
    fn find_one(&self, id: &u64, _: &QueryParams) -> Result<Option<Book>, RepositoryError> {
        Ok(self.0.read().get(id).cloned())
    }

    fn find_all(&self, _: &QueryParams) -> Result<Vec<Book>, RepositoryError> {
        Ok(self.0.read().values().cloned().collect())
    }

    fn save(&self, book: Book) -> Result<Book, RepositoryError> {
        self.0.write().insert(book.id, book.clone());
        Ok(book)
    }

    fn delete(&self, id: &u64) -> Result<(), RepositoryError> {
        self.0.write().remove(id);
        Ok(())
    }
}

pub fn catalog() -> ResourceCatalog {
    ResourceCatalog::new().register::<Book, Books>("com.example.resources.books")
}

pub fn locator() -> Arc<dyn ServiceLocator> {
    Arc::new(SimpleServiceLocator::new().with(Books::seeded()))
}

pub fn registry() -> ResourceRegistry {
    let entry = RegistryEntry::new::<Book, _>(Arc::new(Books::seeded())).unwrap();
    ResourceRegistry::from_entries(DOMAIN, [entry]).unwrap()
}

pub fn dispatcher(registry: &ResourceRegistry) -> RequestDispatcher {
    let mapper = Arc::new(DataMapper::new());
    let controllers =
        ControllerRegistryBuilder::new(registry.clone(), TypeParser::new(), mapper).build();
    RequestDispatcher::new(controllers, ExceptionMapperRegistry::empty())
}

/// Catalog defaults that count how often each part is constructed.
#[derive(Debug, Clone)]
pub struct CountingDefaults {
    inner: CatalogDefaults,
    registries: Arc<AtomicUsize>,
    exception_mappers: Arc<AtomicUsize>,
}

impl CountingDefaults {
    pub fn new() -> Self {
        Self {
            inner: CatalogDefaults::new(catalog(), MapperCatalog::new()),
            registries: Arc::default(),
            exception_mappers: Arc::default(),
        }
    }

    pub fn registry_builds(&self) -> usize {
        self.registries.load(Ordering::SeqCst)
    }

    pub fn mapper_builds(&self) -> usize {
        self.exception_mappers.load(Ordering::SeqCst)
    }
}

impl AssemblyDefaults for CountingDefaults {
    fn resource_registry(
        &self,
        locator: Arc<dyn ServiceLocator>,
        search_location: &str,
        default_domain: &str,
    ) -> Result<ResourceRegistry, RegistryError> {
        self.registries.fetch_add(1, Ordering::SeqCst);
        self.inner.resource_registry(locator, search_location, default_domain)
    }

    fn exception_mappers(
        &self,
        search_location: &str,
    ) -> Result<ExceptionMapperRegistry, ExceptionMapperError> {
        self.exception_mappers.fetch_add(1, Ordering::SeqCst);
        self.inner.exception_mappers(search_location)
    }
}
