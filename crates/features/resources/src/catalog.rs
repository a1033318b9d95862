use crate::error::RegistryError;
use crate::information::ResourceInformationBuilder;
use crate::repository::{DynRepository, RepositoryAdapter, ResourceRepository};
use crate::resource::Resource;
use japi_domain::resource::ResourceInformation;
use japi_kernel::location::SearchLocations;
use japi_kernel::locator::{ServiceLocator, ServiceLocatorExt};
use std::any::{TypeId, type_name};
use std::fmt;
use std::sync::Arc;

type DescribeFn = fn(&ResourceInformationBuilder) -> Result<ResourceInformation, RegistryError>;
type BindFn = fn(&dyn ServiceLocator) -> Option<Arc<dyn DynRepository>>;

/// One resource declared in a [`ResourceCatalog`].
#[derive(Clone)]
pub struct CatalogEntry {
    location: String,
    resource_type: &'static str,
    resource_id: TypeId,
    repository_name: &'static str,
    describe: DescribeFn,
    bind: BindFn,
}

impl CatalogEntry {
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub const fn resource_type(&self) -> &'static str {
        self.resource_type
    }

    /// [`TypeId`] of the Rust resource type.
    #[must_use]
    pub const fn resource_id(&self) -> TypeId {
        self.resource_id
    }

    #[must_use]
    pub const fn repository_name(&self) -> &'static str {
        self.repository_name
    }

    pub(crate) fn describe(
        &self,
        builder: &ResourceInformationBuilder,
    ) -> Result<ResourceInformation, RegistryError> {
        (self.describe)(builder)
    }

    pub(crate) fn bind(&self, locator: &dyn ServiceLocator) -> Option<Arc<dyn DynRepository>> {
        (self.bind)(locator)
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("location", &self.location)
            .field("resource_type", &self.resource_type)
            .field("repository", &self.repository_name)
            .finish_non_exhaustive()
    }
}

/// Explicit list of resources, each tagged with a dotted location.
///
/// Scanning a search location selects the entries at or beneath it, in
/// registration order.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    entries: Vec<CatalogEntry>,
}

impl ResourceCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares resource `T` at `location`, served by repository `R`, which
    /// the service locator must provide at registry build time.
    #[must_use]
    pub fn register<T, R>(mut self, location: impl Into<String>) -> Self
    where
        T: Resource,
        R: ResourceRepository<T>,
    {
        self.entries.push(CatalogEntry {
            location: location.into(),
            resource_type: T::TYPE,
            resource_id: TypeId::of::<T>(),
            repository_name: type_name::<R>(),
            describe: describe::<T>,
            bind: bind::<T, R>,
        });
        self
    }

    /// Entries at or beneath any of the comma separated `search_location`s.
    pub fn scan<'a>(&'a self, search_location: &str) -> impl Iterator<Item = &'a CatalogEntry> {
        let search = SearchLocations::parse(search_location);
        self.entries.iter().filter(move |entry| search.contains(&entry.location))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn describe<T: Resource>(
    builder: &ResourceInformationBuilder,
) -> Result<ResourceInformation, RegistryError> {
    builder.build::<T>()
}

fn bind<T, R>(locator: &dyn ServiceLocator) -> Option<Arc<dyn DynRepository>>
where
    T: Resource,
    R: ResourceRepository<T>,
{
    locator.get::<R>().map(|repository| {
        Arc::new(RepositoryAdapter::<T, R>::new(repository)) as Arc<dyn DynRepository>
    })
}
