use crate::error::RegistryError;
use crate::information::ResourceInformationBuilder;
use crate::repository::{DynRepository, RepositoryAdapter, ResourceRepository};
use crate::resource::Resource;
use fxhash::FxHashMap;
use japi_domain::resource::ResourceInformation;
use std::any::TypeId;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A resource's metadata paired with the repository that stores it.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    information: ResourceInformation,
    resource_id: TypeId,
    repository: Arc<dyn DynRepository>,
}

impl RegistryEntry {
    /// Binds `repository` to resource `T` directly, bypassing the catalog.
    ///
    /// # Errors
    /// Fails when `T` declares invalid resource information.
    pub fn new<T, R>(repository: Arc<R>) -> Result<Self, RegistryError>
    where
        T: Resource,
        R: ResourceRepository<T>,
    {
        Ok(Self {
            information: ResourceInformationBuilder::new().build::<T>()?,
            resource_id: TypeId::of::<T>(),
            repository: Arc::new(RepositoryAdapter::<T, R>::new(repository)),
        })
    }

    pub(crate) const fn from_parts(
        information: ResourceInformation,
        resource_id: TypeId,
        repository: Arc<dyn DynRepository>,
    ) -> Self {
        Self { information, resource_id, repository }
    }

    #[must_use]
    pub const fn information(&self) -> &ResourceInformation {
        &self.information
    }

    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.information.resource_type
    }

    #[must_use]
    pub const fn repository(&self) -> &Arc<dyn DynRepository> {
        &self.repository
    }
}

#[derive(Debug)]
struct RegistryInner {
    domain: String,
    entries: BTreeMap<String, RegistryEntry>,
    by_type: FxHashMap<TypeId, String>,
}

/// Immutable lookup from resource type to [`RegistryEntry`].
///
/// Clones share the same underlying registry; see [`ResourceRegistry::ptr_eq`].
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    inner: Arc<RegistryInner>,
}

impl ResourceRegistry {
    /// # Errors
    /// Returns [`RegistryError::DuplicateResource`] when two entries share a type.
    pub fn from_entries(
        default_domain: impl Into<String>,
        entries: impl IntoIterator<Item = RegistryEntry>,
    ) -> Result<Self, RegistryError> {
        let mut map = BTreeMap::new();
        let mut by_type = FxHashMap::default();

        for entry in entries {
            let resource_type = entry.resource_type().to_owned();
            if map.contains_key(&resource_type) {
                return Err(RegistryError::DuplicateResource {
                    message: format!("'{resource_type}' is registered more than once").into(),
                    context: None,
                });
            }
            by_type.insert(entry.resource_id, resource_type.clone());
            map.insert(resource_type, entry);
        }

        Ok(Self {
            inner: Arc::new(RegistryInner {
                domain: default_domain.into().trim_end_matches('/').to_owned(),
                entries: map,
                by_type,
            }),
        })
    }

    #[must_use]
    pub fn entry(&self, resource_type: &str) -> Option<&RegistryEntry> {
        self.inner.entries.get(resource_type)
    }

    #[must_use]
    pub fn entry_for<T: Resource>(&self) -> Option<&RegistryEntry> {
        self.inner.by_type.get(&TypeId::of::<T>()).and_then(|t| self.entry(t))
    }

    #[must_use]
    pub fn contains(&self, resource_type: &str) -> bool {
        self.inner.entries.contains_key(resource_type)
    }

    /// Absolute URL of a resource collection, `{domain}/{type}`.
    #[must_use]
    pub fn resource_url(&self, resource_type: &str) -> String {
        format!("{}/{resource_type}", self.inner.domain)
    }

    #[must_use]
    pub fn default_domain(&self) -> &str {
        &self.inner.domain
    }

    /// Entries ordered by resource type.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.inner.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Whether both handles refer to the same registry instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
