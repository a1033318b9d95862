use crate::catalog::ResourceCatalog;
use crate::error::RegistryError;
use crate::information::ResourceInformationBuilder;
use crate::registry::{RegistryEntry, ResourceRegistry};
use japi_kernel::locator::ServiceLocator;
use std::sync::Arc;
use tracing::{debug, info};

/// Builds a [`ResourceRegistry`] from the catalog entries under a search location.
#[derive(Debug, Clone)]
pub struct ResourceRegistryBuilder {
    locator: Arc<dyn ServiceLocator>,
    information: ResourceInformationBuilder,
    catalog: ResourceCatalog,
}

impl ResourceRegistryBuilder {
    #[must_use]
    pub fn new(
        locator: Arc<dyn ServiceLocator>,
        information: ResourceInformationBuilder,
        catalog: ResourceCatalog,
    ) -> Self {
        Self { locator, information, catalog }
    }

    /// Collects every resource at or beneath `search_location` and binds its
    /// repository from the service locator.
    ///
    /// # Errors
    /// Fails when a resource's information is invalid, when the locator has no
    /// repository for it, or when two collected resources share a type.
    pub fn build(
        &self,
        search_location: &str,
        default_domain: &str,
    ) -> Result<ResourceRegistry, RegistryError> {
        let mut entries = Vec::new();

        for candidate in self.catalog.scan(search_location) {
            let information = candidate.describe(&self.information)?;
            let repository = candidate.bind(self.locator.as_ref()).ok_or_else(|| {
                RegistryError::RepositoryNotFound {
                    message: format!(
                        "no {} registered for '{}'",
                        candidate.repository_name(),
                        candidate.resource_type()
                    )
                    .into(),
                    context: Some(candidate.location().to_owned().into()),
                }
            })?;

            debug!(
                resource = %information.resource_type,
                location = candidate.location(),
                repository = candidate.repository_name(),
                "Resource collected"
            );
            entries.push(RegistryEntry::from_parts(
                information,
                candidate.resource_id(),
                repository,
            ));
        }

        let registry = ResourceRegistry::from_entries(default_domain, entries)?;
        info!(search_location, resources = registry.len(), "Resource registry built");
        Ok(registry)
    }
}
