use japi_dispatcher::{ControllerRegistryBuilder, RequestDispatcher};
use japi_errors::{
    ExceptionMapperError, ExceptionMapperRegistry, ExceptionMapperRegistryBuilder, MapperCatalog,
};
use japi_kernel::locator::ServiceLocator;
use japi_kernel::parser::TypeParser;
use japi_mapper::{DataMapper, JsonApiModuleBuilder};
use japi_resources::{
    RegistryError, ResourceCatalog, ResourceInformationBuilder, ResourceRegistry,
    ResourceRegistryBuilder,
};
use std::fmt::Debug;
use std::sync::Arc;

/// Constructs the parts an [`InvokerBuilder`](crate::InvokerBuilder) was not given.
///
/// Only the two discovery steps are required; the mapper and dispatcher
/// defaults can be overridden when a deployment needs different wiring.
pub trait AssemblyDefaults: Debug + Send + Sync {
    fn resource_registry(
        &self,
        locator: Arc<dyn ServiceLocator>,
        search_location: &str,
        default_domain: &str,
    ) -> Result<ResourceRegistry, RegistryError>;

    fn exception_mappers(
        &self,
        search_location: &str,
    ) -> Result<ExceptionMapperRegistry, ExceptionMapperError>;

    /// A mapper with the JSON:API module for `registry` registered.
    fn data_mapper(&self, registry: &ResourceRegistry) -> DataMapper {
        DataMapper::new().with_module(JsonApiModuleBuilder::new().build(registry))
    }

    fn request_dispatcher(
        &self,
        registry: &ResourceRegistry,
        mapper: Arc<DataMapper>,
        exceptions: ExceptionMapperRegistry,
    ) -> RequestDispatcher {
        let controllers =
            ControllerRegistryBuilder::new(registry.clone(), TypeParser::new(), mapper).build();
        RequestDispatcher::new(controllers, exceptions)
    }
}

/// Discovers resources and exception mappers in explicit catalogs.
#[derive(Debug, Clone, Default)]
pub struct CatalogDefaults {
    resources: ResourceCatalog,
    mappers: MapperCatalog,
}

impl CatalogDefaults {
    #[must_use]
    pub const fn new(resources: ResourceCatalog, mappers: MapperCatalog) -> Self {
        Self { resources, mappers }
    }
}

impl AssemblyDefaults for CatalogDefaults {
    fn resource_registry(
        &self,
        locator: Arc<dyn ServiceLocator>,
        search_location: &str,
        default_domain: &str,
    ) -> Result<ResourceRegistry, RegistryError> {
        let information = ResourceInformationBuilder::new();
        ResourceRegistryBuilder::new(locator, information, self.resources.clone())
            .build(search_location, default_domain)
    }

    fn exception_mappers(
        &self,
        search_location: &str,
    ) -> Result<ExceptionMapperRegistry, ExceptionMapperError> {
        ExceptionMapperRegistryBuilder::new(self.mappers.clone()).build(search_location)
    }
}
