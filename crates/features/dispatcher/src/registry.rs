use crate::controller::{
    CollectionGet, Controller, ControllerContext, FieldResourceGet, RelationshipsGet,
    ResourceDelete, ResourceGet, ResourcePatch, ResourcePost,
};
use crate::error::DispatchError;
use crate::path::JsonPath;
use japi_domain::request::Method;
use japi_kernel::parser::TypeParser;
use japi_mapper::DataMapper;
use japi_resources::ResourceRegistry;
use std::sync::Arc;
use tracing::debug;

/// Ordered controllers; the first one accepting a path and method handles it.
#[derive(Debug, Clone)]
pub struct ControllerRegistry {
    registry: ResourceRegistry,
    controllers: Vec<Arc<dyn Controller>>,
}

impl ControllerRegistry {
    #[must_use]
    pub const fn new(registry: ResourceRegistry) -> Self {
        Self { registry, controllers: Vec::new() }
    }

    pub fn add_controller(&mut self, controller: impl Controller + 'static) -> &mut Self {
        self.controllers.push(Arc::new(controller));
        self
    }

    /// # Errors
    /// [`DispatchError::MethodNotAllowed`] when no controller accepts the pair.
    pub fn get_controller(
        &self,
        path: &JsonPath,
        method: Method,
    ) -> Result<&dyn Controller, DispatchError> {
        self.controllers
            .iter()
            .find(|controller| controller.is_acceptable(path, method))
            .map(|controller| &**controller)
            .ok_or_else(|| DispatchError::MethodNotAllowed {
                message: format!("{method} is not supported on {path}").into(),
                context: None,
            })
    }

    /// The resource registry paths are resolved against.
    #[must_use]
    pub const fn resource_registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }
}

/// Wires the built-in controllers over one registry, parser and mapper.
#[derive(Debug, Clone)]
pub struct ControllerRegistryBuilder {
    context: ControllerContext,
}

impl ControllerRegistryBuilder {
    #[must_use]
    pub const fn new(
        registry: ResourceRegistry,
        parser: TypeParser,
        mapper: Arc<DataMapper>,
    ) -> Self {
        Self { context: ControllerContext::new(registry, parser, mapper) }
    }

    #[must_use]
    pub fn build(&self) -> ControllerRegistry {
        let context = &self.context;
        let mut controllers = ControllerRegistry::new(context.registry().clone());
        controllers
            .add_controller(CollectionGet::new(context.clone()))
            .add_controller(ResourceGet::new(context.clone()))
            .add_controller(ResourcePost::new(context.clone()))
            .add_controller(ResourcePatch::new(context.clone()))
            .add_controller(ResourceDelete::new(context.clone()))
            .add_controller(FieldResourceGet::new(context.clone()))
            .add_controller(RelationshipsGet::new(context.clone()));

        debug!(controllers = controllers.len(), "Controller registry built");
        controllers
    }
}
