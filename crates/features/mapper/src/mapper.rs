use crate::error::{MapperError, MapperErrorExt};
use crate::module::DataBindingModule;
use japi_domain::document::{Document, ResourceObject};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Serialization engine: document codec plus resource binding modules.
#[derive(Debug, Clone, Default)]
pub struct DataMapper {
    modules: Vec<Arc<dyn DataBindingModule>>,
    pretty: bool,
}

impl DataMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module. Modules registered later are consulted first.
    pub fn register_module(&mut self, module: impl DataBindingModule) -> &mut Self {
        debug!(module = module.name(), "Data binding module registered");
        self.modules.push(Arc::new(module));
        self
    }

    #[must_use]
    pub fn with_module(mut self, module: impl DataBindingModule) -> Self {
        self.register_module(module);
        self
    }

    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub const fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Modules in registration order.
    pub fn modules(&self) -> impl Iterator<Item = &dyn DataBindingModule> {
        self.modules.iter().map(|module| &**module)
    }

    /// The most recently registered module of type `M`.
    #[must_use]
    pub fn find_module<M: DataBindingModule>(&self) -> Option<&M> {
        self.modules.iter().rev().find_map(|module| module.as_any().downcast_ref::<M>())
    }

    pub fn encode_resource(
        &self,
        resource_type: &str,
        value: &Value,
    ) -> Result<ResourceObject, MapperError> {
        self.modules
            .iter()
            .rev()
            .find_map(|module| module.encode(resource_type, value))
            .unwrap_or_else(|| Err(unsupported(resource_type)))
    }

    pub fn decode_resource(&self, object: &ResourceObject) -> Result<Value, MapperError> {
        self.modules
            .iter()
            .rev()
            .find_map(|module| module.decode(object))
            .unwrap_or_else(|| Err(unsupported(&object.resource_type)))
    }

    pub fn read_document(&self, bytes: &[u8]) -> Result<Document, MapperError> {
        serde_json::from_slice(bytes).context("reading document")
    }

    pub fn write_document(&self, document: &Document) -> Result<Vec<u8>, MapperError> {
        if self.pretty {
            serde_json::to_vec_pretty(document).context("writing document")
        } else {
            serde_json::to_vec(document).context("writing document")
        }
    }
}

fn unsupported(resource_type: &str) -> MapperError {
    MapperError::UnsupportedType {
        message: format!("no module handles '{resource_type}'").into(),
        context: None,
    }
}
