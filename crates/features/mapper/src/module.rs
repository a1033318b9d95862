use crate::error::MapperError;
use japi_domain::document::ResourceObject;
use serde_json::Value;
use std::any::Any;
use std::fmt::Debug;

/// An extension of the [`DataMapper`](crate::DataMapper).
///
/// Both conversions return `None` for resource types the module does not
/// handle, letting the mapper ask the next module.
pub trait DataBindingModule: Debug + Send + Sync + 'static {
    fn name(&self) -> &str;

    /// Turns the flat serialized form of a resource into a resource object.
    fn encode(&self, resource_type: &str, value: &Value)
    -> Option<Result<ResourceObject, MapperError>>;

    /// Flattens a resource object back into the form its repository expects.
    fn decode(&self, object: &ResourceObject) -> Option<Result<Value, MapperError>>;

    fn as_any(&self) -> &dyn Any;
}
