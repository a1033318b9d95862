//! Conversion between repository values and JSON:API documents.
//!
//! [`DataMapper`] owns an ordered list of [`DataBindingModule`]s and the
//! document codec. [`JsonApiModule`] is the module the invoker registers by
//! default; it knows every resource in a [`ResourceRegistry`](japi_resources::ResourceRegistry).

mod error;
mod jsonapi;
mod mapper;
mod module;

pub use error::{MapperError, MapperErrorExt};
pub use jsonapi::{JsonApiModule, JsonApiModuleBuilder};
pub use mapper::DataMapper;
pub use module::DataBindingModule;
