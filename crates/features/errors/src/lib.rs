//! Exception mapping: turning application errors into JSON:API error responses.
//!
//! Mappers are declared per error type and listed in a [`MapperCatalog`].
//! [`ExceptionMapperRegistryBuilder`] selects the mappers under a search
//! location. At dispatch time [`ExceptionMapperRegistry::map_error`] walks the
//! error's `source()` chain and applies the mapper for the outermost error it
//! recognises.

mod catalog;
mod error;
mod mapper;
mod registry;

pub use catalog::{MapperCatalog, MapperEntry};
pub use error::{ExceptionMapperError, ExceptionMapperErrorExt};
pub use mapper::{DynExceptionMapper, ExceptionMapper, MapperAdapter};
pub use registry::{ExceptionMapperRegistry, ExceptionMapperRegistryBuilder};
