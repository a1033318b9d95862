//! Facade crate for `japi`: assembles a JSON:API invoker from optional parts.
//! Re-exports the feature crates; keep this crate thin beyond assembly and invocation.
//!
//! ## Usage
//! Supply what you already have to [`InvokerBuilder`]; everything else is
//! constructed by its [`AssemblyDefaults`] (by default, explicit catalogs
//! scanned under the search location).
//!
//! ```rust
//! use japi::prelude::*;
//! use japi::kernel::locator::SimpleServiceLocator;
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Note { id: String, text: String }
//!
//! impl Resource for Note {
//!     type Id = String;
//!     const TYPE: &'static str = "notes";
//! }
//!
//! #[derive(Debug)]
//! struct Notes;
//!
//! impl ResourceRepository<Note> for Notes {
//!     fn find_one(&self, id: &String, _: &QueryParams) -> Result<Option<Note>, RepositoryError> {
//!         Ok(Some(Note { id: id.clone(), text: "hello".to_owned() }))
//!     }
//!     fn find_all(&self, _: &QueryParams) -> Result<Vec<Note>, RepositoryError> { Ok(Vec::new()) }
//!     fn save(&self, note: Note) -> Result<Note, RepositoryError> { Ok(note) }
//!     fn delete(&self, _: &String) -> Result<(), RepositoryError> { Ok(()) }
//! }
//!
//! let defaults = CatalogDefaults::new(
//!     ResourceCatalog::new().register::<Note, Notes>("app.notes"),
//!     MapperCatalog::new(),
//! );
//! let invoker = InvokerBuilder::new()
//!     .service_locator(Arc::new(SimpleServiceLocator::new().with(Notes)))
//!     .resource_search_location("app")
//!     .default_domain("http://example.com")
//!     .defaults(defaults)
//!     .build()
//!     .unwrap();
//!
//! let mut ctx = BufferedContext::new("GET", "/notes/a1");
//! invoker.invoke(&mut ctx).unwrap();
//! assert_eq!(ctx.status(), Some(200));
//! assert_eq!(ctx.response_json().unwrap()["data"]["attributes"]["text"], "hello");
//! ```

mod assembler;
mod context;
mod defaults;
mod error;
mod invoker;
mod resolution;

pub use assembler::{InvokerBuilder, assemble};
pub use context::{BufferedContext, InvokerContext};
pub use defaults::{AssemblyDefaults, CatalogDefaults};
pub use error::{InvokerError, InvokerErrorExt};
pub use invoker::Invoker;
pub use resolution::Resolution;

pub use japi_dispatcher as dispatcher;
pub use japi_domain as domain;
pub use japi_errors as errors;
pub use japi_kernel as kernel;
pub use japi_mapper as mapper;
pub use japi_resources as resources;

pub mod prelude {
    pub use crate::{
        AssemblyDefaults, BufferedContext, CatalogDefaults, Invoker, InvokerBuilder,
        InvokerContext, InvokerError,
    };
    pub use japi_errors::{ExceptionMapper, MapperCatalog};
    pub use japi_resources::prelude::*;
}
