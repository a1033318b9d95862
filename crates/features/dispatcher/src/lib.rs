//! Request routing.
//!
//! A request path is parsed into a [`JsonPath`] against the resource
//! registry, the [`ControllerRegistry`] picks the controller accepting that
//! path shape and method, and the controller talks to the repository through
//! the data mapper. [`RequestDispatcher::dispatch`] turns every failure into
//! an error document, consulting the exception mapper registry first.

mod controller;
mod dispatcher;
mod error;
mod path;
mod registry;

pub use controller::{
    CollectionGet, Controller, ControllerContext, FieldResourceGet, RelationshipsGet,
    ResourceDelete, ResourceGet, ResourcePatch, ResourcePost,
};
pub use dispatcher::RequestDispatcher;
pub use error::{DispatchError, DispatchErrorExt};
pub use path::JsonPath;
pub use registry::{ControllerRegistry, ControllerRegistryBuilder};
