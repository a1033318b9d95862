//! # Domain Models
//!
//! Pure data shared by every `japi` crate: the JSON:API document model,
//! resource metadata, transport-neutral request/response values, and the
//! configuration structs. Keep it lean: no I/O and no logic beyond small
//! constructors and accessors.

pub mod config;
pub mod constants;
pub mod document;
pub mod request;
pub mod resource;
