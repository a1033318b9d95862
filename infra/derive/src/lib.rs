#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! japi-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a fully wired error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already present.
/// * An `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>`
///   and to `Result<T, Source>` for every variant that wraps a source error.
/// * `From<Source>` for those variants, so `?` works on upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants use named fields. Variants with a `source` field (or a field marked
/// `#[source]`/`#[from]`) must also carry `context: Option<Cow<'static, str>>`.
/// Declare at most one `japi_error` enum per module.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[japi_derive::japi_error]
/// pub enum RegistryError {
///     #[error("Repository missing{}: {message}", format_context(.context))]
///     RepositoryNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal registry error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn japi_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
