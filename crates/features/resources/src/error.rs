use std::borrow::Cow;

/// Failures while assembling the resource registry.
#[japi_derive::japi_error]
pub enum RegistryError {
    /// The service locator has no repository for a collected resource.
    #[error("Repository instance not found{}: {message}", format_context(.context))]
    RepositoryNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Duplicate resource type{}: {message}", format_context(.context))]
    DuplicateResource { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid resource information{}: {message}", format_context(.context))]
    InvalidInformation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
