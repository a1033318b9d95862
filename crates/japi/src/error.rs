use japi_errors::ExceptionMapperError;
use japi_mapper::MapperError;
use japi_resources::RegistryError;
use std::borrow::Cow;

#[japi_derive::japi_error]
pub enum InvokerError {
    /// The builder lacks what it needs to construct a missing part.
    #[error("Configuration error{}: {message}", format_context(.context))]
    Configuration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Resource registry failed{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },

    #[error("Exception mapper registry failed{}: {source}", format_context(.context))]
    ExceptionMappers { source: ExceptionMapperError, context: Option<Cow<'static, str>> },

    #[error("Document mapping failed{}: {source}", format_context(.context))]
    Mapper { source: MapperError, context: Option<Cow<'static, str>> },

    #[error("Response write failed{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal invoker error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl InvokerError {
    pub(crate) const fn configuration(message: &'static str) -> Self {
        Self::Configuration { message: Cow::Borrowed(message), context: None }
    }

    /// Whether this is a caller configuration mistake rather than a collaborator failure.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
