use std::borrow::Cow;

#[japi_derive::japi_error]
pub enum MapperError {
    #[error("Malformed JSON{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// No registered module handles the resource type.
    #[error("Unsupported resource type{}: {message}", format_context(.context))]
    UnsupportedType { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid resource data{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal mapper error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl MapperError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Invalid { message: message.into(), context: None }
    }
}
