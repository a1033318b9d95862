use std::borrow::Cow;

#[japi_derive::japi_error]
pub enum ExceptionMapperError {
    #[error("Invalid search location{}: {message}", format_context(.context))]
    InvalidLocation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal exception mapper error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
