use japi_domain::constants::status;
use japi_domain::request::ErrorResponse;
use japi_kernel::parser::ParserError;
use japi_mapper::MapperError;
use japi_resources::RepositoryError;
use std::borrow::Cow;

#[japi_derive::japi_error]
pub enum DispatchError {
    #[error("Bad request{}: {message}", format_context(.context))]
    BadRequest { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Resource not found{}: {message}", format_context(.context))]
    ResourceNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Method not allowed{}: {message}", format_context(.context))]
    MethodNotAllowed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Conflict{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid id{}: {source}", format_context(.context))]
    Parser { source: ParserError, context: Option<Cow<'static, str>> },

    #[error("Repository failed{}: {source}", format_context(.context))]
    Repository { source: RepositoryError, context: Option<Cow<'static, str>> },

    #[error("Mapping failed{}: {source}", format_context(.context))]
    Mapper { source: MapperError, context: Option<Cow<'static, str>> },

    #[error("Internal dispatcher error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl DispatchError {
    pub(crate) fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest { message: message.into(), context: None }
    }

    pub(crate) fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::ResourceNotFound { message: message.into(), context: None }
    }

    pub(crate) fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Conflict { message: message.into(), context: None }
    }

    /// HTTP status reported when no exception mapper handles this error.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::BadRequest { .. }
            | Self::Parser { .. }
            | Self::Repository { source: RepositoryError::Invalid { .. }, .. }
            | Self::Mapper {
                source: MapperError::Invalid { .. } | MapperError::Json { .. }, ..
            } => status::BAD_REQUEST,
            Self::ResourceNotFound { .. }
            | Self::Repository { source: RepositoryError::NotFound { .. }, .. } => {
                status::NOT_FOUND
            }
            Self::MethodNotAllowed { .. } => status::METHOD_NOT_ALLOWED,
            Self::Conflict { .. }
            | Self::Repository { source: RepositoryError::Conflict { .. }, .. } => status::CONFLICT,
            _ => status::INTERNAL_SERVER_ERROR,
        }
    }

    const fn title(status: u16) -> &'static str {
        match status {
            status::BAD_REQUEST => "Bad Request",
            status::NOT_FOUND => "Not Found",
            status::METHOD_NOT_ALLOWED => "Method Not Allowed",
            status::CONFLICT => "Conflict",
            _ => "Internal Server Error",
        }
    }

    /// The dispatcher's own rendering of this error.
    #[must_use]
    pub fn to_error_response(&self) -> ErrorResponse {
        let status = self.status();
        let detail = if status == status::INTERNAL_SERVER_ERROR {
            "The request could not be completed".to_owned()
        } else {
            self.to_string()
        };
        ErrorResponse::single(status, Self::title(status), detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table() {
        assert_eq!(DispatchError::bad_request("x").status(), 400);
        assert_eq!(DispatchError::not_found("x").status(), 404);
        assert_eq!(DispatchError::conflict("x").status(), 409);
        assert_eq!(
            DispatchError::MethodNotAllowed { message: "x".into(), context: None }.status(),
            405
        );
        assert_eq!(DispatchError::from("boom").status(), 500);
    }

    #[test]
    fn repository_errors_keep_their_meaning() {
        let err = DispatchError::from(RepositoryError::not_found("task 1"));
        assert_eq!(err.status(), 404);

        let err = DispatchError::from(RepositoryError::custom(std::fmt::Error));
        assert_eq!(err.status(), 500);
    }

    #[test]
    fn server_errors_hide_details() {
        let response = DispatchError::from("database password leaked").to_error_response();
        assert_eq!(response.status, 500);
        assert_eq!(response.errors[0].status.as_deref(), Some("500"));
        assert!(!response.errors[0].detail.as_deref().unwrap_or_default().contains("password"));
    }
}
