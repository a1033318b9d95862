/// JSON:API media type, used for both `Accept` and `Content-Type`.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Path segment introducing a relationship linkage endpoint.
pub const RELATIONSHIPS_SEGMENT: &str = "relationships";

/// Separator for multiple ids in a single path segment (`/tasks/1,2,3`).
pub const ID_SEPARATOR: char = ',';

/// Separator for multiple search locations (`app.tasks,app.projects`).
pub const LOCATION_SEPARATOR: char = ',';

/// HTTP status codes used by the dispatcher and invoker.
pub mod status {
    pub const OK: u16 = 200;
    pub const CREATED: u16 = 201;
    pub const NO_CONTENT: u16 = 204;
    pub const BAD_REQUEST: u16 = 400;
    pub const NOT_FOUND: u16 = 404;
    pub const METHOD_NOT_ALLOWED: u16 = 405;
    pub const NOT_ACCEPTABLE: u16 = 406;
    pub const CONFLICT: u16 = 409;
    pub const UNSUPPORTED_MEDIA_TYPE: u16 = 415;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
}
