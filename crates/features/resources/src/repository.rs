use crate::resource::Resource;
use japi_domain::request::QueryParams;
use serde_json::Value;
use std::any::type_name;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::sync::Arc;

/// Failures reported by repositories.
#[japi_derive::japi_error]
pub enum RepositoryError {
    #[error("Resource not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Resource conflict{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The payload or id does not fit the resource type.
    #[error("Invalid resource{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Resource serialization failed{}: {source}", format_context(.context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Application specific failure; exception mappers can match on the inner error.
    #[error("Repository failure{}: {source}", format_context(.context))]
    Custom { source: Box<dyn StdError + Send + Sync>, context: Option<Cow<'static, str>> },

    #[error("Internal repository error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RepositoryError {
    /// Wraps an application error so that it stays reachable through `source()`.
    pub fn custom(error: impl StdError + Send + Sync + 'static) -> Self {
        Self::Custom { source: Box::new(error), context: None }
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }
}

/// Storage for one resource type.
///
/// Methods are synchronous; implementations guard their own state.
pub trait ResourceRepository<T: Resource>: Send + Sync + 'static {
    fn find_one(&self, id: &T::Id, query: &QueryParams) -> Result<Option<T>, RepositoryError>;

    fn find_all(&self, query: &QueryParams) -> Result<Vec<T>, RepositoryError>;

    /// Missing ids are skipped.
    fn find_all_with_ids(
        &self,
        ids: &[T::Id],
        query: &QueryParams,
    ) -> Result<Vec<T>, RepositoryError> {
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(resource) = self.find_one(id, query)? {
                found.push(resource);
            }
        }
        Ok(found)
    }

    /// Creates or replaces a resource and returns the stored state.
    fn save(&self, resource: T) -> Result<T, RepositoryError>;

    fn delete(&self, id: &T::Id) -> Result<(), RepositoryError>;
}

/// Object-safe repository view over JSON values, as held by the registry.
pub trait DynRepository: Debug + Send + Sync {
    fn find_one(&self, id: &Value, query: &QueryParams) -> Result<Option<Value>, RepositoryError>;

    fn find_all(&self, query: &QueryParams) -> Result<Vec<Value>, RepositoryError>;

    fn find_all_with_ids(
        &self,
        ids: &[Value],
        query: &QueryParams,
    ) -> Result<Vec<Value>, RepositoryError>;

    fn save(&self, resource: Value) -> Result<Value, RepositoryError>;

    fn delete(&self, id: &Value) -> Result<(), RepositoryError>;
}

/// Bridges a typed [`ResourceRepository`] to [`DynRepository`].
pub struct RepositoryAdapter<T, R> {
    repository: Arc<R>,
    _resource: PhantomData<fn() -> T>,
}

impl<T, R> RepositoryAdapter<T, R>
where
    T: Resource,
    R: ResourceRepository<T>,
{
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository, _resource: PhantomData }
    }

    fn id(id: &Value) -> Result<T::Id, RepositoryError> {
        serde_json::from_value(id.clone()).map_err(|e| RepositoryError::Invalid {
            message: format!("id {id} does not fit {}: {e}", T::TYPE).into(),
            context: None,
        })
    }

    fn to_value(resource: &T) -> Result<Value, RepositoryError> {
        serde_json::to_value(resource).context(format!("encoding {}", T::TYPE))
    }
}

impl<T, R> Debug for RepositoryAdapter<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositoryAdapter")
            .field("resource", &type_name::<T>())
            .field("repository", &type_name::<R>())
            .finish()
    }
}

impl<T, R> DynRepository for RepositoryAdapter<T, R>
where
    T: Resource,
    R: ResourceRepository<T>,
{
    fn find_one(&self, id: &Value, query: &QueryParams) -> Result<Option<Value>, RepositoryError> {
        let id = Self::id(id)?;
        self.repository.find_one(&id, query)?.as_ref().map(Self::to_value).transpose()
    }

    fn find_all(&self, query: &QueryParams) -> Result<Vec<Value>, RepositoryError> {
        self.repository.find_all(query)?.iter().map(Self::to_value).collect()
    }

    fn find_all_with_ids(
        &self,
        ids: &[Value],
        query: &QueryParams,
    ) -> Result<Vec<Value>, RepositoryError> {
        let ids = ids.iter().map(Self::id).collect::<Result<Vec<_>, _>>()?;
        self.repository.find_all_with_ids(&ids, query)?.iter().map(Self::to_value).collect()
    }

    fn save(&self, resource: Value) -> Result<Value, RepositoryError> {
        let resource: T =
            serde_json::from_value(resource).map_err(|e| RepositoryError::Invalid {
                message: e.to_string().into(),
                context: Some(T::TYPE.into()),
            })?;
        Self::to_value(&self.repository.save(resource)?)
    }

    fn delete(&self, id: &Value) -> Result<(), RepositoryError> {
        self.repository.delete(&Self::id(id)?)
    }
}
