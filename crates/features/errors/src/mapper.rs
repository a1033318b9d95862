use japi_domain::request::ErrorResponse;
use std::any::{TypeId, type_name};
use std::error::Error as StdError;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// Converts one error type into an error response.
pub trait ExceptionMapper<E: StdError + 'static>: Send + Sync + 'static {
    fn to_error_response(&self, error: &E) -> ErrorResponse;
}

/// Type-erased mapper, as stored in the registry.
pub trait DynExceptionMapper: Debug + Send + Sync {
    /// [`TypeId`] of the error type this mapper accepts.
    fn error_type(&self) -> TypeId;

    fn error_name(&self) -> &'static str;

    fn accepts(&self, error: &(dyn StdError + 'static)) -> bool;

    /// `None` when `error` is not of the accepted type.
    fn try_map(&self, error: &(dyn StdError + 'static)) -> Option<ErrorResponse>;
}

/// Lifts an [`ExceptionMapper<E>`] into a [`DynExceptionMapper`] by downcasting.
pub struct MapperAdapter<E, M> {
    mapper: M,
    _error: PhantomData<fn(&E)>,
}

impl<E, M> MapperAdapter<E, M>
where
    E: StdError + 'static,
    M: ExceptionMapper<E>,
{
    pub const fn new(mapper: M) -> Self {
        Self { mapper, _error: PhantomData }
    }
}

impl<E, M> Debug for MapperAdapter<E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperAdapter")
            .field("error", &type_name::<E>())
            .field("mapper", &type_name::<M>())
            .finish()
    }
}

impl<E, M> DynExceptionMapper for MapperAdapter<E, M>
where
    E: StdError + 'static,
    M: ExceptionMapper<E>,
{
    fn error_type(&self) -> TypeId {
        TypeId::of::<E>()
    }

    fn error_name(&self) -> &'static str {
        type_name::<E>()
    }

    fn accepts(&self, error: &(dyn StdError + 'static)) -> bool {
        error.is::<E>()
    }

    fn try_map(&self, error: &(dyn StdError + 'static)) -> Option<ErrorResponse> {
        error.downcast_ref::<E>().map(|error| self.mapper.to_error_response(error))
    }
}
