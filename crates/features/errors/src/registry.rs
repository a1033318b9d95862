use crate::catalog::MapperCatalog;
use crate::error::ExceptionMapperError;
use crate::mapper::DynExceptionMapper;
use japi_domain::request::ErrorResponse;
use japi_kernel::location::SearchLocations;
use std::error::Error as StdError;
use std::iter;
use std::sync::Arc;
use tracing::{debug, warn};

/// Immutable set of exception mappers.
#[derive(Debug, Clone, Default)]
pub struct ExceptionMapperRegistry {
    mappers: Arc<[Arc<dyn DynExceptionMapper>]>,
}

impl ExceptionMapperRegistry {
    /// Later mappers take precedence over earlier ones for the same error type.
    #[must_use]
    pub fn new(mappers: Vec<Arc<dyn DynExceptionMapper>>) -> Self {
        Self { mappers: mappers.into() }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The mapper for the outermost error in `error`'s source chain that has one.
    #[must_use]
    pub fn find_mapper(&self, error: &(dyn StdError + 'static)) -> Option<&dyn DynExceptionMapper> {
        self.resolve(error).map(|(mapper, _)| mapper)
    }

    /// Applies [`Self::find_mapper`]'s mapper to the error it matched.
    #[must_use]
    pub fn map_error(&self, error: &(dyn StdError + 'static)) -> Option<ErrorResponse> {
        let (mapper, matched) = self.resolve(error)?;
        mapper.try_map(matched)
    }

    fn resolve<'s, 'e>(
        &'s self,
        error: &'e (dyn StdError + 'static),
    ) -> Option<(&'s dyn DynExceptionMapper, &'e (dyn StdError + 'static))> {
        iter::successors(Some(error), |e| (*e).source()).find_map(|link| {
            self.mappers
                .iter()
                .rev()
                .find(|mapper| mapper.accepts(link))
                .map(|mapper| (mapper.as_ref(), link))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    /// Whether both handles share the same mapper list.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.mappers, &other.mappers)
    }
}

/// Collects catalog mappers under a search location.
#[derive(Debug, Clone, Default)]
pub struct ExceptionMapperRegistryBuilder {
    catalog: MapperCatalog,
}

impl ExceptionMapperRegistryBuilder {
    #[must_use]
    pub const fn new(catalog: MapperCatalog) -> Self {
        Self { catalog }
    }

    /// # Errors
    /// Returns [`ExceptionMapperError::InvalidLocation`] when `search_location`
    /// names no location at all.
    pub fn build(
        &self,
        search_location: &str,
    ) -> Result<ExceptionMapperRegistry, ExceptionMapperError> {
        if SearchLocations::parse(search_location).is_empty() {
            return Err(ExceptionMapperError::InvalidLocation {
                message: format!("'{search_location}' names no location").into(),
                context: None,
            });
        }

        let mappers = self
            .catalog
            .scan(search_location)
            .inspect(|entry| {
                debug!(
                    error = entry.mapper().error_name(),
                    location = entry.location(),
                    "Exception mapper collected"
                );
            })
            .map(|entry| Arc::clone(entry.mapper()))
            .collect::<Vec<_>>();

        if mappers.is_empty() {
            warn!(search_location, "No exception mappers found");
        }

        Ok(ExceptionMapperRegistry::new(mappers))
    }
}
