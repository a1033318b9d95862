use crate::mapper::{DynExceptionMapper, ExceptionMapper, MapperAdapter};
use japi_kernel::location::SearchLocations;
use std::error::Error as StdError;
use std::sync::Arc;

/// A mapper declared at a dotted location.
#[derive(Debug, Clone)]
pub struct MapperEntry {
    location: String,
    mapper: Arc<dyn DynExceptionMapper>,
}

impl MapperEntry {
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub const fn mapper(&self) -> &Arc<dyn DynExceptionMapper> {
        &self.mapper
    }
}

/// Explicit list of exception mappers, selected by location like
/// resource catalogs.
#[derive(Debug, Clone, Default)]
pub struct MapperCatalog {
    entries: Vec<MapperEntry>,
}

impl MapperCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn register<E, M>(mut self, location: impl Into<String>, mapper: M) -> Self
    where
        E: StdError + 'static,
        M: ExceptionMapper<E>,
    {
        self.entries.push(MapperEntry {
            location: location.into(),
            mapper: Arc::new(MapperAdapter::<E, M>::new(mapper)),
        });
        self
    }

    /// Mappers at or beneath the comma separated `search_location`s, in
    /// registration order.
    pub fn scan<'a>(&'a self, search_location: &str) -> impl Iterator<Item = &'a MapperEntry> {
        let search = SearchLocations::parse(search_location);
        self.entries.iter().filter(move |entry| search.contains(&entry.location))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
