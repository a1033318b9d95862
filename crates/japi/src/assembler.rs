use crate::defaults::{AssemblyDefaults, CatalogDefaults};
use crate::error::InvokerError;
use crate::invoker::Invoker;
use crate::resolution::Resolution;
use japi_dispatcher::RequestDispatcher;
use japi_domain::config::InvokerSettings;
use japi_errors::ExceptionMapperRegistry;
use japi_kernel::location::SearchLocations;
use japi_kernel::locator::ServiceLocator;
use japi_mapper::DataMapper;
use japi_resources::ResourceRegistry;
use std::sync::Arc;
use tracing::{debug, info};

pub(crate) const SEARCH_LOCATION_REQUIRED: &str = "resource search location required";
pub(crate) const DEFAULT_DOMAIN_REQUIRED: &str = "default domain required";
pub(crate) const SERVICE_LOCATOR_REQUIRED: &str = "service locator required";

/// Assembly inputs for an [`Invoker`].
///
/// Every part is optional. Setters consume and return the builder, and
/// [`InvokerBuilder::build`] leaves it untouched, so one configuration can be
/// built repeatedly.
#[derive(Debug, Clone)]
pub struct InvokerBuilder {
    data_mapper: Option<Arc<DataMapper>>,
    resource_registry: Option<ResourceRegistry>,
    request_dispatcher: Option<RequestDispatcher>,
    service_locator: Option<Arc<dyn ServiceLocator>>,
    exception_mapper_registry: Option<ExceptionMapperRegistry>,
    resource_search_location: Option<String>,
    default_domain: Option<String>,
    pretty: bool,
    defaults: Arc<dyn AssemblyDefaults>,
}

impl Default for InvokerBuilder {
    fn default() -> Self {
        Self {
            data_mapper: None,
            resource_registry: None,
            request_dispatcher: None,
            service_locator: None,
            exception_mapper_registry: None,
            resource_search_location: None,
            default_domain: None,
            pretty: false,
            defaults: Arc::new(CatalogDefaults::default()),
        }
    }
}

impl InvokerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn data_mapper(mut self, mapper: impl Into<Arc<DataMapper>>) -> Self {
        self.data_mapper = Some(mapper.into());
        self
    }

    #[must_use]
    pub fn resource_registry(mut self, registry: ResourceRegistry) -> Self {
        self.resource_registry = Some(registry);
        self
    }

    #[must_use]
    pub fn request_dispatcher(mut self, dispatcher: RequestDispatcher) -> Self {
        self.request_dispatcher = Some(dispatcher);
        self
    }

    #[must_use]
    pub fn service_locator(mut self, locator: Arc<dyn ServiceLocator>) -> Self {
        self.service_locator = Some(locator);
        self
    }

    #[must_use]
    pub fn exception_mapper_registry(mut self, registry: ExceptionMapperRegistry) -> Self {
        self.exception_mapper_registry = Some(registry);
        self
    }

    /// Dotted location(s), comma separated, to discover resources and
    /// exception mappers under.
    #[must_use]
    pub fn resource_search_location(mut self, location: impl Into<String>) -> Self {
        self.resource_search_location = Some(location.into());
        self
    }

    #[must_use]
    pub fn default_domain(mut self, domain: impl Into<String>) -> Self {
        self.default_domain = Some(domain.into());
        self
    }

    /// Pretty-print documents written by a mapper this builder constructs.
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Applies the configured settings; absent settings keep earlier values.
    #[must_use]
    pub fn settings(mut self, settings: &InvokerSettings) -> Self {
        if let Some(location) = &settings.resource_search_location {
            self.resource_search_location = Some(location.clone());
        }
        if let Some(domain) = &settings.default_domain {
            self.default_domain = Some(domain.clone());
        }
        if let Some(pretty) = settings.pretty {
            self.pretty = pretty;
        }
        self
    }

    /// Replaces how missing parts are constructed.
    #[must_use]
    pub fn defaults(mut self, defaults: impl AssemblyDefaults + 'static) -> Self {
        self.defaults = Arc::new(defaults);
        self
    }

    /// # Errors
    /// See [`assemble`].
    pub fn build(&self) -> Result<Invoker, InvokerError> {
        assemble(self)
    }
}

/// Where to discover missing parts. Only present when something must be discovered.
#[derive(Debug, Clone, Copy)]
struct Discovery<'a> {
    search_location: &'a str,
    default_domain: &'a str,
}

/// Resolves the mapper, registry and dispatcher, constructing whatever
/// `config` does not supply.
///
/// Resolution order is registry, then mapper, then dispatcher; each default
/// is derived from the parts resolved before it. A supplied dispatcher is
/// used as is and the exception mapper registry is then never resolved.
///
/// # Errors
/// [`InvokerError::Configuration`] when the search location or default domain
/// is missing while a registry, dispatcher or exception mapper registry has to
/// be built, or when the service locator is missing while the registry has to
/// be built. These checks run before anything is constructed. Failures of the
/// default constructors are passed through.
pub fn assemble(config: &InvokerBuilder) -> Result<Invoker, InvokerError> {
    let registry = Resolution::from(config.resource_registry.clone());
    let mapper = Resolution::from(config.data_mapper.clone());
    let dispatcher = Resolution::from(config.request_dispatcher.clone());
    let exceptions = Resolution::from(config.exception_mapper_registry.clone());

    let discovery =
        if registry.needs_default() || dispatcher.needs_default() || exceptions.needs_default() {
            let search_location = search_location(config.resource_search_location.as_deref())?;
            let default_domain =
                required(config.default_domain.as_deref(), DEFAULT_DOMAIN_REQUIRED)?;
            Some(Discovery { search_location, default_domain })
        } else {
            None
        };

    let locator = match (&registry, &config.service_locator) {
        (Resolution::NeedsDefault, None) => {
            return Err(InvokerError::configuration(SERVICE_LOCATOR_REQUIRED));
        }
        (_, locator) => locator.clone(),
    };

    let registry = registry.resolve_with(|| {
        let discovery = discovered(discovery)?;
        let locator =
            locator.ok_or_else(|| InvokerError::configuration(SERVICE_LOCATOR_REQUIRED))?;
        debug!(search_location = discovery.search_location, "Building resource registry");
        config
            .defaults
            .resource_registry(locator, discovery.search_location, discovery.default_domain)
            .map_err(InvokerError::from)
    })?;

    let mapper = mapper.resolve_with(|| {
        debug!("Building data mapper");
        Ok::<_, InvokerError>(Arc::new(
            config.defaults.data_mapper(&registry).pretty(config.pretty),
        ))
    })?;

    let dispatcher = dispatcher.resolve_with(|| {
        let exceptions = exceptions.resolve_with(|| {
            let discovery = discovered(discovery)?;
            debug!(
                search_location = discovery.search_location,
                "Building exception mapper registry"
            );
            config.defaults.exception_mappers(discovery.search_location).map_err(InvokerError::from)
        })?;
        debug!(exception_mappers = exceptions.len(), "Building request dispatcher");
        Ok::<_, InvokerError>(config.defaults.request_dispatcher(
            &registry,
            Arc::clone(&mapper),
            exceptions,
        ))
    })?;

    info!(resources = registry.len(), "Invoker assembled");
    Ok(Invoker::new(mapper, registry, dispatcher))
}

fn required<'a>(value: Option<&'a str>, message: &'static str) -> Result<&'a str, InvokerError> {
    value
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| InvokerError::configuration(message))
}

/// A search location must name at least one location; `","` names none.
fn search_location(value: Option<&str>) -> Result<&str, InvokerError> {
    required(value, SEARCH_LOCATION_REQUIRED).and_then(|location| {
        if SearchLocations::parse(location).is_empty() {
            Err(InvokerError::configuration(SEARCH_LOCATION_REQUIRED))
        } else {
            Ok(location)
        }
    })
}

/// Pre-validation guarantees discovery settings whenever a default is built.
fn discovered(discovery: Option<Discovery<'_>>) -> Result<Discovery<'_>, InvokerError> {
    discovery.ok_or_else(|| InvokerError::from("discovery settings missing after validation"))
}
