//! Lookup of caller-provided instances by type.
//!
//! The resource registry builder uses a [`ServiceLocator`] to obtain the
//! repository bound to each collected resource.

use fxhash::FxHashMap;
use std::any::{Any, TypeId, type_name};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::trace;

/// Caller-supplied capability that yields instances by [`TypeId`].
pub trait ServiceLocator: Debug + Send + Sync {
    fn get_instance(&self, type_id: TypeId) -> Option<Arc<dyn Any + Send + Sync>>;
}

/// Typed access on top of [`ServiceLocator::get_instance`].
pub trait ServiceLocatorExt {
    fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>>;
}

impl<L: ServiceLocator + ?Sized> ServiceLocatorExt for L {
    fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.get_instance(TypeId::of::<T>())?.downcast::<T>().ok()
    }
}

/// A map-backed locator holding one shared instance per type.
#[derive(Debug, Default, Clone)]
pub struct SimpleServiceLocator {
    instances: FxHashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl SimpleServiceLocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `instance`, replacing any previous instance of the same type.
    pub fn register<T: Any + Send + Sync>(&mut self, instance: T) -> &mut Self {
        self.register_shared(Arc::new(instance))
    }

    /// Registers an instance that is also held elsewhere.
    pub fn register_shared<T: Any + Send + Sync>(&mut self, instance: Arc<T>) -> &mut Self {
        trace!(service = type_name::<T>(), "Service registered");
        self.instances.insert(TypeId::of::<T>(), instance);
        self
    }

    #[must_use]
    pub fn with<T: Any + Send + Sync>(mut self, instance: T) -> Self {
        self.register(instance);
        self
    }

    #[must_use]
    pub fn with_shared<T: Any + Send + Sync>(mut self, instance: Arc<T>) -> Self {
        self.register_shared(instance);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }
}

impl ServiceLocator for SimpleServiceLocator {
    fn get_instance(&self, type_id: TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
        self.instances.get(&type_id).cloned()
    }
}
