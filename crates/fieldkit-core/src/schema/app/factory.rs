use crate::stmt::Value;

use std::{fmt, sync::Arc};

/// A zero-argument callable producing a fresh default value.
///
/// Factories are invoked once per constructed model instance, so mutable
/// defaults (lists, documents, generated identifiers) are never shared
/// between instances.
#[derive(Clone)]
pub struct DefaultFactory(Arc<dyn Fn() -> Value + Send + Sync>);

impl DefaultFactory {
    pub fn new(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Produces a new value.
    pub fn call(&self) -> Value {
        (self.0)()
    }
}

impl fmt::Debug for DefaultFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DefaultFactory({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

/// Two factories are equal when they share the same callable.
impl PartialEq for DefaultFactory {
    fn eq(&self, other: &Self) -> bool {
        Arc::as_ptr(&self.0).cast::<()>() == Arc::as_ptr(&other.0).cast::<()>()
    }
}
