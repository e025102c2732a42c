//! Type-erased container for pre-initialized feature state.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Feature state that can be registered into the API state and shared across threads.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
}

/// A feature slice ready to be registered, keyed by its concrete type.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub name: &'static str,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), name: std::any::type_name::<T>(), state: Box::new(state) }
    }

    /// Downcasts the stored state back to its concrete type.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }
}
