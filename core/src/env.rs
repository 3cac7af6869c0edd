//! Type-keyed context shared down a widget tree.
//!
//! An [`Environment`] replaces implicit ambient context: the application
//! installs its [`FlexTheme`](crate::theme::FlexTheme) and
//! [`FlexConfig`](crate::config::FlexConfig) once, and every widget mounted with
//! that environment reads them back by type. Cloning is cheap; inserting into a
//! clone never affects the original.

use alloc::rc::Rc;
use core::any::{Any, TypeId};
use std::collections::BTreeMap;

/// A clone-on-write map from type to value.
#[derive(Clone, Default)]
pub struct Environment {
    map: Rc<BTreeMap<TypeId, Rc<dyn Any>>>,
}

impl_debug!(Environment);

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, replacing any previous value of the same type.
    pub fn insert<T: 'static>(&mut self, value: T) {
        Rc::make_mut(&mut self.map).insert(TypeId::of::<T>(), Rc::new(value));
    }

    /// Builder form of [`Environment::insert`].
    #[must_use]
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Returns the stored value of type `T`.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Whether a value of type `T` is stored.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    /// Removes the value of type `T`.
    pub fn remove<T: 'static>(&mut self) {
        if self.contains::<T>() {
            Rc::make_mut(&mut self.map).remove(&TypeId::of::<T>());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;

    #[derive(Debug, PartialEq)]
    struct Marker(u32);

    #[test]
    fn stores_values_by_type() {
        let env = Environment::new().with(Marker(1)).with("label");
        assert_eq!(env.get::<Marker>(), Some(&Marker(1)));
        assert_eq!(env.get::<&str>(), Some(&"label"));
        assert!(env.get::<u8>().is_none());
    }

    #[test]
    fn clones_are_independent() {
        let parent = Environment::new().with(Marker(1));
        let mut child = parent.clone();
        child.insert(Marker(2));
        child.remove::<&str>();

        assert_eq!(parent.get::<Marker>(), Some(&Marker(1)));
        assert_eq!(child.get::<Marker>(), Some(&Marker(2)));

        child.remove::<Marker>();
        assert!(!child.contains::<Marker>());
        assert!(parent.contains::<Marker>());
    }
}
