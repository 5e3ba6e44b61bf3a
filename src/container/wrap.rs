//! Tags that tell the container how to evaluate a registered callable

use super::{
    Container,
    entry::Value,
    resolver::{Resolver, ResolverFn, make_resolver_fn}
};
use crate::error::Error;
use std::{
    any::Any,
    fmt::{Debug, Formatter},
    sync::Arc
};

/// A callable resolved on the first lookup only.
///
/// The produced value is cached and returned on every later lookup,
/// after that the key can not be overwritten.
pub struct Lazy(pub(crate) ResolverFn);

/// A callable resolved on each lookup, producing a fresh value every time.
pub struct Factory(pub(crate) ResolverFn);

/// A callable stored as is. The container returns it uncalled,
/// so the caller can invoke it with arbitrary arguments.
pub struct Raw(Value);

/// Marks any `T` as a plain value.
///
/// Primitives, strings, vectors and [`Arc`] are plain values already,
/// this wrapper covers the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Plain<T>(pub T);

impl Lazy {
    /// Creates a new lazy value
    #[inline]
    pub fn new<F, Args>(resolver: F) -> Self
    where
        F: Resolver<Args>
    {
        Self(make_resolver_fn(resolver))
    }

    /// Wraps a callable into a lazy value, same as [`Lazy::new`]
    #[inline]
    pub fn wrap<F, Args>(resolver: F) -> Self
    where
        F: Resolver<Args>
    {
        Self::new(resolver)
    }

    /// Returns the wrapped callable
    #[inline]
    pub fn get_value(&self) -> &(dyn Fn(&Container) -> Result<Value, Error> + Send + Sync) {
        &*self.0
    }
}

impl Factory {
    /// Creates a new factory value
    #[inline]
    pub fn new<F, Args>(factory: F) -> Self
    where
        F: Resolver<Args>
    {
        Self(make_resolver_fn(factory))
    }

    /// Wraps a callable into a factory value, same as [`Factory::new`]
    #[inline]
    pub fn wrap<F, Args>(factory: F) -> Self
    where
        F: Resolver<Args>
    {
        Self::new(factory)
    }

    /// Returns the wrapped callable
    #[inline]
    pub fn get_value(&self) -> &(dyn Fn(&Container) -> Result<Value, Error> + Send + Sync) {
        &*self.0
    }
}

impl Raw {
    /// Creates a new raw value
    #[inline]
    pub fn new<F: Any + Send + Sync>(callable: F) -> Self {
        Self(Arc::new(callable))
    }

    /// Wraps a callable into a raw value, same as [`Raw::new`]
    #[inline]
    pub fn wrap<F: Any + Send + Sync>(callable: F) -> Self {
        Self::new(callable)
    }

    /// Returns the wrapped callable as a type-erased value
    #[inline]
    pub fn get_value(&self) -> &Value {
        &self.0
    }

    /// Returns a reference to the wrapped callable if it is of type `F`
    #[inline]
    pub fn downcast_ref<F: Any>(&self) -> Option<&F> {
        (*self.0).downcast_ref::<F>()
    }

    /// Consumes the wrapper, returning the type-erased callable
    #[inline]
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl Debug for Lazy {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Lazy(..)")
    }
}

impl Debug for Factory {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Factory(..)")
    }
}

impl Debug for Raw {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Raw(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Max = fn(i64, i64) -> i64;

    fn max(a: i64, b: i64) -> i64 {
        a.max(b)
    }

    #[test]
    fn it_creates_raw_value() {
        let raw = Raw::new(max as Max);

        let f = raw.downcast_ref::<Max>().unwrap();

        assert_eq!(f(1, 2), 2);
    }

    #[test]
    fn it_wraps_raw_value() {
        let raw = Raw::wrap(max as Max);

        assert!(raw.get_value().is::<Max>());
        assert!(raw.downcast_ref::<i64>().is_none());
    }

    #[test]
    fn it_returns_raw_inner_value() {
        let value = Raw::new(max as Max).into_inner();

        let f = value.downcast::<Max>().unwrap();

        assert_eq!(f(10, 2), 10);
    }

    #[test]
    fn it_creates_factory_value() {
        let container = Container::new();
        let factory = Factory::new(|| 5_u32);

        let value = (factory.get_value())(&container).unwrap();

        assert_eq!(value.downcast_ref::<u32>(), Some(&5));
    }

    #[test]
    fn it_wraps_factory_value() {
        let container = Container::new();
        let factory = Factory::wrap(|_: &Container| -> Result<u32, Error> { Err(Error::other("nope")) });

        let err = (factory.get_value())(&container).unwrap_err();

        assert_eq!(err, Error::other("nope"));
    }

    #[test]
    fn it_creates_lazy_value() {
        let container = Container::new();
        let lazy = Lazy::wrap(|| String::from("lazy"));

        let value = (lazy.get_value())(&container).unwrap();

        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("lazy"));
    }
}
