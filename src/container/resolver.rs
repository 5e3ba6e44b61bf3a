//! Generic callables that produce entry values

use super::{Container, entry::Value};
use crate::error::Error;
use std::sync::Arc;

/// A trait that describes a callable the container can invoke
/// to produce the value of a lazy or factory entry.
///
/// It is implemented for closures and functions of two shapes:
/// - `Fn() -> R` that can not fail
/// - `Fn(&Container) -> Result<R, Error>` that may look up other entries
///   and propagate their errors with `?`
pub trait Resolver<Args>: Send + Sync + 'static {
    /// A type of value that will be produced
    type Output: Send + Sync + 'static;

    /// Calls the underlying function and returns either the produced value or error
    fn call(&self, container: &Container) -> Result<Self::Output, Error>;
}

impl<F, R> Resolver<()> for F
where
    F: Fn() -> R + Send + Sync + 'static,
    R: Send + Sync + 'static
{
    type Output = R;

    #[inline]
    fn call(&self, _: &Container) -> Result<Self::Output, Error> {
        Ok(self())
    }
}

impl<F, R> Resolver<(Container,)> for F
where
    F: Fn(&Container) -> Result<R, Error> + Send + Sync + 'static,
    R: Send + Sync + 'static
{
    type Output = R;

    #[inline]
    fn call(&self, container: &Container) -> Result<Self::Output, Error> {
        self(container)
    }
}

/// Type-erased resolver stored by the container
pub(crate) type ResolverFn = Box<
    dyn Fn(&Container) -> Result<Value, Error>
    + Send
    + Sync
>;

#[inline]
pub(crate) fn make_resolver_fn<F, Args>(resolver: F) -> ResolverFn
where
    F: Resolver<Args>
{
    Box::new(move |c: &Container| -> Result<Value, Error> {
        resolver.call(c).map(|v| Arc::new(v) as Value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Point(i32, i32);

    fn call_erased<F, Args>(f: F, c: &Container) -> Result<Value, Error>
    where
        F: Resolver<Args>
    {
        make_resolver_fn(f)(c)
    }

    #[test]
    fn it_calls_resolver_without_args() {
        let container = Container::new();

        let value = call_erased(|| Point(1, 2), &container).unwrap();

        assert_eq!(value.downcast_ref::<Point>(), Some(&Point(1, 2)));
    }

    #[test]
    fn it_calls_resolver_with_container() {
        let mut container = Container::new();
        container.set("x", 3_i32).unwrap();

        let value = call_erased(
            |c: &Container| -> Result<Point, Error> { Ok(Point(c.get("x")?, 4)) },
            &container
        ).unwrap();

        assert_eq!(value.downcast_ref::<Point>(), Some(&Point(3, 4)));
    }

    #[test]
    fn it_propagates_resolver_error() {
        let container = Container::new();

        let err = call_erased(
            |c: &Container| -> Result<i32, Error> { c.get::<i32>("missing") },
            &container
        ).unwrap_err();

        assert_eq!(err, Error::NotFound("missing".into()));
    }
}
