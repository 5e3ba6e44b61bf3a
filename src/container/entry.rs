//! Values that can be registered in the container

use super::wrap::{Factory, Lazy, Plain, Raw};
use std::{
    any::Any,
    fmt::{Debug, Formatter},
    sync::Arc
};

/// A type-erased shared value stored in or produced by the container
pub type Value = Arc<
    dyn Any
    + Send
    + Sync
>;

/// An entry passed to [`Container::set`](super::Container::set).
///
/// The variant decides how [`Container::get`](super::Container::get) evaluates the entry:
/// - [`Entry::Plain`] is returned as is
/// - [`Entry::Lazy`] is called once, and its result is cached for the lifetime of the container
/// - [`Entry::Factory`] is called on every lookup
/// - [`Entry::Raw`] holds a callable that is returned uncalled
///
/// Usually there is no need to build it explicitly, since primitives, strings, vectors,
/// [`Arc`] and all the wrappers convert into it.
pub enum Entry {
    /// Plain value
    Plain(Value),
    /// Callable resolved once
    Lazy(Lazy),
    /// Callable resolved on each lookup
    Factory(Factory),
    /// Callable that is never resolved by the container
    Raw(Raw),
}

impl Debug for Entry {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Entry::Plain(_) => f.write_str("Entry::Plain(..)"),
            Entry::Lazy(_) => f.write_str("Entry::Lazy(..)"),
            Entry::Factory(_) => f.write_str("Entry::Factory(..)"),
            Entry::Raw(_) => f.write_str("Entry::Raw(..)"),
        }
    }
}

macro_rules! impl_plain_entry {
    ($($ty:ty),* $(,)?) => {
        $(
        impl From<$ty> for Entry {
            #[inline]
            fn from(value: $ty) -> Self {
                Entry::Plain(Arc::new(value))
            }
        }
        )*
    };
}

impl_plain_entry! {
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    String, &'static str,
}

impl<T: Any + Send + Sync> From<Vec<T>> for Entry {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Entry::Plain(Arc::new(value))
    }
}

impl<T: Any + Send + Sync> From<Option<T>> for Entry {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Entry::Plain(Arc::new(value))
    }
}

/// Keeps the shared pointer, so [`Container::get_shared`](super::Container::get_shared)
/// hands out the same allocation.
impl<T: Any + Send + Sync> From<Arc<T>> for Entry {
    #[inline]
    fn from(value: Arc<T>) -> Self {
        Entry::Plain(value)
    }
}

impl<T: Any + Send + Sync> From<Plain<T>> for Entry {
    #[inline]
    fn from(Plain(value): Plain<T>) -> Self {
        Entry::Plain(Arc::new(value))
    }
}

impl From<Lazy> for Entry {
    #[inline]
    fn from(lazy: Lazy) -> Self {
        Entry::Lazy(lazy)
    }
}

impl From<Factory> for Entry {
    #[inline]
    fn from(factory: Factory) -> Self {
        Entry::Factory(factory)
    }
}

impl From<Raw> for Entry {
    #[inline]
    fn from(raw: Raw) -> Self {
        Entry::Raw(raw)
    }
}
