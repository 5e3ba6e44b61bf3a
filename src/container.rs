//! Keyed dependency-injection container

use crate::error::Error;
use indexmap::IndexMap;
use std::{
    any::Any,
    cell::OnceCell,
    fmt::{Debug, Formatter},
    sync::Arc
};

pub use self::{
    entry::{Entry, Value},
    resolver::Resolver,
    wrap::{Factory, Lazy, Plain, Raw}
};

use self::resolver::ResolverFn;

pub mod entry;
pub mod key;
pub mod resolver;
pub mod wrap;

/// A registered key together with its evaluation policy
enum Slot {
    Plain(Value),
    Lazy(OnceCell<Value>, ResolverFn),
    Factory(ResolverFn),
    Raw(Value),
    /// Target key and the value written under the alias name, which lookups never reach
    Alias(String, Option<Box<Slot>>),
}

impl From<Entry> for Slot {
    #[inline]
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Plain(value) => Slot::Plain(value),
            Entry::Lazy(Lazy(resolver)) => Slot::Lazy(OnceCell::new(), resolver),
            Entry::Factory(Factory(resolver)) => Slot::Factory(resolver),
            Entry::Raw(raw) => Slot::Raw(raw.into_inner()),
        }
    }
}

impl Debug for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Plain(_) => f.write_str("Plain"),
            Slot::Lazy(cell, _) if cell.get().is_some() => f.write_str("Lazy(resolved)"),
            Slot::Lazy(..) => f.write_str("Lazy"),
            Slot::Factory(_) => f.write_str("Factory"),
            Slot::Raw(_) => f.write_str("Raw"),
            Slot::Alias(target, None) => write!(f, "Alias({target:?})"),
            Slot::Alias(target, Some(shadowed)) => write!(f, "Alias({target:?}, shadows {shadowed:?})"),
        }
    }
}

impl Slot {
    #[inline]
    fn is_resolved(&self) -> bool {
        matches!(self, Slot::Lazy(cell, _) if cell.get().is_some())
    }
}

/// Represents a DI container that stores values, lazily resolved callables,
/// factories and raw callables under string keys.
///
/// Keys, including aliases, keep the order in which they were first registered.
/// Entries can be overwritten until a lazy one is resolved, but never removed.
///
/// The container is `Send` but not `Sync`. To share it between threads,
/// put it behind a lock such as [`std::sync::Mutex`].
///
/// # Example
/// ```
/// use keybox::{Container, Error};
///
/// # fn main() -> Result<(), Error> {
/// let mut container = Container::new();
///
/// container.set("alpha", "beta")?;
/// container.lazy("gamma", |c: &Container| -> Result<String, Error> {
///     Ok(format!("{}-2", c.get::<&str>("alpha")?))
/// })?;
///
/// assert_eq!(container.get::<&str>("alpha")?, "beta");
/// assert_eq!(container.get::<String>("gamma")?, "beta-2");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct Container {
    entries: IndexMap<String, Slot>,
}

impl Debug for Container {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter())
            .finish()
    }
}

impl Container {
    /// Creates a new empty container
    #[inline]
    pub fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Creates a new container and registers the given entries in order.
    ///
    /// Fails on the first entry that [`Container::set`] rejects.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Entry>
    {
        let mut container = Self::new();
        container.merge(entries)?;
        Ok(container)
    }

    /// Registers a value under `key`.
    ///
    /// How the value is evaluated on lookup depends on its [`Entry`] variant.
    /// Registering an existing key replaces its value and keeps its position in [`Container::keys`].
    /// A value written under an alias name is stored, but lookups keep following the alias.
    ///
    /// # Errors
    /// - [`Error::InvalidKey`] if `key` is empty or numeric-looking
    /// - [`Error::AlreadyResolved`] if `key` holds a lazy value that has been resolved
    pub fn set<K, V>(&mut self, key: K, value: V) -> Result<(), Error>
    where
        K: Into<String>,
        V: Into<Entry>
    {
        let key = key.into();
        key::validate_key(&key)?;

        if self.entries.get(&key).is_some_and(Slot::is_resolved) {
            #[cfg(feature = "tracing")]
            tracing::warn!(key = %key, "attempt to overwrite a resolved entry");
            return Err(Error::AlreadyResolved(key));
        }

        let slot = Slot::from(value.into());

        #[cfg(feature = "tracing")]
        tracing::trace!(key = %key, kind = ?slot, "entry registered");

        if let Some(Slot::Alias(_, shadowed)) = self.entries.get_mut(&key) {
            *shadowed = Some(Box::new(slot));
        } else {
            self.entries.insert(key, slot);
        }
        Ok(())
    }

    /// Registers a callable that is resolved on the first lookup, with its result cached.
    ///
    /// A resolver that unconditionally looks up its own key, directly or through an alias,
    /// never terminates.
    #[inline]
    pub fn lazy<K, F, Args>(&mut self, key: K, resolver: F) -> Result<(), Error>
    where
        K: Into<String>,
        F: Resolver<Args>
    {
        self.set(key, Lazy::new(resolver))
    }

    /// Registers a callable that is resolved on every lookup
    #[inline]
    pub fn factory<K, F, Args>(&mut self, key: K, factory: F) -> Result<(), Error>
    where
        K: Into<String>,
        F: Resolver<Args>
    {
        self.set(key, Factory::new(factory))
    }

    /// Registers a callable that is returned uncalled on lookup
    #[inline]
    pub fn raw<K, F>(&mut self, key: K, callable: F) -> Result<(), Error>
    where
        K: Into<String>,
        F: Any + Send + Sync
    {
        self.set(key, Raw::new(callable))
    }

    /// Registers every entry in order, stopping at the first failure.
    ///
    /// Entries registered before the failure stay registered.
    pub fn merge<I, K, V>(&mut self, entries: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Entry>
    {
        entries
            .into_iter()
            .try_for_each(|(key, value)| self.set(key, value))
    }

    /// Registers `alias` as another name for `key`.
    ///
    /// If `key` is an alias itself, the new alias points to its target.
    ///
    /// # Errors
    /// - [`Error::InvalidAlias`] if `alias` is empty or numeric-looking
    /// - [`Error::AliasTargetNotFound`] if `key` is not registered
    /// - [`Error::DuplicateKey`] if `alias` is already a key or alias
    pub fn alias<A>(&mut self, alias: A, key: &str) -> Result<(), Error>
    where
        A: Into<String>
    {
        let alias = alias.into();
        key::validate_alias(&alias)?;

        let target = match self.entries.get(key) {
            None => return Err(Error::AliasTargetNotFound(key.into())),
            Some(Slot::Alias(target, _)) => target.clone(),
            Some(_) => key.to_owned(),
        };

        if self.entries.contains_key(&alias) {
            return Err(Error::DuplicateKey(alias));
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(alias = %alias, target = %target, "alias registered");

        self.entries.insert(alias, Slot::Alias(target, None));
        Ok(())
    }

    /// Resolves an entry and returns a cloned value.
    /// `T` must implement [`Clone`] otherwise use [`Container::get_shared`] method
    /// that returns a shared pointer.
    #[inline]
    pub fn get<T: Send + Sync + Clone + 'static>(&self, key: &str) -> Result<T, Error> {
        self.get_shared::<T>(key)
            .map(|value| value.as_ref().clone())
    }

    /// Resolves an entry and returns a shared pointer
    #[inline]
    pub fn get_shared<T: Send + Sync + 'static>(&self, key: &str) -> Result<Arc<T>, Error> {
        self.get_value(key)?
            .downcast::<T>()
            .map_err(|_| Error::TypeMismatch {
                key: key.into(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Resolves an entry like [`Container::get`], returning `None` if `key` is not registered
    #[inline]
    pub fn try_get<T: Send + Sync + Clone + 'static>(&self, key: &str) -> Result<Option<T>, Error> {
        if self.has(key) {
            self.get(key).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Resolves an entry and returns the type-erased value.
    ///
    /// - a plain value is returned as is
    /// - a lazy callable is called with the container once, its result is cached
    /// - a factory is called with the container every time
    /// - a raw callable is returned uncalled
    ///
    /// An alias is replaced by its target first.
    pub fn get_value(&self, key: &str) -> Result<Value, Error> {
        let key = self.resolve_alias(key);
        match self.entries.get(key) {
            Some(Slot::Plain(value)) => Ok(value.clone()),
            Some(Slot::Raw(callable)) => Ok(callable.clone()),
            Some(Slot::Factory(factory)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(key = %key, "calling factory");
                factory(self)
            },
            Some(Slot::Lazy(cell, resolver)) => self.resolve_lazy(key, cell, resolver),
            Some(Slot::Alias(..)) | None => Err(Error::NotFound(key.into())),
        }
    }

    /// Returns `true` if `key` is registered either as an entry or as an alias
    #[inline]
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns `true` if `key` is an alias
    #[inline]
    pub fn is_alias(&self, key: &str) -> bool {
        matches!(self.entries.get(key), Some(Slot::Alias(..)))
    }

    /// Returns `true` if `key`, or the target of the alias `key`,
    /// holds a lazy value that has already been resolved
    #[inline]
    pub fn is_resolved(&self, key: &str) -> bool {
        self.entries
            .get(self.resolve_alias(key))
            .is_some_and(Slot::is_resolved)
    }

    /// Returns all keys and aliases in the order they were first registered
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries
            .keys()
            .map(String::as_str)
    }

    /// Returns the number of keys and aliases
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries can not be removed from the container, so this always fails
    /// with [`Error::Immutable`] and leaves the container unchanged.
    #[inline]
    pub fn remove(&mut self, _key: &str) -> Result<(), Error> {
        #[cfg(feature = "tracing")]
        tracing::warn!(key = %_key, "attempt to remove an entry");
        Err(Error::Immutable)
    }

    #[inline]
    fn resolve_alias<'a>(&'a self, key: &'a str) -> &'a str {
        match self.entries.get(key) {
            Some(Slot::Alias(target, _)) => target.as_str(),
            _ => key,
        }
    }

    fn resolve_lazy(
        &self,
        _key: &str,
        cell: &OnceCell<Value>,
        resolver: &ResolverFn
    ) -> Result<Value, Error> {
        if let Some(value) = cell.get() {
            return Ok(value.clone());
        }

        let value = resolver(self)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(key = %_key, "lazy entry resolved and cached");

        // a resolver that conditionally looked up its own key may have filled the cell already,
        // the first value wins
        Ok(cell.get_or_init(|| value).clone())
    }
}
