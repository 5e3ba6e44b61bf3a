//! # keybox
//!
//! > A small keyed dependency-injection container that wires application components
//! > together without hard-coding their construction order.
//!
//! ## Features
//! * Plain values, lazily resolved callables, factories and raw callables
//! * Lazy entries are resolved once and become immutable afterwards
//! * Aliases sharing the key namespace
//! * Keys enumerated in registration order
//! * Optional [`tracing`](https://docs.rs/tracing) events
//!
//! ## Example
//! ```
//! use keybox::{Container, Error, factory, raw};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! # fn main() -> Result<(), Error> {
//! let mut container = Container::new();
//!
//! container.set("db.url", "postgres://localhost")?;
//! container.lazy("db", |c: &Container| -> Result<String, Error> {
//!     Ok(format!("connection to {}", c.get::<&str>("db.url")?))
//! })?;
//!
//! let requests = AtomicUsize::new(0);
//! container.set("request.id", factory(move || requests.fetch_add(1, Ordering::SeqCst)))?;
//! container.set("max", raw(i32::max as fn(i32, i32) -> i32))?;
//! container.alias("database", "db")?;
//!
//! assert_eq!(container.get::<String>("database")?, "connection to postgres://localhost");
//! assert_eq!(container.get::<usize>("request.id")?, 0);
//! assert_eq!(container.get::<usize>("request.id")?, 1);
//!
//! let max = container.get::<fn(i32, i32) -> i32>("max")?;
//! assert_eq!(max(1, 2), 2);
//! # Ok(())
//! # }
//! ```

use std::any::Any;

pub use crate::{
    container::{
        Container,
        Entry,
        Value,
        Resolver,
        Factory,
        Lazy,
        Plain,
        Raw,
        key::is_numeric,
    },
    error::{Error, ErrorKind},
};

pub mod container;
pub mod error;

/// Wraps a callable so that the container returns it uncalled on lookup
///
/// # Example
/// ```
/// use keybox::{Container, raw};
///
/// let mut container = Container::new();
/// container.set("max", raw(i64::max as fn(i64, i64) -> i64)).unwrap();
///
/// let max = container.get::<fn(i64, i64) -> i64>("max").unwrap();
/// assert_eq!(max(10, 2), 10);
/// ```
#[inline]
pub fn raw<F: Any + Send + Sync>(callable: F) -> Raw {
    Raw::new(callable)
}

/// Wraps a callable so that the container calls it on every lookup
///
/// # Example
/// ```
/// use keybox::{Container, factory};
/// use std::sync::atomic::{AtomicI32, Ordering};
///
/// let counter = AtomicI32::new(1);
/// let mut container = Container::new();
/// container.set("n", factory(move || counter.fetch_add(1, Ordering::SeqCst))).unwrap();
///
/// assert_eq!(container.get::<i32>("n").unwrap(), 1);
/// assert_eq!(container.get::<i32>("n").unwrap(), 2);
/// ```
#[inline]
pub fn factory<F, Args>(factory: F) -> Factory
where
    F: Resolver<Args>
{
    Factory::new(factory)
}

/// Wraps a callable so that the container calls it on the first lookup only and caches the result
///
/// # Example
/// ```
/// use keybox::{Container, lazy};
///
/// let mut container = Container::new();
/// container.set("config", lazy(|| vec!["a", "b"])).unwrap();
///
/// assert_eq!(container.get::<Vec<&str>>("config").unwrap(), ["a", "b"]);
/// assert!(container.set("config", "other").is_err());
/// ```
#[inline]
pub fn lazy<F, Args>(resolver: F) -> Lazy
where
    F: Resolver<Args>
{
    Lazy::new(resolver)
}
