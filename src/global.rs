//! Process-wide registry for tagging at startup.
//!
//! Wraps a lazily created [`Registry`] behind a `RwLock`. Lookups return
//! owned metadata so no lock guard escapes. A poisoned lock is recovered
//! rather than propagated; the registry holds no invariants a panicking
//! writer could break.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::config::RegistryConfig;
use crate::meta::{Recognized, RecognizerMeta};
use crate::registry::{RegisteredRecognizer, Registry};

static REGISTRY: Lazy<RwLock<Registry>> = Lazy::new(|| RwLock::new(Registry::new()));

fn read() -> RwLockReadGuard<'static, Registry> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Registry> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

/// Applies registry settings to the global registry.
pub fn configure(config: &RegistryConfig) {
    write().set_retag_policy(config.retag);
}

/// See [`Registry::tag`].
pub fn tag<F: 'static>(name: Option<&str>, target: F) -> F {
    write().tag(name, target)
}

pub fn tag_type<T: ?Sized + 'static>(name: Option<&str>) -> RecognizerMeta {
    write().tag_type::<T>(name).clone()
}

pub fn register<T: Recognized + ?Sized + 'static>() -> RecognizerMeta {
    write().register::<T>().clone()
}

pub fn meta<F: 'static>(target: &F) -> Option<RecognizerMeta> {
    read().meta(target).cloned()
}

pub fn meta_of<T: ?Sized + 'static>() -> Option<RecognizerMeta> {
    read().meta_of::<T>().cloned()
}

pub fn snapshot() -> Vec<RegisteredRecognizer> {
    read().snapshot()
}

pub fn clear() {
    write().clear();
}

/// Runs `f` with shared access to the global registry.
///
/// The lock is held while `f` runs; calling `global::*` functions from inside
/// `f` may deadlock.
pub fn with<R>(f: impl FnOnce(&Registry) -> R) -> R {
    f(&read())
}

/// Runs `f` with exclusive access, e.g. `global::with_mut(detect_hello::register)`.
///
/// The lock is held while `f` runs and is not reentrant: calling any other
/// `global::*` function from inside `f` deadlocks. Use the `&mut Registry`
/// argument instead.
pub fn with_mut<R>(f: impl FnOnce(&mut Registry) -> R) -> R {
    f(&mut write())
}
