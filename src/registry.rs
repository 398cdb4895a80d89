//! Side table mapping tagged functions and types to their metadata.
//!
//! Entries are keyed by `TypeId`. Every function item and closure has its own
//! zero-sized type, so the type of the value passed to [`Registry::tag`] is
//! its identity. A function coerced to a `fn` pointer loses that identity and
//! shares one key with every pointer of the same signature; pass the function
//! item itself.

use std::any::{self, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

use crate::config::{Config, RegistryConfig, RetagPolicy};
use crate::error::RecognizerError;
use crate::meta::{declared_name, Recognized, RecognizerMeta};

/// A registry entry as seen from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredRecognizer {
    /// Full type name of the tagged function or type.
    pub type_name: &'static str,
    #[serde(flatten)]
    pub meta: RecognizerMeta,
}

/// Mapping from tagged object identity to its recognizer metadata.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<TypeId, RegisteredRecognizer>,
    retag: RetagPolicy,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            entries: HashMap::new(),
            retag: config.retag,
        }
    }

    /// Builds a registry from the layered configuration (see [`Config::load`]).
    pub fn load() -> Result<Self, RecognizerError> {
        let config = Config::load()?;
        tracing::debug!("Loaded registry config: {:?}", config.registry);
        Ok(Self::with_config(&config.registry))
    }

    pub fn retag_policy(&self) -> RetagPolicy {
        self.retag
    }

    pub fn set_retag_policy(&mut self, policy: RetagPolicy) {
        self.retag = policy;
    }

    /// Records `{name: given-or-inferred}` for `target` and hands it back
    /// unchanged.
    ///
    /// Without a name (or with an empty one) the target's declared name is
    /// used. Tagging an already tagged target overwrites its name.
    pub fn tag<F: 'static>(&mut self, name: Option<&str>, target: F) -> F {
        self.insert::<F>(RecognizerMeta::resolve(name, declared_name::<F>()));
        target
    }

    /// Records metadata for the type `T`.
    pub fn tag_type<T: ?Sized + 'static>(&mut self, name: Option<&str>) -> &RecognizerMeta {
        self.insert::<T>(RecognizerMeta::resolve(name, declared_name::<T>()))
    }

    /// Records the name a `#[recognizer]` type carries.
    pub fn register<T: Recognized + ?Sized + 'static>(&mut self) -> &RecognizerMeta {
        self.insert::<T>(T::recognizer_meta())
    }

    fn insert<T: ?Sized + 'static>(&mut self, meta: RecognizerMeta) -> &RecognizerMeta {
        let type_name = any::type_name::<T>();
        let entry = RegisteredRecognizer { type_name, meta };

        match self.entries.entry(TypeId::of::<T>()) {
            Entry::Occupied(mut slot) => {
                let previous = slot.insert(entry);
                let current = &slot.get().meta;
                match self.retag {
                    RetagPolicy::Overwrite => tracing::debug!(
                        "Re-tagged {} as '{}' (was '{}')",
                        type_name,
                        current,
                        previous.meta
                    ),
                    RetagPolicy::Warn => tracing::warn!(
                        "Recognizer {} re-tagged as '{}', overwriting '{}'",
                        type_name,
                        current,
                        previous.meta
                    ),
                }
                &slot.into_mut().meta
            }
            Entry::Vacant(slot) => {
                tracing::debug!("Tagged {} as '{}'", type_name, entry.meta);
                &slot.insert(entry).meta
            }
        }
    }

    /// Metadata recorded for `target`, if any.
    pub fn meta<F: 'static>(&self, _target: &F) -> Option<&RecognizerMeta> {
        self.meta_of::<F>()
    }

    pub fn meta_of<T: ?Sized + 'static>(&self) -> Option<&RecognizerMeta> {
        self.entries.get(&TypeId::of::<T>()).map(|e| &e.meta)
    }

    /// Like [`Registry::meta`], but a missing entry is an error.
    pub fn require<F: 'static>(&self, _target: &F) -> Result<&RecognizerMeta, RecognizerError> {
        self.require_of::<F>()
    }

    pub fn require_of<T: ?Sized + 'static>(&self) -> Result<&RecognizerMeta, RecognizerError> {
        self.meta_of::<T>()
            .ok_or_else(|| RecognizerError::NotRegistered {
                type_name: any::type_name::<T>().to_string(),
            })
    }

    pub fn contains<F: 'static>(&self, _target: &F) -> bool {
        self.contains_type::<F>()
    }

    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Drops the entry for `T`, returning its metadata.
    pub fn remove<T: ?Sized + 'static>(&mut self) -> Option<RecognizerMeta> {
        self.entries.remove(&TypeId::of::<T>()).map(|e| e.meta)
    }

    /// Entries recorded under `name`. Names are not unique.
    pub fn find<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RegisteredRecognizer> + 'a {
        self.entries.values().filter(move |e| e.meta.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredRecognizer> {
        self.entries.values()
    }

    /// Distinct recorded names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.values().map(|e| e.meta.name()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, sorted by type name.
    pub fn snapshot(&self) -> Vec<RegisteredRecognizer> {
        let mut entries: Vec<_> = self.entries.values().cloned().collect();
        entries.sort_by(|a, b| a.type_name.cmp(b.type_name));
        entries
    }

    /// Snapshot as JSON: `[{"type_name": ..., "name": ...}, ...]`.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.snapshot())
    }
}
