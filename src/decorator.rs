//! Decorator factory: configure a name once, apply it to targets.

use crate::meta::RecognizerMeta;
use crate::registry::Registry;

/// Tagging wrapper produced by [`recognizer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recognizer {
    name: Option<String>,
}

/// Returns a [`Recognizer`] that tags targets with `name`, or with their
/// declared name when `name` is `None`.
///
/// ```ignore
/// let mut registry = Registry::new();
/// let detect_hello = recognizer(Some("greeting")).apply(&mut registry, detect_hello);
/// ```
pub fn recognizer(name: Option<&str>) -> Recognizer {
    Recognizer {
        name: name.map(str::to_owned),
    }
}

impl Recognizer {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Records the metadata for `target` in `registry` and returns `target`.
    pub fn apply<F: 'static>(&self, registry: &mut Registry, target: F) -> F {
        registry.tag(self.name(), target)
    }

    /// Records the metadata for the type `T` in `registry`.
    pub fn apply_type<'r, T: ?Sized + 'static>(
        &self,
        registry: &'r mut Registry,
    ) -> &'r RecognizerMeta {
        registry.tag_type::<T>(self.name())
    }
}
