//! Recognizer metadata and name inference.

use std::any;
use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Metadata recorded for a recognizer.
///
/// Serializes as a mapping with a single `name` key:
/// `{"name": "greeting"}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecognizerMeta {
    /// Display name of the recognizer.
    pub name: Cow<'static, str>,
}

impl RecognizerMeta {
    /// Creates metadata with the given name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    /// Creates metadata from a static name, usable in `const` context.
    pub const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Uses `name` when given and non-empty, otherwise `fallback`.
    pub fn resolve(name: Option<&str>, fallback: &'static str) -> Self {
        match name.filter(|n| !n.is_empty()) {
            Some(name) => Self::new(name.to_owned()),
            None => Self::from_static(fallback),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RecognizerMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Types tagged with `#[recognizer]`.
///
/// The attribute generates this impl; it can also be written by hand.
pub trait Recognized {
    /// Name recorded for this type.
    const RECOGNIZER_NAME: &'static str;

    /// Metadata record for this type.
    fn recognizer_meta() -> RecognizerMeta {
        RecognizerMeta::from_static(Self::RECOGNIZER_NAME)
    }
}

/// Declared name of `T`: the last path segment of its type name, without
/// generic arguments.
///
/// For a function item this is the function's name, including associated
/// functions of generic types (`W<u8>::detect` gives `detect`). A closure gives
/// `{{closure}}`. Types that are not paths (tuples, slices, references,
/// pointers, `fn` pointers) keep their full type name.
pub fn declared_name<T: ?Sized>() -> &'static str {
    short_name(any::type_name::<T>())
}

fn short_name(full: &'static str) -> &'static str {
    if full.starts_with(|c| matches!(c, '(' | '[' | '&' | '*')) || full.starts_with("fn(") {
        return full;
    }

    // Only `::` outside of generic arguments, tuples and arrays separate segments
    let bytes = full.as_bytes();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' | b'(' | b'[' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' | b')' | b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                start = i + 2;
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    let segment = &full[start..];
    match segment.find('<') {
        Some(idx) if idx > 0 => &segment[..idx],
        _ => segment,
    }
}
