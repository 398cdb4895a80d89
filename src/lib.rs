//! Recognizers - name tagging for functions and types.
//!
//! A recognizer carries one piece of metadata: its name. Names are attached
//! without touching the tagged item:
//!
//! - `#[recognizer]` on a type implements [`Recognized`]; on a free function
//!   it emits a companion module with the same name.
//! - [`Registry`] is a side table from object identity to [`RecognizerMeta`],
//!   filled by explicit registration calls.
//! - [`recognizer()`] is the runtime decorator factory over a registry.
//!
//! # Example
//!
//! ```ignore
//! use recognizers::{recognizer, Registry};
//!
//! #[recognizer("greeting")]
//! fn detect_hello(input: &str) -> bool {
//!     input.contains("hello")
//! }
//!
//! fn detect_goodbye(input: &str) -> bool {
//!     input.contains("bye")
//! }
//!
//! let mut registry = Registry::new();
//! detect_hello::register(&mut registry);
//! let detect_goodbye = recognizer(None).apply(&mut registry, detect_goodbye);
//!
//! assert_eq!(registry.meta(&detect_hello).unwrap().name(), "greeting");
//! assert_eq!(registry.meta(&detect_goodbye).unwrap().name(), "detect_goodbye");
//! ```

// Lets `#[recognizer]` expansions inside this crate resolve `::recognizers`
extern crate self as recognizers;

pub mod config;
pub mod decorator;
pub mod error;
pub mod global;
pub mod meta;
pub mod registry;

pub use config::{Config, RegistryConfig, RetagPolicy};
pub use decorator::{recognizer, Recognizer};
pub use error::RecognizerError;
pub use meta::{declared_name, Recognized, RecognizerMeta};
pub use registry::{RegisteredRecognizer, Registry};

// Attribute macro; lives in the macro namespace next to the `recognizer` function
pub use recognizer_macros::recognizer;
