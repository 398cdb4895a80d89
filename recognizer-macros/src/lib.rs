//! Attribute macro for tagging functions and types with recognizer metadata.
//!
//! This crate provides `#[recognizer]`, re-exported by the `recognizers`
//! crate. Generated code references `::recognizers` unless a different path
//! is given with `crate = "..."`.

use proc_macro::TokenStream;

mod args;
mod recognizer;

/// Tags a free function or a struct/enum/union with a recognizer name.
///
/// The annotated item is emitted unchanged. The name defaults to the item's
/// own identifier when omitted (or given as `""`).
///
/// # Types
///
/// Generates an implementation of `recognizers::Recognized`:
///
/// ```ignore
/// use recognizers::{recognizer, Recognized};
///
/// #[recognizer(name = "polite")]
/// pub struct PolitenessRecognizer;
///
/// assert_eq!(PolitenessRecognizer::RECOGNIZER_NAME, "polite");
/// ```
///
/// # Functions
///
/// Generates a companion module with the function's name holding
/// `RECOGNIZER_NAME`, `recognizer_meta()` and, for functions without type
/// parameters, const parameters or `impl Trait` arguments, `register(&mut Registry)`:
///
/// ```ignore
/// use recognizers::{recognizer, Registry};
///
/// #[recognizer("greeting")]
/// fn detect_hello(input: &str) -> bool {
///     input.contains("hello")
/// }
///
/// let mut registry = Registry::new();
/// detect_hello::register(&mut registry);
///
/// assert_eq!(detect_hello::RECOGNIZER_NAME, "greeting");
/// assert_eq!(registry.meta(&detect_hello).unwrap().name(), "greeting");
/// assert!(detect_hello("hello there"));
/// ```
///
/// The companion's `register` refers to the function through `super::`, so
/// tagged functions must be declared at module level, not inside a block.
/// Methods are rejected; tag the type instead. Associated functions without
/// `self` can't be detected as such: the companion module lands inside the
/// `impl` block and rustc reports "module is not allowed here". Tag those at
/// runtime with `Registry::tag` instead.
#[proc_macro_attribute]
pub fn recognizer(attr: TokenStream, item: TokenStream) -> TokenStream {
    recognizer::recognizer_impl(attr, item)
}
