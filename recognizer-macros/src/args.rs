//! Argument parsing for `#[recognizer(...)]`.

use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{Ident, LitStr, Path, Token};

/// Parsed attribute arguments.
///
/// Accepted forms:
/// - `#[recognizer]`
/// - `#[recognizer("greeting")]`
/// - `#[recognizer(name = "greeting")]`
/// - `#[recognizer(name = "greeting", crate = "my_reexport::recognizers")]`
#[derive(Default)]
pub struct RecognizerArgs {
    name: Option<LitStr>,
    krate: Option<Path>,
}

impl Parse for RecognizerArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = RecognizerArgs::default();

        // Positional name: #[recognizer("greeting")]
        if input.peek(LitStr) {
            args.name = Some(input.parse()?);
            if input.is_empty() {
                return Ok(args);
            }
            input.parse::<Token![,]>()?;
        }

        while !input.is_empty() {
            // `crate` is a keyword, so plain `Ident::parse` would reject it
            let key = input.call(Ident::parse_any)?;
            input.parse::<Token![=]>()?;
            let value: LitStr = input.parse()?;

            match key.to_string().as_str() {
                "name" => {
                    if args.name.is_some() {
                        return Err(syn::Error::new(key.span(), "duplicate recognizer name"));
                    }
                    args.name = Some(value);
                }
                "crate" => {
                    if args.krate.is_some() {
                        return Err(syn::Error::new(key.span(), "duplicate `crate` argument"));
                    }
                    args.krate = Some(value.parse()?);
                }
                _ => {
                    return Err(syn::Error::new(
                        key.span(),
                        "unknown recognizer argument, expected `name` or `crate`",
                    ));
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

impl RecognizerArgs {
    /// The recorded name: the given literal, or the item's own identifier
    /// when the name is omitted or empty.
    pub fn resolve_name(&self, ident: &Ident) -> LitStr {
        match &self.name {
            Some(name) if !name.value().is_empty() => name.clone(),
            Some(name) => LitStr::new(&ident.unraw().to_string(), name.span()),
            None => LitStr::new(&ident.unraw().to_string(), ident.span()),
        }
    }

    /// Path to the runtime crate. Defaults to `::recognizers`.
    pub fn krate(&self) -> Path {
        match &self.krate {
            Some(path) => path.clone(),
            None => {
                let ident = Ident::new("recognizers", Span::call_site());
                let mut path = Path::from(ident);
                path.leading_colon = Some(Default::default());
                path
            }
        }
    }
}
