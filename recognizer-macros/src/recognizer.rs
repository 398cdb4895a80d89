//! Implementation of the #[recognizer] attribute.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::visit::{self, Visit};
use syn::{
    parse_macro_input, FnArg, Generics, Ident, Item, ItemFn, Path, Signature, TypeImplTrait,
};

use crate::args::RecognizerArgs;

pub fn recognizer_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as RecognizerArgs);
    let item = parse_macro_input!(item as Item);

    let metadata = match &item {
        Item::Fn(func) => expand_fn(&args, func),
        Item::Struct(s) => Ok(expand_type(&args, &s.ident, &s.generics)),
        Item::Enum(e) => Ok(expand_type(&args, &e.ident, &e.generics)),
        Item::Union(u) => Ok(expand_type(&args, &u.ident, &u.generics)),
        other => Err(syn::Error::new_spanned(
            other,
            "#[recognizer] can only be applied to free functions, structs, enums, or unions",
        )),
    };

    match metadata {
        // The item itself is emitted untouched
        Ok(metadata) => TokenStream::from(quote! {
            #item
            #metadata
        }),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_type(args: &RecognizerArgs, ident: &Ident, generics: &Generics) -> TokenStream2 {
    let krate = args.krate();
    let name = args.resolve_name(ident);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::Recognized for #ident #ty_generics #where_clause {
            const RECOGNIZER_NAME: &'static str = #name;
        }
    }
}

/// Functions can't carry trait impls, so the metadata goes into a companion
/// module sharing the function's name. Modules live in the type namespace and
/// functions in the value namespace, so both resolve.
fn expand_fn(args: &RecognizerArgs, func: &ItemFn) -> syn::Result<TokenStream2> {
    if let Some(receiver) = func.sig.receiver() {
        return Err(syn::Error::new_spanned(
            receiver,
            "#[recognizer] cannot be applied to methods; tag the type instead",
        ));
    }

    let krate = args.krate();
    let ident = &func.sig.ident;
    let vis = &func.vis;
    let name = args.resolve_name(ident);
    let doc = format!("Recognizer metadata attached to the `{}` function.", ident);
    let register = register_fn(&krate, &func.sig);

    Ok(quote! {
        #[doc = #doc]
        #[allow(dead_code)]
        #vis mod #ident {
            /// Name recorded for this recognizer.
            pub const RECOGNIZER_NAME: &str = #name;

            /// Metadata record for this recognizer.
            pub fn recognizer_meta() -> #krate::RecognizerMeta {
                #krate::RecognizerMeta::from_static(RECOGNIZER_NAME)
            }

            #register
        }
    })
}

/// `register` needs to name the function item, which is only possible
/// without type or const parameters. `impl Trait` arguments are hidden type
/// parameters and count too.
fn register_fn(krate: &Path, sig: &Signature) -> TokenStream2 {
    if !is_nameable(sig) {
        return quote! {};
    }

    let ident = &sig.ident;
    quote! {
        /// Records this function in `registry` under `RECOGNIZER_NAME`.
        pub fn register(registry: &mut #krate::Registry) {
            let _ = registry.tag(::core::option::Option::Some(RECOGNIZER_NAME), super::#ident);
        }
    }
}

fn is_nameable(sig: &Signature) -> bool {
    let generics = &sig.generics;
    if generics.type_params().next().is_some()
        || generics.const_params().next().is_some()
        || generics.where_clause.is_some()
    {
        return false;
    }

    let mut finder = ImplTraitFinder::default();
    for input in &sig.inputs {
        if let FnArg::Typed(arg) = input {
            finder.visit_type(&arg.ty);
        }
    }
    !finder.found
}

#[derive(Default)]
struct ImplTraitFinder {
    found: bool,
}

impl<'ast> Visit<'ast> for ImplTraitFinder {
    fn visit_type_impl_trait(&mut self, node: &'ast TypeImplTrait) {
        self.found = true;
        visit::visit_type_impl_trait(self, node);
    }
}
