use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input, spanned::Spanned};

/// Derive macro for implementing the `Record` marker trait.
#[proc_macro_derive(Record)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::triage::Record for #name #ty_generics #where_clause {}
    };

    TokenStream::from(expanded)
}

/// Derive macro for implementing `Identify` from the field marked `#[identity]`.
///
/// The marked field must dereference to `str` (`String`, `&'static str`, ...).
///
/// ```rust,ignore
/// #[derive(triage::Identify)]
/// struct Ping {
///     #[identity]
///     from: String,
///     body: String,
/// }
/// ```
#[proc_macro_derive(Identify, attributes(identity))]
pub fn derive_identify(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_identify(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_identify(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "Identify can only be derived for structs",
        ));
    };

    let access = identity_access(&data.fields, name)?;

    Ok(quote! {
        impl #impl_generics ::triage::Identify for #name #ty_generics #where_clause {
            fn identity(&self) -> &str {
                ::core::ops::Deref::deref(&#access)
            }
        }
    })
}

/// `self.<field>` for the single field marked `#[identity]`.
fn identity_access(fields: &Fields, name: &syn::Ident) -> syn::Result<TokenStream2> {
    let marked: Vec<_> = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.attrs.iter().any(|attr| attr.path().is_ident("identity")))
        .collect();

    let (index, field) = match marked.as_slice() {
        [single] => *single,
        [] => {
            return Err(syn::Error::new_spanned(
                name,
                "Identify needs one field marked #[identity]",
            ));
        }
        [_, second, ..] => {
            return Err(syn::Error::new(
                second.1.span(),
                "only one field may be marked #[identity]",
            ));
        }
    };

    Ok(match &field.ident {
        Some(ident) => quote! { self.#ident },
        None => {
            let index = syn::Index::from(index);
            quote! { self.#index }
        }
    })
}
