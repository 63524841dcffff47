use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta};

/// Derive macro that gives a coefficient struct name-based access to its
/// fields. All fields in the source struct must be `f64`.
///
/// Generated inherent items:
/// - `FIELD_COUNT`: number of coefficients
/// - `field_names()`: names in declaration order
/// - `get(name)` / `get_mut(name)`: lookup by name, `None` for unknown names
/// - `to_vec()`: values in declaration order
/// - `iter_named()`: `(name, value)` pairs in declaration order
///
/// Use `#[coefficients(group = "airframe")]` on a field to tag it with a
/// group label, retrievable through `group_of(name)`. Untagged fields have
/// no group.
#[proc_macro_derive(Coefficients, attributes(coefficients))]
pub fn derive_coefficients(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Coefficients can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Coefficients can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    if fields.is_empty() {
        return syn::Error::new_spanned(name, "Coefficients struct must have at least one field")
            .to_compile_error()
            .into();
    }

    let mut field_names = Vec::new();
    let mut field_idents = Vec::new();
    let mut groups = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            return syn::Error::new_spanned(field, "Coefficients derive: unnamed field")
                .to_compile_error()
                .into();
        };
        if !is_f64_type(&field.ty) {
            return syn::Error::new_spanned(&field.ty, "Coefficients derive: all fields must be f64")
                .to_compile_error()
                .into();
        }
        field_names.push(ident.to_string());
        field_idents.push(ident);
        groups.push(extract_group(&field.attrs));
    }

    let n_fields = field_idents.len();
    let field_name_strs: Vec<&str> = field_names.iter().map(|s| s.as_str()).collect();

    let get_arms = field_idents.iter().zip(&field_name_strs).map(|(f, s)| {
        quote! { #s => ::core::option::Option::Some(self.#f) }
    });

    let get_mut_arms = field_idents.iter().zip(&field_name_strs).map(|(f, s)| {
        quote! { #s => ::core::option::Option::Some(&mut self.#f) }
    });

    let group_arms = field_name_strs
        .iter()
        .zip(&groups)
        .filter_map(|(s, g)| g.as_ref().map(|g| quote! { #s => ::core::option::Option::Some(#g) }));

    let expanded = quote! {
        impl #name {
            /// Number of named coefficients.
            pub const FIELD_COUNT: usize = #n_fields;

            /// Coefficient names in declaration order.
            pub fn field_names() -> &'static [&'static str] {
                &[#(#field_name_strs),*]
            }

            /// Value of the named coefficient, `None` if no such field exists.
            pub fn get(&self, name: &str) -> ::core::option::Option<f64> {
                match name {
                    #(#get_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            /// Mutable reference to the named coefficient.
            pub fn get_mut(&mut self, name: &str) -> ::core::option::Option<&mut f64> {
                match name {
                    #(#get_mut_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            /// Coefficient values in declaration order.
            pub fn to_vec(&self) -> ::std::vec::Vec<f64> {
                ::std::vec![#(self.#field_idents),*]
            }

            /// `(name, value)` pairs in declaration order.
            pub fn iter_named(&self) -> impl ::core::iter::Iterator<Item = (&'static str, f64)> + '_ {
                Self::field_names()
                    .iter()
                    .copied()
                    .zip(self.to_vec())
            }

            /// Group label attached with `#[coefficients(group = "...")]`.
            pub fn group_of(name: &str) -> ::core::option::Option<&'static str> {
                match name {
                    #(#group_arms,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    expanded.into()
}

fn extract_group(attrs: &[syn::Attribute]) -> Option<String> {
    for attr in attrs {
        if attr.path().is_ident("coefficients") {
            let nested = attr
                .parse_args_with(
                    syn::punctuated::Punctuated::<syn::Meta, syn::Token![,]>::parse_terminated,
                )
                .ok()?;
            for meta in nested {
                if let Meta::NameValue(nv) = meta {
                    if nv.path.is_ident("group") {
                        if let syn::Expr::Lit(expr_lit) = &nv.value {
                            if let Lit::Str(lit_str) = &expr_lit.lit {
                                return Some(lit_str.value());
                            }
                        }
                    }
                }
            }
        }
    }
    None
}

fn is_f64_type(ty: &syn::Type) -> bool {
    if let syn::Type::Path(type_path) = ty {
        type_path.path.is_ident("f64")
    } else {
        false
    }
}
