use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Lit, Meta};

/// Derive macro that implements `pellcalc_core::traits::Inputs` for a struct
/// whose named fields are calculator parameters.
///
/// Each field is read from the value record under its own name, converted
/// with `pellcalc_core::values::FromValue`. The generated `PARAMETER_IDS`
/// lists the ids in field order.
///
/// Use `#[inputs(id = "col")]` on a field to read it from a parameter whose
/// id differs from the field name.
#[proc_macro_derive(Inputs, attributes(inputs))]
pub fn derive_inputs(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Inputs can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Inputs can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    if fields.is_empty() {
        return syn::Error::new_spanned(name, "Inputs struct must have at least one field")
            .to_compile_error()
            .into();
    }

    let mut ids = Vec::new();
    let mut field_idents = Vec::new();
    let mut field_types = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let id = match extract_id(field) {
            Ok(Some(id)) => id,
            Ok(None) => ident.to_string(),
            Err(e) => return e.to_compile_error().into(),
        };
        ids.push(id);
        field_idents.push(ident);
        field_types.push(&field.ty);
    }

    let extract_fields = field_idents
        .iter()
        .zip(&field_types)
        .zip(&ids)
        .map(|((f, ty), id)| {
            quote! {
                #f: <#ty as ::pellcalc_core::values::FromValue>::from_value(
                    #id,
                    values.require(#id)?,
                )?
            }
        });

    let expanded = quote! {
        impl #impl_generics ::pellcalc_core::traits::Inputs for #name #ty_generics #where_clause {
            const PARAMETER_IDS: &'static [&'static str] = &[#(#ids),*];

            fn from_values(
                values: &::pellcalc_core::values::Values,
            ) -> ::core::result::Result<Self, ::pellcalc_core::error::EngineError> {
                ::core::result::Result::Ok(Self {
                    #(#extract_fields,)*
                })
            }
        }
    };

    expanded.into()
}

fn extract_id(field: &Field) -> syn::Result<Option<String>> {
    for attr in &field.attrs {
        if !attr.path().is_ident("inputs") {
            continue;
        }
        let nested = attr.parse_args_with(
            syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
        )?;
        for meta in nested {
            match meta {
                Meta::NameValue(nv) if nv.path.is_ident("id") => {
                    if let syn::Expr::Lit(expr_lit) = &nv.value {
                        if let Lit::Str(lit_str) = &expr_lit.lit {
                            return Ok(Some(lit_str.value()));
                        }
                    }
                    return Err(syn::Error::new_spanned(
                        &nv.value,
                        "inputs(id = ...) expects a string literal",
                    ));
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown inputs attribute; expected `id = \"...\"`",
                    ));
                }
            }
        }
    }
    Ok(None)
}
