use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Fields, FieldsNamed, Ident};

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let fields = named_fields(input)?;

    let name_field = find_field(fields, "name")?;
    let age_field = find_field(fields, "age")?;
    let id_field = find_field(fields, "id")?;

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics roster::Record for #name #ty_generics #where_clause {
            fn name(&self) -> &str {
                &self.#name_field
            }

            fn age(&self) -> u32 {
                ::core::convert::Into::into(::core::clone::Clone::clone(&self.#age_field))
            }

            fn id(&self) -> i64 {
                ::core::convert::Into::into(::core::clone::Clone::clone(&self.#id_field))
            }
        }
    })
}

fn named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    if let Data::Struct(data_struct) = &input.data {
        if let Fields::Named(fields) = &data_struct.fields {
            return Ok(fields);
        }
    }

    Err(syn::Error::new_spanned(
        &input.ident,
        "Record derive: only structs with named fields are supported",
    ))
}

/// Resolve the field for `role`: an explicit `#[record(role)]` wins, then a
/// field literally called `role`.
fn find_field(fields: &FieldsNamed, role: &str) -> syn::Result<Ident> {
    for field in &fields.named {
        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }

            let mut marked = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(role) {
                    marked = true;
                    Ok(())
                } else if meta.path.is_ident("name")
                    || meta.path.is_ident("age")
                    || meta.path.is_ident("id")
                {
                    Ok(())
                } else {
                    Err(meta.error("expected one of `name`, `age`, `id`"))
                }
            })?;

            if marked {
                if let Some(ident) = &field.ident {
                    return Ok(ident.clone());
                }
            }
        }
    }

    for field in &fields.named {
        if let Some(ident) = &field.ident {
            if ident == role {
                return Ok(ident.clone());
            }
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        format!(
            "Record derive: no field marked with #[record({role})] and no field named `{role}`"
        ),
    ))
}
