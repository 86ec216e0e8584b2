extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, DeriveInput};

/// Derives `std::fmt::Display` rendering the value as its JSON encoding.
///
/// Nested fields are expanded recursively for free, since the whole value is
/// run through `serde_json`. Annotating the container with
/// `#[json_display(pretty)]` switches to multi-line indented output.
#[proc_macro_derive(JsonDisplay, attributes(json_display))]
pub fn json_display_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    impl_json_display(ast)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn impl_json_display(mut ast: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = ast.ident.clone();
    let pretty = parse_container_attrs(&ast)?;

    // Every type parameter must itself be serializable for the container to be.
    for type_param in ast.generics.type_params_mut() {
        type_param.bounds.push(parse_quote!(serde::Serialize));
    }
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let encode = if pretty {
        quote! { serde_json::to_string_pretty(self) }
    } else {
        quote! { serde_json::to_string(self) }
    };

    Ok(quote! {
        impl #impl_generics std::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match #encode {
                    Ok(json) => f.write_str(&json),
                    Err(e) => write!(f, "<{} not encodable as JSON: {}>", stringify!(#name), e),
                }
            }
        }
    })
}

fn parse_container_attrs(ast: &DeriveInput) -> syn::Result<bool> {
    let mut pretty = false;
    for attr in &ast.attrs {
        if !attr.path().is_ident("json_display") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("pretty") {
                pretty = true;
                Ok(())
            } else {
                Err(meta.error("unrecognized json_display option"))
            }
        })?;
    }
    Ok(pretty)
}
