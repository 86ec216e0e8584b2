use darling::{ast::Data, util::Ignored, FromDeriveInput, FromField};
use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{
    punctuated::Punctuated, spanned::Spanned, Attribute, DeriveInput, Error, Expr, ExprLit,
    Generics, Lit, Meta, Result as SynResult, Token, Type,
};

/// Matches the input from deriving the macro on a type.
#[derive(FromDeriveInput)]
#[darling(attributes(wire), supports(struct_named))]
struct ApiObject {
    ident: Ident,
    generics: Generics,
    data: Data<Ignored, WireField>,
    /// Wire-level object name, defaulting to the type name.
    name: Option<String>,
}

/// A single named field of the derived object.
#[derive(FromField)]
#[darling(attributes(wire), forward_attrs(serde))]
struct WireField {
    ident: Option<Ident>,
    ty: Type,
    attrs: Vec<Attribute>,
    /// Wire key override, taking precedence over `#[serde(rename)]`.
    rename: Option<String>,
}

pub fn api_object_impl(input: DeriveInput) -> SynResult<TokenStream> {
    let parsed = match ApiObject::from_derive_input(&input) {
        Ok(parsed) => parsed,
        Err(e) => return Ok(e.write_errors()),
    };

    let ApiObject {
        ident,
        generics,
        data,
        name,
    } = parsed;

    let Generics {
        params, where_clause, ..
    } = generics;

    let wire_name = name.unwrap_or_else(|| ident.to_string());

    let fields = data
        .take_struct()
        .ok_or_else(|| Error::new(ident.span(), "expecting a struct with named fields"))?
        .fields;

    let mut required = Vec::new();
    let mut extract = TokenStream::new();
    let mut field_names = Vec::new();

    for field in fields {
        let Some(field_ident) = field.ident else {
            return Err(Error::new(ident.span(), "expecting named fields"));
        };

        // Key precedence: #[wire(rename)], then #[serde(rename)], then the
        // field name itself.
        let key = match field.rename {
            Some(key) => key,
            None => serde_rename(&field.attrs)?.unwrap_or_else(|| field_ident.to_string()),
        };

        if type_ident_is(&field.ty, "Option") {
            return Err(Error::new(
                field.ty.span(),
                "optional wire fields must be Maybe<T>, not Option<T>",
            ));
        }

        if type_ident_is(&field.ty, "Maybe") {
            extract.extend(quote! {
                let #field_ident = botwire::maybe_field(&mut payload, #wire_name, #key)?;
            });
        } else {
            required.push(key.clone());
            extract.extend(quote! {
                let #field_ident = botwire::required_field(&mut payload, #wire_name, #key)?;
            });
        }

        field_names.push(field_ident);
    }

    let expanded = quote! {
        impl<#params> botwire::WireObject for #ident<#params>
        #where_clause
        {
            const NAME: &'static str = #wire_name;
            const REQUIRED: &'static [&'static str] = &[#(#required),*];
        }

        impl<#params> botwire::FromJson for #ident<#params>
        #where_clause
        {
            fn from_object(mut payload: botwire::JsonObject) -> Result<Self, botwire::WireError> {
                #extract
                Ok(Self { #(#field_names),* })
            }
        }

        impl<#params> botwire::ToJson for #ident<#params> #where_clause {}

        impl<#params> botwire::ToObject for #ident<#params> #where_clause {}
    };

    Ok(expanded)
}

/// Digs the `rename = "..."` value out of a field's `#[serde(...)]`
/// attributes, skipping every other serde option.
fn serde_rename(attrs: &[Attribute]) -> SynResult<Option<String>> {
    for attr in attrs {
        let nested: Punctuated<Meta, Token![,]> =
            attr.parse_args_with(Punctuated::parse_terminated)?;

        for meta in nested {
            let Meta::NameValue(nv) = meta else { continue };

            if !nv.path.is_ident("rename") {
                continue;
            }

            let Expr::Lit(ExprLit {
                lit: Lit::Str(s), ..
            }) = nv.value
            else {
                return Err(Error::new(nv.value.span(), "expecting literal string"));
            };

            return Ok(Some(s.value()));
        }
    }

    Ok(None)
}

/// Whether the outermost type constructor is the given ident, as in
/// `Maybe<...>` or `botwire::Maybe<...>`.
fn type_ident_is(ty: &Type, name: &str) -> bool {
    match ty {
        Type::Path(p) => p
            .path
            .segments
            .last()
            .map(|segment| segment.ident == name)
            .unwrap_or(false),
        _ => false,
    }
}
