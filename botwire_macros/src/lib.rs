mod api_object;

use api_object::api_object_impl;
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, Error};

/// Derive macro implementing the wire-object contract for a named struct.
///
/// The macro generates:
/// - a `WireObject` impl carrying the object's wire name and the table of
///   required keys,
/// - a `FromJson` impl that pulls each field out of the payload in
///   declaration order, so a missing or ill-typed key is reported with the
///   object and field names attached,
/// - the `ToJson` and `ToObject` opt-ins (both rely on the type's `Serialize`
///   impl).
///
/// Required fields are plain types; optional fields must be `Maybe<T>`, which
/// keeps "key absent" distinct from "key null". Deriving on a field typed
/// `Option<T>` is rejected at compile time. The wire key defaults to the
/// field name and can be overridden with `#[serde(rename = "...")]` or
/// `#[wire(rename = "...")]`; the object's wire name defaults to the type
/// name and can be overridden with `#[wire(name = "...")]`.
///
/// The macro is meant for concrete catalog types. Generic envelopes
/// implement the contract traits by hand.
///
/// ``` ignore
/// use botwire_macros::ApiObject;
///
/// #[derive(Serialize, Deserialize, ApiObject)]
/// struct Sticker {
///     file_id: String,
///     width: i64,
///     height: i64,
///     #[serde(default, skip_serializing_if = "Maybe::is_absent")]
///     emoji: Maybe<String>,
/// }
/// ```
#[proc_macro_derive(ApiObject, attributes(wire))]
pub fn api_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    api_object_impl(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
