#![allow(clippy::or_fun_call)]
#![allow(clippy::derive_partial_eq_without_eq)]

// The derive macros emit paths rooted at `botwire`, so the crate has to be
// nameable from within itself.
extern crate self as botwire;

pub mod convert;
pub mod error;
pub mod maybe;
pub mod media;
pub mod response;

pub use convert::{
    maybe_field, required_field, FromJson, JsonInput, JsonObject, ToJson, ToObject, WireObject,
};
pub use error::{ShapeMismatch, WireError};
pub use maybe::Maybe;
pub use response::{ApiResponse, ResponseError, ResponseParameters};
