use botwire_macros::ApiObject;
use json_display::JsonDisplay;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use typed_builder::TypedBuilder;

use crate::{
    convert::{maybe_field, required_field, FromJson, JsonObject, ToJson, ToObject, WireObject},
    error::WireError,
    maybe::Maybe,
};

/// Envelope every method call comes back in.
///
/// `ok` tells whether the call was accepted. An accepted call carries the
/// method's value in `result`; a rejected one describes itself through
/// `description`, `error_code` and, for some rejections, `parameters`.
/// [`ApiResponse::into_result`] peels the envelope off.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonDisplay)]
pub struct ApiResponse<T> {
    pub ok: bool,
    // Path form so serde_derive doesn't infer a `T: Default` bound on the
    // derived `Deserialize` impl; `Maybe::default` is `Absent` for any `T`.
    #[serde(default = "Maybe::default")]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub result: Maybe<T>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub description: Maybe<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub error_code: Maybe<i64>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub parameters: Maybe<ResponseParameters>,
}

// The one wire object in the catalog that is generic, so the contract impls
// are written out by hand instead of derived.
impl<T> WireObject for ApiResponse<T> {
    const NAME: &'static str = "ApiResponse";
    const REQUIRED: &'static [&'static str] = &["ok"];
}

impl<T: DeserializeOwned> FromJson for ApiResponse<T> {
    fn from_object(mut payload: JsonObject) -> Result<Self, WireError> {
        let ok = required_field(&mut payload, Self::NAME, "ok")?;
        let result = maybe_field(&mut payload, Self::NAME, "result")?;
        let description = maybe_field(&mut payload, Self::NAME, "description")?;
        let error_code = maybe_field(&mut payload, Self::NAME, "error_code")?;
        let parameters = maybe_field(&mut payload, Self::NAME, "parameters")?;

        Ok(Self {
            ok,
            result,
            description,
            error_code,
            parameters,
        })
    }
}

impl<T: Serialize> ToJson for ApiResponse<T> {}

impl<T: Serialize> ToObject for ApiResponse<T> {}

impl<T> ApiResponse<T> {
    /// Separates an accepted call from a rejected one.
    ///
    /// A response claiming `ok` without carrying a result is reported as
    /// [`ResponseError::MissingResult`] rather than papered over with a
    /// default.
    pub fn into_result(self) -> Result<T, ResponseError> {
        if !self.ok {
            return Err(ResponseError::Rejected {
                error_code: self.error_code.into_option(),
                description: self.description.into_option(),
                parameters: self.parameters.into_option(),
            });
        }

        self.result
            .into_option()
            .ok_or(ResponseError::MissingResult)
    }
}

/// Extra parameters the service attaches to some rejections to tell the
/// caller how to proceed.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, TypedBuilder, ApiObject, JsonDisplay)]
pub struct ResponseParameters {
    /// The group was migrated to a supergroup with this identifier.
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub migrate_to_chat_id: Maybe<i64>,
    /// Flood control: retry the call after this many seconds.
    #[builder(default, setter(into))]
    #[serde(default)]
    #[serde(skip_serializing_if = "Maybe::is_absent")]
    pub retry_after: Maybe<i64>,
}

/// What a method call amounted to once the envelope is peeled off.
#[derive(Debug, Error, PartialEq)]
pub enum ResponseError {
    #[error("call rejected by the service: {}", .description.as_deref().unwrap_or("no description given"))]
    Rejected {
        error_code: Option<i64>,
        description: Option<String>,
        parameters: Option<ResponseParameters>,
    },
    #[error("service accepted the call but sent no result")]
    MissingResult,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        media::{animation::tests::make_minimal_animation, Animation},
        misc::test_utils,
    };

    #[test]
    fn test_accepted_call() {
        let animation = make_minimal_animation();
        let response = ApiResponse::<Animation>::from_json(json!({
            "ok": true,
            "result": {
                "file_id": animation.file_id,
                "file_unique_id": animation.file_unique_id,
                "width": 320,
                "height": 240,
                "duration": 4,
            },
        }))
        .unwrap();

        assert!(response.ok);
        assert_eq!(response.into_result().unwrap(), animation);
    }

    #[test]
    fn test_rejected_call() {
        let response = ApiResponse::<Animation>::from_json(json!({
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 31",
            "parameters": { "retry_after": 31 },
        }))
        .unwrap();

        let err = response.into_result().unwrap_err();
        assert_eq!(
            err,
            ResponseError::Rejected {
                error_code: Some(429),
                description: Some("Too Many Requests: retry after 31".to_owned()),
                parameters: Some(ResponseParameters::builder().retry_after(31).build()),
            }
        );
    }

    #[test]
    fn test_accepted_call_without_result() {
        let response = ApiResponse::<Animation>::from_json(json!({ "ok": true })).unwrap();
        assert_eq!(
            response.into_result().unwrap_err(),
            ResponseError::MissingResult
        );
    }

    #[test]
    fn test_envelope_wire_contract() {
        let animation = make_minimal_animation();
        let response = ApiResponse {
            ok: true,
            result: Maybe::Value(animation.clone()),
            description: Maybe::Absent,
            error_code: Maybe::Absent,
            parameters: Maybe::Absent,
        };

        let expected = json!({
            "ok": true,
            "result": {
                "file_id": animation.file_id,
                "file_unique_id": animation.file_unique_id,
                "width": 320,
                "height": 240,
                "duration": 4,
            },
        });

        test_utils::test_wire_object(response, expected);
    }

    #[test]
    fn test_required_keys_reported() {
        let payload = json!({ "ok": true });
        test_utils::test_missing_required::<ApiResponse<Animation>>(payload);
    }

    #[test]
    fn test_response_parameters() {
        let parameters = ResponseParameters::builder().migrate_to_chat_id(-321).build();
        let expected = json!({ "migrate_to_chat_id": -321 });

        test_utils::test_wire_object(parameters, expected);
    }
}
