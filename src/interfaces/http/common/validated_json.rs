//! Validated JSON extractor
//!
//! `ValidatedJson<T>` deserializes like `axum::Json<T>` and then runs
//! `validator::Validate::validate()`. Malformed JSON is a 400, field
//! constraint failures are a 422 listing every offending field.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::ApiResponse;
use crate::shared::validation_message;

/// ```ignore
/// async fn create_role(ValidatedJson(body): ValidatedJson<CreateRoleRequest>) { .. }
/// ```
pub struct ValidatedJson<T>(pub T);

pub enum ValidatedJsonRejection {
    JsonError(JsonRejection),
    ValidationError(validator::ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            Self::JsonError(rejection) => {
                let body = ApiResponse::<()>::error(format!("Invalid JSON: {}", rejection));
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            Self::ValidationError(errors) => {
                let body = ApiResponse::<()>::error(validation_message(&errors));
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
        }
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize, Validate)]
    struct CategoryBody {
        #[validate(length(min = 1, max = 20, message = "must be 1-20 characters"))]
        label: String,
        #[validate(length(max = 255, message = "must be at most 255 characters"))]
        note: Option<String>,
    }

    async fn handler(ValidatedJson(body): ValidatedJson<CategoryBody>) -> String {
        body.label
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/categories")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn call(req: Request<Body>) -> (StatusCode, String) {
        let app = Router::new().route("/categories", post(handler));
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn valid_body_reaches_handler() {
        let (status, body) = call(post_json(r#"{"label": "Travel"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Travel");
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (status, body) = call(post_json("{label:")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid JSON"));
    }

    #[tokio::test]
    async fn constraint_failures_list_each_field() {
        let long_note = "x".repeat(256);
        let payload = format!(r#"{{"label": "", "note": "{}"}}"#, long_note);
        let (status, body) = call(post_json(&payload)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(
            json["error"],
            "label: must be 1-20 characters; note: must be at most 255 characters"
        );
    }
}
