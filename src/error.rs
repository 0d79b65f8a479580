use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::Validation(err)
    }
}

/// Render validation failures as a field -> messages object, e.g.
/// `{"title": ["This field is required."]}`.
pub fn validation_error_map(errors: &ValidationErrors) -> Value {
    let map: serde_json::Map<String, Value> = errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value ({}).", e.code),
                })
                .collect();
            (field.to_string(), json!(messages))
        })
        .collect();

    Value::Object(map)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                let body = Json(json!({ "error": "Database error occurred" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AppError::Validation(ref errors) => {
                (StatusCode::BAD_REQUEST, Json(validation_error_map(errors))).into_response()
            }
            AppError::NotFound(ref msg) => {
                let body = Json(json!({ "error": msg }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn validation_error_map_groups_messages_by_field() {
        let mut errors = ValidationErrors::new();
        let mut required = ValidationError::new("required");
        required.message = Some("This field is required.".into());
        errors.add("title", required);

        let map = validation_error_map(&errors);
        assert_eq!(map["title"], json!(["This field is required."]));
    }

    #[test]
    fn validation_error_map_falls_back_to_the_code() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationError::new("length"));

        let map = validation_error_map(&errors);
        assert_eq!(map["title"], json!(["Invalid value (length)."]));
    }
}
