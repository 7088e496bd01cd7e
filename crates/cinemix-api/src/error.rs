use reqwest::{Response, StatusCode};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Per-field validation messages from a 400 response, keyed by field name.
/// The remote serializes each field's errors as either a string or a list
/// of strings; both normalize to a list here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.0.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }

    fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let mut fields = BTreeMap::new();
        for (field, messages) in object {
            let normalized = match messages {
                Value::String(message) => vec![message.clone()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
                _ => continue,
            };
            if !normalized.is_empty() {
                fields.insert(field.clone(), normalized);
            }
        }
        if fields.is_empty() {
            None
        } else {
            Some(Self(fields))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, messages.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network/transport failure, including body decode failures.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The remote rejected the credential (or its absence). Never
    /// pre-checked locally; only the remote decides.
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("not found: {0}")]
    NotFound(String),
    /// Field-level validation failure (registration, review forms).
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    /// Any other HTTP error response.
    #[error("{status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("failed to persist credentials: {0}")]
    Storage(String),
}

impl ApiError {
    /// Map a non-success response onto the taxonomy, consuming the body.
    pub(crate) async fn from_response(resource: &str, response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Self::from_status(resource, status, &body)
    }

    pub(crate) fn from_status(resource: &str, status: StatusCode, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let detail = parsed
            .as_ref()
            .and_then(|value| value.get("detail"))
            .and_then(Value::as_str)
            .map(str::to_string);

        match status {
            StatusCode::UNAUTHORIZED => ApiError::NotAuthenticated,
            StatusCode::NOT_FOUND => ApiError::NotFound(resource.to_string()),
            StatusCode::BAD_REQUEST => {
                if let Some(message) = detail {
                    return ApiError::Status { status, message };
                }
                if let Some(fields) = parsed.as_ref().and_then(FieldErrors::from_value) {
                    return ApiError::Validation(fields);
                }
                ApiError::Status {
                    status,
                    message: body.to_string(),
                }
            }
            _ => ApiError::Status {
                status,
                message: detail.unwrap_or_else(|| body.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_maps_to_not_authenticated() {
        let err = ApiError::from_status(
            "me",
            StatusCode::UNAUTHORIZED,
            r#"{"detail": "As credenciais de autenticação não foram fornecidas."}"#,
        );
        assert!(matches!(err, ApiError::NotAuthenticated));
    }

    #[test]
    fn test_404_carries_resource() {
        let err = ApiError::from_status("filme casablanca", StatusCode::NOT_FOUND, "");
        match err {
            ApiError::NotFound(resource) => assert_eq!(resource, "filme casablanca"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_400_field_errors_normalize_strings_and_lists() {
        let body = r#"{"username": ["Já existe um utilizador com este nome."], "email": "Introduza um endereço de email válido."}"#;
        let err = ApiError::from_status("registo", StatusCode::BAD_REQUEST, body);
        match err {
            ApiError::Validation(fields) => {
                assert_eq!(
                    fields.get("username").unwrap(),
                    &vec!["Já existe um utilizador com este nome.".to_string()]
                );
                assert_eq!(fields.get("email").unwrap().len(), 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_400_detail_wins_over_field_map() {
        let body = r#"{"detail": "Você já fez uma review para este filme."}"#;
        let err = ApiError::from_status("review", StatusCode::BAD_REQUEST, body);
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Você já fez uma review para este filme.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_other_statuses_keep_body() {
        let err = ApiError::from_status("filmes", StatusCode::INTERNAL_SERVER_ERROR, "boom");
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
