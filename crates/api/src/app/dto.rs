use std::collections::HashMap;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use usuarios_core::{NewUser, User, UserPatch};

use crate::app::errors;

// -------------------------
// Request bodies
// -------------------------

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// How the client encoded the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    Form,
    Json,
    /// Missing or unsupported content type; the body is ignored.
    Other,
}

impl BodyEncoding {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(content_type) = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        else {
            return Self::Other;
        };

        let essence = content_type.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(FORM_URLENCODED) {
            Self::Form
        } else if essence.eq_ignore_ascii_case("application/json")
            || essence.to_ascii_lowercase().ends_with("+json")
        {
            Self::Json
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("invalid form body: {0}")]
    Form(String),
    #[error("invalid json body: {0}")]
    Json(String),
}

impl IntoResponse for BodyError {
    fn into_response(self) -> Response {
        tracing::debug!("rejected request body: {self}");
        errors::json_error(StatusCode::BAD_REQUEST, errors::INVALID_BODY)
    }
}

/// User fields sent as either a urlencoded form or a JSON object.
///
/// Form values arrive as strings; JSON values keep their type. A JSON body
/// that is not an object, or a body with another content type, yields no
/// fields at all.
#[derive(Debug, Clone, PartialEq)]
pub struct UserBody {
    pub encoding: BodyEncoding,
    pub fields: Map<String, Value>,
}

impl UserBody {
    pub fn is_form(&self) -> bool {
        self.encoding == BodyEncoding::Form
    }

    pub fn into_new_user(mut self) -> NewUser {
        NewUser {
            name: self.fields.remove("name"),
            age: self.fields.remove("age"),
            origin_place: self.fields.remove("originPlace"),
        }
    }

    pub fn into_patch(mut self) -> UserPatch {
        UserPatch {
            age: self.fields.remove("age"),
            origin_place: self.fields.remove("originPlace"),
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for UserBody
where
    S: Send + Sync,
{
    type Rejection = BodyError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let encoding = BodyEncoding::from_headers(req.headers());

        let fields = match encoding {
            BodyEncoding::Form => {
                let Form(pairs) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| BodyError::Form(e.body_text()))?;
                pairs
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect()
            }
            BodyEncoding::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| BodyError::Json(e.body_text()))?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    Map::new()
                } else {
                    match serde_json::from_slice::<Value>(&bytes)
                        .map_err(|e| BodyError::Json(e.to_string()))?
                    {
                        Value::Object(map) => map,
                        _ => Map::new(),
                    }
                }
            }
            BodyEncoding::Other => Map::new(),
        };

        Ok(Self { encoding, fields })
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdatedResponse {
    pub message: String,
    pub user: User,
}

impl UserUpdatedResponse {
    pub fn new(user: User) -> Self {
        Self {
            message: "User updated".to_string(),
            user,
        }
    }
}

pub fn user_deleted(lowered_name: &str) -> MessageResponse {
    MessageResponse::new(format!("User {lowered_name} deleted"))
}
