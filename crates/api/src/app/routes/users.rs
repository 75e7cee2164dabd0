use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Extension, Path},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::dto::{self, UserBody};
use crate::app::errors;
use crate::app::services::AppServices;

/// Collection routes answer with or without a trailing slash.
pub fn router() -> Router {
    Router::new()
        .route("/usuarios", get(list_users).post(create_user))
        .route("/usuarios/", get(list_users).post(create_user))
        .route(
            "/usuarios/:name",
            get(get_user).put(update_user).delete(delete_user),
        )
}

fn user_name(path: Result<Path<String>, PathRejection>) -> Result<String, axum::response::Response> {
    match path {
        Ok(Path(name)) => Ok(name),
        Err(e) => {
            tracing::debug!("rejected user path: {}", e.body_text());
            Err(errors::json_error(StatusCode::BAD_REQUEST, errors::INVALID_USER_NAME))
        }
    }
}

pub async fn list_users(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    (StatusCode::OK, Json(services.users_list())).into_response()
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let name = match user_name(path) {
        Ok(n) => n,
        Err(res) => return res,
    };
    match services.users_get(&name) {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => {
            tracing::debug!(%name, "user lookup missed");
            errors::domain_error_to_response(e)
        }
    }
}

/// Create a user. Form submissions are redirected back to the listing page;
/// any other client gets the new record as JSON.
pub async fn create_user(
    Extension(services): Extension<Arc<AppServices>>,
    body: UserBody,
) -> axum::response::Response {
    let from_form = body.is_form();

    let user = match services.users_create(body.into_new_user()) {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!("create rejected: {e}");
            return errors::domain_error_to_response(e);
        }
    };
    tracing::info!(id = %user.id, name = %user.name, "user created");

    if from_form {
        (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
    } else {
        (StatusCode::CREATED, Json(user)).into_response()
    }
}

pub async fn update_user(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
    body: UserBody,
) -> axum::response::Response {
    let name = match user_name(path) {
        Ok(n) => n,
        Err(res) => return res,
    };
    match services.users_update(&name, body.into_patch()) {
        Ok(user) => {
            tracing::info!(id = %user.id, name = %user.name, "user updated");
            (StatusCode::OK, Json(dto::UserUpdatedResponse::new(user))).into_response()
        }
        Err(e) => {
            tracing::debug!(%name, "update target missing");
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn delete_user(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let name = match user_name(path) {
        Ok(n) => n,
        Err(res) => return res,
    };
    match services.users_delete(&name) {
        Ok(removed) => {
            let lowered = name.to_lowercase();
            tracing::info!(name = %lowered, removed, "user deleted");
            (StatusCode::OK, Json(dto::user_deleted(&lowered))).into_response()
        }
        Err(e) => {
            tracing::debug!(%name, "delete target missing");
            errors::domain_error_to_response(e)
        }
    }
}
