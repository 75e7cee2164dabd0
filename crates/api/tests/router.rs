use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use usuarios_api::app::{build_app, build_app_with};
use usuarios_core::UserRegistry;

async fn send(app: &Router, method: Method, uri: &str, content_type: Option<&str>, body: &str) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let req = builder.body(Body::from(body.to_string())).unwrap();

    app.clone().oneshot(req).await.unwrap()
}

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    send(app, Method::GET, uri, None, "").await
}

async fn body_json(res: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(res: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_endpoint_works() {
    let app = build_app();
    let res = get(&app, "/health").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn list_returns_seeded_users_in_order() {
    let app = build_app();
    let res = get(&app, "/usuarios").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = body_json(res).await;
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Ryu", "age": 32, "originPlace": "Japón" },
            { "id": 2, "name": "Chun-Li", "age": 29, "originPlace": "China" },
            { "id": 3, "name": "Guile", "age": 35, "originPlace": "Estados Unidos" },
            { "id": 4, "name": "Dhalsim", "age": 45, "originPlace": "India" },
            { "id": 5, "name": "Blanka", "age": 32, "originPlace": "Brasil" },
        ])
    );
}

#[tokio::test]
async fn lookup_by_name_ignores_case() {
    let app = build_app();

    let lower = body_json(get(&app, "/usuarios/ryu").await).await;
    let upper = body_json(get(&app, "/usuarios/RYU").await).await;
    assert_eq!(lower, upper);
    assert_eq!(lower["id"], 1);
}

#[tokio::test]
async fn unknown_user_is_404() {
    let app = build_app();
    let res = get(&app, "/usuarios/unknown").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(res).await, json!({ "message": "User not found" }));
}

#[tokio::test]
async fn json_create_returns_201_with_next_id() {
    let app = build_app();
    let res = send(
        &app,
        Method::POST,
        "/usuarios",
        Some("application/json"),
        r#"{"name":"Ken","age":30,"originPlace":"Japan"}"#,
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(res).await,
        json!({ "id": 6, "name": "Ken", "age": 30, "originPlace": "Japan" })
    );

    let list = body_json(get(&app, "/usuarios").await).await;
    assert_eq!(list.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn create_missing_age_is_400() {
    let app = build_app();
    let res = send(
        &app,
        Method::POST,
        "/usuarios",
        Some("application/json"),
        r#"{"name":"Ken","originPlace":"Japan"}"#,
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await, json!({ "message": "Missing user data" }));
}

#[tokio::test]
async fn create_without_content_type_is_400() {
    let app = build_app();
    let res = send(
        &app,
        Method::POST,
        "/usuarios",
        None,
        r#"{"name":"Ken","age":30,"originPlace":"Japan"}"#,
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = build_app();
    let res = send(&app, Method::POST, "/usuarios", Some("application/json"), "{not json").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await, json!({ "message": "Invalid request body" }));
}

#[tokio::test]
async fn form_create_redirects_home() {
    let app = build_app();
    let res = send(
        &app,
        Method::POST,
        "/usuarios",
        Some("application/x-www-form-urlencoded"),
        "name=Cammy&age=25&originPlace=Reino+Unido",
    )
    .await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(res.headers()[header::LOCATION], "/");

    let cammy = body_json(get(&app, "/usuarios/cammy").await).await;
    assert_eq!(
        cammy,
        json!({ "id": 6, "name": "Cammy", "age": 25, "originPlace": "Reino Unido" })
    );

    let page = body_text(get(&app, "/").await).await;
    assert!(page.contains("Name: Cammy | Age: 25 | Origin: Reino Unido"));
}

#[tokio::test]
async fn non_numeric_age_is_stored_as_null() {
    let app = build_app();
    let res = send(
        &app,
        Method::POST,
        "/usuarios",
        Some("application/json"),
        r#"{"name":"Sagat","age":"old","originPlace":"Tailandia"}"#,
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(body_json(res).await["age"], Value::Null);
}

#[tokio::test]
async fn update_changes_only_age() {
    let app = build_app();
    send(
        &app,
        Method::POST,
        "/usuarios",
        Some("application/json"),
        r#"{"name":"Ken","age":30,"originPlace":"Japan"}"#,
    )
    .await;

    let res = send(&app, Method::PUT, "/usuarios/ken", Some("application/json"), r#"{"age":31}"#).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        body_json(res).await,
        json!({
            "message": "User updated",
            "user": { "id": 6, "name": "Ken", "age": 31, "originPlace": "Japan" }
        })
    );
}

#[tokio::test]
async fn update_with_empty_body_changes_nothing() {
    let app = build_app();
    let res = send(&app, Method::PUT, "/usuarios/guile", Some("application/json"), "").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        body_json(res).await["user"],
        json!({ "id": 3, "name": "Guile", "age": 35, "originPlace": "Estados Unidos" })
    );
}

#[tokio::test]
async fn update_unknown_is_404() {
    let app = build_app();
    let res = send(&app, Method::PUT, "/usuarios/nobody", Some("application/json"), r#"{"age":1}"#).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_lookup_and_repeat_are_404() {
    let app = build_app();

    let res = send(&app, Method::DELETE, "/usuarios/Dhalsim", None, "").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await, json!({ "message": "User dhalsim deleted" }));

    let res = get(&app, "/usuarios/dhalsim").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = send(&app, Method::DELETE, "/usuarios/dhalsim", None, "").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(res).await, json!({ "message": "User not found" }));
}

#[tokio::test]
async fn recreate_after_delete_repeats_an_id() {
    let app = build_app();
    send(&app, Method::DELETE, "/usuarios/ryu", None, "").await;

    let res = send(
        &app,
        Method::POST,
        "/usuarios",
        Some("application/json"),
        r#"{"name":"Ken","age":30,"originPlace":"Japan"}"#,
    )
    .await;
    assert_eq!(body_json(res).await["id"], 5);

    let list = body_json(get(&app, "/usuarios").await).await;
    let fives = list.as_array().unwrap().iter().filter(|u| u["id"] == 5).count();
    assert_eq!(fives, 2);
}

#[tokio::test]
async fn empty_registry_serves_empty_list() {
    let app = build_app_with(UserRegistry::new());
    let body = body_json(get(&app, "/usuarios").await).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn home_page_lists_users_and_form() {
    let app = build_app();
    let res = get(&app, "/").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let page = body_text(res).await;
    assert!(page.contains("Name: Blanka | Age: 32 | Origin: Brasil"));
    assert!(page.contains(r#"<form action="/usuarios" method="post">"#));
}

#[tokio::test]
async fn update_via_form_body() {
    let app = build_app();
    let res = send(
        &app,
        Method::PUT,
        "/usuarios/ryu",
        Some("application/x-www-form-urlencoded"),
        "age=0&originPlace=Osaka",
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        body_json(res).await,
        json!({
            "message": "User updated",
            "user": { "id": 1, "name": "Ryu", "age": 0, "originPlace": "Osaka" }
        })
    );
}

#[tokio::test]
async fn update_with_text_plain_body_changes_nothing() {
    let app = build_app();
    let res = send(
        &app,
        Method::PUT,
        "/usuarios/chun-li",
        Some("text/plain"),
        r#"{"age":99,"originPlace":"Hong Kong"}"#,
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        body_json(res).await["user"],
        json!({ "id": 2, "name": "Chun-Li", "age": 29, "originPlace": "China" })
    );

    let res = send(&app, Method::PUT, "/usuarios/chun-li", None, "age=99").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["user"]["age"], 29);
}

#[tokio::test]
async fn non_utf8_name_is_json_400() {
    let app = build_app();

    let res = get(&app, "/usuarios/%FF").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await, json!({ "message": "Invalid user name" }));

    let res = send(&app, Method::DELETE, "/usuarios/%FF", None, "").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await, json!({ "message": "Invalid user name" }));

    let res = send(&app, Method::PUT, "/usuarios/%FF", Some("application/json"), r#"{"age":1}"#).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn collection_accepts_trailing_slash() {
    let app = build_app();

    let res = get(&app, "/usuarios/").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await.as_array().unwrap().len(), 5);

    let res = send(
        &app,
        Method::POST,
        "/usuarios/",
        Some("application/json"),
        r#"{"name":"Ken","age":30,"originPlace":"Japan"}"#,
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(body_json(res).await["id"], 6);
}
