//! Server-rendered landing page: the current users plus a creation form.

use std::sync::Arc;

use axum::{extract::Extension, response::Html};

use usuarios_core::User;

use crate::app::services::AppServices;

pub async fn index(Extension(services): Extension<Arc<AppServices>>) -> Html<String> {
    Html(render_index(&services.users_list()))
}

pub fn render_index(users: &[User]) -> String {
    let items: String = users
        .iter()
        .map(|u| {
            format!(
                "<li>ID: {} | Name: {} | Age: {} | Origin: {}</li>",
                u.id,
                escape_html(&u.name),
                u.age,
                escape_html(&u.origin_place),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Street Fighter - Users</title></head>
<body>
    <h1>Street Fighter - User list</h1>
    <ul>{items}</ul>

    <h2>Add a new user</h2>
    <form action="/usuarios" method="post">
        <label for="name">Name:</label>
        <input type="text" id="name" name="name" required><br>
        <label for="age">Age:</label>
        <input type="number" id="age" name="age" required><br>
        <label for="originPlace">Origin place:</label>
        <input type="text" id="originPlace" name="originPlace" required><br>
        <button type="submit">Add</button>
    </form>

    <p><a href="/usuarios">View users as JSON</a></p>
</body>
</html>
"#
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
