use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::SERVER_ERROR_MESSAGE;

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Name of the logged in user, if the request carried a live session.
    pub username: Option<String>,
}

pub fn render<T: askama::Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("Failed to render template: {err}");

            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_shows_username() {
        let html = askama::Template::render(&IndexTemplate {
            username: Some("testuser".to_owned()),
        })
        .unwrap();
        assert!(html.contains("testuser"));

        let html = askama::Template::render(&IndexTemplate { username: None }).unwrap();
        assert!(html.contains("Not logged in"));
    }

    #[test]
    fn test_username_is_escaped() {
        let html = askama::Template::render(&IndexTemplate {
            username: Some("<script>".to_owned()),
        })
        .unwrap();

        assert!(!html.contains("<b><script></b>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
