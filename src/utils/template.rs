use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Renders an askama template as an HTML response with the given status.
pub struct HtmlTemplate<T>(pub StatusCode, pub T);

impl<T> HtmlTemplate<T> {
    pub fn ok(template: T) -> Self {
        Self(StatusCode::OK, template)
    }
}

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.1.render() {
            Ok(html) => (self.0, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render template: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render page".to_string(),
                )
                    .into_response()
            }
        }
    }
}
