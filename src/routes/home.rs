use askama::Template;

use crate::utils::template::HtmlTemplate;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

#[tracing::instrument(name = "Home page route handler", skip_all)]
pub async fn home() -> HtmlTemplate<HomeTemplate> {
    HtmlTemplate::ok(HomeTemplate)
}
