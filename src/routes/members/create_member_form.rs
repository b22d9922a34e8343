use askama::Template;

use crate::utils::template::HtmlTemplate;

#[derive(Template)]
#[template(path = "members/create_member_form.html")]
pub struct CreateMemberFormTemplate;

#[tracing::instrument(name = "Create member form route handler", skip_all)]
pub async fn create_member_form() -> HtmlTemplate<CreateMemberFormTemplate> {
    HtmlTemplate::ok(CreateMemberFormTemplate)
}
