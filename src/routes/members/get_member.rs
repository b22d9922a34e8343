use askama::Template;
use axum::extract::{Path, State};

use crate::{
    domain::{MemberAPIError, MemberId},
    utils::template::HtmlTemplate,
    AppState,
};

#[derive(Template)]
#[template(path = "members/member.html")]
pub struct MemberTemplate {
    pub id: MemberId,
    pub name: String,
}

#[tracing::instrument(name = "Get member route handler", skip_all)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> Result<HtmlTemplate<MemberTemplate>, MemberAPIError> {
    let member_id = MemberId::parse(&member_id)?;

    let member = state
        .member_service
        .find_one(&member_id)
        .await?
        .ok_or(MemberAPIError::IDNotFoundError(member_id))?;

    Ok(HtmlTemplate::ok(MemberTemplate {
        id: member_id,
        name: member.name.to_string(),
    }))
}
