use askama::Template;
use axum::extract::State;

use crate::{
    domain::{Member, MemberAPIError},
    utils::template::HtmlTemplate,
    AppState,
};

#[derive(Template)]
#[template(path = "members/member_list.html")]
pub struct MemberListTemplate {
    pub members: Vec<MemberView>,
}

#[derive(Debug, PartialEq)]
pub struct MemberView {
    pub id: i64,
    pub name: String,
}

impl From<Member> for MemberView {
    fn from(member: Member) -> Self {
        Self {
            id: member.id.map(|id| *id.as_ref()).unwrap_or_default(),
            name: member.name.to_string(),
        }
    }
}

#[tracing::instrument(name = "Member list route handler", skip_all)]
pub async fn member_list(
    State(state): State<AppState>,
) -> Result<HtmlTemplate<MemberListTemplate>, MemberAPIError> {
    let members = state.member_service.find_members().await?;
    tracing::debug!("rendering {} members", members.len());

    Ok(HtmlTemplate::ok(MemberListTemplate {
        members: members.into_iter().map(MemberView::from).collect(),
    }))
}
