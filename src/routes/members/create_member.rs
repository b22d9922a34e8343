use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;

use crate::{
    domain::{Member, MemberAPIError, MemberName},
    AppState,
};

#[tracing::instrument(name = "Create member route handler", skip_all)]
pub async fn create_member(
    State(state): State<AppState>,
    Form(form): Form<CreateMemberForm>,
) -> Result<Redirect, MemberAPIError> {
    let member_name = MemberName::parse(&form.name)?;
    let member = Member::new(member_name);

    let member_id = state.member_service.join(member).await?;
    tracing::info!("Registered member with id {member_id}");

    Ok(Redirect::to("/"))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct CreateMemberForm {
    pub name: String,
}
