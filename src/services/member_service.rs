use color_eyre::eyre::eyre;

use crate::{
    app_state::MemberStoreType,
    domain::{Member, MemberId, MemberServiceError, MemberStoreError},
};

/// Member registration. Names are unique across the store.
///
/// The duplicate check and the save are separate store calls, so two
/// concurrent joins with the same name can both pass the check. Stores that
/// enforce uniqueness themselves report the loser as
/// `MemberStoreError::NameConflict`.
pub struct MemberService {
    member_store: MemberStoreType,
}

impl MemberService {
    pub fn new(member_store: MemberStoreType) -> Self {
        Self { member_store }
    }

    #[tracing::instrument(
        name = "Joining member",
        skip_all,
        fields(member_name = %member.name)
    )]
    pub async fn join(
        &self,
        member: Member,
    ) -> Result<MemberId, MemberServiceError> {
        self.validate_duplicate_member(&member).await?;

        let saved = self.member_store.save(member).await?;
        let id = saved.id.ok_or_else(|| {
            MemberStoreError::UnexpectedError(eyre!(
                "Store returned member without ID"
            ))
        })?;

        tracing::debug!("member joined with id {id}");
        Ok(id)
    }

    #[tracing::instrument(name = "Validating duplicate member", skip_all)]
    pub async fn validate_duplicate_member(
        &self,
        member: &Member,
    ) -> Result<(), MemberServiceError> {
        match self.member_store.find_by_name(&member.name).await? {
            Some(_) => Err(MemberServiceError::DuplicateMember),
            None => Ok(()),
        }
    }

    #[tracing::instrument(name = "Finding all members", skip_all)]
    pub async fn find_members(&self) -> Result<Vec<Member>, MemberServiceError> {
        Ok(self.member_store.find_all().await?)
    }

    #[tracing::instrument(name = "Finding member", skip_all, fields(member_id = %id))]
    pub async fn find_one(
        &self,
        id: &MemberId,
    ) -> Result<Option<Member>, MemberServiceError> {
        Ok(self.member_store.find_by_id(id).await?)
    }
}
