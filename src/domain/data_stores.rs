use super::{Member, MemberId, MemberName};
use color_eyre::eyre::Report;
use thiserror::Error;

#[async_trait::async_trait]
pub trait MemberStore {
    /// Persists a member without an ID and returns it with the ID assigned.
    async fn save(&self, member: Member) -> Result<Member, MemberStoreError>;
    async fn find_by_id(
        &self,
        id: &MemberId,
    ) -> Result<Option<Member>, MemberStoreError>;
    async fn find_by_name(
        &self,
        name: &MemberName,
    ) -> Result<Option<Member>, MemberStoreError>;
    async fn find_all(&self) -> Result<Vec<Member>, MemberStoreError>;
}

#[derive(Debug, Error)]
pub enum MemberStoreError {
    #[error("Member already has an ID: {0}")]
    AlreadyPersisted(MemberId),
    #[error("Member name already taken")]
    NameConflict,
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for MemberStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AlreadyPersisted(_), Self::AlreadyPersisted(_))
                | (Self::NameConflict, Self::NameConflict)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}
