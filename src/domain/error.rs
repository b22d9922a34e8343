use color_eyre::eyre::Report;
use thiserror::Error;

use super::{MemberId, MemberStoreError};

#[derive(Debug, Error)]
pub enum MemberServiceError {
    #[error("Member already exists")]
    DuplicateMember,
    #[error("Member store error")]
    Store(#[from] MemberStoreError),
}

impl PartialEq for MemberServiceError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::DuplicateMember, Self::DuplicateMember) => true,
            (Self::Store(a), Self::Store(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum MemberAPIError {
    #[error("Member already exists")]
    DuplicateMember,
    #[error("Member with ID not found: {0}")]
    IDNotFoundError(MemberId),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

impl From<MemberServiceError> for MemberAPIError {
    fn from(e: MemberServiceError) -> Self {
        match e {
            MemberServiceError::DuplicateMember
            | MemberServiceError::Store(MemberStoreError::NameConflict) => {
                Self::DuplicateMember
            }
            e => Self::UnexpectedError(Report::new(e)),
        }
    }
}

#[derive(Debug, Error)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
