use crate::domain::{
    Member, MemberId, MemberName, MemberStore, MemberStoreError,
};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-memory member store. Names are not constrained to be unique here,
/// that check lives in `MemberService`.
#[derive(Default)]
pub struct InMemoryMemberStore {
    members: RwLock<Members>,
}

#[derive(Default)]
struct Members {
    by_id: BTreeMap<MemberId, Member>,
    last_id: i64,
}

#[async_trait::async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn save(&self, member: Member) -> Result<Member, MemberStoreError> {
        if let Some(id) = member.id {
            return Err(MemberStoreError::AlreadyPersisted(id));
        }

        let mut members = self.members.write().await;
        members.last_id += 1;
        let id = MemberId::new(members.last_id);
        let member = member.with_id(id);

        members.by_id.insert(id, member.clone());
        Ok(member)
    }

    async fn find_by_id(
        &self,
        id: &MemberId,
    ) -> Result<Option<Member>, MemberStoreError> {
        Ok(self.members.read().await.by_id.get(id).cloned())
    }

    async fn find_by_name(
        &self,
        name: &MemberName,
    ) -> Result<Option<Member>, MemberStoreError> {
        Ok(self
            .members
            .read()
            .await
            .by_id
            .values()
            .find(|member| &member.name == name)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>, MemberStoreError> {
        Ok(self.members.read().await.by_id.values().cloned().collect())
    }
}
