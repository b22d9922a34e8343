use std::sync::Arc;

use crate::{domain::MemberStore, services::MemberService};
pub type MemberStoreType = Arc<dyn MemberStore + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub member_service: Arc<MemberService>,
}

impl AppState {
    pub fn new(member_service: Arc<MemberService>) -> Self {
        Self { member_service }
    }
}
