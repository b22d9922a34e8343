mod in_memory_member_store;
mod postgres_member_store;

pub use in_memory_member_store::InMemoryMemberStore;
pub use postgres_member_store::PostgresMemberStore;
