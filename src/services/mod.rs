pub mod data_stores;
mod member_service;

pub use member_service::MemberService;
