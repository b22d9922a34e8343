mod create_member;
mod create_member_form;
mod get_member;
mod member_list;

pub use create_member::{create_member, CreateMemberForm};
pub use create_member_form::create_member_form;
pub use get_member::get_member;
pub use member_list::{member_list, MemberView};
