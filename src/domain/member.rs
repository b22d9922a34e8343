use super::{MemberId, MemberName};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: Option<MemberId>,
    pub name: MemberName,
}

impl Member {
    /// A member that has not been saved yet.
    pub fn new(name: MemberName) -> Self {
        Self { id: None, name }
    }

    pub fn with_id(self, id: MemberId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

#[test]
fn test_new_member_has_no_id() {
    let member = Member::new(MemberName::parse("Ted").unwrap());
    assert_eq!(member.id, None);

    let saved = member.with_id(MemberId::new(3));
    assert_eq!(saved.id, Some(MemberId::new(3)));
    assert_eq!(saved.name.as_ref(), "Ted");
}
