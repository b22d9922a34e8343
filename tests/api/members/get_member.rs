use crate::helpers::{create_member, get_body, TestApp};
use member_registry::domain::{MemberName, MemberStore};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_for_registered_member(app: &mut TestApp) {
    create_member(app, "Ted").await;

    let member = app
        .member_store
        .find_by_name(&MemberName::parse("Ted").unwrap())
        .await
        .unwrap()
        .expect("Member should exist");
    let member_id = member.id.expect("Stored member should have an ID");

    let response = app.get_member(&member_id.to_string()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_body(response).await;
    assert!(body.contains("<dd>Ted</dd>"), "{body}");
    assert!(body.contains(&format!("<dd>{member_id}</dd>")), "{body}");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_unknown_member(app: &mut TestApp) {
    create_member(app, "Ted").await;

    let response = app.get_member("999999").await;
    assert_eq!(
        response.status().as_u16(),
        404,
        "Should return 404 for IDs that were never assigned"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_malformed_member_id(app: &mut TestApp) {
    for member_id in ["abc", "0", "-1"] {
        let response = app.get_member(member_id).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Should return 400 for member ID: {member_id}"
        );
    }
}
