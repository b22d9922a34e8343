use crate::helpers::{get_body, TestApp};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_with_name_field(app: &mut TestApp) {
    let response = app.get_create_member_form().await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_body(response).await;
    assert!(
        body.contains(r#"action="/members/new""#),
        "Form should post back to /members/new"
    );
    assert!(body.contains(r#"name="name""#), "Form should have a name field");
}
