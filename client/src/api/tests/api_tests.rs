//! Tests for the endpoint facades

use std::sync::Arc;

use reqwest::Method;

use cl_core::domain::value_objects::auth::SignInPayload;
use cl_core::domain::value_objects::course::{CourseQuery, CourseSortBy};
use cl_core::domain::value_objects::user::UpdateProfilePayload;
use cl_core::stores::token::MemoryTokenStore;
use cl_shared::types::SortOrder;

use crate::api::{AuthenticationApi, CourseApi, ReviewApi, UserApi};
use crate::http::tests::mocks::{refresh_ok, MockTransport, RecordingSession};
use crate::http::{ApiClient, HttpResponse};

fn client_with(transport: Arc<MockTransport>) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(
        transport,
        Arc::new(MemoryTokenStore::with_token("tok-1")),
        Arc::new(RecordingSession::new()),
    ))
}

#[tokio::test]
async fn test_sign_in_posts_credentials_and_decodes_token() {
    let transport = Arc::new(MockTransport::new(vec![refresh_ok("issued")]));
    let api = AuthenticationApi::new(client_with(transport.clone()));

    let response = api
        .sign_in(&SignInPayload {
            email: "student@courselane.app".to_string(),
            password: "123456".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.access_token, "issued");
    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/authentication/sign-in");
    assert_eq!(
        request.body.as_ref().unwrap()["email"],
        "student@courselane.app"
    );
}

#[tokio::test]
async fn test_available_courses_renders_query() {
    let body = serde_json::json!({
        "page": 1,
        "limit": 10,
        "total": 0,
        "pages": 0,
        "availableCourses": []
    });
    let transport = Arc::new(MockTransport::new(vec![Ok(HttpResponse::json_body(
        200, &body,
    ))]));
    let api = CourseApi::new(client_with(transport.clone()));

    let query = CourseQuery {
        search: Some("rust".to_string()),
        sort_by: Some(CourseSortBy::Price),
        order: Some(SortOrder::Asc),
        ..Default::default()
    };
    let response = api.available_courses(&query).await.unwrap();

    assert!(response.available_courses.is_empty());
    let request = &transport.requests()[0];
    assert_eq!(request.path, "/courses");
    assert!(request
        .query
        .contains(&("search".to_string(), "rust".to_string())));
    assert!(request
        .query
        .contains(&("sortBy".to_string(), "price".to_string())));
}

#[tokio::test]
async fn test_course_detail_paths_carry_the_id() {
    let body = serde_json::json!({ "reviews": [] });
    let transport = Arc::new(MockTransport::new(vec![Ok(HttpResponse::json_body(
        200, &body,
    ))]));
    let api = ReviewApi::new(client_with(transport.clone()));

    api.course_reviews(42).await.unwrap();

    assert_eq!(transport.requests()[0].path, "/reviews/course/42");
}

#[tokio::test]
async fn test_update_profile_patches_users_me() {
    let body = serde_json::json!({ "message": "Profile updated" });
    let transport = Arc::new(MockTransport::new(vec![Ok(HttpResponse::json_body(
        200, &body,
    ))]));
    let api = UserApi::new(client_with(transport.clone()));

    let payload = UpdateProfilePayload {
        first_name: Some("Anna".to_string()),
        ..Default::default()
    };
    let response = api.update_my_profile(&payload).await.unwrap();

    assert_eq!(response.message, "Profile updated");
    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.path, "/users/me");
    assert_eq!(request.body.as_ref().unwrap()["firstName"], "Anna");
    assert!(request.body.as_ref().unwrap().get("lastName").is_none());
}
