//! Tests for back-office endpoints.

mod branch;
mod user;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use imx::server::{
    controller::admin::index,
    model::{app::AppState, session::user::SessionUserId},
    router::LOGIN_PATH,
};
use imx_test_utils::prelude::*;

use super::{body_text, location, staff_setup};

#[tokio::test]
/// Expect 200 with a link to every managed model for a staff member
async fn index_lists_models_for_staff() -> Result<(), TestError> {
    let test = staff_setup().await?;

    let result = index(State(test.to_app_state::<AppState>()), test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("href=\"/admin/users\""));
    assert!(body.contains("href=\"/admin/branches\""));
    assert!(body.contains("manager"));

    Ok(())
}

#[tokio::test]
/// Expect 303 to the login page without a logged-in user
async fn index_redirects_anonymous_visitor() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = index(State(test.to_app_state::<AppState>()), test.session.clone()).await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some(LOGIN_PATH));

    Ok(())
}

#[tokio::test]
/// Expect 303 to the login page for a logged-in student without staff permission
async fn index_redirects_non_staff() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_user_tables()
        .with_mock_branch("본점")
        .build()
        .await?;
    let user = test.user().insert_mock_user("student", 1).await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = index(State(test.to_app_state::<AppState>()), test.session.clone()).await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some(LOGIN_PATH));

    Ok(())
}
