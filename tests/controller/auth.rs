use axum::{extract::State, http::StatusCode, response::IntoResponse, Form};
use imx::{
    model::form::LoginForm,
    server::{
        controller::auth::{login, login_page, logout},
        error::auth::AuthError,
        model::{app::AppState, session::user::SessionUserId},
        router::{ADMIN_PATH, LOGIN_PATH},
        service::user::UserService,
    },
};
use imx_test_utils::prelude::*;

use super::{body_text, location, new_user, TEST_PASSWORD};

async fn setup() -> Result<TestContext, TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_branch("본점")
        .build()
        .await?;

    UserService::new(&test.db)
        .create_staff(new_user("manager"))
        .await
        .unwrap();

    Ok(test)
}

fn login_form(username: &str, password: &str) -> LoginForm {
    LoginForm {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn login_page_renders_form() -> Result<(), TestError> {
    let resp = login_page().await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("name=\"password\""));

    Ok(())
}

#[tokio::test]
/// Expect 303 to the back-office with the user ID stored in session
async fn login_stores_user_in_session() -> Result<(), TestError> {
    let test = setup().await?;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Form(login_form(" manager ", TEST_PASSWORD)),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some(ADMIN_PATH));
    let user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(user_id.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 200 with the login form and an error for a wrong password
async fn login_rerenders_on_wrong_password() -> Result<(), TestError> {
    let test = setup().await?;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Form(login_form("manager", "wrong password")),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains(AuthError::INVALID_CREDENTIALS_MESSAGE));
    // The username is kept, the password is not
    assert!(body.contains("value=\"manager\""));
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect unknown usernames to look exactly like wrong passwords
async fn login_rerenders_on_unknown_user() -> Result<(), TestError> {
    let test = setup().await?;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Form(login_form("nobody", TEST_PASSWORD)),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp)
        .await
        .contains(AuthError::INVALID_CREDENTIALS_MESSAGE));

    Ok(())
}

#[tokio::test]
/// Expect 303 to the login page after logout with a user ID in session
async fn logout_clears_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some(LOGIN_PATH));

    // Ensure user was cleared from session
    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 303 to the login page after logout even without session data
async fn logout_without_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = logout(test.session).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    Ok(())
}
