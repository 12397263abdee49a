//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors, so each test controls the database
//! and session contents exactly.

mod admin;
mod auth;
mod branch;

use axum::{
    body::to_bytes,
    http::header::LOCATION,
    response::Response,
};
use chrono::NaiveDate;
use imx::server::{
    model::session::user::SessionUserId,
    service::user::{NewUser, UserService},
};
use imx_test_utils::prelude::*;

pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// Read the rendered page of a response.
pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: Some(TEST_PASSWORD.to_string()),
        surname: "박".to_string(),
        given_name: "서준".to_string(),
        email: None,
        birthday: NaiveDate::from_ymd_opt(1998, 7, 14).unwrap(),
        gender: 1,
        phone_number: "010-5555-0101".to_string(),
        branch_id: 1,
        license_type: None,
        plan_type: None,
    }
}

/// Database with user tables and the default branch, with a staff member logged in.
pub async fn staff_setup() -> Result<TestContext, TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_branch("본점")
        .build()
        .await?;

    let staff = UserService::new(&test.db)
        .create_staff(new_user("manager"))
        .await
        .unwrap();
    SessionUserId::insert(&test.session, staff.id).await.unwrap();

    Ok(test)
}

/// Database with user tables and the default branch, with a superuser logged in.
pub async fn superuser_setup() -> Result<TestContext, TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_branch("본점")
        .build()
        .await?;

    let admin = UserService::new(&test.db)
        .create_superuser(new_user("admin"))
        .await
        .unwrap();
    SessionUserId::insert(&test.session, admin.id).await.unwrap();

    Ok(test)
}
