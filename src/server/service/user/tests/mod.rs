mod create_user;

use chrono::NaiveDate;
use imx_test_utils::prelude::*;

use crate::server::{model::db::UserModel, service::user::NewUser};

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: Some("correct horse battery staple".to_string()),
        surname: "이".to_string(),
        given_name: "순신".to_string(),
        email: Some("sunsin@example.com".to_string()),
        birthday: NaiveDate::from_ymd_opt(1995, 4, 28).unwrap(),
        gender: 1,
        phone_number: "010-2345-6789".to_string(),
        branch_id: 1,
        license_type: None,
        plan_type: None,
    }
}

/// Acting account allowed to change every permission flag.
fn superuser() -> UserModel {
    let mut actor = user_factory::mock_user_model(0, "admin", 1);
    actor.is_staff = true;
    actor.is_superuser = true;
    actor
}

async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_user_tables()
        .with_mock_branch("본점")
        .build()
        .await
}
