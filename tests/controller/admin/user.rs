use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use imx::{
    model::form::{UserChangeForm, UserForm, UserListQuery},
    server::{
        admin::user::DEACTIVATE_USERS,
        controller::admin::user::{action, add, change, detail, list, SELECTED_ACTION_FIELD},
        model::{app::AppState, session::user::SessionUserId},
        service::user::{UserService, DUPLICATE_USERNAME_MESSAGE, PERMISSION_CHANGE_MESSAGE},
    },
};
use imx_test_utils::prelude::*;

use crate::controller::{body_text, location, staff_setup, superuser_setup};

fn pair(key: &str, value: impl ToString) -> (String, String) {
    (key.to_string(), value.to_string())
}

fn user_form(username: &str) -> UserForm {
    UserForm {
        username: username.to_string(),
        password: "correct horse battery staple".to_string(),
        surname: "최".to_string(),
        given_name: "유리".to_string(),
        birthday: "2002-11-30".to_string(),
        gender: "2".to_string(),
        phone_number: "010-7777-8888".to_string(),
        license_type: "2O".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
/// Expect the search to narrow the list by name
async fn list_filters_by_search() -> Result<(), TestError> {
    let mut test = staff_setup().await?;
    test.user().insert_mock_user("gildong", 1).await?;

    let result = list(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Query(UserListQuery {
            q: "길동".to_string(),
            ..Default::default()
        }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("홍 길동"));
    assert!(!body.contains("박 서준"));

    Ok(())
}

#[tokio::test]
/// Expect the bulk action to deactivate exactly the ticked users and report the count
async fn action_deactivates_selected_users() -> Result<(), TestError> {
    let mut test = staff_setup().await?;
    let first = test.user().insert_mock_user("first", 1).await?;
    let second = test.user().insert_mock_user("second", 1).await?;
    let state = test.to_app_state::<AppState>();

    let result = action(
        State(state.clone()),
        test.session.clone(),
        Form(vec![
            pair("action", DEACTIVATE_USERS),
            pair(SELECTED_ACTION_FIELD, first.id),
        ]),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/users"));

    let user_service = UserService::new(&test.db);
    assert!(!user_service.get_user(first.id).await.unwrap().unwrap().is_active);
    assert!(user_service.get_user(second.id).await.unwrap().unwrap().is_active);

    let resp = list(
        State(state),
        test.session.clone(),
        Query(UserListQuery::default()),
    )
    .await
    .unwrap()
    .into_response();
    assert!(body_text(resp).await.contains("1명의 이용자를 비활성화했습니다."));

    Ok(())
}

#[tokio::test]
/// Expect an unknown action to change nothing
async fn action_refuses_unknown_action() -> Result<(), TestError> {
    let mut test = staff_setup().await?;
    let user = test.user().insert_mock_user("first", 1).await?;

    let result = action(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Form(vec![
            pair("action", "delete_users"),
            pair(SELECTED_ACTION_FIELD, user.id),
        ]),
    )
    .await;

    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::SEE_OTHER
    );
    let user = UserService::new(&test.db).get_user(user.id).await.unwrap();
    assert!(user.unwrap().is_active);

    Ok(())
}

#[tokio::test]
/// Expect 303 to the change page of the created account
async fn add_creates_account() -> Result<(), TestError> {
    let test = staff_setup().await?;

    let result = add(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Form(user_form("yuri")),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let user = UserService::new(&test.db)
        .get_by_username("yuri")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(location(&resp), Some(format!("/admin/users/{}", user.id).as_str()));
    assert!(!user.is_staff);
    assert_eq!(user.license_type.as_deref(), Some("2종 보통"));

    Ok(())
}

#[tokio::test]
/// Expect 200 with a field error when the username is taken
async fn add_rerenders_duplicate_username() -> Result<(), TestError> {
    let test = staff_setup().await?;

    let result = add(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Form(user_form("manager")),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains(DUPLICATE_USERNAME_MESSAGE));
    assert!(!body.contains("correct horse battery staple"));

    Ok(())
}

#[tokio::test]
/// Expect 404 for an account that does not exist
async fn detail_returns_not_found() -> Result<(), TestError> {
    let test = staff_setup().await?;

    let result = detail(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Path(999),
    )
    .await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the change form to save permissions and return to the change page
async fn change_updates_account() -> Result<(), TestError> {
    let mut test = superuser_setup().await?;
    let user = test.user().insert_mock_user("gildong", 1).await?;
    let state = test.to_app_state::<AppState>();

    let result = change(
        State(state.clone()),
        test.session.clone(),
        Path(user.id),
        Form(UserChangeForm {
            surname: "홍".to_string(),
            given_name: "길순".to_string(),
            birthday: "2000-01-01".to_string(),
            gender: "2".to_string(),
            phone_number: "010-1234-5678".to_string(),
            is_active: Some("on".to_string()),
            is_staff: Some("on".to_string()),
            is_superuser: None,
        }),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = detail(State(state), test.session.clone(), Path(user.id))
        .await
        .unwrap()
        .into_response();
    let body = body_text(resp).await;
    assert!(body.contains("이용자 정보를 저장했습니다."));

    let updated = UserService::new(&test.db)
        .get_user(user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.given_name, "길순");
    assert!(updated.is_staff);
    assert!(!updated.is_superuser);

    Ok(())
}

fn change_form(is_superuser: bool) -> UserChangeForm {
    UserChangeForm {
        surname: "박".to_string(),
        given_name: "서준".to_string(),
        birthday: "1998-07-14".to_string(),
        gender: "1".to_string(),
        phone_number: "010-5555-0101".to_string(),
        is_active: Some("on".to_string()),
        is_staff: Some("on".to_string()),
        is_superuser: is_superuser.then(|| "on".to_string()),
    }
}

#[tokio::test]
/// Expect 200 with a permission error when staff ticks the superuser box on their own account
async fn change_refuses_superuser_grant_by_staff() -> Result<(), TestError> {
    let test = staff_setup().await?;
    let staff_id = SessionUserId::get(&test.session).await.unwrap().unwrap();

    let result = change(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Path(staff_id),
        Form(change_form(true)),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains(PERMISSION_CHANGE_MESSAGE));

    let staff = UserService::new(&test.db)
        .get_user(staff_id)
        .await
        .unwrap()
        .unwrap();
    assert!(staff.is_staff);
    assert!(!staff.is_superuser);

    Ok(())
}

#[tokio::test]
/// Expect staff to save personal details when the permission boxes are left as they were
async fn change_keeps_permissions_for_staff() -> Result<(), TestError> {
    let test = staff_setup().await?;
    let staff_id = SessionUserId::get(&test.session).await.unwrap().unwrap();

    let result = change(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Path(staff_id),
        Form(change_form(false)),
    )
    .await;

    assert_eq!(result.unwrap().status(), StatusCode::SEE_OTHER);

    Ok(())
}

#[tokio::test]
/// Expect staff to be refused creating a superuser
async fn add_refuses_superuser_by_staff() -> Result<(), TestError> {
    let test = staff_setup().await?;

    let mut form = user_form("yuri");
    form.is_superuser = Some("on".to_string());
    let result = add(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Form(form),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains(PERMISSION_CHANGE_MESSAGE));
    assert!(UserService::new(&test.db)
        .get_by_username("yuri")
        .await
        .unwrap()
        .is_none());

    Ok(())
}
