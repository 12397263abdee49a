use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use imx::{
    model::form::{ActiveForm, BranchListQuery, BusinessHourForm, DurationForm, TimetableForm},
    server::{
        controller::admin::branch::{
            delete, detail, generate_timetable, list, set_active, set_business_hour, set_duration,
        },
        model::app::AppState,
        service::{
            branch::{schedule::CLOSE_BEFORE_OPEN_MESSAGE, BranchService},
            user::UserService,
        },
    },
};
use imx_test_utils::prelude::*;

use crate::controller::{body_text, location, staff_setup};

fn on() -> Option<String> {
    Some("on".to_string())
}

#[tokio::test]
/// Expect the inline checkbox to close the branch and the filter to hide it
async fn set_active_closes_branch() -> Result<(), TestError> {
    let mut test = staff_setup().await?;
    test.branch().insert_mock_branch("강남").await?;
    let state = test.to_app_state::<AppState>();

    let result = set_active(
        State(state.clone()),
        test.session.clone(),
        Path(2),
        Form(ActiveForm { is_active: None }),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/branches"));

    let resp = list(
        State(state),
        test.session.clone(),
        Query(BranchListQuery {
            q: String::new(),
            is_active: "1".to_string(),
        }),
    )
    .await
    .unwrap()
    .into_response();
    let body = body_text(resp).await;
    assert!(body.contains("본점"));
    assert!(!body.contains("강남점"));

    Ok(())
}

#[tokio::test]
/// Expect 404 when toggling a branch that does not exist
async fn set_active_returns_not_found() -> Result<(), TestError> {
    let test = staff_setup().await?;

    let result = set_active(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Path(42),
        Form(ActiveForm { is_active: on() }),
    )
    .await;

    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect hours and durations to feed the generated timetable shown on the branch page
async fn schedule_forms_generate_timetable() -> Result<(), TestError> {
    let test = staff_setup().await?;
    let state = test.to_app_state::<AppState>();

    let resp = set_business_hour(
        State(state.clone()),
        test.session.clone(),
        Path(1),
        Form(BusinessHourForm {
            is_weekday: on(),
            open_time: "09:00".to_string(),
            close_time: "12:00".to_string(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = set_duration(
        State(state.clone()),
        test.session.clone(),
        Path(1),
        Form(DurationForm {
            lesson_minutes: "50".to_string(),
            break_minutes: "10".to_string(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = generate_timetable(
        State(state.clone()),
        test.session.clone(),
        Path(1),
        Form(TimetableForm { is_weekday: on() }),
    )
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/branches/1"));

    let resp = detail(State(state), test.session.clone(), Path(1))
        .await
        .unwrap()
        .into_response();
    let body = body_text(resp).await;
    assert!(body.contains("시간표를 생성했습니다."));
    assert!(body.contains("3교시"));
    assert!(body.contains("11:00 ~ 11:50"));

    Ok(())
}

#[tokio::test]
/// Expect closing before opening to be shown as a field error on the branch page
async fn business_hour_rejects_close_before_open() -> Result<(), TestError> {
    let test = staff_setup().await?;

    let resp = set_business_hour(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Path(1),
        Form(BusinessHourForm {
            is_weekday: None,
            open_time: "18:00".to_string(),
            close_time: "10:00".to_string(),
        }),
    )
    .await
    .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains(CLOSE_BEFORE_OPEN_MESSAGE));

    Ok(())
}

#[tokio::test]
/// Expect generating without business hours to report the missing hours
async fn timetable_reports_missing_hours() -> Result<(), TestError> {
    let test = staff_setup().await?;
    let state = test.to_app_state::<AppState>();

    let resp = generate_timetable(
        State(state.clone()),
        test.session.clone(),
        Path(1),
        Form(TimetableForm { is_weekday: None }),
    )
    .await
    .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let resp = detail(State(state), test.session.clone(), Path(1))
        .await
        .unwrap()
        .into_response();
    assert!(body_text(resp).await.contains("운영 시간을 먼저 등록해 주세요."));

    Ok(())
}

#[tokio::test]
/// Expect the default branch to survive a delete request
async fn delete_refuses_default_branch() -> Result<(), TestError> {
    let test = staff_setup().await?;

    let resp = delete(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Path(1),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/branches/1"));
    let branch = BranchService::new(&test.db).get_branch(1).await.unwrap();
    assert!(branch.is_some());

    Ok(())
}

#[tokio::test]
/// Expect users of a deleted branch to move to the default branch
async fn delete_moves_users_to_default_branch() -> Result<(), TestError> {
    let mut test = staff_setup().await?;
    let branch = test.branch().insert_mock_branch("강남").await?;
    let user = test.user().insert_mock_user("student", branch.id).await?;

    let resp = delete(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        Path(branch.id),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin/branches"));
    let user = UserService::new(&test.db)
        .get_user(user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.branch_id, 1);

    Ok(())
}
