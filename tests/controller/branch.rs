use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use chrono::NaiveTime;
use imx::{
    model::form::BranchForm,
    server::{
        controller::branch::{create, detail, index, new_branch},
        model::app::AppState,
        service::branch::DUPLICATE_NAME_MESSAGE,
        util::validate::PHONE_NUMBER_MESSAGE,
    },
};
use imx_test_utils::prelude::*;

use super::{body_text, location};

fn branch_form(name: &str) -> BranchForm {
    BranchForm {
        name: name.to_string(),
        equipment_count: "8".to_string(),
        postcode: "06236".to_string(),
        street_address: "서울특별시 강남구 테헤란로 123".to_string(),
        detailed_address: "4층".to_string(),
        phone_number_1: "02-555-1234".to_string(),
        phone_number_2: String::new(),
    }
}

#[tokio::test]
/// Expect 200 with every branch and the section name
async fn index_lists_branches() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_branch_tables()
        .with_mock_branch("강남")
        .with_mock_branch("서초점")
        .build()
        .await?;

    let result = index(State(test.to_app_state::<AppState>())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("강남점"));
    assert!(body.contains("서초점"));
    assert!(!body.contains("서초점점"));

    Ok(())
}

#[tokio::test]
async fn new_branch_renders_empty_form() -> Result<(), TestError> {
    let resp = new_branch().await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("name=\"postcode\""));

    Ok(())
}

#[tokio::test]
/// Expect 303 to the new branch's detail page for a valid form
async fn create_redirects_to_detail() -> Result<(), TestError> {
    let test = TestBuilder::new().with_branch_tables().build().await?;

    let result = create(
        State(test.to_app_state::<AppState>()),
        Form(branch_form("역삼")),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/branches/1"));

    Ok(())
}

#[tokio::test]
/// Expect 200 with the form and a field error for a duplicate branch name
async fn create_rerenders_duplicate_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_branch_tables()
        .with_mock_branch("역삼")
        .build()
        .await?;

    let result = create(
        State(test.to_app_state::<AppState>()),
        Form(branch_form("역삼")),
    )
    .await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains(DUPLICATE_NAME_MESSAGE));
    // Submitted values are kept
    assert!(body.contains("06236"));

    Ok(())
}

#[tokio::test]
/// Expect 200 with a phone number error instead of a server error
async fn create_rerenders_invalid_phone_number() -> Result<(), TestError> {
    let test = TestBuilder::new().with_branch_tables().build().await?;

    let mut form = branch_form("역삼");
    form.phone_number_1 = "555-CALL".to_string();
    let result = create(State(test.to_app_state::<AppState>()), Form(form)).await;

    let resp = result.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains(PHONE_NUMBER_MESSAGE));

    Ok(())
}

#[tokio::test]
/// Expect 200 with the branch and its business hours
async fn detail_shows_branch_and_hours() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_branch_tables()
        .with_mock_branch("강남")
        .build()
        .await?;
    test.branch()
        .insert_business_hour(
            1,
            true,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
        )
        .await?;

    let result = detail(State(test.to_app_state::<AppState>()), Path(1)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("강남점"));
    assert!(body.contains("09:00 ~ 21:00"));
    assert!(!body.contains("지점을 찾을 수 없습니다."));

    Ok(())
}

#[tokio::test]
/// Expect 200 with a not found notice rather than a 404
async fn detail_reports_missing_branch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_branch_tables().build().await?;

    let result = detail(State(test.to_app_state::<AppState>()), Path(99)).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("지점을 찾을 수 없습니다."));

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = index(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
