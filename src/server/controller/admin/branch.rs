use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::form::{
        is_checked, ActiveForm, BranchListQuery, BusinessHourForm, DurationForm, TimetableForm,
    },
    server::{
        admin::branch::BRANCH_ADMIN,
        controller::util::get_user::require_staff,
        error::{branch::BranchError, validation::FormErrors, Error},
        model::{app::AppState, session::message::SessionMessage},
        service::{
            admin::AdminService,
            branch::{
                schedule::{parse_business_hour_form, parse_duration_form, BranchScheduleService},
                BranchService,
            },
        },
        view::{
            context::{AdminBranchDetailContext, BranchListContext},
            render,
        },
    },
};

fn detail_path(branch_id: i32) -> String {
    format!("{}/{}", BRANCH_ADMIN.path, branch_id)
}

/// Branch list with name/address search and open status filter
///
/// # Responses
/// - 200 (Success): Rendered list
/// - 303 (See Other): Not logged in as active staff, redirect to the login page
pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<BranchListQuery>,
) -> Result<Html<String>, Error> {
    let staff = require_staff(&state, &session).await?;

    let branches = AdminService::new(&state.db).list_branches(&query).await?;

    let mut context = BranchListContext::new(&BRANCH_ADMIN, staff.username, &branches, query);
    context.message = SessionMessage::take(&session).await?;

    render("admin/branch_list.html", &context)
}

/// Saves the inline open status checkbox of the branch list
///
/// # Responses
/// - 303 (See Other): Saved, redirect back to the list
/// - 404 (Not Found): No branch with this ID
pub async fn set_active(
    State(state): State<AppState>,
    session: Session,
    Path(branch_id): Path<i32>,
    Form(form): Form<ActiveForm>,
) -> Result<Redirect, Error> {
    require_staff(&state, &session).await?;

    AdminService::new(&state.db)
        .set_branch_active(branch_id, is_checked(&form.is_active))
        .await?;

    Ok(Redirect::to(BRANCH_ADMIN.path))
}

async fn render_detail(
    state: &AppState,
    staff_name: String,
    branch_id: i32,
    errors: FormErrors,
    message: Option<String>,
) -> Result<Html<String>, Error> {
    let branch = BranchService::new(&state.db)
        .get_branch(branch_id)
        .await?
        .ok_or(BranchError::NotFound(branch_id))?;
    let operation = BranchScheduleService::new(&state.db)
        .get_operation(branch_id)
        .await?;

    let fieldsets = BRANCH_ADMIN.fieldset_views(&branch, false);
    let mut context = AdminBranchDetailContext::new(staff_name, branch, fieldsets, operation);
    context.errors = errors;
    context.message = message;

    render("admin/branch_detail.html", &context)
}

/// Branch page with its business hours, durations and timetable forms
///
/// # Responses
/// - 200 (Success): Rendered page
/// - 404 (Not Found): No branch with this ID
pub async fn detail(
    State(state): State<AppState>,
    session: Session,
    Path(branch_id): Path<i32>,
) -> Result<Html<String>, Error> {
    let staff = require_staff(&state, &session).await?;
    let message = SessionMessage::take(&session).await?;

    render_detail(&state, staff.username, branch_id, FormErrors::new(), message).await
}

/// Responds to a schedule form submission.
///
/// Rejected fields render the page again, refused operations are reported on the redirected
/// page.
async fn schedule_outcome<T>(
    state: &AppState,
    session: &Session,
    staff_name: String,
    branch_id: i32,
    result: Result<T, Error>,
    success: &str,
) -> Result<Response, Error> {
    let message = match result {
        Ok(_) => success.to_string(),
        Err(Error::Validation(errors)) => {
            return Ok(render_detail(state, staff_name, branch_id, errors, None)
                .await?
                .into_response());
        }
        Err(Error::BranchError(
            err @ (BranchError::MissingBusinessHour { .. } | BranchError::MissingDuration(_)),
        )) => {
            tracing::debug!("{}", err);

            err.message().to_string()
        }
        Err(e) => return Err(e),
    };

    SessionMessage::insert(session, message).await?;

    Ok(Redirect::to(&detail_path(branch_id)).into_response())
}

/// Sets the weekday or weekend business hours
///
/// # Responses
/// - 303 (See Other): Saved, redirect back to the branch page
/// - 200 (Success): Rejected times rendered with field errors
/// - 404 (Not Found): No branch with this ID
pub async fn set_business_hour(
    State(state): State<AppState>,
    session: Session,
    Path(branch_id): Path<i32>,
    Form(form): Form<BusinessHourForm>,
) -> Result<Response, Error> {
    let staff = require_staff(&state, &session).await?;

    let result = match parse_business_hour_form(&form) {
        Ok((is_weekday, open_time, close_time)) => {
            BranchScheduleService::new(&state.db)
                .set_business_hour(branch_id, is_weekday, open_time, close_time)
                .await
        }
        Err(errors) => Err(errors.into()),
    };

    schedule_outcome(
        &state,
        &session,
        staff.username,
        branch_id,
        result,
        "영업 시간을 저장했습니다.",
    )
    .await
}

/// Sets the lesson and break lengths
///
/// # Responses
/// - 303 (See Other): Saved, redirect back to the branch page
/// - 200 (Success): Rejected durations rendered with field errors
/// - 404 (Not Found): No branch with this ID
pub async fn set_duration(
    State(state): State<AppState>,
    session: Session,
    Path(branch_id): Path<i32>,
    Form(form): Form<DurationForm>,
) -> Result<Response, Error> {
    let staff = require_staff(&state, &session).await?;

    let result = match parse_duration_form(&form) {
        Ok((lesson_minutes, break_minutes)) => {
            BranchScheduleService::new(&state.db)
                .set_duration(branch_id, lesson_minutes, break_minutes)
                .await
        }
        Err(errors) => Err(errors.into()),
    };

    schedule_outcome(
        &state,
        &session,
        staff.username,
        branch_id,
        result,
        "수업 시간을 저장했습니다.",
    )
    .await
}

/// Regenerates the weekday or weekend timetable
///
/// # Responses
/// - 303 (See Other): Redirect back to the branch page, which reports missing hours or
///   durations
pub async fn generate_timetable(
    State(state): State<AppState>,
    session: Session,
    Path(branch_id): Path<i32>,
    Form(form): Form<TimetableForm>,
) -> Result<Response, Error> {
    let staff = require_staff(&state, &session).await?;

    let result = BranchScheduleService::new(&state.db)
        .generate_timetable(branch_id, is_checked(&form.is_weekday))
        .await;

    schedule_outcome(
        &state,
        &session,
        staff.username,
        branch_id,
        result,
        "시간표를 생성했습니다.",
    )
    .await
}

/// Deletes a branch, moving its users to the default branch
///
/// # Responses
/// - 303 (See Other): Deleted, redirect to the list
/// - 303 (See Other): Default branch, redirect back to its page with a notice
/// - 404 (Not Found): No branch with this ID
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(branch_id): Path<i32>,
) -> Result<Redirect, Error> {
    let staff = require_staff(&state, &session).await?;

    match BranchService::new(&state.db).delete_branch(branch_id).await {
        Ok(()) => {
            tracing::info!(
                staff_id = staff.id,
                branch_id = branch_id,
                "Staff deleted branch"
            );
            SessionMessage::insert(&session, "지점을 삭제했습니다.").await?;

            Ok(Redirect::to(BRANCH_ADMIN.path))
        }
        Err(Error::BranchError(err @ BranchError::DefaultBranchProtected(_))) => {
            tracing::warn!(staff_id = staff.id, "{}", err);
            SessionMessage::insert(&session, err.message()).await?;

            Ok(Redirect::to(&detail_path(branch_id)))
        }
        Err(e) => Err(e),
    }
}
