use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::form::{UserChangeForm, UserForm, UserListQuery},
    server::{
        admin::user::USER_ADMIN,
        controller::util::get_user::require_staff,
        error::{user::UserError, validation::FormErrors, Error},
        model::{app::AppState, session::message::SessionMessage},
        service::{admin::AdminService, branch::BranchService, user::UserService},
        view::{
            context::{UserDetailContext, UserFormContext, UserListContext},
            render,
        },
    },
};

/// Form key carrying the IDs of the ticked rows
pub const SELECTED_ACTION_FIELD: &str = "_selected_action";

const SAVED_MESSAGE: &str = "이용자 정보를 저장했습니다.";

/// User list with search, gender filter and join year drill-down
///
/// # Responses
/// - 200 (Success): Rendered list
/// - 303 (See Other): Not logged in as active staff, redirect to the login page
pub async fn list(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<UserListQuery>,
) -> Result<Html<String>, Error> {
    let staff = require_staff(&state, &session).await?;

    let admin_service = AdminService::new(&state.db);
    let users = admin_service.list_users(&query).await?;
    let years = admin_service.joined_years().await?;

    let mut context = UserListContext::new(&USER_ADMIN, staff.username, &users, query, years);
    context.message = SessionMessage::take(&session).await?;

    render("admin/user_list.html", &context)
}

async fn render_add_form(
    state: &AppState,
    staff_name: String,
    form: &UserForm,
    errors: FormErrors,
) -> Result<Html<String>, Error> {
    let branches = BranchService::new(&state.db).list_branches().await?;
    let fieldsets = USER_ADMIN.fieldset_views(form, true);

    render(
        "admin/user_form.html",
        &UserFormContext::new(staff_name, fieldsets, branches, errors),
    )
}

/// Empty account creation form
pub async fn add_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, Error> {
    let staff = require_staff(&state, &session).await?;

    render_add_form(&state, staff.username, &UserForm::default(), FormErrors::new()).await
}

/// Creates an account, as staff or superuser when the permission boxes are ticked
///
/// # Responses
/// - 303 (See Other): Account created, redirect to its change page
/// - 200 (Success): Rejected form rendered again with field errors
/// - 303 (See Other): Not logged in as active staff, redirect to the login page
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UserForm>,
) -> Result<Response, Error> {
    let staff = require_staff(&state, &session).await?;

    match AdminService::new(&state.db).add_user(&staff, &form).await {
        Ok(user) => {
            tracing::info!(
                staff_id = staff.id,
                user_id = user.id,
                "Staff created user account"
            );

            Ok(Redirect::to(&format!("{}/{}", USER_ADMIN.path, user.id)).into_response())
        }
        Err(Error::Validation(errors)) => {
            Ok(render_add_form(&state, staff.username, &form, errors)
                .await?
                .into_response())
        }
        Err(e) => Err(e),
    }
}

/// Change page of an account
///
/// # Responses
/// - 200 (Success): Rendered change page
/// - 404 (Not Found): No account with this ID
/// - 303 (See Other): Not logged in as active staff, redirect to the login page
pub async fn detail(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<Html<String>, Error> {
    let staff = require_staff(&state, &session).await?;

    let user = UserService::new(&state.db)
        .get_user(user_id)
        .await?
        .ok_or(UserError::NotFound(user_id))?;

    let fieldsets = USER_ADMIN.fieldset_views(&user, false);
    let mut context = UserDetailContext::new(staff.username, user, fieldsets);
    context.message = SessionMessage::take(&session).await?;

    render("admin/user_detail.html", &context)
}

/// Saves the personal details and permissions of an account
///
/// # Responses
/// - 303 (See Other): Saved, redirect back to the change page
/// - 200 (Success): Rejected form rendered with field errors
/// - 404 (Not Found): No account with this ID
pub async fn change(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Form(form): Form<UserChangeForm>,
) -> Result<Response, Error> {
    let staff = require_staff(&state, &session).await?;

    let user_service = UserService::new(&state.db);
    match user_service.update_user(&staff, user_id, &form).await {
        Ok(_) => {
            SessionMessage::insert(&session, SAVED_MESSAGE).await?;

            Ok(Redirect::to(&format!("{}/{}", USER_ADMIN.path, user_id)).into_response())
        }
        Err(Error::Validation(errors)) => {
            let user = user_service
                .get_user(user_id)
                .await?
                .ok_or(UserError::NotFound(user_id))?;

            let fieldsets = USER_ADMIN.fieldset_views(&user, false);
            let mut context = UserDetailContext::new(staff.username, user, fieldsets);
            context.errors = errors;

            Ok(render("admin/user_detail.html", &context)?.into_response())
        }
        Err(e) => Err(e),
    }
}

/// Split the submitted action form into the action name and the selected IDs.
///
/// IDs that are not numbers are skipped.
pub fn parse_action_form(fields: &[(String, String)]) -> (String, Vec<i32>) {
    let action = fields
        .iter()
        .find(|(key, _)| key == "action")
        .map(|(_, value)| value.clone())
        .unwrap_or_default();

    let user_ids = fields
        .iter()
        .filter(|(key, _)| key == SELECTED_ACTION_FIELD)
        .filter_map(|(_, value)| value.parse::<i32>().ok())
        .collect();

    (action, user_ids)
}

/// Runs a bulk action on the ticked rows of the user list
///
/// # Responses
/// - 303 (See Other): Redirect back to the list, which shows the outcome
/// - 303 (See Other): Not logged in as active staff, redirect to the login page
pub async fn action(
    State(state): State<AppState>,
    session: Session,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Redirect, Error> {
    let staff = require_staff(&state, &session).await?;
    let (action, user_ids) = parse_action_form(&fields);

    let message = match AdminService::new(&state.db)
        .run_user_action(&action, &user_ids)
        .await
    {
        Ok(outcome) => {
            tracing::info!(
                staff_id = staff.id,
                action = %action,
                affected = outcome.affected,
                "Ran user list action"
            );

            outcome.message()
        }
        Err(Error::Validation(errors)) => errors.non_field().join(" "),
        Err(e) => return Err(e),
    };

    SessionMessage::insert(&session, message).await?;

    Ok(Redirect::to(USER_ADMIN.path))
}
