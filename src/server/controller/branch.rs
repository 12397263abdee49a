use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    model::form::BranchForm,
    server::{
        error::{validation::FormErrors, Error},
        model::app::AppState,
        service::branch::{schedule::BranchScheduleService, BranchService},
        view::{
            context::{BranchDetailContext, BranchFormContext, BranchIndexContext},
            render,
        },
    },
};

/// Lists every branch with an empty creation form
///
/// # Responses
/// - 200 (Success): Rendered branch list
/// - 500 (Internal Server Error): Database or template error
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, Error> {
    let branches = BranchService::new(&state.db).list_branches().await?;

    render("branches/index.html", &BranchIndexContext::new(branches))
}

/// Empty branch creation form
pub async fn new_branch() -> Result<Html<String>, Error> {
    render(
        "branches/form.html",
        &BranchFormContext::new(BranchForm::default(), FormErrors::new()),
    )
}

/// Creates a branch from the submitted form
///
/// # Responses
/// - 303 (See Other): Branch created, redirect to its detail page
/// - 200 (Success): Rejected form rendered again with the submitted values and field errors
/// - 500 (Internal Server Error): Database or template error
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<BranchForm>,
) -> Result<Response, Error> {
    match BranchService::new(&state.db).create_branch(&form).await {
        Ok(branch) => Ok(Redirect::to(&format!("/branches/{}", branch.id)).into_response()),
        Err(Error::Validation(errors)) => {
            let context = BranchFormContext::new(form, errors);

            Ok(render("branches/form.html", &context)?.into_response())
        }
        Err(e) => Err(e),
    }
}

/// Branch detail with business hours, lesson durations and timetable
///
/// # Responses
/// - 200 (Success): Rendered detail page, a missing branch is reported on the page itself
/// - 500 (Internal Server Error): Database or template error
pub async fn detail(
    State(state): State<AppState>,
    Path(branch_id): Path<i32>,
) -> Result<Html<String>, Error> {
    let Some(branch) = BranchService::new(&state.db).get_branch(branch_id).await? else {
        return render("branches/detail.html", &BranchDetailContext::not_found());
    };

    let operation = BranchScheduleService::new(&state.db)
        .get_operation(branch_id)
        .await?;

    render(
        "branches/detail.html",
        &BranchDetailContext::found(branch, operation),
    )
}
