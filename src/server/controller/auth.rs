use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::form::LoginForm,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        router::{ADMIN_PATH, LOGIN_PATH},
        service::user::UserService,
        view::{context::LoginContext, render},
    },
};

/// Login form
pub async fn login_page() -> Result<Html<String>, Error> {
    render("accounts/login.html", &LoginContext::new(String::new(), None))
}

/// Authenticates the submitted username and password
///
/// # Responses
/// - 303 (See Other): Login succeeded, user ID stored in session, redirect to the back-office
/// - 200 (Success): Unknown user, inactive account or wrong password, form rendered again
/// - 500 (Internal Server Error): Database, session or template error
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, Error> {
    let username = form.username.trim().to_string();

    match UserService::new(&state.db)
        .authenticate(&username, &form.password)
        .await
    {
        Ok(user) => {
            session.cycle_id().await?;
            SessionUserId::insert(&session, user.id).await?;

            Ok(Redirect::to(ADMIN_PATH).into_response())
        }
        Err(Error::AuthError(AuthError::InvalidCredentials)) => {
            let context =
                LoginContext::new(username, Some(AuthError::INVALID_CREDENTIALS_MESSAGE));

            Ok(render("accounts/login.html", &context)?.into_response())
        }
        Err(e) => Err(e),
    }
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 303 (See Other): Logged out, redirect to the login page
/// - 500 (Internal Server Error): There was an issue reading the session
pub async fn logout(session: Session) -> Result<Redirect, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing a session that was never stored fails
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::to(LOGIN_PATH))
}
