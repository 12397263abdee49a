use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{account::Account, app::AppState, db::UserModel, session::user::SessionUserId},
    service::user::UserService,
};

/// Retrieves the staff account of the session for back-office pages
///
/// # Arguments
/// - `state`: Application state with the database connection
/// - `session`: The visitor's session
///
/// # Returns
/// - `Ok(UserModel)`: Active account with staff or superuser permission
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: Nobody is logged in
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: Session refers to a deleted account
///   (session is cleared)
/// - `Err(Error::AuthError(AuthError::PermissionDenied))`: Account is inactive or not staff
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn require_staff(state: &AppState, session: &Session) -> Result<UserModel, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = UserService::new(&state.db).get_account(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    if !user.can_access_admin() {
        return Err(Error::AuthError(AuthError::PermissionDenied(user_id)));
    }

    Ok(user)
}
