//! Back-office list and bulk operations.

use std::collections::BTreeSet;

use chrono::Datelike;
use chrono_tz::Tz;
use entity::user::Gender;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::{
        branch::BranchDto,
        form::{BranchListQuery, UserForm, UserListQuery},
        user::UserDto,
    },
    server::{
        admin::{
            user::{DEACTIVATE_USERS, USER_ADMIN},
            AdminAction,
        },
        data::{
            branch::BranchRepository,
            user::{
                role::{UserLicenseTypeRepository, UserPlanTypeRepository},
                UserRepository, UserSearch,
            },
        },
        error::{branch::BranchError, user::UserError, validation::FormErrors, Error},
        model::account::Account,
        service::user::{check_permission_change, parse_user_form, user_dto, UserService},
        util::{locale, validate::REQUIRED_MESSAGE},
    },
};

pub const UNKNOWN_ACTION_MESSAGE: &str = "알 수 없는 작업입니다.";
pub const EMPTY_SELECTION_MESSAGE: &str = "작업을 수행할 항목을 선택해 주세요.";

/// Bulk action that ran and how many rows it changed.
#[derive(Debug, Clone, Copy)]
pub struct ActionOutcome {
    pub action: &'static AdminAction,
    pub affected: u64,
}

impl ActionOutcome {
    /// Notice for the next list page
    pub fn message(&self) -> String {
        self.action.done_message(self.affected)
    }
}

fn unknown_action(action: &str) -> Error {
    tracing::warn!(action = %action, "Refused unknown user list action");

    let mut errors = FormErrors::new();
    errors.add_non_field(UNKNOWN_ACTION_MESSAGE);
    errors.into()
}

/// Convert the list query string into repository filters, ignoring unparsable values.
///
/// The join year is a calendar year in `time_zone`.
pub fn user_search(query: &UserListQuery, time_zone: Tz) -> UserSearch {
    let search = query.q.trim();

    UserSearch {
        search: (!search.is_empty()).then(|| search.to_string()),
        gender: query
            .gender
            .trim()
            .parse::<i32>()
            .ok()
            .and_then(|code| Gender::try_from_value(&code).ok()),
        joined_between: query
            .year
            .trim()
            .parse::<i32>()
            .ok()
            .and_then(|year| locale::year_bounds(year, time_zone)),
    }
}

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Users matching the search, gender and join year filters, ordered by branch then join
    /// date.
    pub async fn list_users(&self, query: &UserListQuery) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db)
            .search(&user_search(query, locale::time_zone()))
            .await?;

        let user_ids: Vec<i32> = users.iter().map(|user| user.id).collect();
        let mut license_types = UserLicenseTypeRepository::new(self.db)
            .get_by_users(&user_ids)
            .await?;
        let mut plan_types = UserPlanTypeRepository::new(self.db)
            .get_by_users(&user_ids)
            .await?;

        Ok(users
            .into_iter()
            .map(|user| {
                let license_type = license_types.remove(&user.id);
                let plan_type = plan_types.remove(&user.id);
                user_dto(user, license_type, plan_type)
            })
            .collect())
    }

    /// Local calendar years offered by the join date drill-down, most recent first
    pub async fn joined_years(&self) -> Result<Vec<i32>, Error> {
        let time_zone = locale::time_zone();
        let join_dates = UserRepository::new(self.db).join_dates().await?;

        let years: BTreeSet<i32> = join_dates
            .into_iter()
            .map(|date| locale::to_local(date, time_zone).year())
            .collect();

        Ok(years.into_iter().rev().collect())
    }

    /// Marks exactly the selected users inactive.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of accounts changed
    pub async fn deactivate_users(&self, user_ids: &[i32]) -> Result<u64, Error> {
        let affected = UserRepository::new(self.db)
            .deactivate_many(user_ids)
            .await?;

        tracing::info!(
            selected = user_ids.len(),
            affected = affected,
            "Deactivated users"
        );

        Ok(affected)
    }

    /// Runs a user list action on the selected users.
    ///
    /// # Returns
    /// - `Ok(ActionOutcome)` - The action that ran and the number of accounts changed
    /// - `Err(Error::Validation)` - Unknown action or nothing selected
    pub async fn run_user_action(
        &self,
        action: &str,
        user_ids: &[i32],
    ) -> Result<ActionOutcome, Error> {
        if user_ids.is_empty() {
            let mut errors = FormErrors::new();
            errors.add_non_field(EMPTY_SELECTION_MESSAGE);
            return Err(errors.into());
        }

        let Some(admin_action) = USER_ADMIN.action(action) else {
            return Err(unknown_action(action));
        };

        let affected = match admin_action.name {
            DEACTIVATE_USERS => self.deactivate_users(user_ids).await?,
            _ => return Err(unknown_action(action)),
        };

        Ok(ActionOutcome {
            action: admin_action,
            affected,
        })
    }

    /// Creates an account from the add page, escalating it when the permission boxes are
    /// ticked.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created account
    /// - `Err(Error::Validation)` - Rejected fields, including a missing superuser password or
    ///   permission boxes ticked by an `actor` who is not a superuser
    pub async fn add_user(&self, actor: &impl Account, form: &UserForm) -> Result<UserDto, Error> {
        let parsed = parse_user_form(form)?;

        let mut errors = FormErrors::new();
        check_permission_change(&mut errors, actor, "is_staff", parsed.is_staff, false);
        check_permission_change(&mut errors, actor, "is_superuser", parsed.is_superuser, false);
        if !errors.is_empty() {
            tracing::warn!(
                actor = actor.login_id(),
                "Refused account creation with permissions by non-superuser"
            );
        }
        errors.into_result()?;
        let user_service = UserService::new(self.db);

        let result = if parsed.is_superuser {
            user_service.create_superuser(parsed.user).await
        } else if parsed.is_staff {
            user_service.create_staff(parsed.user).await
        } else {
            user_service.create_user(parsed.user).await
        };

        match result {
            Err(Error::UserError(UserError::PasswordRequired)) => {
                Err(FormErrors::single("password", REQUIRED_MESSAGE).into())
            }
            result => result,
        }
    }

    /// Branches matching the name/address search and open status filter, ordered by name.
    pub async fn list_branches(&self, query: &BranchListQuery) -> Result<Vec<BranchDto>, Error> {
        let search = query.q.trim();
        let is_active = match query.is_active.trim() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        };

        let branches = BranchRepository::new(self.db)
            .search((!search.is_empty()).then_some(search), is_active)
            .await?;

        Ok(branches.into_iter().map(BranchDto::from).collect())
    }

    /// Opens or closes a branch.
    ///
    /// # Returns
    /// - `Ok(BranchDto)` - The updated branch
    /// - `Err(Error::BranchError(BranchError::NotFound))` - No branch with this ID
    pub async fn set_branch_active(
        &self,
        branch_id: i32,
        is_active: bool,
    ) -> Result<BranchDto, Error> {
        let branch = BranchRepository::new(self.db)
            .set_active(branch_id, is_active)
            .await?
            .ok_or(BranchError::NotFound(branch_id))?;

        tracing::info!(branch_id = branch_id, is_active = is_active, "Changed branch status");

        Ok(branch.into())
    }
}
