//! User service layer.
//!
//! This module contains business logic for user accounts: validated account creation with
//! hashed passwords, staff and superuser escalation, authentication and keeping the redundant
//! branch association and license/plan side tables in sync.

#[cfg(test)]
mod tests;

use chrono::{NaiveDate, Utc};
use entity::{
    user::{Gender, DEFAULT_BRANCH_ID},
    user_license_type::LicenseType,
    user_plan_type::PlanType,
};
use sea_orm::{ActiveEnum, DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::{
        form::{is_checked, UserChangeForm, UserForm},
        user::UserDto,
    },
    server::{
        data::{
            branch::BranchRepository,
            user::{
                role::{UserLicenseTypeRepository, UserPlanTypeRepository},
                user_branch::UserBranchRepository,
                NewUserParams, UserChangeParams, UserRepository,
            },
        },
        error::{
            auth::AuthError, branch::BranchError, user::UserError, validation::FormErrors, Error,
        },
        model::{account::Account, db::UserModel},
        util::{
            locale,
            password::{hash_password, verify_password},
            validate,
        },
    },
};

pub const DUPLICATE_USERNAME_MESSAGE: &str = "이미 사용 중인 아이디입니다.";
pub const PERMISSION_CHANGE_MESSAGE: &str = "최고관리자만 권한을 변경할 수 있습니다.";

/// Records a field error when `actor` asks to change a permission flag it may not grant.
///
/// Only superusers grant or revoke the staff and superuser flags.
pub fn check_permission_change(
    errors: &mut FormErrors,
    actor: &impl Account,
    field: &str,
    requested: bool,
    current: bool,
) {
    if requested != current && !actor.is_superuser() {
        errors.add(field, PERMISSION_CHANGE_MESSAGE);
    }
}

/// Account details for [`UserService::create_user`] and its staff variants.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    /// Plain text password, `None` stores an unusable password
    pub password: Option<String>,
    pub surname: String,
    pub given_name: String,
    pub email: Option<String>,
    pub birthday: NaiveDate,
    /// Raw gender code, only `1` and `2` are accepted
    pub gender: i32,
    pub phone_number: String,
    pub branch_id: i32,
    pub license_type: Option<LicenseType>,
    pub plan_type: Option<PlanType>,
}

/// Account creation form converted to typed values.
#[derive(Clone, Debug)]
pub struct ParsedUserForm {
    pub user: NewUser,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Build the display form of an account together with its side table values.
///
/// Timestamps are converted to the configured local time.
pub fn user_dto(
    user: UserModel,
    license_type: Option<LicenseType>,
    plan_type: Option<PlanType>,
) -> UserDto {
    let time_zone = locale::time_zone();

    UserDto {
        full_name: user.full_name(),
        id: user.id,
        username: user.username,
        surname: user.surname,
        given_name: user.given_name,
        email: user.email,
        birthday: user.birthday,
        gender: user.gender.to_value(),
        gender_label: user.gender.label().to_string(),
        phone_number: user.phone_number,
        branch_id: user.branch_id,
        license_type: license_type.map(|value| value.label().to_string()),
        plan_type: plan_type.map(|value| value.label().to_string()),
        is_active: user.is_active,
        is_staff: user.is_staff,
        is_superuser: user.is_superuser,
        last_login: locale::to_local(user.last_login, time_zone),
        date_joined: locale::to_local(user.date_joined, time_zone),
    }
}

/// Parse the back-office account creation form.
///
/// Only conversions happen here; [`UserService::create_user`] checks lengths, phone numbers,
/// username uniqueness and the branch.
pub fn parse_user_form(form: &UserForm) -> Result<ParsedUserForm, FormErrors> {
    let mut errors = FormErrors::new();

    let birthday = if validate::required(&mut errors, "birthday", &form.birthday) {
        validate::date(&mut errors, "birthday", &form.birthday)
    } else {
        None
    };

    let gender = if validate::required(&mut errors, "gender", &form.gender) {
        parse_choice(&mut errors, "gender", &form.gender, |code| {
            code.parse::<i32>().ok()
        })
    } else {
        None
    };

    let branch_id = match validate::optional(&form.branch) {
        None => Some(DEFAULT_BRANCH_ID),
        Some(branch) => parse_choice(&mut errors, "branch", branch, |code| {
            code.parse::<i32>().ok()
        }),
    };

    let license_type = validate::optional(&form.license_type).and_then(|code| {
        parse_choice(&mut errors, "license_type", code, |code| {
            LicenseType::try_from_value(&code.to_string()).ok()
        })
    });
    let plan_type = validate::optional(&form.plan_type).and_then(|code| {
        parse_choice(&mut errors, "plan_type", code, |code| {
            PlanType::try_from_value(&code.to_string()).ok()
        })
    });

    // A missing value always comes with a recorded message
    let (Some(birthday), Some(gender), Some(branch_id)) = (birthday, gender, branch_id) else {
        return Err(errors);
    };
    errors.into_result()?;

    Ok(ParsedUserForm {
        user: NewUser {
            username: form.username.trim().to_string(),
            password: validate::optional(&form.password).map(str::to_string),
            surname: form.surname.trim().to_string(),
            given_name: form.given_name.trim().to_string(),
            email: validate::optional(&form.email).map(str::to_string),
            birthday,
            gender,
            phone_number: form.phone_number.trim().to_string(),
            branch_id,
            license_type,
            plan_type,
        },
        is_staff: is_checked(&form.is_staff),
        is_superuser: is_checked(&form.is_superuser),
    })
}

fn parse_choice<T>(
    errors: &mut FormErrors,
    field: &str,
    value: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    let parsed = parse(value.trim());
    if parsed.is_none() {
        errors.add(field, validate::INVALID_CHOICE_MESSAGE);
    }

    parsed
}

/// Personal details shared by the creation and change forms.
fn validate_personal_details(
    errors: &mut FormErrors,
    surname: &str,
    given_name: &str,
    phone_number: &str,
    gender: i32,
) -> Option<Gender> {
    for (field, value) in [("surname", surname), ("given_name", given_name)] {
        if validate::required(errors, field, value) {
            validate::max_length(errors, field, value, 20);
        }
    }

    if validate::required(errors, "phone_number", phone_number) {
        validate::max_length(errors, "phone_number", phone_number, 14);
        validate::phone_number(errors, "phone_number", phone_number);
    }

    match Gender::try_from_value(&gender) {
        Ok(gender) => Some(gender),
        Err(_) => {
            errors.add("gender", validate::INVALID_CHOICE_MESSAGE);
            None
        }
    }
}

fn map_duplicate_username(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            FormErrors::single("username", DUPLICATE_USERNAME_MESSAGE).into()
        }
        _ => err.into(),
    }
}

/// Service for managing user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn side_tables(
        &self,
        user_id: i32,
    ) -> Result<(Option<LicenseType>, Option<PlanType>), Error> {
        let license_type = UserLicenseTypeRepository::new(self.db)
            .get_by_user(user_id)
            .await?;
        let plan_type = UserPlanTypeRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok((license_type, plan_type))
    }

    async fn to_dto(&self, user: UserModel) -> Result<UserDto, Error> {
        let (license_type, plan_type) = self.side_tables(user.id).await?;

        Ok(user_dto(user, license_type, plan_type))
    }

    /// Checks every rule of a new account that can be decided before writing.
    async fn validate_new_user(&self, new_user: &NewUser) -> Result<Gender, Error> {
        let mut errors = FormErrors::new();

        let username = new_user.username.as_str();
        if validate::required(&mut errors, "username", username)
            && validate::max_length(&mut errors, "username", username, 20)
            && UserRepository::new(self.db)
                .get_by_username(username)
                .await?
                .is_some()
        {
            errors.add("username", DUPLICATE_USERNAME_MESSAGE);
        }

        let gender = validate_personal_details(
            &mut errors,
            &new_user.surname,
            &new_user.given_name,
            &new_user.phone_number,
            new_user.gender,
        );

        if let Some(email) = new_user.email.as_deref() {
            validate::max_length(&mut errors, "email", email, 254);
        }

        if BranchRepository::new(self.db)
            .get_by_id(new_user.branch_id)
            .await?
            .is_none()
        {
            errors.add("branch", validate::INVALID_CHOICE_MESSAGE);
        }

        errors.into_result()?;

        // Present whenever no error was recorded
        gender.ok_or_else(|| Error::InternalError("validated gender missing".to_string()))
    }

    /// Inserts the account, its branch association and side tables, then saves the
    /// permission flags when escalated. All writes share one transaction.
    async fn insert_account(
        &self,
        new_user: NewUser,
        is_staff: bool,
        is_superuser: bool,
    ) -> Result<UserDto, Error> {
        let gender = self.validate_new_user(&new_user).await?;
        let password = hash_password(new_user.password.as_deref())?;

        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);
        let mut user = user_repo
            .create(NewUserParams {
                username: new_user.username,
                password,
                surname: new_user.surname,
                given_name: new_user.given_name,
                email: new_user.email,
                birthday: new_user.birthday,
                gender,
                phone_number: new_user.phone_number,
                branch_id: new_user.branch_id,
            })
            .await
            .map_err(map_duplicate_username)?;

        UserBranchRepository::new(&txn)
            .upsert(user.id, user.branch_id)
            .await?;
        if let Some(license_type) = new_user.license_type {
            UserLicenseTypeRepository::new(&txn)
                .upsert(user.id, Some(license_type))
                .await?;
        }
        if let Some(plan_type) = new_user.plan_type {
            UserPlanTypeRepository::new(&txn)
                .upsert(user.id, Some(plan_type))
                .await?;
        }

        if is_staff || is_superuser {
            user = user_repo
                .set_permissions(user.id, is_staff, is_superuser)
                .await?
                .ok_or_else(|| {
                    Error::InternalError(format!(
                        "User ID {} disappeared within its creating transaction",
                        user.id
                    ))
                })?;
        }

        txn.commit().await?;

        tracing::info!(
            user_id = user.id,
            username = %user.username,
            is_staff = user.is_staff,
            is_superuser = user.is_superuser,
            "Created user account"
        );

        Ok(user_dto(user, new_user.license_type, new_user.plan_type))
    }

    /// Creates an active account without staff permissions.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created account
    /// - `Err(Error::Validation)` - Rejected fields, including a username already in use,
    ///   an unknown gender code or branch
    /// - `Err(Error::PasswordHashError)` - Password could not be hashed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, new_user: NewUser) -> Result<UserDto, Error> {
        self.insert_account(new_user, false, false).await
    }

    /// Creates an account and grants staff permission.
    pub async fn create_staff(&self, new_user: NewUser) -> Result<UserDto, Error> {
        self.insert_account(new_user, true, false).await
    }

    /// Creates an account with staff and superuser permissions.
    ///
    /// # Returns
    /// - `Err(Error::UserError(UserError::PasswordRequired))` - No password was provided
    pub async fn create_superuser(&self, new_user: NewUser) -> Result<UserDto, Error> {
        if new_user.password.as_deref().is_none_or(str::is_empty) {
            return Err(UserError::PasswordRequired.into());
        }

        self.insert_account(new_user, true, true).await
    }

    /// Retrieves an account with its license and plan types.
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        match UserRepository::new(self.db).get(user_id).await? {
            Some(user) => Ok(Some(self.to_dto(user).await?)),
            None => Ok(None),
        }
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserDto>, Error> {
        match UserRepository::new(self.db).get_by_username(username).await? {
            Some(user) => Ok(Some(self.to_dto(user).await?)),
            None => Ok(None),
        }
    }

    /// Raw account record for permission checks
    pub async fn get_account(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db).get(user_id).await?)
    }

    /// Replaces the password, `None` makes the account unable to log in.
    pub async fn set_password(&self, user_id: i32, password: Option<&str>) -> Result<(), Error> {
        let password_hash = hash_password(password)?;

        UserRepository::new(self.db)
            .set_password(user_id, password_hash)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        Ok(())
    }

    pub async fn set_license_type(
        &self,
        user_id: i32,
        license_type: Option<LicenseType>,
    ) -> Result<(), Error> {
        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(UserError::NotFound(user_id).into());
        }

        UserLicenseTypeRepository::new(self.db)
            .upsert(user_id, license_type)
            .await?;

        Ok(())
    }

    pub async fn set_plan_type(
        &self,
        user_id: i32,
        plan_type: Option<PlanType>,
    ) -> Result<(), Error> {
        if UserRepository::new(self.db).get(user_id).await?.is_none() {
            return Err(UserError::NotFound(user_id).into());
        }

        UserPlanTypeRepository::new(self.db)
            .upsert(user_id, plan_type)
            .await?;

        Ok(())
    }

    /// Moves an account to another branch, updating the redundant association in the same
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The moved account
    /// - `Err(Error::BranchError(BranchError::NotFound))` - No branch with this ID
    /// - `Err(Error::UserError(UserError::NotFound))` - No account with this ID
    pub async fn change_branch(&self, user_id: i32, branch_id: i32) -> Result<UserDto, Error> {
        if BranchRepository::new(self.db)
            .get_by_id(branch_id)
            .await?
            .is_none()
        {
            return Err(BranchError::NotFound(branch_id).into());
        }

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .set_branch(user_id, branch_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;
        UserBranchRepository::new(&txn)
            .upsert(user_id, branch_id)
            .await?;

        txn.commit().await?;

        self.to_dto(user).await
    }

    /// Validates the change form and saves personal details and permission flags.
    ///
    /// Staff and superuser flags may only be changed when `actor` is a superuser.
    pub async fn update_user(
        &self,
        actor: &impl Account,
        user_id: i32,
        form: &UserChangeForm,
    ) -> Result<UserDto, Error> {
        let mut errors = FormErrors::new();

        let birthday = if validate::required(&mut errors, "birthday", &form.birthday) {
            validate::date(&mut errors, "birthday", &form.birthday)
        } else {
            None
        };
        let gender = validate_personal_details(
            &mut errors,
            form.surname.trim(),
            form.given_name.trim(),
            form.phone_number.trim(),
            form.gender.trim().parse::<i32>().unwrap_or_default(),
        );

        let (Some(birthday), Some(gender)) = (birthday, gender) else {
            return Err(errors.into());
        };
        errors.into_result()?;

        let user_repo = UserRepository::new(self.db);
        let current = user_repo
            .get(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        let is_staff = is_checked(&form.is_staff);
        let is_superuser = is_checked(&form.is_superuser);

        let mut errors = FormErrors::new();
        check_permission_change(&mut errors, actor, "is_staff", is_staff, current.is_staff);
        check_permission_change(
            &mut errors,
            actor,
            "is_superuser",
            is_superuser,
            current.is_superuser,
        );
        if !errors.is_empty() {
            tracing::warn!(
                actor = actor.login_id(),
                user_id,
                "Refused permission change by non-superuser"
            );
        }
        errors.into_result()?;

        let user = user_repo
            .update(
                user_id,
                UserChangeParams {
                    surname: form.surname.trim().to_string(),
                    given_name: form.given_name.trim().to_string(),
                    birthday,
                    gender,
                    phone_number: form.phone_number.trim().to_string(),
                    is_active: is_checked(&form.is_active),
                    is_staff,
                    is_superuser,
                },
            )
            .await?
            .ok_or(UserError::NotFound(user_id))?;

        self.to_dto(user).await
    }

    /// Checks a username and password, refreshing the last login time on success.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Active account whose password matches
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown username, inactive
    ///   account or wrong password
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let Some(mut user) = user_repo.get_by_username(username.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !user.is_active() || !verify_password(password, user.password_hash()) {
            return Err(AuthError::InvalidCredentials.into());
        }

        user_repo.update_last_login(user.id).await?;
        user.last_login = Utc::now().naive_utc();

        tracing::info!(user_id = user.id, "User logged in");

        self.to_dto(user).await
    }
}
