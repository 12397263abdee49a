pub mod role;
pub mod user_branch;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use entity::user::Gender;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

/// Validated column values for a new account.
#[derive(Clone, Debug)]
pub struct NewUserParams {
    pub username: String,
    /// Already hashed password, or the unusable marker
    pub password: String,
    pub surname: String,
    pub given_name: String,
    pub email: Option<String>,
    pub birthday: NaiveDate,
    pub gender: Gender,
    pub phone_number: String,
    pub branch_id: i32,
}

/// Editable personal details and permission flags of an existing account.
#[derive(Clone, Debug)]
pub struct UserChangeParams {
    pub surname: String,
    pub given_name: String,
    pub birthday: NaiveDate,
    pub gender: Gender,
    pub phone_number: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Back-office user list filters.
#[derive(Clone, Debug, Default)]
pub struct UserSearch {
    /// Substring of the surname, given name, full name or phone number
    pub search: Option<String>,
    pub gender: Option<Gender>,
    /// UTC range `[start, end)` of `date_joined`
    pub joined_between: Option<(NaiveDateTime, NaiveDateTime)>,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active, non-staff user
    pub async fn create(&self, params: NewUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            password: ActiveValue::Set(params.password),
            surname: ActiveValue::Set(params.surname),
            given_name: ActiveValue::Set(params.given_name),
            email: ActiveValue::Set(params.email),
            birthday: ActiveValue::Set(params.birthday),
            gender: ActiveValue::Set(params.gender),
            phone_number: ActiveValue::Set(params.phone_number),
            branch_id: ActiveValue::Set(params.branch_id),
            is_active: ActiveValue::Set(true),
            is_staff: ActiveValue::Set(false),
            is_superuser: ActiveValue::Set(false),
            last_login: ActiveValue::Set(now),
            date_joined: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Lists users matching the provided filters, ordered by branch then join date
    pub async fn search(&self, query: &UserSearch) -> Result<Vec<entity::user::Model>, DbErr> {
        let mut select = entity::prelude::User::find();

        if let Some(search) = query.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                let mut condition = Condition::any()
                    .add(entity::user::Column::Surname.contains(search))
                    .add(entity::user::Column::GivenName.contains(search))
                    .add(entity::user::Column::PhoneNumber.contains(search));

                // Full name is "{surname} {given_name}", so a substring spanning the separator
                // ends the surname and starts the given name.
                if let Some((surname_part, given_name_part)) = search.split_once(' ') {
                    condition = condition.add(
                        Condition::all()
                            .add(entity::user::Column::Surname.ends_with(surname_part))
                            .add(entity::user::Column::GivenName.starts_with(given_name_part)),
                    );
                }

                select = select.filter(condition);
            }
        }

        if let Some(gender) = query.gender {
            select = select.filter(entity::user::Column::Gender.eq(gender));
        }

        if let Some((start, end)) = query.joined_between {
            select = select
                .filter(entity::user::Column::DateJoined.gte(start))
                .filter(entity::user::Column::DateJoined.lt(end));
        }

        select
            .order_by_asc(entity::user::Column::BranchId)
            .order_by_asc(entity::user::Column::DateJoined)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Join timestamps of every user, newest first
    pub async fn join_dates(&self) -> Result<Vec<NaiveDateTime>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::DateJoined)
            .order_by_desc(entity::user::Column::DateJoined)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Replaces the stored password hash
    ///
    /// Returns `Ok(None)` when the user does not exist.
    pub async fn set_password(
        &self,
        user_id: i32,
        password_hash: String,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match self.get(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.password = ActiveValue::Set(password_hash);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Sets the staff and superuser flags
    ///
    /// Returns `Ok(None)` when the user does not exist.
    pub async fn set_permissions(
        &self,
        user_id: i32,
        is_staff: bool,
        is_superuser: bool,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match self.get(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.is_staff = ActiveValue::Set(is_staff);
        user_am.is_superuser = ActiveValue::Set(is_superuser);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Replaces personal details and permission flags
    ///
    /// Returns `Ok(None)` when the user does not exist.
    pub async fn update(
        &self,
        user_id: i32,
        params: UserChangeParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match self.get(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.surname = ActiveValue::Set(params.surname);
        user_am.given_name = ActiveValue::Set(params.given_name);
        user_am.birthday = ActiveValue::Set(params.birthday);
        user_am.gender = ActiveValue::Set(params.gender);
        user_am.phone_number = ActiveValue::Set(params.phone_number);
        user_am.is_active = ActiveValue::Set(params.is_active);
        user_am.is_staff = ActiveValue::Set(params.is_staff);
        user_am.is_superuser = ActiveValue::Set(params.is_superuser);

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Moves a user to another branch
    ///
    /// Returns `Ok(None)` when the user does not exist.
    pub async fn set_branch(
        &self,
        user_id: i32,
        branch_id: i32,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match self.get(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.into_active_model();
        user_am.branch_id = ActiveValue::Set(branch_id);

        Ok(Some(user_am.update(self.db).await?))
    }

    pub async fn update_last_login(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::LastLogin,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Moves every user of `from_branch_id` to `to_branch_id`, returning the number of users moved
    pub async fn reassign_branch(
        &self,
        from_branch_id: i32,
        to_branch_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::BranchId, Expr::value(to_branch_id))
            .filter(entity::user::Column::BranchId.eq(from_branch_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks exactly the provided users inactive, returning the number of rows changed
    pub async fn deactivate_many(&self, user_ids: &[i32]) -> Result<u64, DbErr> {
        if user_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::IsActive, Expr::value(false))
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
