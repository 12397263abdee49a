//! User account fixture utilities.

pub mod factory;

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active, non-staff user with standard test values.
    ///
    /// The stored password is an unusable hash, so the user cannot log in.
    pub async fn insert_mock_user(
        &self,
        username: &str,
        branch_id: i32,
    ) -> Result<entity::user::Model, TestError> {
        self.insert_user(factory::mock_user_model(0, username, branch_id))
            .await
    }

    /// Insert an active staff user with standard test values.
    pub async fn insert_mock_staff(
        &self,
        username: &str,
        branch_id: i32,
    ) -> Result<entity::user::Model, TestError> {
        let mut model = factory::mock_user_model(0, username, branch_id);
        model.is_staff = true;

        self.insert_user(model).await
    }

    /// Insert the provided user model, ignoring its ID.
    pub async fn insert_user(
        &self,
        model: entity::user::Model,
    ) -> Result<entity::user::Model, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                username: ActiveValue::Set(model.username),
                password: ActiveValue::Set(model.password),
                surname: ActiveValue::Set(model.surname),
                given_name: ActiveValue::Set(model.given_name),
                email: ActiveValue::Set(model.email),
                birthday: ActiveValue::Set(model.birthday),
                gender: ActiveValue::Set(model.gender),
                phone_number: ActiveValue::Set(model.phone_number),
                branch_id: ActiveValue::Set(model.branch_id),
                is_active: ActiveValue::Set(model.is_active),
                is_staff: ActiveValue::Set(model.is_staff),
                is_superuser: ActiveValue::Set(model.is_superuser),
                last_login: ActiveValue::Set(model.last_login),
                date_joined: ActiveValue::Set(model.date_joined),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Record the redundant user to branch association.
    pub async fn insert_user_branch(
        &self,
        user_id: i32,
        branch_id: i32,
    ) -> Result<entity::user_branch::Model, TestError> {
        Ok(
            entity::prelude::UserBranch::insert(entity::user_branch::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                branch_id: ActiveValue::Set(branch_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
