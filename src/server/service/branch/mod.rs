//! Branch service layer.
//!
//! Validates branch forms, enforces name uniqueness and owns the branch lifecycle including
//! reassigning accounts to the default branch on deletion. Operational metadata lives in
//! [`schedule`].

pub mod schedule;

#[cfg(test)]
mod tests;

use entity::user::DEFAULT_BRANCH_ID;
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::{branch::BranchDto, form::BranchForm},
    server::{
        data::{
            branch::{
                schedule::{BusinessHourRepository, DurationRepository, TimetableRepository},
                BranchParams, BranchRepository,
            },
            user::{user_branch::UserBranchRepository, UserRepository},
        },
        error::{branch::BranchError, validation::FormErrors, Error},
        model::db::BranchModel,
        util::{locale, validate},
    },
};

pub const DUPLICATE_NAME_MESSAGE: &str = "이미 존재하는 지점명입니다.";

const BRANCH_SUFFIX: char = '점';

impl From<BranchModel> for BranchDto {
    fn from(branch: BranchModel) -> Self {
        let time_zone = locale::time_zone();
        let display_name = if branch.name.ends_with(BRANCH_SUFFIX) {
            branch.name.clone()
        } else {
            format!("{}{}", branch.name, BRANCH_SUFFIX)
        };

        Self {
            id: branch.id,
            name: branch.name,
            display_name,
            postcode: branch.postcode,
            street_address: branch.street_address,
            detailed_address: branch.detailed_address,
            phone_number_1: branch.phone_number_1,
            phone_number_2: branch.phone_number_2,
            equipment_count: branch.equipment_count,
            is_active: branch.is_active,
            created_at: locale::to_local(branch.created_at, time_zone),
            updated_at: locale::to_local(branch.updated_at, time_zone),
        }
    }
}

/// Check a submitted branch form and convert it to column values.
///
/// Every field is checked so the form can show all problems at once.
pub fn validate_branch_form(form: &BranchForm) -> Result<BranchParams, FormErrors> {
    let mut errors = FormErrors::new();

    let name = form.name.trim();
    if validate::required(&mut errors, "name", name) {
        validate::max_length(&mut errors, "name", name, 100);
    }

    let equipment_count = form.equipment_count.trim();
    let equipment_count = if validate::required(&mut errors, "equipment_count", equipment_count) {
        validate::small_unsigned(&mut errors, "equipment_count", equipment_count)
    } else {
        None
    };

    let postcode = form.postcode.trim();
    if validate::required(&mut errors, "postcode", postcode) {
        validate::max_length(&mut errors, "postcode", postcode, 10);
    }

    let street_address = form.street_address.trim();
    if validate::required(&mut errors, "street_address", street_address) {
        validate::max_length(&mut errors, "street_address", street_address, 255);
    }

    let detailed_address = form.detailed_address.trim();
    validate::max_length(&mut errors, "detailed_address", detailed_address, 255);

    let phone_number_1 = form.phone_number_1.trim();
    if validate::required(&mut errors, "phone_number_1", phone_number_1) {
        validate::phone_number(&mut errors, "phone_number_1", phone_number_1);
    }

    let phone_number_2 = validate::optional(&form.phone_number_2);
    if let Some(phone_number_2) = phone_number_2 {
        validate::phone_number(&mut errors, "phone_number_2", phone_number_2);
    }

    errors.into_result()?;

    Ok(BranchParams {
        name: name.to_string(),
        postcode: postcode.to_string(),
        street_address: street_address.to_string(),
        detailed_address: detailed_address.to_string(),
        phone_number_1: phone_number_1.to_string(),
        phone_number_2: phone_number_2.map(str::to_string),
        // Only absent when a message was recorded above
        equipment_count: equipment_count.unwrap_or_default(),
    })
}

/// Name uniqueness races between the lookup and the insert surface as a constraint violation.
fn map_duplicate_name(err: DbErr) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            FormErrors::single("name", DUPLICATE_NAME_MESSAGE).into()
        }
        _ => err.into(),
    }
}

pub struct BranchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BranchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates the form and creates an active branch.
    ///
    /// # Returns
    /// - `Ok(BranchDto)` - The created branch
    /// - `Err(Error::Validation)` - Rejected fields, including a name already in use
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_branch(&self, form: &BranchForm) -> Result<BranchDto, Error> {
        let params = validate_branch_form(form)?;

        let branch_repo = BranchRepository::new(self.db);
        if branch_repo.get_by_name(&params.name).await?.is_some() {
            return Err(FormErrors::single("name", DUPLICATE_NAME_MESSAGE).into());
        }

        let branch = branch_repo.create(params).await.map_err(map_duplicate_name)?;

        tracing::info!(branch_id = branch.id, name = %branch.name, "Created branch");

        Ok(branch.into())
    }

    /// Validates the form and replaces the editable columns of a branch.
    ///
    /// The name may stay unchanged; it only conflicts with other branches.
    ///
    /// # Returns
    /// - `Ok(BranchDto)` - The updated branch
    /// - `Err(Error::Validation)` - Rejected fields
    /// - `Err(Error::BranchError(BranchError::NotFound))` - No branch with this ID
    pub async fn update_branch(
        &self,
        branch_id: i32,
        form: &BranchForm,
    ) -> Result<BranchDto, Error> {
        let params = validate_branch_form(form)?;

        let branch_repo = BranchRepository::new(self.db);
        if let Some(existing) = branch_repo.get_by_name(&params.name).await? {
            if existing.id != branch_id {
                return Err(FormErrors::single("name", DUPLICATE_NAME_MESSAGE).into());
            }
        }

        let branch = branch_repo
            .update(branch_id, params)
            .await
            .map_err(map_duplicate_name)?
            .ok_or(BranchError::NotFound(branch_id))?;

        Ok(branch.into())
    }

    pub async fn get_branch(&self, branch_id: i32) -> Result<Option<BranchDto>, Error> {
        let branch = BranchRepository::new(self.db).get_by_id(branch_id).await?;

        Ok(branch.map(BranchDto::from))
    }

    /// All branches ordered by name
    pub async fn list_branches(&self) -> Result<Vec<BranchDto>, Error> {
        let branches = BranchRepository::new(self.db).list().await?;

        Ok(branches.into_iter().map(BranchDto::from).collect())
    }

    /// Deletes a branch and its operational metadata.
    ///
    /// Every account of the branch, and its redundant branch association, is moved to the
    /// default branch first. All writes share one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Branch deleted
    /// - `Err(Error::BranchError(BranchError::DefaultBranchProtected))` - Attempted to delete the default branch
    /// - `Err(Error::BranchError(BranchError::NotFound))` - No branch with this ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was changed
    pub async fn delete_branch(&self, branch_id: i32) -> Result<(), Error> {
        if branch_id == DEFAULT_BRANCH_ID {
            return Err(BranchError::DefaultBranchProtected(branch_id).into());
        }

        let txn = self.db.begin().await?;

        if BranchRepository::new(&txn).get_by_id(branch_id).await?.is_none() {
            return Err(BranchError::NotFound(branch_id).into());
        }

        let moved_users = UserRepository::new(&txn)
            .reassign_branch(branch_id, DEFAULT_BRANCH_ID)
            .await?;
        UserBranchRepository::new(&txn)
            .reassign_branch(branch_id, DEFAULT_BRANCH_ID)
            .await?;

        BusinessHourRepository::new(&txn)
            .delete_by_branch(branch_id)
            .await?;
        DurationRepository::new(&txn).delete_by_branch(branch_id).await?;
        TimetableRepository::new(&txn)
            .delete_by_branch(branch_id)
            .await?;

        BranchRepository::new(&txn).delete(branch_id).await?;

        txn.commit().await?;

        tracing::info!(
            branch_id = branch_id,
            moved_users = moved_users,
            "Deleted branch and moved its users to the default branch"
        );

        Ok(())
    }
}
