//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Methods queue work which is executed in order during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and fixtures.
/// Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_branch_tables: bool,
    include_user_tables: bool,

    // Database fixtures to insert
    branches: Vec<String>,
    users: Vec<(String, i32)>, // (username, branch_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_branch_tables: false,
            include_user_tables: false,
            branches: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Add the branch table and its operational metadata tables.
    ///
    /// Creates Branch, BranchBusinessHour, BranchDuration and BranchTimetable.
    pub fn with_branch_tables(mut self) -> Self {
        self.include_branch_tables = true;
        self
    }

    /// Add every table required for user accounts.
    ///
    /// Implies [`TestBuilder::with_branch_tables`] since users reference a branch, then adds
    /// User, UserBranch, UserLicenseType and UserPlanType.
    pub fn with_user_tables(mut self) -> Self {
        self.include_branch_tables = true;
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use imx_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), imx_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(Branch).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock branch with the provided name.
    ///
    /// Branches are inserted in the order queued, so the first queued branch receives ID 1
    /// which is the default branch for user accounts.
    pub fn with_mock_branch(mut self, name: impl Into<String>) -> Self {
        self.branches.push(name.into());
        self
    }

    /// Insert a mock user belonging to `branch_id`.
    ///
    /// The branch must be queued with [`TestBuilder::with_mock_branch`] first.
    pub fn with_mock_user(mut self, username: impl Into<String>, branch_id: i32) -> Self {
        self.users.push((username.into(), branch_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_branch_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Branch),
                schema.create_table_from_entity(entity::prelude::BranchBusinessHour),
                schema.create_table_from_entity(entity::prelude::BranchDuration),
                schema.create_table_from_entity(entity::prelude::BranchTimetable),
            ]);
        }

        if self.include_user_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::UserBranch),
                schema.create_table_from_entity(entity::prelude::UserLicenseType),
                schema.create_table_from_entity(entity::prelude::UserPlanType),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for name in self.branches {
            setup.branch().insert_mock_branch(&name).await?;
        }

        for (username, branch_id) in self.users {
            setup.user().insert_mock_user(&username, branch_id).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
