//! Shared test harness for the IMX workspace.
//!
//! Tests follow a two phase layout: a [`TestBuilder`] declares the tables and fixtures a test
//! needs, then `build()` yields a [`TestContext`] backed by an in-memory SQLite database and a
//! memory session store.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{branch::factory as branch_factory, user::factory as user_factory},
        TestBuilder, TestContext, TestError,
    };
}
