//! Factory functions for generating mock branch models.
//!
//! These are in-memory model instances that don't touch the database.

use chrono::Utc;

use crate::model::BranchModel;

/// Create a mock branch model with standard test values.
///
/// # Arguments
/// - `id` - Primary key to assign
/// - `name` - Branch name
pub fn mock_branch_model(id: i32, name: &str) -> BranchModel {
    let now = Utc::now().naive_utc();
    BranchModel {
        id,
        name: name.to_string(),
        postcode: "06236".to_string(),
        street_address: "서울특별시 강남구 테헤란로 152".to_string(),
        detailed_address: "3층".to_string(),
        phone_number_1: "02-1234-5678".to_string(),
        phone_number_2: None,
        equipment_count: 10,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}
