mod create_branch;

use imx_test_utils::prelude::*;

use crate::model::form::BranchForm;

fn branch_form(name: &str) -> BranchForm {
    BranchForm {
        name: name.to_string(),
        equipment_count: "12".to_string(),
        postcode: "48058".to_string(),
        street_address: "부산광역시 해운대구 센텀중앙로 79".to_string(),
        detailed_address: "2층".to_string(),
        phone_number_1: "051-123-4567".to_string(),
        phone_number_2: String::new(),
    }
}
