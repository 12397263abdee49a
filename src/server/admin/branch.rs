use crate::{
    model::{branch::BranchDto, form::BranchForm},
    server::admin::{AdminRecord, FieldSource, FieldValue, Fieldset, ModelAdmin},
};

pub const BRANCH_ADMIN: ModelAdmin = ModelAdmin {
    verbose_name: "지점",
    path: "/admin/branches",
    labels: &[
        ("name", "지점명"),
        ("postcode", "우편번호"),
        ("street_address", "주소"),
        ("detailed_address", "상세 주소"),
        ("phone_number_1", "전화번호"),
        ("phone_number_2", "보조 전화번호"),
        ("equipment_count", "장비 수"),
        ("is_active", "운영 여부"),
        ("created_at", "생성일"),
        ("updated_at", "수정일"),
    ],
    list_display: &[
        "name",
        "phone_number_1",
        "equipment_count",
        "is_active",
        "created_at",
    ],
    list_display_links: &["name"],
    list_editable: &["is_active"],
    list_filter: &["is_active"],
    search_fields: &["name", "street_address"],
    ordering: &["name"],
    date_hierarchy: None,
    fieldsets: &[
        Fieldset {
            title: "지점 정보",
            fields: &["name", "phone_number_1", "phone_number_2", "equipment_count"],
        },
        Fieldset {
            title: "주소",
            fields: &["postcode", "street_address", "detailed_address"],
        },
        Fieldset {
            title: "운영",
            fields: &["is_active", "created_at", "updated_at"],
        },
    ],
    add_fieldsets: &[
        Fieldset {
            title: "지점 정보",
            fields: &["name", "phone_number_1", "phone_number_2", "equipment_count"],
        },
        Fieldset {
            title: "주소",
            fields: &["postcode", "street_address", "detailed_address"],
        },
    ],
    actions: &[],
};

impl FieldSource for BranchDto {
    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "name" => FieldValue::Text(self.display_name.clone()),
            "postcode" => FieldValue::Text(self.postcode.clone()),
            "street_address" => FieldValue::Text(self.street_address.clone()),
            "detailed_address" => FieldValue::Text(self.detailed_address.clone()),
            "phone_number_1" => FieldValue::Text(self.phone_number_1.clone()),
            "phone_number_2" => match &self.phone_number_2 {
                Some(phone_number) => FieldValue::Text(phone_number.clone()),
                None => FieldValue::Empty,
            },
            "equipment_count" => FieldValue::Text(self.equipment_count.to_string()),
            "is_active" => FieldValue::Flag(self.is_active),
            "created_at" => FieldValue::Text(self.created_at.format("%Y-%m-%d").to_string()),
            "updated_at" => FieldValue::Text(self.updated_at.format("%Y-%m-%d").to_string()),
            _ => FieldValue::Empty,
        }
    }
}

impl AdminRecord for BranchDto {
    fn record_id(&self) -> i32 {
        self.id
    }
}

impl FieldSource for BranchForm {
    fn field_value(&self, field: &str) -> FieldValue {
        let value = match field {
            "name" => &self.name,
            "postcode" => &self.postcode,
            "street_address" => &self.street_address,
            "detailed_address" => &self.detailed_address,
            "phone_number_1" => &self.phone_number_1,
            "phone_number_2" => &self.phone_number_2,
            "equipment_count" => &self.equipment_count,
            _ => return FieldValue::Empty,
        };

        FieldValue::Text(value.clone())
    }
}
