use entity::{user::Gender, user_license_type::LicenseType, user_plan_type::PlanType};
use sea_orm::{ActiveEnum, Iterable};
use serde::Serialize;

use crate::{
    model::{
        form::{is_checked, UserForm},
        user::UserDto,
    },
    server::admin::{AdminAction, AdminRecord, FieldSource, FieldValue, Fieldset, ModelAdmin},
};

pub const DEACTIVATE_USERS: &str = "deactivate_users";

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const USER_ADMIN: ModelAdmin = ModelAdmin {
    verbose_name: "이용자",
    path: "/admin/users",
    labels: &[
        ("username", "아이디"),
        ("password", "비밀번호"),
        ("full_name", "성명"),
        ("surname", "성"),
        ("given_name", "이름"),
        ("email", "이메일"),
        ("birthday", "생년월일"),
        ("gender", "성별"),
        ("phone_number", "전화번호"),
        ("branch", "지점"),
        ("license_type", "면허 종류"),
        ("plan_type", "요금제 유형"),
        ("is_active", "계정 상태"),
        ("is_staff", "직원 여부"),
        ("is_superuser", "최고관리자 여부"),
        ("last_login", "최종 접속 일시"),
        ("date_joined", "가입 일시"),
    ],
    list_display: &[
        "full_name",
        "gender",
        "is_active",
        "is_staff",
        "is_superuser",
        "date_joined",
    ],
    list_display_links: &["username", "full_name"],
    list_editable: &[],
    list_filter: &["gender"],
    search_fields: &["full_name", "phone_number"],
    ordering: &["branch", "date_joined"],
    date_hierarchy: Some("date_joined"),
    fieldsets: &[
        Fieldset {
            title: "이용자 기본 정보",
            fields: &["username", "password"],
        },
        Fieldset {
            title: "개인 정보",
            fields: &["surname", "given_name", "birthday", "gender", "phone_number"],
        },
        Fieldset {
            title: "권한",
            fields: &["is_active", "is_staff", "is_superuser"],
        },
    ],
    add_fieldsets: &[
        Fieldset {
            title: "이용자 기본 정보",
            fields: &["username", "password", "branch", "license_type", "plan_type"],
        },
        Fieldset {
            title: "개인 정보",
            fields: &["surname", "given_name", "birthday", "gender", "phone_number"],
        },
        Fieldset {
            title: "권한",
            fields: &["is_staff", "is_superuser"],
        },
    ],
    actions: &[AdminAction {
        name: DEACTIVATE_USERS,
        description: "선택한 이용자를 비활성화 합니다.",
        done_message: "{count}명의 이용자를 비활성화했습니다.",
    }],
};

/// Option of a select input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: &'static str,
}

pub fn gender_choices() -> Vec<Choice> {
    Gender::iter()
        .map(|gender| Choice {
            value: gender.to_value().to_string(),
            label: gender.label(),
        })
        .collect()
}

pub fn license_type_choices() -> Vec<Choice> {
    LicenseType::iter()
        .map(|license_type| Choice {
            value: license_type.to_value(),
            label: license_type.label(),
        })
        .collect()
}

pub fn plan_type_choices() -> Vec<Choice> {
    PlanType::iter()
        .map(|plan_type| Choice {
            value: plan_type.to_value(),
            label: plan_type.label(),
        })
        .collect()
}

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

fn optional_text(value: Option<&str>) -> FieldValue {
    match value {
        Some(value) => text(value),
        None => FieldValue::Empty,
    }
}

impl FieldSource for UserDto {
    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "username" => text(&self.username),
            // Hashes are never shown
            "password" => text("********"),
            "full_name" => text(&self.full_name),
            "surname" => text(&self.surname),
            "given_name" => text(&self.given_name),
            "email" => optional_text(self.email.as_deref()),
            "birthday" => FieldValue::Text(self.birthday.to_string()),
            "gender" => text(&self.gender_label),
            "phone_number" => text(&self.phone_number),
            "branch" => FieldValue::Text(self.branch_id.to_string()),
            "license_type" => optional_text(self.license_type.as_deref()),
            "plan_type" => optional_text(self.plan_type.as_deref()),
            "is_active" => FieldValue::Flag(self.is_active),
            "is_staff" => FieldValue::Flag(self.is_staff),
            "is_superuser" => FieldValue::Flag(self.is_superuser),
            "last_login" => {
                FieldValue::Text(self.last_login.format(DATE_TIME_FORMAT).to_string())
            }
            "date_joined" => {
                FieldValue::Text(self.date_joined.format(DATE_TIME_FORMAT).to_string())
            }
            _ => FieldValue::Empty,
        }
    }
}

impl AdminRecord for UserDto {
    fn record_id(&self) -> i32 {
        self.id
    }
}

/// Submitted values, so a rejected add form keeps what was typed. Passwords are not echoed.
impl FieldSource for UserForm {
    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "username" => text(&self.username),
            "branch" => text(&self.branch),
            "license_type" => text(&self.license_type),
            "plan_type" => text(&self.plan_type),
            "surname" => text(&self.surname),
            "given_name" => text(&self.given_name),
            "email" => text(&self.email),
            "birthday" => text(&self.birthday),
            "gender" => text(&self.gender),
            "phone_number" => text(&self.phone_number),
            "is_staff" => FieldValue::Flag(is_checked(&self.is_staff)),
            "is_superuser" => FieldValue::Flag(is_checked(&self.is_superuser)),
            _ => FieldValue::Empty,
        }
    }
}
