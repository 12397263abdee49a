//! Template contexts.
//!
//! Each page has its own context struct; the field names are the variables its template reads.

use serde::Serialize;

use crate::{
    model::{
        branch::{BranchDto, BranchOperationDto},
        form::{BranchForm, BranchListQuery, UserListQuery},
        user::UserDto,
    },
    server::{
        admin::{
            user::{gender_choices, license_type_choices, plan_type_choices, Choice},
            AdminAction, Column, FieldsetView, ModelAdmin, Row, MODEL_ADMINS,
        },
        error::validation::FormErrors,
    },
};

pub const BRANCH_NOT_FOUND_MESSAGE: &str = "지점을 찾을 수 없습니다.";

#[derive(Debug, Serialize)]
pub struct MainContext {
    pub page_title: &'static str,
}

impl MainContext {
    pub fn new() -> Self {
        Self { page_title: "메인" }
    }
}

impl Default for MainContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Branch list with an inline creation form.
#[derive(Debug, Serialize)]
pub struct BranchIndexContext {
    pub page_title: &'static str,
    pub app_verbose_name: &'static str,
    pub branches: Vec<BranchDto>,
    pub form: BranchForm,
    pub errors: FormErrors,
}

impl BranchIndexContext {
    pub fn new(branches: Vec<BranchDto>) -> Self {
        Self {
            page_title: "지점",
            app_verbose_name: "지점",
            branches,
            form: BranchForm::default(),
            errors: FormErrors::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BranchFormContext {
    pub page_title: &'static str,
    pub form: BranchForm,
    pub errors: FormErrors,
}

impl BranchFormContext {
    pub fn new(form: BranchForm, errors: FormErrors) -> Self {
        Self {
            page_title: "지점 등록",
            form,
            errors,
        }
    }
}

/// Detail page of a branch. A missing branch is reported through `error` instead of a 404.
#[derive(Debug, Serialize)]
pub struct BranchDetailContext {
    pub page_title: String,
    pub branch: Option<BranchDto>,
    pub operation: BranchOperationDto,
    pub error: Option<&'static str>,
}

impl BranchDetailContext {
    pub fn found(branch: BranchDto, operation: BranchOperationDto) -> Self {
        Self {
            page_title: branch.display_name.clone(),
            branch: Some(branch),
            operation,
            error: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            page_title: "지점".to_string(),
            branch: None,
            operation: BranchOperationDto::default(),
            error: Some(BRANCH_NOT_FOUND_MESSAGE),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginContext {
    pub page_title: &'static str,
    pub username: String,
    pub error: Option<&'static str>,
}

impl LoginContext {
    pub fn new(username: String, error: Option<&'static str>) -> Self {
        Self {
            page_title: "로그인",
            username,
            error,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminIndexContext {
    pub page_title: &'static str,
    pub staff_name: String,
    pub models: Vec<&'static ModelAdmin>,
}

impl AdminIndexContext {
    pub fn new(staff_name: String) -> Self {
        Self {
            page_title: "사이트 관리",
            staff_name,
            models: MODEL_ADMINS.to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserListContext {
    pub page_title: &'static str,
    pub staff_name: String,
    pub admin: &'static ModelAdmin,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub actions: &'static [AdminAction],
    pub query: UserListQuery,
    /// Drill-down years of the join date, newest first
    pub years: Vec<i32>,
    pub gender_choices: Vec<Choice>,
    pub errors: FormErrors,
    pub message: Option<String>,
}

impl UserListContext {
    pub fn new(
        admin: &'static ModelAdmin,
        staff_name: String,
        users: &[UserDto],
        query: UserListQuery,
        years: Vec<i32>,
    ) -> Self {
        Self {
            page_title: admin.verbose_name,
            staff_name,
            admin,
            columns: admin.columns(),
            rows: admin.rows(users),
            actions: admin.actions,
            query,
            years,
            gender_choices: gender_choices(),
            errors: FormErrors::new(),
            message: None,
        }
    }
}

/// Add page of a user account.
#[derive(Debug, Serialize)]
pub struct UserFormContext {
    pub page_title: &'static str,
    pub staff_name: String,
    pub fieldsets: Vec<FieldsetView>,
    pub branches: Vec<BranchDto>,
    pub gender_choices: Vec<Choice>,
    pub license_type_choices: Vec<Choice>,
    pub plan_type_choices: Vec<Choice>,
    pub errors: FormErrors,
}

impl UserFormContext {
    pub fn new(
        staff_name: String,
        fieldsets: Vec<FieldsetView>,
        branches: Vec<BranchDto>,
        errors: FormErrors,
    ) -> Self {
        Self {
            page_title: "이용자 추가",
            staff_name,
            fieldsets,
            branches,
            gender_choices: gender_choices(),
            license_type_choices: license_type_choices(),
            plan_type_choices: plan_type_choices(),
            errors,
        }
    }
}

/// Change page of an existing user account.
#[derive(Debug, Serialize)]
pub struct UserDetailContext {
    pub page_title: String,
    pub staff_name: String,
    pub user: UserDto,
    pub fieldsets: Vec<FieldsetView>,
    pub gender_choices: Vec<Choice>,
    pub errors: FormErrors,
    pub message: Option<String>,
}

impl UserDetailContext {
    pub fn new(staff_name: String, user: UserDto, fieldsets: Vec<FieldsetView>) -> Self {
        Self {
            page_title: user.full_name.clone(),
            staff_name,
            user,
            fieldsets,
            gender_choices: gender_choices(),
            errors: FormErrors::new(),
            message: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BranchListContext {
    pub page_title: &'static str,
    pub staff_name: String,
    pub admin: &'static ModelAdmin,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub query: BranchListQuery,
    pub message: Option<String>,
}

impl BranchListContext {
    pub fn new(
        admin: &'static ModelAdmin,
        staff_name: String,
        branches: &[BranchDto],
        query: BranchListQuery,
    ) -> Self {
        Self {
            page_title: admin.verbose_name,
            staff_name,
            admin,
            columns: admin.columns(),
            rows: admin.rows(branches),
            query,
            message: None,
        }
    }
}

/// Back-office page of a branch with its schedule forms.
#[derive(Debug, Serialize)]
pub struct AdminBranchDetailContext {
    pub page_title: String,
    pub staff_name: String,
    pub branch: BranchDto,
    pub fieldsets: Vec<FieldsetView>,
    pub operation: BranchOperationDto,
    pub errors: FormErrors,
    pub message: Option<String>,
}

impl AdminBranchDetailContext {
    pub fn new(
        staff_name: String,
        branch: BranchDto,
        fieldsets: Vec<FieldsetView>,
        operation: BranchOperationDto,
    ) -> Self {
        Self {
            page_title: branch.display_name.clone(),
            staff_name,
            branch,
            fieldsets,
            operation,
            errors: FormErrors::new(),
            message: None,
        }
    }
}
