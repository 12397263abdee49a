//! Declarative back-office configuration.
//!
//! Each managed entity gets a [`ModelAdmin`] describing which fields its list page shows,
//! links, filters and searches, how detail and add pages group fields and which bulk actions
//! exist. The configuration is plain data; list rows and fieldsets are produced from any
//! record implementing [`FieldSource`].

pub mod branch;
pub mod user;

use serde::Serialize;

/// Titled group of fields on a detail or add page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Fieldset {
    pub title: &'static str,
    pub fields: &'static [&'static str],
}

/// Bulk action applied to the rows selected on a list page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdminAction {
    pub name: &'static str,
    pub description: &'static str,
    /// Notice shown after the action ran, `{count}` is replaced by the number of changed rows
    pub done_message: &'static str,
}

impl AdminAction {
    pub fn done_message(&self, affected: u64) -> String {
        self.done_message.replace("{count}", &affected.to_string())
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModelAdmin {
    pub verbose_name: &'static str,
    /// Mount point of the list page
    pub path: &'static str,
    /// Field name to display label, unlisted fields show their name
    #[serde(skip)]
    pub labels: &'static [(&'static str, &'static str)],
    pub list_display: &'static [&'static str],
    pub list_display_links: &'static [&'static str],
    pub list_editable: &'static [&'static str],
    pub list_filter: &'static [&'static str],
    pub search_fields: &'static [&'static str],
    pub ordering: &'static [&'static str],
    pub date_hierarchy: Option<&'static str>,
    /// Grouping for existing records
    pub fieldsets: &'static [Fieldset],
    /// Grouping for new records
    pub add_fieldsets: &'static [Fieldset],
    pub actions: &'static [AdminAction],
}

/// Display value of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Empty,
}

/// Anything that can be shown field by field on an admin page.
pub trait FieldSource {
    fn field_value(&self, field: &str) -> FieldValue;
}

/// Stored record listed on an admin page.
pub trait AdminRecord: FieldSource {
    fn record_id(&self) -> i32;
}

#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub field: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub field: &'static str,
    pub text: String,
    /// Set for boolean fields, rendered as a check mark or toggle
    pub flag: Option<bool>,
    pub is_link: bool,
    pub is_editable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub id: i32,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub text: String,
    pub flag: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldsetView {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
}

fn split_value(value: FieldValue) -> (String, Option<bool>) {
    match value {
        FieldValue::Text(text) => (text, None),
        FieldValue::Flag(flag) => (String::new(), Some(flag)),
        FieldValue::Empty => (String::new(), None),
    }
}

impl ModelAdmin {
    pub fn label(&self, field: &'static str) -> &'static str {
        self.labels
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, label)| *label)
            .unwrap_or(field)
    }

    pub fn columns(&self) -> Vec<Column> {
        self.list_display
            .iter()
            .map(|&field| Column {
                field,
                label: self.label(field),
            })
            .collect()
    }

    /// One row per record with a cell for every `list_display` field.
    pub fn rows<R: AdminRecord>(&self, records: &[R]) -> Vec<Row> {
        records
            .iter()
            .map(|record| Row {
                id: record.record_id(),
                cells: self
                    .list_display
                    .iter()
                    .map(|&field| {
                        let (text, flag) = split_value(record.field_value(field));
                        Cell {
                            field,
                            text,
                            flag,
                            is_link: self.list_display_links.contains(&field),
                            is_editable: self.list_editable.contains(&field),
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    /// Values of `fieldsets`, or `add_fieldsets` when `adding`, read from `source`.
    pub fn fieldset_views<S: FieldSource>(&self, source: &S, adding: bool) -> Vec<FieldsetView> {
        let fieldsets = if adding {
            self.add_fieldsets
        } else {
            self.fieldsets
        };

        fieldsets
            .iter()
            .map(|fieldset| FieldsetView {
                title: fieldset.title,
                fields: fieldset
                    .fields
                    .iter()
                    .map(|&field| {
                        let (text, flag) = split_value(source.field_value(field));
                        FieldView {
                            name: field,
                            label: self.label(field),
                            text,
                            flag,
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    pub fn action(&self, name: &str) -> Option<&'static AdminAction> {
        self.actions.iter().find(|action| action.name == name)
    }
}

/// Registered admins, in the order shown on the index page.
pub const MODEL_ADMINS: [&ModelAdmin; 2] = [&user::USER_ADMIN, &branch::BRANCH_ADMIN];
