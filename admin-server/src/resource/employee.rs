//! Employee resource declaration
//!
//! Form and table schemas for the employee admin screen. Field and column
//! order here is the order the client renders them in.

use crate::resource::schema::{ColumnDef, FieldDef, FormSchema, TableSchema};
use crate::utils::validation::{MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_ZIP_LEN};
use shared::models::LookupKind;

pub fn form_schema() -> FormSchema {
    FormSchema {
        fields: vec![
            FieldDef::select("country_id", LookupKind::Country).required(),
            FieldDef::select("state_id", LookupKind::State).required(),
            FieldDef::select("city_id", LookupKind::City).required(),
            FieldDef::select("department_id", LookupKind::Department).required(),
            FieldDef::text("first_name").required().max_len(MAX_NAME_LEN),
            FieldDef::text("last_name").max_len(MAX_NAME_LEN),
            FieldDef::text("address").max_len(MAX_ADDRESS_LEN),
            FieldDef::text("zip_code").max_len(MAX_ZIP_LEN),
            FieldDef::date("dob").label("Date of Birth"),
            FieldDef::date("doj").label("Date of Joining"),
        ],
    }
}

pub fn table_schema() -> TableSchema {
    TableSchema {
        columns: vec![
            ColumnDef::new("id").sortable(),
            ColumnDef::new("first_name").sortable().searchable(),
            ColumnDef::new("last_name").sortable().searchable(),
            ColumnDef::new("dob").label("Date of Birth").sortable().searchable(),
            ColumnDef::new("doj").label("Date of Joining").sortable().searchable(),
            ColumnDef::new("created_at").datetime(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::schema::WidgetKind;

    #[test]
    fn form_declares_all_required_fields() {
        let schema = form_schema();
        let required: Vec<_> = schema
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(
            required,
            vec!["country_id", "state_id", "city_id", "department_id", "first_name"]
        );
    }

    #[test]
    fn date_fields_use_non_native_picker_with_fixed_format() {
        let schema = form_schema();
        for name in ["dob", "doj"] {
            let field = schema.field(name).unwrap();
            match &field.widget {
                WidgetKind::DatePicker {
                    display_format,
                    native,
                } => {
                    assert_eq!(*display_format, "d/m/Y");
                    assert!(!native);
                }
                other => panic!("{name} should be a date picker, got {other:?}"),
            }
        }
    }

    #[test]
    fn table_columns_match_list_view_contract() {
        let table = table_schema();
        let names: Vec<_> = table.columns.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["id", "first_name", "last_name", "dob", "doj", "created_at"]
        );
        let created = table.columns.last().unwrap();
        assert!(created.datetime);
        assert!(!created.searchable);
    }
}
