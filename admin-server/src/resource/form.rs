//! Form submission validation
//!
//! Walks the form schema and checks the submitted payload field by field:
//! required presence, text length, date format, and foreign-key existence
//! through the injected [`LookupSource`]. Errors accumulate so the client
//! gets every problem in one round trip.

use crate::db::repository::RepoError;
use crate::db::repository::lookup::LookupSource;
use crate::resource::schema::{FieldDef, FormSchema, WidgetKind};
use crate::utils::FieldError;
use chrono::NaiveDate;
use shared::models::{EmployeeCreate, EmployeeUpdate, LookupKind};

/// A create submission that passed validation: required fields are
/// guaranteed present, dates are well-formed, references resolve.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub country_id: i64,
    pub state_id: i64,
    pub city_id: i64,
    pub department_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub zip_code: Option<String>,
    pub dob: Option<String>,
    pub doj: Option<String>,
}

/// What the payload submitted for one schema field
enum Submitted<'a> {
    Reference(Option<i64>),
    Text(Option<&'a str>),
}

fn create_value<'a>(payload: &'a EmployeeCreate, name: &str) -> Submitted<'a> {
    match name {
        "country_id" => Submitted::Reference(payload.country_id),
        "state_id" => Submitted::Reference(payload.state_id),
        "city_id" => Submitted::Reference(payload.city_id),
        "department_id" => Submitted::Reference(payload.department_id),
        "first_name" => Submitted::Text(payload.first_name.as_deref()),
        "last_name" => Submitted::Text(payload.last_name.as_deref()),
        "address" => Submitted::Text(payload.address.as_deref()),
        "zip_code" => Submitted::Text(payload.zip_code.as_deref()),
        "dob" => Submitted::Text(payload.dob.as_deref()),
        "doj" => Submitted::Text(payload.doj.as_deref()),
        _ => Submitted::Text(None),
    }
}

fn update_value<'a>(payload: &'a EmployeeUpdate, name: &str) -> Submitted<'a> {
    match name {
        "country_id" => Submitted::Reference(payload.country_id),
        "state_id" => Submitted::Reference(payload.state_id),
        "city_id" => Submitted::Reference(payload.city_id),
        "department_id" => Submitted::Reference(payload.department_id),
        "first_name" => Submitted::Text(payload.first_name.as_deref()),
        "last_name" => Submitted::Text(payload.last_name.as_deref()),
        "address" => Submitted::Text(payload.address.as_deref()),
        "zip_code" => Submitted::Text(payload.zip_code.as_deref()),
        "dob" => Submitted::Text(payload.dob.as_deref()),
        "doj" => Submitted::Text(payload.doj.as_deref()),
        _ => Submitted::Text(None),
    }
}

/// Validate one field against its definition.
///
/// `partial` relaxes the required check for absent values (update payloads
/// only resubmit the fields they change).
async fn check_field(
    field: &FieldDef,
    value: Submitted<'_>,
    lookups: &dyn LookupSource,
    partial: bool,
    errors: &mut Vec<FieldError>,
) -> Result<(), RepoError> {
    match (&field.widget, value) {
        (WidgetKind::Select { options }, Submitted::Reference(id)) => match id {
            None => {
                if field.required && !partial {
                    errors.push(FieldError::new(field.name, "This field is required"));
                }
            }
            Some(id) => {
                if !lookups.exists(*options, id).await? {
                    errors.push(FieldError::new(
                        field.name,
                        format!("Selected {} does not exist", options.table()),
                    ));
                }
            }
        },
        (WidgetKind::TextInput, Submitted::Text(text)) => match text {
            None => {
                if field.required && !partial {
                    errors.push(FieldError::new(field.name, "This field is required"));
                }
            }
            Some(text) => {
                if field.required && text.trim().is_empty() {
                    errors.push(FieldError::new(field.name, "This field is required"));
                } else if let Some(max) = field.max_len
                    && text.chars().count() > max
                {
                    errors.push(FieldError::new(
                        field.name,
                        format!("Must be at most {max} characters"),
                    ));
                }
            }
        },
        (WidgetKind::DatePicker { .. }, Submitted::Text(text)) => {
            if let Some(text) = text
                && NaiveDate::parse_from_str(text, "%Y-%m-%d").is_err()
            {
                errors.push(FieldError::new(
                    field.name,
                    "Must be a valid date (YYYY-MM-DD)",
                ));
            }
        }
        // Widget and payload accessor disagree on the value shape; the
        // schema and the accessor tables above must stay in sync.
        _ => errors.push(FieldError::new(field.name, "Invalid value for this field")),
    }
    Ok(())
}

/// Validate a create submission. `Err(Vec<FieldError>)` carries every
/// failing field; `RepoError` is a lookup-query failure, not user error.
pub async fn validate_create(
    schema: &FormSchema,
    payload: &EmployeeCreate,
    lookups: &dyn LookupSource,
) -> Result<Result<NewEmployee, Vec<FieldError>>, RepoError> {
    let mut errors = Vec::new();
    for field in &schema.fields {
        let value = create_value(payload, field.name);
        check_field(field, value, lookups, false, &mut errors).await?;
    }
    if !errors.is_empty() {
        return Ok(Err(errors));
    }

    // Required fields are present once validation passed
    match (
        payload.country_id,
        payload.state_id,
        payload.city_id,
        payload.department_id,
        payload.first_name.clone(),
    ) {
        (Some(country_id), Some(state_id), Some(city_id), Some(department_id), Some(first_name)) => {
            Ok(Ok(NewEmployee {
                country_id,
                state_id,
                city_id,
                department_id,
                first_name,
                last_name: payload.last_name.clone(),
                address: payload.address.clone(),
                zip_code: payload.zip_code.clone(),
                dob: payload.dob.clone(),
                doj: payload.doj.clone(),
            }))
        }
        _ => Ok(Err(vec![FieldError::new(
            "form",
            "Missing required fields",
        )])),
    }
}

/// Validate an update submission: only fields the payload carries are
/// checked, required fields may be absent but not blanked out.
pub async fn validate_update(
    schema: &FormSchema,
    payload: &EmployeeUpdate,
    lookups: &dyn LookupSource,
) -> Result<Result<(), Vec<FieldError>>, RepoError> {
    let mut errors = Vec::new();
    for field in &schema.fields {
        let value = update_value(payload, field.name);
        check_field(field, value, lookups, true, &mut errors).await?;
    }
    if errors.is_empty() {
        Ok(Ok(()))
    } else {
        Ok(Err(errors))
    }
}
