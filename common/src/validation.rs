//! Client-side validation of the create-case form.
//!
//! Validation runs once, when the user submits, and reports every violated
//! field at the same time. It never touches the network: a draft that fails
//! here must not produce any request.

use std::collections::BTreeMap;

use crate::model::case::CreateCasePayload;
use crate::model::country::Country;

/// Form fields that carry a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CaseField {
    Title,
    Description,
    Country,
    Amount,
    ReporterName,
}

impl CaseField {
    pub const ALL: [CaseField; 5] = [
        CaseField::Title,
        CaseField::Description,
        CaseField::Country,
        CaseField::Amount,
        CaseField::ReporterName,
    ];

    /// Key used for the field in the error map and as the DOM id.
    pub fn key(self) -> &'static str {
        match self {
            CaseField::Title => "title",
            CaseField::Description => "description",
            CaseField::Country => "country",
            CaseField::Amount => "amount",
            CaseField::ReporterName => "reporterName",
        }
    }
}

/// Field values exactly as typed; nothing is trimmed or parsed until
/// [`validate`] runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseDraft {
    pub title: String,
    pub description: String,
    pub country: String,
    pub amount: String,
    pub reporter_name: String,
}

impl CaseDraft {
    pub fn get(&self, field: CaseField) -> &str {
        match field {
            CaseField::Title => &self.title,
            CaseField::Description => &self.description,
            CaseField::Country => &self.country,
            CaseField::Amount => &self.amount,
            CaseField::ReporterName => &self.reporter_name,
        }
    }

    pub fn set(&mut self, field: CaseField, value: String) {
        let slot = match field {
            CaseField::Title => &mut self.title,
            CaseField::Description => &mut self.description,
            CaseField::Country => &mut self.country,
            CaseField::Amount => &mut self.amount,
            CaseField::ReporterName => &mut self.reporter_name,
        };
        *slot = value;
    }
}

/// Per-field error messages, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<CaseField, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: CaseField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: CaseField) -> bool {
        self.0.contains_key(&field)
    }

    fn insert(&mut self, field: CaseField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// A draft that passed validation. Only a server-reserved id turns it into a
/// payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCaseFields {
    pub title: String,
    pub description: String,
    pub country: String,
    pub amount: f64,
    pub reporter_name: String,
}

impl CreateCaseFields {
    pub fn into_payload(self, reserved_id: i64) -> CreateCasePayload {
        CreateCasePayload {
            id: reserved_id,
            title: self.title,
            description: self.description,
            country: self.country,
            amount: self.amount,
            reporter_name: self.reporter_name,
        }
    }
}

/// Checks every rule and collects all failures.
///
/// Text fields are sent as typed; trimming only decides emptiness.
pub fn validate(draft: &CaseDraft, countries: &[Country]) -> Result<CreateCaseFields, FieldErrors> {
    let mut errors = FieldErrors::default();

    if draft.title.trim().is_empty() {
        errors.insert(CaseField::Title, "Title is required");
    }
    if draft.description.trim().is_empty() {
        errors.insert(CaseField::Description, "Description is required");
    }

    if draft.country.is_empty() {
        errors.insert(CaseField::Country, "Country is required");
    } else if !countries.iter().any(|c| c.code == draft.country) {
        errors.insert(CaseField::Country, "Select a country from the list");
    }

    let amount = parse_amount(&draft.amount);
    if amount.is_none() {
        errors.insert(CaseField::Amount, "Valid amount is required");
    }

    if draft.reporter_name.trim().is_empty() {
        errors.insert(CaseField::ReporterName, "Reporter name is required");
    }

    match amount {
        Some(amount) if errors.is_empty() => Ok(CreateCaseFields {
            title: draft.title.clone(),
            description: draft.description.clone(),
            country: draft.country.clone(),
            amount,
            reporter_name: draft.reporter_name.clone(),
        }),
        _ => Err(errors),
    }
}

/// A usable amount is a finite decimal strictly greater than zero.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}
