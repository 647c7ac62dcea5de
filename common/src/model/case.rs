use serde::{Deserialize, Serialize};

/// A case as returned by the data service after creation and by the search
/// service when listing.
///
/// `created_at` is assigned by the server and kept as the raw ISO-8601 string;
/// the list view decides how (and whether) it can be formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub country: String,
    pub amount: f64,
    pub reporter_name: String,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /data/cases`.
///
/// The `id` must come from `GET /data/cases/next-id`; the client never
/// invents identifiers. There is no timestamp, the server assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCasePayload {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub country: String,
    pub amount: f64,
    pub reporter_name: String,
}
