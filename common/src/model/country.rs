use serde::{Deserialize, Serialize};

/// Reference-data entry served by `GET /refdata/countries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}
