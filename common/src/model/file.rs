use serde::{Deserialize, Serialize};

/// Status the file service assigns to an upload that is not yet bound to a
/// created case.
pub const TEMP_STATUS: &str = "TEMP";

/// Response of `POST /file/upload`.
///
/// `status` stays a string: the file service owns the set of values
/// (`TEMP`, `FINAL`) and may grow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TempFileUpload {
    pub file_metadata_id: i64,
    pub doc_id: i64,
    pub status: String,
}

impl TempFileUpload {
    pub fn is_temporary(&self) -> bool {
        self.status.eq_ignore_ascii_case(TEMP_STATUS)
    }
}

/// Body of `POST /file/finalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeFilesRequest {
    pub case_id: i64,
}
