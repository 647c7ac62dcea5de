use common::model::case::{Case, CreateCasePayload};

use super::error::TransportError;
use super::http_client::ServiceClient;

/// Reserves the identifier for the next case (`GET /data/cases/next-id`).
pub async fn get_next_case_id(data: &ServiceClient) -> Result<i64, TransportError> {
    data.get_json("/data/cases/next-id").await
}

/// `POST /data/cases` on the write path.
pub async fn create_case(data: &ServiceClient, payload: &CreateCasePayload) -> Result<Case, TransportError> {
    data.post_json("/data/cases", payload).await
}

/// `GET /search/cases` on the separately indexed read path. A case created a
/// moment ago may not be listed yet.
pub async fn get_all_cases(search: &ServiceClient) -> Result<Vec<Case>, TransportError> {
    search.get_json("/search/cases").await
}
