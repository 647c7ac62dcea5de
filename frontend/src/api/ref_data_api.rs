use common::model::country::Country;

use super::error::TransportError;
use super::http_client::ServiceClient;

pub async fn get_countries(refdata: &ServiceClient) -> Result<Vec<Country>, TransportError> {
    refdata.get_json("/refdata/countries").await
}
