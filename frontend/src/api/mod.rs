//! Service clients and the typed calls the views make through them.
//!
//! Views talk to [`PortalApi`], never to the clients directly, so the
//! submit/upload sequences can run against a recording fake in tests.

pub mod case_api;
pub mod error;
pub mod file_api;
pub mod http_client;
pub mod ref_data_api;

#[cfg(test)]
pub mod test_support;

use common::model::case::{Case, CreateCasePayload};
use common::model::country::Country;
use common::model::file::TempFileUpload;

use crate::config::{AppConfig, ServiceKind};
pub use error::TransportError;
use http_client::ServiceClient;

#[allow(async_fn_in_trait)]
pub trait PortalApi {
    /// Handle to a user-selected file.
    type File;

    async fn get_next_case_id(&self) -> Result<i64, TransportError>;
    async fn create_case(&self, payload: &CreateCasePayload) -> Result<Case, TransportError>;
    async fn get_all_cases(&self) -> Result<Vec<Case>, TransportError>;
    async fn get_countries(&self) -> Result<Vec<Country>, TransportError>;
    async fn upload_temp_file(
        &self,
        file: &Self::File,
        uploaded_by: &str,
        case_id: i64,
    ) -> Result<TempFileUpload, TransportError>;
    async fn finalize_case_files(&self, case_id: i64) -> Result<(), TransportError>;
    async fn delete_file(&self, file_metadata_id: i64) -> Result<(), TransportError>;
}

/// The four HTTP clients, one per backend service. No state is shared
/// between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasePortalApi {
    data: ServiceClient,
    refdata: ServiceClient,
    file: ServiceClient,
    search: ServiceClient,
}

impl CasePortalApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            data: ServiceClient::from_config(config, ServiceKind::Data),
            refdata: ServiceClient::from_config(config, ServiceKind::RefData),
            file: ServiceClient::from_config(config, ServiceKind::File),
            search: ServiceClient::from_config(config, ServiceKind::Search),
        }
    }
}

impl PortalApi for CasePortalApi {
    type File = web_sys::File;

    async fn get_next_case_id(&self) -> Result<i64, TransportError> {
        case_api::get_next_case_id(&self.data).await
    }

    async fn create_case(&self, payload: &CreateCasePayload) -> Result<Case, TransportError> {
        case_api::create_case(&self.data, payload).await
    }

    async fn get_all_cases(&self) -> Result<Vec<Case>, TransportError> {
        case_api::get_all_cases(&self.search).await
    }

    async fn get_countries(&self) -> Result<Vec<Country>, TransportError> {
        ref_data_api::get_countries(&self.refdata).await
    }

    async fn upload_temp_file(
        &self,
        file: &web_sys::File,
        uploaded_by: &str,
        case_id: i64,
    ) -> Result<TempFileUpload, TransportError> {
        file_api::upload_temp_file(&self.file, file, uploaded_by, case_id).await
    }

    async fn finalize_case_files(&self, case_id: i64) -> Result<(), TransportError> {
        file_api::finalize_case_files(&self.file, case_id).await
    }

    async fn delete_file(&self, file_metadata_id: i64) -> Result<(), TransportError> {
        file_api::delete_file(&self.file, file_metadata_id).await
    }
}
