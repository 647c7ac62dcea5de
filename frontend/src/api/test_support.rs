//! Recording fake of [`PortalApi`] for workflow tests.

use std::cell::RefCell;

use common::model::case::{Case, CreateCasePayload};
use common::model::country::Country;
use common::model::file::TempFileUpload;

use super::{PortalApi, TransportError};
use crate::config::ServiceKind;

/// A request the fake received, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    NextCaseId,
    CreateCase(CreateCasePayload),
    AllCases,
    Countries,
    Upload {
        file: String,
        uploaded_by: String,
        case_id: i64,
    },
    Finalize(i64),
    DeleteFile(i64),
}

pub fn server_error(service: ServiceKind) -> TransportError {
    TransportError::Status {
        service,
        status: 500,
        message: "Internal Server Error".into(),
    }
}

pub fn us() -> Country {
    Country {
        code: "US".into(),
        name: "United States".into(),
    }
}

pub struct FakeApi {
    /// Every request received, in arrival order.
    pub calls: RefCell<Vec<Call>>,
    pub next_case_id: Result<i64, TransportError>,
    pub countries: Result<Vec<Country>, TransportError>,
    pub cases: Result<Vec<Case>, TransportError>,
    /// Id the data service assigns on create; defaults to the payload id.
    pub created_id: Option<i64>,
    pub fail_create: bool,
    pub fail_upload: bool,
    pub fail_finalize: bool,
    pub fail_delete: bool,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            next_case_id: Ok(42),
            countries: Ok(vec![us()]),
            cases: Ok(Vec::new()),
            created_id: None,
            fail_create: false,
            fail_upload: false,
            fail_finalize: false,
            fail_delete: false,
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| matches(call)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl PortalApi for FakeApi {
    /// Files are identified by name only.
    type File = String;

    async fn get_next_case_id(&self) -> Result<i64, TransportError> {
        self.record(Call::NextCaseId);
        self.next_case_id.clone()
    }

    async fn create_case(&self, payload: &CreateCasePayload) -> Result<Case, TransportError> {
        self.record(Call::CreateCase(payload.clone()));
        if self.fail_create {
            return Err(server_error(ServiceKind::Data));
        }
        Ok(Case {
            id: self.created_id.unwrap_or(payload.id),
            title: payload.title.clone(),
            description: payload.description.clone(),
            country: payload.country.clone(),
            amount: payload.amount,
            reporter_name: payload.reporter_name.clone(),
            created_at: "2026-10-18T09:15:00".into(),
        })
    }

    async fn get_all_cases(&self) -> Result<Vec<Case>, TransportError> {
        self.record(Call::AllCases);
        self.cases.clone()
    }

    async fn get_countries(&self) -> Result<Vec<Country>, TransportError> {
        self.record(Call::Countries);
        self.countries.clone()
    }

    async fn upload_temp_file(
        &self,
        file: &String,
        uploaded_by: &str,
        case_id: i64,
    ) -> Result<TempFileUpload, TransportError> {
        self.record(Call::Upload {
            file: file.clone(),
            uploaded_by: uploaded_by.to_string(),
            case_id,
        });
        if self.fail_upload {
            return Err(server_error(ServiceKind::File));
        }
        Ok(TempFileUpload {
            file_metadata_id: 7,
            doc_id: 9,
            status: "TEMP".into(),
        })
    }

    async fn finalize_case_files(&self, case_id: i64) -> Result<(), TransportError> {
        self.record(Call::Finalize(case_id));
        if self.fail_finalize {
            return Err(server_error(ServiceKind::File));
        }
        Ok(())
    }

    async fn delete_file(&self, file_metadata_id: i64) -> Result<(), TransportError> {
        self.record(Call::DeleteFile(file_metadata_id));
        if self.fail_delete {
            return Err(server_error(ServiceKind::File));
        }
        Ok(())
    }
}
