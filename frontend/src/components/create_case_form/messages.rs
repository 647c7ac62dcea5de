use common::model::case::Case;
use common::model::country::Country;
use common::model::file::TempFileUpload;
use common::validation::CaseField;

use super::workflow::{SubmitError, UploadError};
use crate::api::TransportError;

pub enum Msg {
    SetField(CaseField, String),
    CountriesLoaded(Result<Vec<Country>, TransportError>),
    CaseIdLoaded(Result<i64, TransportError>),
    FileSelected(Option<web_sys::File>),
    UploadFile,
    UploadFinished(Result<TempFileUpload, UploadError>),
    RemoveUpload,
    RemoveFinished(Result<(), TransportError>),
    Submit,
    SubmitFinished(Result<Case, SubmitError>),
    Clear,
}
