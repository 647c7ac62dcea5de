use common::model::file::{FinalizeFilesRequest, TempFileUpload};
use web_sys::{File, FormData};

use super::error::TransportError;
use super::http_client::ServiceClient;

/// Uploads `file` as a temporary attachment of the reserved case id
/// (`POST /file/upload`, multipart fields `file`, `uploadedBy`, `caseId`).
pub async fn upload_temp_file(
    file_service: &ServiceClient,
    file: &File,
    uploaded_by: &str,
    case_id: i64,
) -> Result<TempFileUpload, TransportError> {
    let form = multipart_form(file, uploaded_by, case_id).map_err(|message| TransportError::Request {
        service: file_service.service(),
        message,
    })?;
    file_service.post_form("/file/upload", form).await
}

/// Promotes every temporary file of `case_id` to its final state
/// (`POST /file/finalize`).
pub async fn finalize_case_files(file_service: &ServiceClient, case_id: i64) -> Result<(), TransportError> {
    file_service
        .post_json_unit("/file/finalize", &FinalizeFilesRequest { case_id })
        .await
}

/// Removes an uploaded file and its stored document (`DELETE /file/{id}`).
pub async fn delete_file(file_service: &ServiceClient, file_metadata_id: i64) -> Result<(), TransportError> {
    file_service.delete(&format!("/file/{}", file_metadata_id)).await
}

fn multipart_form(file: &File, uploaded_by: &str, case_id: i64) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{:?}", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("{:?}", e))?;
    form.append_with_str("uploadedBy", uploaded_by)
        .map_err(|e| format!("{:?}", e))?;
    form.append_with_str("caseId", &case_id.to_string())
        .map_err(|e| format!("{:?}", e))?;
    Ok(form)
}
