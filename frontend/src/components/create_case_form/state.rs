//! Component state for the case creation form.
//!
//! `FormState` holds everything the form knows (field values, reference data,
//! the reserved case id, the selected and uploaded file, flags for in-flight
//! requests, messages) and implements every transition as a plain method, so
//! `update.rs` only decides which future to spawn. It is generic over the file
//! handle so the transitions can be exercised without a browser.

use common::model::case::Case;
use common::model::country::Country;
use common::model::file::TempFileUpload;
use common::validation::{validate, CaseDraft, CaseField, FieldErrors};

use super::workflow::{SubmitError, Submission, UploadError, UploadRequest};
use crate::api::{CasePortalApi, TransportError};
use crate::components::liveness::Liveness;

pub const ANONYMOUS_UPLOADER: &str = "Anonymous";

/// Where the form is in its lifecycle. Derived from the state flags; see
/// [`FormState::phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    LoadingPrerequisites,
    Editing,
    UploadingFile,
    Submitting,
}

/// A file picked in the file input, not necessarily uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub handle: F,
}

#[derive(Debug, Clone)]
pub struct FormState<F> {
    pub draft: CaseDraft,
    pub countries: Vec<Country>,
    /// Identifier reserved on the data service; submissions are blocked until
    /// it arrives.
    pub next_case_id: Option<i64>,
    pub selected_file: Option<SelectedFile<F>>,
    /// Result of the last successful upload in this form session.
    pub temp_file: Option<TempFileUpload>,
    pub loading_countries: bool,
    pub loading_case_id: bool,
    pub uploading_file: bool,
    pub removing_file: bool,
    pub submitting: bool,
    /// Set once prerequisites were requested or a field was touched; reset
    /// after a successful submission.
    pub engaged: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub validation_errors: FieldErrors,
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        Self {
            draft: CaseDraft::default(),
            countries: Vec::new(),
            next_case_id: None,
            selected_file: None,
            temp_file: None,
            loading_countries: false,
            loading_case_id: false,
            uploading_file: false,
            removing_file: false,
            submitting: false,
            engaged: false,
            error_message: None,
            success_message: None,
            validation_errors: FieldErrors::default(),
        }
    }
}

impl<F: Clone> FormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitting {
            FormPhase::Submitting
        } else if self.uploading_file {
            FormPhase::UploadingFile
        } else if self.loading_countries || self.loading_case_id {
            FormPhase::LoadingPrerequisites
        } else if self.engaged {
            FormPhase::Editing
        } else {
            FormPhase::Idle
        }
    }

    /// Marks both reference loads as in flight. They complete independently
    /// and in any order.
    pub fn begin_prerequisites(&mut self) {
        self.loading_countries = true;
        self.loading_case_id = true;
        self.engaged = true;
    }

    pub fn countries_loaded(&mut self, result: Result<Vec<Country>, TransportError>) {
        self.loading_countries = false;
        match result {
            Ok(countries) => self.countries = countries,
            Err(_) => {
                self.error_message = Some("Failed to load countries. Please refresh the page.".into())
            }
        }
    }

    pub fn case_id_loaded(&mut self, result: Result<i64, TransportError>) {
        self.loading_case_id = false;
        match result {
            Ok(id) => self.next_case_id = Some(id),
            Err(_) => self.error_message = Some("Failed to load case ID. Please refresh the page.".into()),
        }
    }

    pub fn set_field(&mut self, field: CaseField, value: String) {
        self.draft.set(field, value);
        self.engaged = true;
    }

    /// A newly picked file replaces the previous one and forgets any upload
    /// made for it. Nothing is uploaded until the user asks.
    pub fn select_file(&mut self, file: Option<SelectedFile<F>>) {
        if let Some(file) = file {
            self.selected_file = Some(file);
            self.temp_file = None;
            self.engaged = true;
        }
    }

    pub fn can_upload(&self) -> bool {
        self.selected_file.is_some() && !self.uploading_file && !self.removing_file && !self.submitting
    }

    /// A submission waits for any upload or removal to settle, so the
    /// finalize decision sees the final upload state.
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.loading_case_id && !self.file_operation_pending()
    }

    fn file_operation_pending(&self) -> bool {
        self.uploading_file || self.removing_file
    }

    /// Checks the upload preconditions and, when they hold, enters the
    /// uploading sub-state.
    pub fn begin_upload(&mut self) -> Option<UploadRequest<F>> {
        match self.prepare_upload() {
            Ok(request) => {
                self.uploading_file = true;
                self.error_message = None;
                Some(request)
            }
            Err(err) => {
                self.error_message = Some(err.user_message().to_string());
                None
            }
        }
    }

    fn prepare_upload(&self) -> Result<UploadRequest<F>, UploadError> {
        let file = self.selected_file.as_ref().ok_or(UploadError::NoFileSelected)?;
        let case_id = self.next_case_id.ok_or(UploadError::CaseIdNotReserved)?;
        let reporter = self.draft.reporter_name.trim();
        let uploaded_by = if reporter.is_empty() { ANONYMOUS_UPLOADER } else { reporter };

        Ok(UploadRequest {
            file: file.handle.clone(),
            file_name: file.name.clone(),
            uploaded_by: uploaded_by.to_string(),
            case_id,
        })
    }

    pub fn finish_upload(&mut self, result: Result<TempFileUpload, UploadError>) {
        self.uploading_file = false;
        match result {
            Ok(upload) => {
                let name = self
                    .selected_file
                    .as_ref()
                    .map(|f| f.name.as_str())
                    .unwrap_or("File");
                self.success_message = Some(format!("File uploaded: {} ({})", name, upload.status));
                self.temp_file = Some(upload);
            }
            Err(err) => self.error_message = Some(err.user_message().to_string()),
        }
    }

    /// Returns the metadata id of the uploaded file to delete, if any.
    pub fn begin_remove(&mut self) -> Option<i64> {
        if self.removing_file || self.uploading_file || self.submitting {
            return None;
        }
        let id = self.temp_file.as_ref()?.file_metadata_id;
        self.removing_file = true;
        self.error_message = None;
        Some(id)
    }

    pub fn finish_remove(&mut self, result: Result<(), TransportError>) {
        self.removing_file = false;
        match result {
            Ok(()) => {
                self.temp_file = None;
                self.success_message = Some("Uploaded file removed.".into());
            }
            Err(_) => {
                self.error_message = Some("Failed to remove uploaded file. Please try again.".into())
            }
        }
    }

    /// Validates the whole form and checks that a case id is reserved. On
    /// success enters `Submitting` and returns what must be sent.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.submitting {
            return None;
        }
        if self.file_operation_pending() {
            self.error_message = Some(SubmitError::FileOperationPending.user_message().to_string());
            return None;
        }
        self.error_message = None;
        self.success_message = None;

        match self.prepare_submission() {
            Ok(submission) => {
                self.validation_errors = FieldErrors::default();
                self.submitting = true;
                Some(submission)
            }
            Err(err) => {
                if let SubmitError::Invalid(errors) = &err {
                    self.validation_errors = errors.clone();
                } else {
                    self.validation_errors = FieldErrors::default();
                }
                self.error_message = Some(err.user_message().to_string());
                None
            }
        }
    }

    fn prepare_submission(&self) -> Result<Submission, SubmitError> {
        let fields = validate(&self.draft, &self.countries).map_err(SubmitError::Invalid)?;
        let case_id = self.next_case_id.ok_or(SubmitError::CaseIdNotReserved)?;

        Ok(Submission {
            payload: fields.into_payload(case_id),
            finalize_files: self.temp_file.is_some(),
        })
    }

    /// Leaves `Submitting`. A created case clears the form and is handed
    /// back for the parent; any failure keeps the field values.
    pub fn finish_submit(&mut self, result: Result<Case, SubmitError>) -> Option<Case> {
        self.submitting = false;
        match result {
            Ok(case) => {
                self.success_message = Some(format!("Case #{} created successfully!", case.id));
                self.clear();
                self.engaged = false;
                Some(case)
            }
            Err(err) => {
                self.error_message = Some(err.user_message().to_string());
                None
            }
        }
    }

    /// Resets every field, the file selection, the upload result and the
    /// validation errors. Reference data and the reserved id are kept.
    pub fn clear(&mut self) {
        self.draft = CaseDraft::default();
        self.selected_file = None;
        self.temp_file = None;
        self.validation_errors = FieldErrors::default();
    }
}

/// The Yew component wrapping [`FormState`].
pub struct CreateCaseForm {
    pub state: FormState<web_sys::File>,
    pub api: CasePortalApi,
    /// Shared with every spawned request; ended in `destroy`.
    pub liveness: Liveness,
    /// Guard to run the first-render loads only once.
    pub loaded: bool,
}

impl CreateCaseForm {
    pub fn new(api: CasePortalApi) -> Self {
        Self {
            state: FormState::new(),
            api,
            liveness: Liveness::new(),
            loaded: false,
        }
    }
}
