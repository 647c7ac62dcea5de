//! Network sequences behind the form's buttons.
//!
//! Each function performs the requests for one user action, strictly in
//! order, against any [`PortalApi`]. Preconditions are checked beforehand by
//! [`FormState`](super::state::FormState); nothing here touches form state.

use common::model::case::{Case, CreateCasePayload};
use common::model::file::TempFileUpload;
use common::validation::FieldErrors;
use thiserror::Error;
use yew::Callback;

use crate::api::{PortalApi, TransportError};

/// What a validated submission sends.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub payload: CreateCasePayload,
    /// A temporary file was uploaded in this form session and must be
    /// finalized once the case exists.
    pub finalize_files: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest<F> {
    pub file: F,
    pub file_name: String,
    pub uploaded_by: String,
    pub case_id: i64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),

    #[error("no case id has been reserved yet")]
    CaseIdNotReserved,

    #[error("a file upload or removal is still in flight")]
    FileOperationPending,

    #[error("case creation failed: {0}")]
    CreateFailed(TransportError),

    #[error("case {case_id} was created but finalizing its files failed: {source}")]
    FinalizeFailed { case_id: i64, source: TransportError },
}

impl SubmitError {
    /// Creation and finalization failures read the same to the user; the
    /// case may exist even though the form reports a failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Invalid(_) => "Please fix the validation errors.",
            SubmitError::CaseIdNotReserved => "Case ID not loaded. Please refresh the page.",
            SubmitError::FileOperationPending => "Please wait for the file operation to finish.",
            SubmitError::CreateFailed(_) | SubmitError::FinalizeFailed { .. } => {
                "Failed to create case. Please try again."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("no file selected")]
    NoFileSelected,

    #[error("no case id has been reserved yet")]
    CaseIdNotReserved,

    #[error("upload failed: {0}")]
    Failed(TransportError),
}

impl UploadError {
    pub fn user_message(&self) -> &'static str {
        match self {
            UploadError::NoFileSelected => "Please select a file first.",
            UploadError::CaseIdNotReserved => "Case ID not yet generated. Please wait or refresh.",
            UploadError::Failed(_) => "Failed to upload file. Please try again.",
        }
    }
}

pub async fn upload<A: PortalApi>(
    api: &A,
    request: &UploadRequest<A::File>,
) -> Result<TempFileUpload, UploadError> {
    api.upload_temp_file(&request.file, &request.uploaded_by, request.case_id)
        .await
        .map_err(UploadError::Failed)
}

/// Creates the case, then finalizes its temporary files when there are any.
/// A finalize failure does not undo the creation.
pub async fn submit<A: PortalApi>(api: &A, submission: &Submission) -> Result<Case, SubmitError> {
    let created = api
        .create_case(&submission.payload)
        .await
        .map_err(SubmitError::CreateFailed)?;

    if submission.finalize_files {
        api.finalize_case_files(created.id)
            .await
            .map_err(|source| SubmitError::FinalizeFailed {
                case_id: created.id,
                source,
            })?;
    }

    Ok(created)
}

/// Runs [`submit`] and hands a created case to `on_created` as soon as the
/// sequence succeeds. The parent is told even if the form was closed while
/// the requests were in flight.
pub async fn submit_and_notify<A: PortalApi>(
    api: &A,
    submission: &Submission,
    on_created: &Callback<Case>,
) -> Result<Case, SubmitError> {
    let result = submit(api, submission).await;
    if let Ok(case) = &result {
        on_created.emit(case.clone());
    }
    result
}

pub async fn discard_upload<A: PortalApi>(api: &A, file_metadata_id: i64) -> Result<(), TransportError> {
    api.delete_file(file_metadata_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{Call, FakeApi};
    use crate::components::create_case_form::state::{FormPhase, FormState, SelectedFile};
    use common::validation::CaseField;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn loaded_state(api: &FakeApi) -> FormState<String> {
        let mut state = FormState::new();
        state.begin_prerequisites();
        state.countries_loaded(block_on(api.get_countries()));
        state.case_id_loaded(block_on(api.get_next_case_id()));
        state
    }

    fn fill(state: &mut FormState<String>) {
        state.set_field(CaseField::Title, "Water damage".into());
        state.set_field(CaseField::Description, "Basement flooded".into());
        state.set_field(CaseField::Country, "US".into());
        state.set_field(CaseField::Amount, "100.50".into());
        state.set_field(CaseField::ReporterName, "Ada".into());
    }

    fn pick(state: &mut FormState<String>, name: &str) {
        state.select_file(Some(SelectedFile {
            name: name.into(),
            handle: name.into(),
        }));
    }

    /// Mirrors the update loop: network calls only happen when the state
    /// lets the submission start.
    fn drive_submit(api: &FakeApi, state: &mut FormState<String>) -> Option<Case> {
        let submission = state.begin_submit()?;
        assert_eq!(state.phase(), FormPhase::Submitting);
        let result = block_on(submit(api, &submission));
        state.finish_submit(result)
    }

    fn drive_upload(api: &FakeApi, state: &mut FormState<String>) {
        if let Some(request) = state.begin_upload() {
            assert_eq!(state.phase(), FormPhase::UploadingFile);
            let result = block_on(upload(api, &request));
            state.finish_upload(result);
        }
    }

    fn creates(api: &FakeApi) -> usize {
        api.count(|c| matches!(c, Call::CreateCase(_)))
    }

    fn finalizes(api: &FakeApi) -> usize {
        api.count(|c| matches!(c, Call::Finalize(_)))
    }

    #[test]
    fn submit_without_file_creates_once_and_never_finalizes() {
        let api = FakeApi::default();
        let mut state = loaded_state(&api);
        fill(&mut state);

        let created = drive_submit(&api, &mut state).expect("case created");

        assert_eq!(created.id, 42);
        assert_eq!(creates(&api), 1);
        assert_eq!(finalizes(&api), 0);
        let payload = api
            .calls()
            .into_iter()
            .find_map(|c| match c {
                Call::CreateCase(p) => Some(p),
                _ => None,
            })
            .unwrap();
        assert_eq!(payload.id, 42);
        assert_eq!(payload.country, "US");
        assert_eq!(payload.amount, 100.50);
        assert_eq!(payload.title, "Water damage");
        assert_eq!(payload.reporter_name, "Ada");
    }

    #[test]
    fn successful_submit_clears_the_form() {
        let api = FakeApi::default();
        let mut state = loaded_state(&api);
        fill(&mut state);

        drive_submit(&api, &mut state).unwrap();

        assert_eq!(state.draft, Default::default());
        assert!(state.temp_file.is_none());
        assert!(state.validation_errors.is_empty());
        assert_eq!(state.phase(), FormPhase::Idle);
        assert_eq!(state.success_message.as_deref(), Some("Case #42 created successfully!"));
    }

    #[test]
    fn invalid_form_makes_no_calls_and_reports_every_field() {
        let api = FakeApi::default();
        let mut state = loaded_state(&api);
        let before = api.calls().len();

        assert!(drive_submit(&api, &mut state).is_none());

        assert_eq!(api.calls().len(), before);
        assert_eq!(state.validation_errors.len(), CaseField::ALL.len());
        assert_eq!(state.error_message.as_deref(), Some("Please fix the validation errors."));
        assert_eq!(state.phase(), FormPhase::Editing);
    }

    #[test]
    fn submit_is_blocked_until_case_id_resolves() {
        let api = FakeApi::default();
        let mut state = FormState::new();
        state.begin_prerequisites();
        state.countries_loaded(block_on(api.get_countries()));
        fill(&mut state);

        assert!(!state.can_submit());
        assert!(drive_submit(&api, &mut state).is_none());
        assert_eq!(creates(&api), 0);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Case ID not loaded. Please refresh the page.")
        );
    }

    #[test]
    fn failed_case_id_load_blocks_submission() {
        let api = FakeApi {
            next_case_id: Err(crate::api::test_support::server_error(crate::config::ServiceKind::Data)),
            ..FakeApi::default()
        };
        let mut state = loaded_state(&api);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Failed to load case ID. Please refresh the page.")
        );
        fill(&mut state);

        assert!(state.can_submit());
        assert!(drive_submit(&api, &mut state).is_none());
        assert_eq!(creates(&api), 0);
    }

    #[test]
    fn amount_boundaries_gate_submission() {
        for (amount, accepted) in [("0", false), ("-1", false), ("0.01", true)] {
            let api = FakeApi::default();
            let mut state = loaded_state(&api);
            fill(&mut state);
            state.set_field(CaseField::Amount, amount.into());

            assert_eq!(drive_submit(&api, &mut state).is_some(), accepted, "amount {amount}");
            assert_eq!(creates(&api), usize::from(accepted));
        }
    }

    #[test]
    fn uploaded_file_is_finalized_after_creation() {
        let api = FakeApi::default();
        let mut state = loaded_state(&api);
        fill(&mut state);
        pick(&mut state, "invoice.pdf");

        drive_upload(&api, &mut state);
        assert!(state.temp_file.as_ref().is_some_and(|t| t.is_temporary()));
        assert_eq!(
            state.success_message.as_deref(),
            Some("File uploaded: invoice.pdf (TEMP)")
        );

        drive_submit(&api, &mut state).unwrap();

        let calls = api.calls();
        let tail: Vec<_> = calls.iter().skip_while(|c| !matches!(c, Call::Upload { .. })).collect();
        assert!(matches!(tail[0], Call::Upload { case_id: 42, .. }));
        assert!(matches!(tail[1], Call::CreateCase(_)));
        assert_eq!(tail[2], &Call::Finalize(42));
        assert_eq!(tail.len(), 3);
    }

    #[test]
    fn finalize_uses_the_id_of_the_created_case() {
        let api = FakeApi {
            created_id: Some(77),
            ..FakeApi::default()
        };
        let mut state = loaded_state(&api);
        fill(&mut state);
        pick(&mut state, "a.txt");
        drive_upload(&api, &mut state);

        drive_submit(&api, &mut state).unwrap();
        assert_eq!(api.count(|c| c == &Call::Finalize(77)), 1);
    }

    #[test]
    fn uploader_defaults_to_trimmed_reporter_or_anonymous() {
        let api = FakeApi::default();
        let mut state = loaded_state(&api);
        pick(&mut state, "a.txt");
        drive_upload(&api, &mut state);

        state.set_field(CaseField::ReporterName, "  Ada  ".into());
        pick(&mut state, "b.txt");
        drive_upload(&api, &mut state);

        let uploaders: Vec<String> = api
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Upload { uploaded_by, .. } => Some(uploaded_by),
                _ => None,
            })
            .collect();
        assert_eq!(uploaders, vec!["Anonymous".to_string(), "Ada".to_string()]);
    }

    #[test]
    fn upload_requires_a_file_and_a_case_id() {
        let api = FakeApi::default();
        let mut state = loaded_state(&api);
        drive_upload(&api, &mut state);
        assert_eq!(state.error_message.as_deref(), Some("Please select a file first."));

        let mut waiting: FormState<String> = FormState::new();
        waiting.begin_prerequisites();
        pick(&mut waiting, "a.txt");
        drive_upload(&api, &mut waiting);
        assert_eq!(
            waiting.error_message.as_deref(),
            Some("Case ID not yet generated. Please wait or refresh.")
        );

        assert_eq!(api.count(|c| matches!(c, Call::Upload { .. })), 0);
    }

    #[test]
    fn failed_upload_leaves_nothing_to_finalize() {
        let api = FakeApi {
            fail_upload: true,
            ..FakeApi::default()
        };
        let mut state = loaded_state(&api);
        fill(&mut state);
        pick(&mut state, "a.txt");
        drive_upload(&api, &mut state);

        assert!(state.temp_file.is_none());
        assert_eq!(
            state.error_message.as_deref(),
            Some("Failed to upload file. Please try again.")
        );

        drive_submit(&api, &mut state).unwrap();
        assert_eq!(finalizes(&api), 0);
    }

    #[test]
    fn selecting_another_file_discards_the_upload() {
        let api = FakeApi::default();
        let mut state = loaded_state(&api);
        fill(&mut state);
        pick(&mut state, "a.txt");
        drive_upload(&api, &mut state);
        assert!(state.temp_file.is_some());

        pick(&mut state, "b.txt");
        assert!(state.temp_file.is_none());
        assert_eq!(api.count(|c| matches!(c, Call::Upload { .. })), 1);

        drive_submit(&api, &mut state).unwrap();
        assert_eq!(finalizes(&api), 0);
    }

    #[test]
    fn removed_upload_is_deleted_and_not_finalized() {
        let api = FakeApi::default();
        let mut state = loaded_state(&api);
        fill(&mut state);
        pick(&mut state, "a.txt");
        drive_upload(&api, &mut state);

        let id = state.begin_remove().unwrap();
        state.finish_remove(block_on(discard_upload(&api, id)));

        assert_eq!(api.count(|c| c == &Call::DeleteFile(7)), 1);
        assert!(state.temp_file.is_none());
        drive_submit(&api, &mut state).unwrap();
        assert_eq!(finalizes(&api), 0);
    }

    #[test]
    fn failed_removal_keeps_the_upload() {
        let api = FakeApi {
            fail_delete: true,
            ..FakeApi::default()
        };
        let mut state = loaded_state(&api);
        pick(&mut state, "a.txt");
        drive_upload(&api, &mut state);

        let id = state.begin_remove().unwrap();
        state.finish_remove(block_on(discard_upload(&api, id)));
        assert!(state.temp_file.is_some());
        assert!(state.begin_remove().is_some());
    }

    #[test]
    fn create_failure_keeps_fields_and_skips_finalize() {
        let api = FakeApi {
            fail_create: true,
            ..FakeApi::default()
        };
        let mut state = loaded_state(&api);
        fill(&mut state);
        pick(&mut state, "a.txt");
        drive_upload(&api, &mut state);

        assert!(drive_submit(&api, &mut state).is_none());

        assert_eq!(finalizes(&api), 0);
        assert_eq!(state.draft.title, "Water damage");
        assert!(state.temp_file.is_some());
        assert_eq!(state.phase(), FormPhase::Editing);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Failed to create case. Please try again.")
        );
    }

    #[test]
    fn finalize_failure_is_reported_like_a_create_failure() {
        let api = FakeApi {
            fail_finalize: true,
            ..FakeApi::default()
        };
        let mut state = loaded_state(&api);
        fill(&mut state);
        pick(&mut state, "a.txt");
        drive_upload(&api, &mut state);

        assert!(drive_submit(&api, &mut state).is_none());

        assert_eq!(creates(&api), 1);
        assert_eq!(finalizes(&api), 1);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Failed to create case. Please try again.")
        );
        assert_eq!(state.draft.reporter_name, "Ada");
    }

    #[test]
    fn submit_error_messages_do_not_name_the_failed_step() {
        let transport = crate::api::test_support::server_error(crate::config::ServiceKind::File);
        let create = SubmitError::CreateFailed(transport.clone());
        let finalize = SubmitError::FinalizeFailed {
            case_id: 42,
            source: transport,
        };
        assert_eq!(create.user_message(), finalize.user_message());
        assert_ne!(create.to_string(), finalize.to_string());
    }

    fn recorder() -> (Callback<Case>, Rc<RefCell<Vec<i64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (Callback::from(move |case: Case| sink.borrow_mut().push(case.id)), seen)
    }

    #[test]
    fn submit_is_refused_while_an_upload_is_in_flight() {
        let api = FakeApi::default();
        let mut state = loaded_state(&api);
        fill(&mut state);
        pick(&mut state, "a.txt");
        let request = state.begin_upload().unwrap();

        assert!(!state.can_submit());
        assert!(state.begin_submit().is_none());
        assert_eq!(state.phase(), FormPhase::UploadingFile);
        assert_eq!(
            state.error_message.as_deref(),
            Some("Please wait for the file operation to finish.")
        );

        state.finish_upload(block_on(upload(&api, &request)));
        assert!(state.can_submit());
        drive_submit(&api, &mut state).unwrap();

        let calls = api.calls();
        let upload_at = calls.iter().position(|c| matches!(c, Call::Upload { .. })).unwrap();
        let create_at = calls.iter().position(|c| matches!(c, Call::CreateCase(_))).unwrap();
        assert!(upload_at < create_at);
        assert_eq!(finalizes(&api), 1);
    }

    #[test]
    fn submit_is_refused_while_a_removal_is_in_flight() {
        let api = FakeApi::default();
        let mut state = loaded_state(&api);
        fill(&mut state);
        pick(&mut state, "a.txt");
        drive_upload(&api, &mut state);
        let id = state.begin_remove().unwrap();

        assert!(!state.can_submit());
        assert!(state.begin_submit().is_none());
        assert_eq!(creates(&api), 0);

        state.finish_remove(block_on(discard_upload(&api, id)));
        drive_submit(&api, &mut state).unwrap();
        assert_eq!(finalizes(&api), 0);
    }

    #[test]
    fn created_case_reaches_the_parent_without_the_form() {
        let api = FakeApi::default();
        let mut state = loaded_state(&api);
        fill(&mut state);
        let submission = state.begin_submit().unwrap();
        let (on_created, seen) = recorder();

        // The form state is never told about the result, as when the
        // component is destroyed mid-request.
        let created = block_on(submit_and_notify(&api, &submission, &on_created)).unwrap();

        assert_eq!(created.id, 42);
        assert_eq!(*seen.borrow(), vec![42]);
    }

    #[test]
    fn failed_submission_is_not_announced() {
        let api = FakeApi {
            fail_create: true,
            ..FakeApi::default()
        };
        let mut state = loaded_state(&api);
        fill(&mut state);
        let submission = state.begin_submit().unwrap();
        let (on_created, seen) = recorder();

        assert!(block_on(submit_and_notify(&api, &submission, &on_created)).is_err());
        assert!(seen.borrow().is_empty());
    }
}
