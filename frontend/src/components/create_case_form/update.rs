//! Update function for the case creation form.
//!
//! State transitions live on `FormState`; this function applies them and
//! spawns the request futures. Every future reports back through the
//! component's `Liveness`, so a result that arrives after the form closed is
//! dropped instead of touching a destroyed component. The parent's
//! `on_case_created` is the exception: it fires from the submit future itself.

use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{CreateCaseForm, SelectedFile};
use super::workflow::{self, SubmitError};

pub fn update(component: &mut CreateCaseForm, ctx: &Context<CreateCaseForm>, msg: Msg) -> bool {
    match msg {
        Msg::SetField(field, value) => {
            component.state.set_field(field, value);
            true
        }
        Msg::CountriesLoaded(result) => {
            match &result {
                Ok(countries) => tracing::debug!("loaded {} countries", countries.len()),
                Err(err) => tracing::warn!(status = ?err.status(), "country list unavailable: {}", err),
            }
            component.state.countries_loaded(result);
            true
        }
        Msg::CaseIdLoaded(result) => {
            match &result {
                Ok(id) => tracing::debug!("reserved case id {}", id),
                Err(err) => tracing::warn!(status = ?err.status(), "could not reserve a case id: {}", err),
            }
            component.state.case_id_loaded(result);
            true
        }
        Msg::FileSelected(file) => {
            let file = file.map(|handle| SelectedFile {
                name: handle.name(),
                handle,
            });
            component.state.select_file(file);
            true
        }
        Msg::UploadFile => {
            let Some(request) = component.state.begin_upload() else {
                return true;
            };
            tracing::info!(
                "uploading {} for case {} as {}",
                request.file_name,
                request.case_id,
                request.uploaded_by
            );

            let api = component.api.clone();
            let link = ctx.link().clone();
            let liveness = component.liveness.clone();
            spawn_local(async move {
                let result = workflow::upload(&api, &request).await;
                if let Err(err) = &result {
                    tracing::warn!("{}", err);
                }
                liveness.deliver(&link, Msg::UploadFinished(result));
            });
            true
        }
        Msg::UploadFinished(result) => {
            component.state.finish_upload(result);
            true
        }
        Msg::RemoveUpload => {
            let Some(file_metadata_id) = component.state.begin_remove() else {
                return false;
            };

            let api = component.api.clone();
            let link = ctx.link().clone();
            let liveness = component.liveness.clone();
            spawn_local(async move {
                let result = workflow::discard_upload(&api, file_metadata_id).await;
                if let Err(err) = &result {
                    tracing::warn!("could not delete file {}: {}", file_metadata_id, err);
                }
                liveness.deliver(&link, Msg::RemoveFinished(result));
            });
            true
        }
        Msg::RemoveFinished(result) => {
            component.state.finish_remove(result);
            true
        }
        Msg::Submit => {
            let Some(submission) = component.state.begin_submit() else {
                return true;
            };

            let api = component.api.clone();
            let link = ctx.link().clone();
            let liveness = component.liveness.clone();
            let on_case_created = ctx.props().on_case_created.clone();
            spawn_local(async move {
                let result = workflow::submit_and_notify(&api, &submission, &on_case_created).await;
                match &result {
                    Ok(case) => tracing::info!("created case {}", case.id),
                    Err(SubmitError::FinalizeFailed { case_id, source }) => {
                        tracing::error!("case {} exists but its files stayed temporary: {}", case_id, source)
                    }
                    Err(err) => tracing::warn!("{}", err),
                }
                liveness.deliver(&link, Msg::SubmitFinished(result));
            });
            true
        }
        Msg::SubmitFinished(result) => {
            component.state.finish_submit(result);
            true
        }
        Msg::Clear => {
            component.state.clear();
            true
        }
    }
}
