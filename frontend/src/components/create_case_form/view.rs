//! View rendering for the case creation form.
//!
//! Field inputs send `Msg::SetField` on every keystroke. Buttons are disabled
//! from `FormState::can_upload` and `FormState::can_submit` so the markup
//! never has to reason about the in-flight flags itself.

use common::validation::CaseField;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{CreateCaseForm, FormPhase};

pub fn view(component: &CreateCaseForm, ctx: &Context<CreateCaseForm>) -> Html {
    let link = ctx.link();
    let state = &component.state;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="create-case-form">
            <h2>{"Create New Case"}</h2>
            {
                match state.next_case_id {
                    Some(id) => html! { <p class="case-id-hint">{format!("Case ID: {}", id)}</p> },
                    None => html! {},
                }
            }
            { build_messages(component) }

            <form {onsubmit}>
                { build_text_input(component, link, CaseField::Title, "Title *", "Enter case title") }
                { build_description(component, link) }
                { build_country_select(component, link) }
                { build_amount_input(component, link) }
                { build_text_input(component, link, CaseField::ReporterName, "Reporter Name *", "Enter reporter name") }
                { build_file_section(component, link) }
                { build_actions(component, link) }
            </form>
        </div>
    }
}

fn build_messages(component: &CreateCaseForm) -> Html {
    let state = &component.state;
    html! {
        <>
            {
                match &state.error_message {
                    Some(message) => html! { <div class="error-message">{message.clone()}</div> },
                    None => html! {},
                }
            }
            {
                match &state.success_message {
                    Some(message) => html! { <div class="success-message">{message.clone()}</div> },
                    None => html! {},
                }
            }
        </>
    }
}

fn field_error(component: &CreateCaseForm, field: CaseField) -> Html {
    match component.state.validation_errors.get(field) {
        Some(message) => html! { <span class="field-error">{message.to_string()}</span> },
        None => html! {},
    }
}

fn field_class(component: &CreateCaseForm, field: CaseField) -> &'static str {
    if component.state.validation_errors.contains(field) {
        "form-input invalid"
    } else {
        "form-input"
    }
}

fn build_text_input(
    component: &CreateCaseForm,
    link: &Scope<CreateCaseForm>,
    field: CaseField,
    label: &'static str,
    placeholder: &'static str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetField(field, input.value())
    });

    html! {
        <div class="form-group">
            <label for={field.key()}>{label}</label>
            <input
                id={field.key()}
                type="text"
                class={field_class(component, field)}
                placeholder={placeholder}
                value={component.state.draft.get(field).to_string()}
                disabled={component.state.submitting}
                {oninput}
            />
            { field_error(component, field) }
        </div>
    }
}

fn build_description(component: &CreateCaseForm, link: &Scope<CreateCaseForm>) -> Html {
    let field = CaseField::Description;
    let oninput = link.callback(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetField(field, area.value())
    });

    html! {
        <div class="form-group">
            <label for={field.key()}>{"Description *"}</label>
            <textarea
                id={field.key()}
                rows="4"
                class={field_class(component, field)}
                placeholder="Enter case description"
                value={component.state.draft.get(field).to_string()}
                disabled={component.state.submitting}
                {oninput}
            />
            { field_error(component, field) }
        </div>
    }
}

fn build_country_select(component: &CreateCaseForm, link: &Scope<CreateCaseForm>) -> Html {
    let field = CaseField::Country;
    let state = &component.state;
    let current = state.draft.get(field);
    let onchange = link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetField(field, select.value())
    });

    html! {
        <div class="form-group">
            <label for={field.key()}>{"Country *"}</label>
            <select
                id={field.key()}
                class={field_class(component, field)}
                disabled={state.submitting || state.loading_countries}
                {onchange}
            >
                <option value="" selected={current.is_empty()}>
                    { if state.loading_countries { "Loading countries..." } else { "Select a country" } }
                </option>
                {
                    for state.countries.iter().map(|country| html! {
                        <option
                            key={country.code.clone()}
                            value={country.code.clone()}
                            selected={country.code == current}
                        >
                            {country.name.clone()}
                        </option>
                    })
                }
            </select>
            { field_error(component, field) }
        </div>
    }
}

fn build_amount_input(component: &CreateCaseForm, link: &Scope<CreateCaseForm>) -> Html {
    let field = CaseField::Amount;
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetField(field, input.value())
    });

    html! {
        <div class="form-group">
            <label for={field.key()}>{"Amount *"}</label>
            <input
                id={field.key()}
                type="number"
                step="0.01"
                min="0"
                class={field_class(component, field)}
                placeholder="0.00"
                value={component.state.draft.get(field).to_string()}
                disabled={component.state.submitting}
                {oninput}
            />
            { field_error(component, field) }
        </div>
    }
}

fn build_file_section(component: &CreateCaseForm, link: &Scope<CreateCaseForm>) -> Html {
    let state = &component.state;
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|list| list.get(0));
        Msg::FileSelected(file)
    });
    let onupload = link.callback(|e: MouseEvent| {
        e.prevent_default();
        Msg::UploadFile
    });
    let uploading = state.phase() == FormPhase::UploadingFile;

    html! {
        <div class="form-group file-upload">
            <label for="file">{"File Upload (Optional)"}</label>
            <div class="file-row">
                <input
                    id="file"
                    type="file"
                    disabled={state.uploading_file || state.submitting}
                    {onchange}
                />
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled={!state.can_upload()}
                    onclick={onupload}
                >
                    { if uploading { "Uploading..." } else { "Upload" } }
                </button>
            </div>
            { build_file_status(component, link) }
        </div>
    }
}

fn build_file_status(component: &CreateCaseForm, link: &Scope<CreateCaseForm>) -> Html {
    let state = &component.state;
    let Some(upload) = &state.temp_file else {
        return match &state.selected_file {
            Some(file) => html! { <p class="file-status pending">{format!("Selected: {}", file.name)}</p> },
            None => html! {},
        };
    };

    let name = state
        .selected_file
        .as_ref()
        .map(|f| f.name.clone())
        .unwrap_or_else(|| "File".to_string());
    let onremove = link.callback(|e: MouseEvent| {
        e.prevent_default();
        Msg::RemoveUpload
    });

    html! {
        <div class="file-status uploaded">
            <span>
                {format!("File uploaded: {} (ID: {}) ({})", name, upload.file_metadata_id, upload.status)}
            </span>
            <button
                type="button"
                class="btn btn-link"
                disabled={state.removing_file || state.submitting}
                onclick={onremove}
            >
                { if state.removing_file { "Removing..." } else { "Remove upload" } }
            </button>
        </div>
    }
}

fn build_actions(component: &CreateCaseForm, link: &Scope<CreateCaseForm>) -> Html {
    let state = &component.state;
    let onclear = link.callback(|e: MouseEvent| {
        e.prevent_default();
        Msg::Clear
    });

    html! {
        <div class="form-actions">
            <button type="submit" class="btn btn-primary" disabled={!state.can_submit()}>
                { if state.submitting { "Creating..." } else { "Create Case" } }
            </button>
            <button type="button" class="btn btn-secondary" disabled={state.submitting} onclick={onclear}>
                {"Clear"}
            </button>
        </div>
    }
}
