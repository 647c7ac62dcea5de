use common::model::case::Case;
use yew::prelude::*;

use super::helpers::{display_state, format_amount, format_created_at, ListDisplay};
use super::props::CaseListProps;

pub fn view(props: &CaseListProps) -> Html {
    let error = props.error.as_ref().map(|e| e.as_str());

    match display_state(props.loading, error, &props.cases) {
        ListDisplay::Loading => html! {
            <div class="case-list-loading">{"Loading cases..."}</div>
        },
        ListDisplay::Error(message) => html! {
            <div class="case-list-error">{format!("Error: {}", message)}</div>
        },
        ListDisplay::Empty => html! {
            <div class="case-list-empty">{"No cases found. Create your first case above!"}</div>
        },
        ListDisplay::Table(cases) => build_table(cases),
    }
}

fn build_table(cases: &[Case]) -> Html {
    html! {
        <div class="case-list">
            <h2>{"All Cases"}</h2>
            <table class="case-table">
                <thead>
                    <tr>
                        <th>{"Case ID"}</th>
                        <th>{"Title"}</th>
                        <th>{"Country"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Reporter Name"}</th>
                        <th>{"Created At"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for cases.iter().map(build_row) }
                </tbody>
            </table>
        </div>
    }
}

fn build_row(case: &Case) -> Html {
    html! {
        <tr key={case.id.to_string()}>
            <td>{case.id}</td>
            <td>{case.title.clone()}</td>
            <td>{case.country.clone()}</td>
            <td>{format_amount(case.amount)}</td>
            <td>{case.reporter_name.clone()}</td>
            <td>{format_created_at(&case.created_at)}</td>
        </tr>
    }
}
