use yew::prelude::*;

use super::messages::Msg;
use super::App;
use crate::components::case_list::CaseList;
use crate::components::create_case_form::CreateCaseForm;

pub fn view(app: &App, ctx: &Context<App>) -> Html {
    let link = ctx.link();
    let state = &app.state;
    let on_toggle = link.callback(|_: MouseEvent| Msg::ToggleForm);
    let on_case_created = link.callback(Msg::CaseCreated);
    let error = state.error.clone().map(AttrValue::from);

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Case Portal"}</h1>
                <button class="btn btn-primary" onclick={on_toggle}>
                    { if state.show_form { "Hide Form" } else { "Create Case" } }
                </button>
            </header>
            <main class="app-main">
                {
                    if state.show_form {
                        html! { <CreateCaseForm {on_case_created} /> }
                    } else {
                        html! {}
                    }
                }
                <CaseList cases={state.cases.clone()} loading={state.loading} {error} />
            </main>
        </div>
    }
}
