//! Case creation form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and the network
//! sequences.
//!
//! On first render the form asks for the country list and a reserved case id
//! in parallel. Everything after that is driven by user messages.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;
mod workflow;

pub use messages::Msg;
pub use props::CreateCaseFormProps;
pub use state::CreateCaseForm;

use crate::api::{CasePortalApi, PortalApi};
use crate::config::app_config;

impl Component for CreateCaseForm {
    type Message = Msg;
    type Properties = CreateCaseFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let mut form = CreateCaseForm::new(CasePortalApi::new(app_config()));
        form.state.begin_prerequisites();
        form
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            load_prerequisites(self, ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.liveness.end();
    }
}

/// Starts both reference loads; neither waits for the other.
fn load_prerequisites(component: &CreateCaseForm, ctx: &Context<CreateCaseForm>) {
    {
        let api = component.api.clone();
        let link = ctx.link().clone();
        let liveness = component.liveness.clone();
        spawn_local(async move {
            let result = api.get_countries().await;
            liveness.deliver(&link, Msg::CountriesLoaded(result));
        });
    }

    let api = component.api.clone();
    let link = ctx.link().clone();
    let liveness = component.liveness.clone();
    spawn_local(async move {
        let result = api.get_next_case_id().await;
        liveness.deliver(&link, Msg::CaseIdLoaded(result));
    });
}
