//! Root application shell.
//!
//! Owns the case list and the visibility of the creation form. The list is
//! fetched once on mount and fully reloaded after every created case.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod view;

pub use messages::Msg;
pub use state::ShellState;

use crate::api::{CasePortalApi, PortalApi};
use crate::components::liveness::Liveness;
use crate::components::toast::show_toast;
use crate::config::{app_config, ServiceKind};

pub struct App {
    pub state: ShellState,
    api: CasePortalApi,
    liveness: Liveness,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = app_config();
        tracing::info!("case portal starting in {:?} mode", config.environment);
        for service in [ServiceKind::Data, ServiceKind::RefData, ServiceKind::File, ServiceKind::Search] {
            let endpoint = config.microservices.get(service);
            tracing::debug!("{}: {}", endpoint.description, endpoint.base_url);
        }
        Self {
            state: ShellState::new(),
            api: CasePortalApi::new(config),
            liveness: Liveness::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleForm => {
                self.state.toggle_form();
                true
            }
            Msg::CasesLoaded { generation, result } => {
                match &result {
                    Ok(cases) => tracing::debug!("loaded {} cases", cases.len()),
                    Err(err) => tracing::warn!(
                        service = %err.service(),
                        status = ?err.status(),
                        "case list unavailable: {}",
                        err
                    ),
                }
                if !self.state.finish_load(generation, result) {
                    tracing::debug!("ignoring stale case list from load {}", generation);
                    return false;
                }
                true
            }
            Msg::CaseCreated(case) => {
                show_toast(&format!("Case #{} created successfully!", case.id));
                self.state.case_created();
                self.reload(ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.reload(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.liveness.end();
    }
}

impl App {
    fn reload(&mut self, ctx: &Context<Self>) {
        let generation = self.state.begin_load();
        let api = self.api.clone();
        let link = ctx.link().clone();
        let liveness = self.liveness.clone();
        spawn_local(async move {
            let result = api.get_all_cases().await;
            liveness.deliver(&link, Msg::CasesLoaded { generation, result });
        });
    }
}
