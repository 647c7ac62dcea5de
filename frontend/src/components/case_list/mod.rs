//! Read-only table of cases with loading, error and empty states.

use yew::prelude::*;

pub(crate) mod helpers;
mod props;
mod view;

pub use props::CaseListProps;

pub struct CaseList;

impl Component for CaseList {
    type Message = ();
    type Properties = CaseListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CaseList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(ctx.props())
    }
}
