use common::model::case::Case;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CreateCaseFormProps {
    /// Fired once per created case, after any uploaded file was finalized.
    pub on_case_created: Callback<Case>,
}
