use common::model::case::Case;

use crate::api::TransportError;

pub enum Msg {
    ToggleForm,
    CasesLoaded {
        generation: u64,
        result: Result<Vec<Case>, TransportError>,
    },
    CaseCreated(Case),
}
