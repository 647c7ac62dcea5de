use std::rc::Rc;

use common::model::case::Case;
use yew::prelude::*;

/// Everything the list renders comes from its parent; the list owns no data.
#[derive(Properties, PartialEq, Clone)]
pub struct CaseListProps {
    pub cases: Rc<Vec<Case>>,
    #[prop_or_default]
    pub loading: bool,
    /// Message shown instead of the table when the last load failed.
    #[prop_or_default]
    pub error: Option<AttrValue>,
}
