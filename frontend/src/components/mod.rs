pub mod case_list;
pub mod create_case_form;
pub mod liveness;
pub mod toast;
