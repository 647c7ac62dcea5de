//! Wire model and form validation shared by the Case Portal frontend.
//!
//! Nothing in this crate performs I/O: the types mirror the JSON bodies
//! exchanged with the data, refdata, file and search services, and the
//! `validation` module turns raw form input into a create-case payload.

pub mod model;
pub mod validation;
