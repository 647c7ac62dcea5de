//! Shell state: the authoritative case list and the form toggle.
//!
//! Loads are numbered. A response is applied only if it answers the most
//! recent load, so a slow reply can never overwrite a newer list.

use std::rc::Rc;

use common::model::case::Case;

use crate::api::TransportError;

pub const LOAD_FAILED: &str = "Failed to load cases. Please refresh the page.";

#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    pub cases: Rc<Vec<Case>>,
    pub loading: bool,
    pub error: Option<String>,
    pub show_form: bool,
    generation: u64,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            cases: Rc::new(Vec::new()),
            loading: false,
            error: None,
            show_form: false,
            generation: 0,
        }
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a reload and returns its generation.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Applies a list response. Returns false when the response is stale.
    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<Case>, TransportError>) -> bool {
        if generation != self.generation {
            return false;
        }

        self.loading = false;
        match result {
            Ok(cases) => {
                self.cases = Rc::new(cases);
                self.error = None;
            }
            Err(_) => self.error = Some(LOAD_FAILED.to_string()),
        }
        true
    }

    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    /// A created case hides the form; the caller reloads the list.
    pub fn case_created(&mut self) {
        self.show_form = false;
    }
}
