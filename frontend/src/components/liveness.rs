//! Guards against completions arriving after a component has been destroyed.
//!
//! Requests cannot be cancelled, so a response may resolve after the user
//! closed the form. Every spawned future holds a clone of the owning
//! component's [`Liveness`] and delivers its result only while it is alive.

use std::cell::Cell;
use std::rc::Rc;

use yew::html::Scope;
use yew::Component;

#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    /// Marks the owner as gone; called from `Component::destroy`.
    pub fn end(&self) {
        self.0.set(false);
    }

    /// Sends `msg` to the component, or drops it when the component is gone.
    /// Returns whether the message was delivered.
    pub fn deliver<C: Component>(&self, link: &Scope<C>, msg: C::Message) -> bool {
        if self.is_alive() {
            link.send_message(msg);
            true
        } else {
            tracing::debug!("dropping completion for destroyed {}", std::any::type_name::<C>());
            false
        }
    }
}
