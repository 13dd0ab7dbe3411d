//! Browser interop plumbing
//!
//! # Event Listener Cleanup Pattern
//!
//! In Rust/WASM, when you attach a JavaScript event listener using a
//! `Closure`, you need to ensure the closure lives as long as the listener
//! is attached. The naive approach is `closure.forget()`, but this leaks
//! memory and leaves the listener attached forever.
//!
//! The standard pattern is to store the closure in a struct that implements
//! `Drop`, removing the listener when the struct is dropped. This ties the
//! listener lifetime to Rust's ownership system: the gallery keeps one
//! [`EventListener`] per wired element, and dropping the overlay handle (or
//! the gallery itself) detaches everything it wired.

use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

/// An event listener that removes itself from its target when dropped.
pub struct EventListener {
    target: EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    /// Attaches a listener for `event_name` to `target`.
    ///
    /// The listener is removed again when the returned value is dropped.
    pub fn new(
        target: EventTarget,
        event_name: &'static str,
        callback: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys::Event)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
